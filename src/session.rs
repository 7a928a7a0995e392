// Copyright (c) 2025, Jeremy Holder
// SPDX-License-Identifier: BSD-3-Clause

//! Session state and scene navigation.
//!
//! The session holds the current scene identifier and, while an
//! interruption plays, the point to resume from. It is mutated only on
//! choice selection, natural video completion, or an explicit restart.

use crate::models::scene::{Choice, SceneId};
use std::time::Duration;

/// Where to return after an interruption finishes.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumePoint {
    pub scene: SceneId,
    pub position: Duration,
}

/// Live state of one play-through. Not persisted across runs.
#[derive(Debug, Clone)]
pub struct Session {
    current: SceneId,
    resume: Option<ResumePoint>,
}

impl Session {
    pub fn new(start: SceneId) -> Self {
        Self {
            current: start,
            resume: None,
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// True while a temporary choice's scene is playing.
    pub fn in_interruption(&self) -> bool {
        self.resume.is_some()
    }

    /// Scene a pending interruption will return to.
    pub fn resume_scene(&self) -> Option<&str> {
        self.resume.as_ref().map(|point| point.scene.as_str())
    }

    /// Apply a choice selection and move to its target scene.
    ///
    /// A temporary choice records the current scene and playback position
    /// so the interruption can return to it. Nested temporary choices keep
    /// the original resume point. An ordinary choice discards any pending
    /// resume point.
    pub fn choose(&mut self, choice: &Choice, position: Duration) {
        if choice.temporary {
            if self.resume.is_none() {
                self.resume = Some(ResumePoint {
                    scene: self.current.clone(),
                    position,
                });
            }
        } else {
            self.resume = None;
        }
        log::info!("scene transition: {} -> {}", self.current, choice.next);
        self.current = choice.next.clone();
    }

    /// Return from an interruption to the recorded scene.
    ///
    /// Returns the playback position to resume at, or `None` when no
    /// interruption is pending.
    pub fn finish_interruption(&mut self) -> Option<Duration> {
        let point = self.resume.take()?;
        log::info!("resuming scene {} at {:?}", point.scene, point.position);
        self.current = point.scene;
        Some(point.position)
    }

    /// Go back to the start scene, dropping any pending resume point.
    pub fn restart(&mut self, start: SceneId) {
        self.current = start;
        self.resume = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temporary(label: &str, next: &str) -> Choice {
        let mut c = Choice::new(label, next);
        c.temporary = true;
        c
    }

    #[test]
    fn test_ordinary_choice_replaces_scene() {
        let mut session = Session::new("intro".to_string());
        session.choose(&Choice::new("Go left", "left"), Duration::from_secs(10));

        assert_eq!(session.current(), "left");
        assert!(!session.in_interruption());
        assert_eq!(session.finish_interruption(), None);
    }

    #[test]
    fn test_temporary_choice_records_resume_point() {
        let mut session = Session::new("intro".to_string());
        session.choose(&temporary("Look closer", "detail"), Duration::from_secs(42));

        assert_eq!(session.current(), "detail");
        assert!(session.in_interruption());

        let position = session.finish_interruption();
        assert_eq!(position, Some(Duration::from_secs(42)));
        assert_eq!(session.current(), "intro");
        assert!(!session.in_interruption());
    }

    #[test]
    fn test_nested_interruption_keeps_original_resume_point() {
        let mut session = Session::new("intro".to_string());
        session.choose(&temporary("Detour", "detail"), Duration::from_secs(5));
        session.choose(&temporary("Deeper", "closeup"), Duration::from_secs(9));

        assert_eq!(session.current(), "closeup");
        // The first resume point wins, as in the original player.
        assert_eq!(session.finish_interruption(), Some(Duration::from_secs(5)));
        assert_eq!(session.current(), "intro");
    }

    #[test]
    fn test_ordinary_choice_clears_resume_point() {
        let mut session = Session::new("intro".to_string());
        session.choose(&temporary("Detour", "detail"), Duration::from_secs(5));
        session.choose(&Choice::new("Leave for good", "elsewhere"), Duration::ZERO);

        assert_eq!(session.current(), "elsewhere");
        assert!(!session.in_interruption());
        assert_eq!(session.finish_interruption(), None);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut session = Session::new("intro".to_string());
        session.choose(&temporary("Detour", "detail"), Duration::from_secs(5));
        session.restart("intro".to_string());

        assert_eq!(session.current(), "intro");
        assert!(!session.in_interruption());
    }
}
