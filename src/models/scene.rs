// Copyright (c) 2025, Jeremy Holder
// SPDX-License-Identifier: BSD-3-Clause

//! Scene and choice data structures.
//!
//! This module defines the core data structures for representing
//! scenes, their presentation type, and the choices that link them.

use serde::{Deserialize, Serialize};

/// Identifier of a scene, the key used throughout the story file.
pub type SceneId = String;

/// Presentation type of a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneType {
    /// Video plays full-frame, choices appear in an overlay when it ends.
    Continue,
    /// Same presentation as Continue, but reads `question_heading` text.
    Question,
    /// Choices sit in a side panel that is visible while the video plays.
    Main,
}

impl Default for SceneType {
    fn default() -> Self {
        SceneType::Continue
    }
}

/// A user-selectable option leading to another scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub label: String,
    pub next: SceneId,
    /// Optional image shown on the choice button, relative to the story file.
    pub image: Option<String>,
    /// Temporary choices interrupt the current scene instead of replacing it.
    #[serde(default)]
    pub temporary: bool,
}

impl Choice {
    pub fn new(label: impl Into<String>, next: impl Into<SceneId>) -> Self {
        Self {
            label: label.into(),
            next: next.into(),
            image: None,
            temporary: false,
        }
    }
}

/// A named unit of video content plus its associated choices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub id: SceneId,
    /// Video path relative to the story file's directory.
    pub video: String,
    pub scene_type: SceneType,
    /// Heading shown above the choices, selected per scene type at load time.
    pub heading: Option<String>,
    /// Heading shown above temporary (interrupt) choices.
    pub interrupt_heading: Option<String>,
    /// Choices in declaration order.
    pub choices: Vec<Choice>,
}

impl Scene {
    /// Ordinary choices, the ones offered when the scene's video ends.
    pub fn regular_choices(&self) -> impl Iterator<Item = &Choice> {
        self.choices.iter().filter(|c| !c.temporary)
    }

    /// Temporary choices, offered while the scene's video plays.
    pub fn temporary_choices(&self) -> impl Iterator<Item = &Choice> {
        self.choices.iter().filter(|c| c.temporary)
    }

    /// Whether the scene ends the story when its video finishes.
    pub fn is_terminal(&self) -> bool {
        self.regular_choices().next().is_none()
    }

    pub fn has_temporary_choices(&self) -> bool {
        self.temporary_choices().next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene_with_choices(choices: Vec<Choice>) -> Scene {
        Scene {
            id: "intro".to_string(),
            video: "intro.mp4".to_string(),
            scene_type: SceneType::Question,
            heading: Some("What next?".to_string()),
            interrupt_heading: None,
            choices,
        }
    }

    #[test]
    fn test_choice_partition() {
        let mut side_quest = Choice::new("Look closer", "detail");
        side_quest.temporary = true;

        let scene = scene_with_choices(vec![
            Choice::new("Go left", "left"),
            side_quest,
            Choice::new("Go right", "right"),
        ]);

        let regular: Vec<_> = scene.regular_choices().map(|c| c.label.as_str()).collect();
        assert_eq!(regular, vec!["Go left", "Go right"]);

        let temporary: Vec<_> = scene.temporary_choices().map(|c| c.label.as_str()).collect();
        assert_eq!(temporary, vec!["Look closer"]);
        assert!(scene.has_temporary_choices());
        assert!(!scene.is_terminal());
    }

    #[test]
    fn test_terminal_scene() {
        let scene = scene_with_choices(Vec::new());
        assert!(scene.is_terminal());
        assert!(!scene.has_temporary_choices());

        // A scene with only temporary choices still ends the story.
        let mut detour = Choice::new("Peek", "peek");
        detour.temporary = true;
        let scene = scene_with_choices(vec![detour]);
        assert!(scene.is_terminal());
    }
}
