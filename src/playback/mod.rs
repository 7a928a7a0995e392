// Copyright (c) 2025, Jeremy Holder
// SPDX-License-Identifier: BSD-3-Clause

//! Video playback backends.
//!
//! A single backend drives one decode/render session at a time. The app
//! polls [`PlayerBackend::status`] once per frame to detect end-of-playback
//! instead of wiring backend callbacks into the UI thread.

#[cfg(feature = "video-vlc")]
pub mod vlc;

use anyhow::Result;
use std::path::Path;
use std::time::Duration;

/// Coarse playback state reported by a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// No media loaded, or playback stopped.
    Idle,
    Playing,
    Paused,
    /// The current media reached its end.
    Ended,
}

/// Interface to a media playback engine.
pub trait PlayerBackend {
    /// Stop whatever is playing and start the given file from the top.
    fn play(&mut self, path: &Path) -> Result<()>;

    /// Start the given file at an offset, used when resuming an
    /// interrupted scene.
    fn play_from(&mut self, path: &Path, position: Duration) -> Result<()> {
        self.play(path)?;
        self.seek(position);
        Ok(())
    }

    /// Toggle between playing and paused.
    fn toggle_pause(&mut self);

    fn stop(&mut self);

    fn seek(&mut self, position: Duration);

    fn position(&self) -> Option<Duration>;

    fn duration(&self) -> Option<Duration>;

    /// Volume in percent, clamped to 0..=100 by implementations.
    fn set_volume(&mut self, volume: i32);

    fn set_muted(&mut self, muted: bool);

    fn status(&self) -> PlaybackStatus;
}

/// Fraction of the current media that has played, for the seek bar.
pub fn progress_fraction(position: Option<Duration>, duration: Option<Duration>) -> Option<f32> {
    let position = position?.as_secs_f32();
    let duration = duration?.as_secs_f32();
    if duration <= 0.0 {
        return None;
    }
    Some((position / duration).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_fraction() {
        let pos = Some(Duration::from_secs(30));
        let dur = Some(Duration::from_secs(120));
        assert_eq!(progress_fraction(pos, dur), Some(0.25));
    }

    #[test]
    fn test_progress_fraction_clamps_overrun() {
        // Backends can report a position slightly past the duration.
        let pos = Some(Duration::from_millis(120_100));
        let dur = Some(Duration::from_secs(120));
        assert_eq!(progress_fraction(pos, dur), Some(1.0));
    }

    #[test]
    fn test_progress_fraction_unknown_duration() {
        assert_eq!(progress_fraction(Some(Duration::ZERO), None), None);
        assert_eq!(progress_fraction(None, Some(Duration::from_secs(1))), None);
        assert_eq!(
            progress_fraction(Some(Duration::from_secs(1)), Some(Duration::ZERO)),
            None
        );
    }
}
