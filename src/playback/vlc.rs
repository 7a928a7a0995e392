// Copyright (c) 2025, Jeremy Holder
// SPDX-License-Identifier: BSD-3-Clause

//! libVLC playback backend.
//!
//! Uses the same engine the original player shipped with. libVLC opens its
//! own video output window; the app window carries the controls, overlays,
//! and choice panels.

use super::{PlaybackStatus, PlayerBackend};
use anyhow::{anyhow, Result};
use std::path::Path;
use std::time::Duration;
use vlc::{Instance, Media, MediaPlayer, MediaPlayerAudioEx, State};

pub struct VlcBackend {
    instance: Instance,
    player: MediaPlayer,
}

impl VlcBackend {
    pub fn new() -> Result<Self> {
        let instance =
            Instance::new().ok_or_else(|| anyhow!("failed to initialize libVLC"))?;
        let player = MediaPlayer::new(&instance)
            .ok_or_else(|| anyhow!("failed to create libVLC media player"))?;
        Ok(Self { instance, player })
    }
}

impl PlayerBackend for VlcBackend {
    fn play(&mut self, path: &Path) -> Result<()> {
        let media = Media::new_path(&self.instance, path)
            .ok_or_else(|| anyhow!("failed to open media {}", path.display()))?;
        self.player.stop();
        self.player.set_media(&media);
        self.player
            .play()
            .map_err(|_| anyhow!("libVLC refused to play {}", path.display()))?;
        Ok(())
    }

    fn toggle_pause(&mut self) {
        self.player.pause();
    }

    fn stop(&mut self) {
        self.player.stop();
    }

    fn seek(&mut self, position: Duration) {
        self.player.set_time(position.as_millis() as i64);
    }

    fn position(&self) -> Option<Duration> {
        self.player
            .get_time()
            .map(|ms| Duration::from_millis(ms.max(0) as u64))
    }

    fn duration(&self) -> Option<Duration> {
        self.player
            .get_media()
            .and_then(|media| media.duration())
            .map(|ms| Duration::from_millis(ms.max(0) as u64))
    }

    fn set_volume(&mut self, volume: i32) {
        if self.player.set_volume(volume.clamp(0, 100)).is_err() {
            log::warn!("libVLC rejected volume {}", volume);
        }
    }

    fn set_muted(&mut self, muted: bool) {
        self.player.set_mute(muted);
    }

    fn status(&self) -> PlaybackStatus {
        match self.player.state() {
            State::Ended => PlaybackStatus::Ended,
            State::Playing | State::Opening | State::Buffering => PlaybackStatus::Playing,
            State::Paused => PlaybackStatus::Paused,
            State::NothingSpecial | State::Stopped | State::Error => PlaybackStatus::Idle,
        }
    }
}
