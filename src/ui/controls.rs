// Copyright (c) 2025, Jeremy Holder
// SPDX-License-Identifier: BSD-3-Clause

//! Transport controls.
//!
//! This module provides the bottom control bar: play/pause, seek bar,
//! volume slider, and mute toggle.

/// Result of control bar interaction.
pub enum ControlsAction {
    None,
    TogglePause,
    /// Seek to a fraction (0.0..=1.0) of the current video.
    Seek(f32),
    SetVolume(i32),
    ToggleMute,
}

/// Playback state the control bar reflects.
pub struct ControlsView {
    /// A backend is present and a scene is active.
    pub enabled: bool,
    pub paused: bool,
    pub muted: bool,
    pub volume: i32,
    /// Playback progress, when the backend knows the duration.
    pub progress: Option<f32>,
}

/// Display the transport control bar.
pub fn show(ui: &mut egui::Ui, view: &ControlsView) -> ControlsAction {
    let mut action = ControlsAction::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let pause_label = if view.paused { "Play" } else { "Pause" };
        if ui
            .add_enabled(view.enabled, egui::Button::new(pause_label))
            .clicked()
        {
            action = ControlsAction::TogglePause;
        }

        ui.separator();

        // Seek bar tracks playback; dragging it seeks.
        let mut progress = view.progress.unwrap_or(0.0);
        let seek = ui.add_enabled(
            view.enabled && view.progress.is_some(),
            egui::Slider::new(&mut progress, 0.0..=1.0)
                .show_value(false)
                .trailing_fill(true),
        );
        if seek.changed() {
            action = ControlsAction::Seek(progress);
        }

        ui.separator();

        let mute_label = if view.muted { "Unmute" } else { "Mute" };
        if ui
            .add_enabled(view.enabled, egui::Button::new(mute_label))
            .clicked()
        {
            action = ControlsAction::ToggleMute;
        }

        let mut volume = view.volume;
        let slider = ui.add_enabled(
            view.enabled,
            egui::Slider::new(&mut volume, 0..=100).text("Volume"),
        );
        if slider.changed() {
            action = ControlsAction::SetVolume(volume);
        }
    });

    action
}
