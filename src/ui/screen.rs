// Copyright (c) 2025, Jeremy Holder
// SPDX-License-Identifier: BSD-3-Clause

//! Video area of the player window.
//!
//! This module draws the dark stage the overlays anchor to, along with
//! the welcome text, per-scene status, error banner, and the end-of-story
//! state. Video frames themselves are rendered by the playback backend in
//! its own output window.

use crate::models::scene::Scene;

/// Result of screen interaction.
pub enum ScreenAction {
    None,
    Restart,
}

/// What the screen should present this frame.
pub struct ScreenView<'a> {
    pub scene: Option<&'a Scene>,
    pub finished: bool,
    pub in_interruption: bool,
    pub backend_available: bool,
    pub error: Option<&'a str>,
}

/// Display the video area. Returns its rect for overlay placement.
pub fn show(ui: &mut egui::Ui, view: &ScreenView) -> (egui::Rect, ScreenAction) {
    let mut action = ScreenAction::None;
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(10);

    let available_size = ui.available_size();
    let mut rect = ui.min_rect();

    egui::Frame::canvas(ui.style()).show(ui, |ui| {
        ui.set_min_size(available_size);
        rect = ui.min_rect();

        if let Some(error) = view.error {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(error)
                        .color(egui::Color32::LIGHT_RED)
                        .strong(),
                );
            });
        }

        match view.scene {
            None => show_welcome(ui),
            Some(_) if view.finished => {
                ui.centered_and_justified(|ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading(
                            egui::RichText::new("The End")
                                .size(32.0)
                                .color(egui::Color32::from_gray(220)),
                        );
                        ui.add_space(16.0);
                        if ui.button("Restart story").clicked() {
                            action = ScreenAction::Restart;
                        }
                    });
                });
            }
            Some(scene) => {
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    let status = if view.in_interruption {
                        format!("Interruption: {}", scene.id)
                    } else {
                        format!("Now playing: {}", scene.id)
                    };
                    ui.label(
                        egui::RichText::new(status)
                            .weak()
                            .color(egui::Color32::from_gray(150)),
                    );
                    if !view.backend_available {
                        ui.label(
                            egui::RichText::new(
                                "Preview mode: built without a video backend \
                                 (enable the video-vlc feature for playback)",
                            )
                            .weak()
                            .italics()
                            .color(egui::Color32::from_gray(110)),
                        );
                    }
                });
            }
        }
    });

    (rect, action)
}

/// Welcome message shown before a story is loaded.
fn show_welcome(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.heading(
                egui::RichText::new("Switchback")
                    .size(32.0)
                    .color(egui::Color32::from_gray(200)),
            );
            ui.label(
                egui::RichText::new("Interactive branching video player")
                    .size(14.0)
                    .color(egui::Color32::from_gray(150)),
            );
            ui.add_space(20.0);
            ui.label(
                egui::RichText::new("Open a story file to begin")
                    .color(egui::Color32::from_gray(180)),
            );
            ui.add_space(10.0);
            ui.label(
                egui::RichText::new("File → Open Story...")
                    .weak()
                    .color(egui::Color32::from_gray(130)),
            );
        });
    });
}
