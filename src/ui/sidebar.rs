// Copyright (c) 2025, Jeremy Holder
// SPDX-License-Identifier: BSD-3-Clause

//! Choice side panel for Main scenes.
//!
//! Main scenes keep their choices visible while the video plays, stacked
//! vertically with their artwork, instead of waiting for an end-of-scene
//! overlay.

use super::{choice_button, TextureCache};
use crate::models::scene::{Choice, Scene};

const CHOICE_IMAGE_SIZE: egui::Vec2 = egui::Vec2::new(119.0, 158.0);

/// Result of side panel interaction.
pub enum SidebarAction {
    None,
    Choose(Choice),
}

/// Display the Main-scene choice panel.
pub fn show(ui: &mut egui::Ui, scene: &Scene, textures: &TextureCache) -> SidebarAction {
    let mut action = SidebarAction::None;

    ui.vertical_centered(|ui| {
        ui.add_space(8.0);
        if let Some(heading) = &scene.heading {
            ui.heading(heading);
            ui.add_space(8.0);
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            for choice in scene.regular_choices() {
                if choice_button(ui, choice, textures, CHOICE_IMAGE_SIZE).clicked() {
                    action = SidebarAction::Choose(choice.clone());
                }
                ui.add_space(8.0);
            }
        });
    });

    action
}
