// Copyright (c) 2025, Jeremy Holder
// SPDX-License-Identifier: BSD-3-Clause

//! End-of-scene choice overlay.
//!
//! When a Continue or Question scene's video ends, this overlay appears
//! over the video area: the scene heading with one button per ordinary
//! choice, side by side in declaration order.

use super::{choice_button, TextureCache};
use crate::models::scene::{Choice, Scene};
use crate::util::layout;

const CHOICE_IMAGE_SIZE: egui::Vec2 = egui::Vec2::new(80.0, 80.0);

/// Result of overlay interaction.
pub enum OverlayAction {
    None,
    Choose(Choice),
}

/// Display the choice overlay anchored to the video area.
pub fn show(
    ctx: &egui::Context,
    video_rect: egui::Rect,
    scene: &Scene,
    textures: &TextureCache,
) -> OverlayAction {
    let mut action = OverlayAction::None;

    let num_choices = scene.regular_choices().count();
    let panel = layout::choice_overlay_rect(video_rect.width(), video_rect.height(), num_choices);
    let pos = video_rect.min + egui::vec2(panel.x, panel.y);

    egui::Area::new(egui::Id::new("choice_overlay"))
        .fixed_pos(pos)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_min_width(panel.width.min(video_rect.width()));
                ui.set_min_height(panel.height);
                ui.vertical_centered(|ui| {
                    ui.add_space(10.0);
                    if let Some(heading) = &scene.heading {
                        ui.heading(heading);
                        ui.add_space(10.0);
                    }
                    ui.horizontal_wrapped(|ui| {
                        ui.spacing_mut().item_spacing = egui::vec2(10.0, 10.0);
                        for choice in scene.regular_choices() {
                            if choice_button(ui, choice, textures, CHOICE_IMAGE_SIZE).clicked() {
                                action = OverlayAction::Choose(choice.clone());
                            }
                        }
                    });
                    ui.add_space(10.0);
                });
            });
        });

    action
}
