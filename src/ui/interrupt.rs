// Copyright (c) 2025, Jeremy Holder
// SPDX-License-Identifier: BSD-3-Clause

//! Interrupt panel for temporary choices.
//!
//! While a scene with temporary choices plays, a small panel along the
//! right edge of the video area offers them. During an interruption the
//! panel also carries the skip control that returns to the recorded
//! resume point.

use super::{choice_button, TextureCache};
use crate::models::scene::{Choice, Scene};
use crate::util::layout;

const CHOICE_IMAGE_SIZE: egui::Vec2 = egui::Vec2::new(80.0, 80.0);

/// Result of interrupt panel interaction.
pub enum InterruptAction {
    None,
    Choose(Choice),
    Skip,
}

/// Display the interrupt panel over the right edge of the video area.
///
/// `base_scene` is the scene whose temporary choices are on offer: the
/// playing scene itself, or the scene an interruption will return to.
pub fn show(
    ctx: &egui::Context,
    video_rect: egui::Rect,
    base_scene: &Scene,
    in_interruption: bool,
    textures: &TextureCache,
) -> InterruptAction {
    let mut action = InterruptAction::None;

    let panel = layout::interrupt_panel_rect(video_rect.width(), video_rect.height());
    let pos = video_rect.min + egui::vec2(panel.x, panel.y);

    egui::Area::new(egui::Id::new("interrupt_panel"))
        .fixed_pos(pos)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_width(panel.width);
                ui.vertical_centered(|ui| {
                    if let Some(heading) = &base_scene.interrupt_heading {
                        ui.label(egui::RichText::new(heading).strong());
                        ui.add_space(6.0);
                    }
                    for choice in base_scene.temporary_choices() {
                        if choice_button(ui, choice, textures, CHOICE_IMAGE_SIZE).clicked() {
                            action = InterruptAction::Choose(choice.clone());
                        }
                        ui.add_space(5.0);
                    }
                    if in_interruption {
                        ui.add_space(6.0);
                        if ui.button("Skip Interruption").clicked() {
                            action = InterruptAction::Skip;
                        }
                    }
                });
            });
        });

    action
}
