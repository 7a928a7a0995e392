// Copyright (c) 2025, Jeremy Holder
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the player window.

pub mod controls;
pub mod interrupt;
pub mod overlay;
pub mod screen;
pub mod sidebar;

use crate::models::scene::Choice;
use std::collections::HashMap;

/// Loaded choice artwork, keyed by the image path from the story file.
pub type TextureCache = HashMap<String, egui::TextureHandle>;

/// A choice button with optional artwork above the label.
pub(crate) fn choice_button(
    ui: &mut egui::Ui,
    choice: &Choice,
    textures: &TextureCache,
    image_size: egui::Vec2,
) -> egui::Response {
    let texture = choice
        .image
        .as_ref()
        .and_then(|path| textures.get(path));

    let button = match texture {
        Some(texture) => egui::Button::image_and_text(
            egui::Image::new((texture.id(), image_size)),
            &choice.label,
        ),
        None => egui::Button::new(&choice.label),
    };

    ui.add(button)
}
