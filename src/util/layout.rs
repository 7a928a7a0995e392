// Copyright (c) 2025, Jeremy Holder
// SPDX-License-Identifier: BSD-3-Clause

//! Overlay placement math.
//!
//! This module computes where the choice overlay and the interrupt panel
//! sit relative to the video area: the overlay is centered horizontally
//! and 60% down, growing wider with the number of buttons; the interrupt
//! panel hugs the right edge.

/// Width reserved per choice button in the end-of-scene overlay.
const BUTTON_SLOT_WIDTH: f32 = 300.0;

/// Height of the end-of-scene overlay.
const OVERLAY_HEIGHT: f32 = 200.0;

/// How far down the video area the overlay's top edge sits.
const OVERLAY_VERTICAL_FRACTION: f32 = 0.6;

/// A rectangle in the video area's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Placement of the end-of-scene choice overlay.
pub fn choice_overlay_rect(container_width: f32, container_height: f32, num_choices: usize) -> PanelRect {
    let width = (BUTTON_SLOT_WIDTH * num_choices.max(1) as f32).min(container_width);
    PanelRect {
        x: ((container_width - width) / 2.0).max(0.0),
        y: container_height * OVERLAY_VERTICAL_FRACTION,
        width,
        height: OVERLAY_HEIGHT,
    }
}

/// Placement of the interrupt panel along the right edge of the video area.
pub fn interrupt_panel_rect(container_width: f32, container_height: f32) -> PanelRect {
    PanelRect {
        x: container_width * 0.75,
        y: container_height * 0.1,
        width: container_width * 0.2,
        height: container_height * 0.8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_centered_and_scaled() {
        let rect = choice_overlay_rect(1280.0, 720.0, 2);
        assert_eq!(rect.width, 600.0);
        assert_eq!(rect.x, 340.0);
        assert_eq!(rect.y, 432.0);
        assert_eq!(rect.height, 200.0);
    }

    #[test]
    fn test_overlay_never_wider_than_container() {
        let rect = choice_overlay_rect(800.0, 600.0, 5);
        assert_eq!(rect.width, 800.0);
        assert_eq!(rect.x, 0.0);
    }

    #[test]
    fn test_overlay_with_no_choices_keeps_one_slot() {
        let rect = choice_overlay_rect(1280.0, 720.0, 0);
        assert_eq!(rect.width, 300.0);
    }

    #[test]
    fn test_interrupt_panel_hugs_right_edge() {
        let rect = interrupt_panel_rect(1000.0, 500.0);
        assert_eq!(rect.x, 750.0);
        assert_eq!(rect.y, 50.0);
        assert_eq!(rect.width, 200.0);
        assert_eq!(rect.height, 400.0);
    }
}
