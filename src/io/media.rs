// Copyright (c) 2025, Jeremy Holder
// SPDX-License-Identifier: BSD-3-Clause

//! Choice artwork loading.
//!
//! This module loads the images referenced by choices and converts them
//! to RGBA pixel data suitable for display as egui textures.

use anyhow::{Context, Result};
use std::path::Path;

/// Decoded image data ready to become an egui texture.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Load an image file and convert it to RGBA pixel data.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let img = image::open(path)
        .with_context(|| format!("failed to load image {}", path.display()))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(LoadedImage {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}
