// Copyright (c) 2025, Jeremy Holder
// SPDX-License-Identifier: BSD-3-Clause

//! Switchback - Interactive branching video player
//!
//! A cross-platform desktop application that plays video scenes described
//! by a YAML/JSON story file and branches to the next scene based on the
//! viewer's choice.

mod app;
mod io;
mod models;
mod playback;
mod session;
mod ui;
mod util;

use anyhow::Result;
use app::SwitchbackApp;
use playback::PlayerBackend;
use std::path::PathBuf;

fn make_backend() -> Option<Box<dyn PlayerBackend>> {
    #[cfg(feature = "video-vlc")]
    {
        match playback::vlc::VlcBackend::new() {
            Ok(backend) => return Some(Box::new(backend)),
            Err(e) => log::error!("failed to initialize libVLC backend: {e:#}"),
        }
    }
    None
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Story file may be passed on the command line
    let story = std::env::args().nth(1).map(PathBuf::from);

    let backend = make_backend();
    if backend.is_none() {
        log::warn!("no video backend available; running in preview mode");
    }

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Switchback - Interactive Video Player"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Switchback",
        options,
        Box::new(move |_cc| Ok(Box::new(SwitchbackApp::new(backend, story)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
