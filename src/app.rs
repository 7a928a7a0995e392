// Copyright (c) 2025, Jeremy Holder
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the egui::App trait, wiring the playback backend, the session
//! navigator, and the UI panels together.

use crate::io;
use crate::models::scene::{Choice, Scene, SceneType};
use crate::models::story::Story;
use crate::playback::{progress_fraction, PlaybackStatus, PlayerBackend};
use crate::session::Session;
use crate::ui::{controls, interrupt, overlay, screen, sidebar, TextureCache};
use std::path::PathBuf;
use std::time::Duration;

/// What the player is doing with the current scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// No story loaded.
    Idle,
    /// A scene's video is playing.
    Playing,
    /// The video ended; waiting for the user to pick a choice.
    AwaitingChoice,
    /// A terminal scene's video ended.
    Finished,
}

/// Main application state.
pub struct SwitchbackApp {
    /// Loaded and validated story, if any
    story: Option<Story>,

    /// Live play-through state
    session: Option<Session>,

    phase: Phase,

    /// Playback engine; None when built without a backend (preview mode)
    backend: Option<Box<dyn PlayerBackend>>,

    /// Story file queued from the command line, consumed on first frame
    pending_story: Option<PathBuf>,

    /// Path of the loaded story, for File > Reload
    story_path: Option<PathBuf>,

    /// Volume in percent
    volume: i32,

    muted: bool,

    /// Loaded choice artwork
    textures: TextureCache,

    /// User-visible load or playback error
    error: Option<String>,
}

impl SwitchbackApp {
    /// Create the application, optionally queueing a story to open.
    pub fn new(backend: Option<Box<dyn PlayerBackend>>, initial_story: Option<PathBuf>) -> Self {
        Self {
            story: None,
            session: None,
            phase: Phase::Idle,
            backend,
            pending_story: initial_story,
            story_path: None,
            volume: 100,
            muted: false,
            textures: TextureCache::new(),
            error: None,
        }
    }

    fn current_scene(&self) -> Option<Scene> {
        let story = self.story.as_ref()?;
        let session = self.session.as_ref()?;
        story.scene(session.current()).cloned()
    }

    /// Scene whose temporary choices the interrupt panel offers: the
    /// playing scene, or the scene an interruption will return to.
    fn interrupt_base_scene(&self) -> Option<Scene> {
        let story = self.story.as_ref()?;
        let session = self.session.as_ref()?;
        let id = session.resume_scene().unwrap_or_else(|| session.current());
        story.scene(id).cloned()
    }

    fn in_interruption(&self) -> bool {
        self.session
            .as_ref()
            .map(|s| s.in_interruption())
            .unwrap_or(false)
    }

    fn paused(&self) -> bool {
        self.backend
            .as_ref()
            .map(|b| b.status() == PlaybackStatus::Paused)
            .unwrap_or(false)
    }

    /// Load a story file and start playing its start scene.
    fn open_story(&mut self, path: PathBuf, ctx: &egui::Context) {
        match io::serialization::load_story(&path) {
            Ok(story) => {
                log::info!(
                    "loaded story {} with {} scenes",
                    path.display(),
                    story.scene_count()
                );
                self.session = Some(Session::new(story.start.clone()));
                self.story = Some(story);
                self.story_path = Some(path);
                self.textures.clear();
                self.error = None;
                self.play_current(None, ctx);
            }
            Err(e) => {
                log::error!("failed to load story {}: {:#}", path.display(), e);
                self.error = Some(format!("{e:#}"));
            }
        }
    }

    /// Start (or resume) the session's current scene.
    fn play_current(&mut self, resume_at: Option<Duration>, ctx: &egui::Context) {
        self.error = None;

        let (scene, video, images) = {
            let (Some(story), Some(session)) = (self.story.as_ref(), self.session.as_ref())
            else {
                return;
            };
            // Validated at load time: the current id always resolves.
            let Some(scene) = story.scene(session.current()) else {
                self.error = Some(format!("unknown scene '{}'", session.current()));
                return;
            };
            let scene = scene.clone();
            let video = story.video_path(&scene);
            let images: Vec<(String, PathBuf)> = scene
                .choices
                .iter()
                .filter_map(|c| c.image.as_ref())
                .map(|img| (img.clone(), story.resolve(img)))
                .collect();
            (scene, video, images)
        };

        self.preload_choice_images(&images, ctx);

        if !video.exists() {
            log::error!("video file not found: {}", video.display());
            self.error = Some(format!("Video file not found: {}", video.display()));
            // Keep the story navigable: offer the scene's choices anyway.
            self.phase = if scene.is_terminal() {
                Phase::Finished
            } else {
                Phase::AwaitingChoice
            };
            return;
        }

        let Some(backend) = self.backend.as_mut() else {
            // Preview mode: treat the scene as finishing immediately.
            log::info!("no video backend; previewing scene '{}'", scene.id);
            self.phase = Phase::Playing;
            self.handle_video_end(ctx);
            return;
        };

        let result = match resume_at {
            Some(position) => backend.play_from(&video, position),
            None => backend.play(&video),
        };
        match result {
            Ok(()) => {
                backend.set_volume(self.volume);
                backend.set_muted(self.muted);
                self.phase = Phase::Playing;
                log::info!("playing scene '{}' ({})", scene.id, video.display());
            }
            Err(e) => {
                log::error!("playback failed for scene '{}': {:#}", scene.id, e);
                self.error = Some(format!("{e:#}"));
                self.phase = if scene.is_terminal() {
                    Phase::Finished
                } else {
                    Phase::AwaitingChoice
                };
            }
        }
    }

    /// Load choice artwork into the texture cache.
    fn preload_choice_images(&mut self, images: &[(String, PathBuf)], ctx: &egui::Context) {
        for (key, path) in images {
            if self.textures.contains_key(key) {
                continue;
            }
            match io::media::load_image(path) {
                Ok(img) => {
                    let size = [img.width as usize, img.height as usize];
                    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &img.pixels);
                    let texture =
                        ctx.load_texture(key.clone(), color_image, egui::TextureOptions::LINEAR);
                    self.textures.insert(key.clone(), texture);
                }
                Err(e) => {
                    // Button renders text-only when artwork is missing.
                    log::warn!("failed to load choice image {}: {:#}", path.display(), e);
                }
            }
        }
    }

    /// React to the backend reporting end-of-playback.
    fn handle_video_end(&mut self, ctx: &egui::Context) {
        let resume_at = self
            .session
            .as_mut()
            .and_then(|session| session.finish_interruption());
        if let Some(position) = resume_at {
            // An interruption ended; return to the recorded scene.
            self.play_current(Some(position), ctx);
            return;
        }

        let Some(scene) = self.current_scene() else {
            return;
        };
        if scene.is_terminal() {
            log::info!("story finished at scene '{}'", scene.id);
            self.phase = Phase::Finished;
        } else {
            self.phase = Phase::AwaitingChoice;
        }
    }

    /// Apply a choice selection and move to its target scene.
    fn choose(&mut self, choice: Choice, ctx: &egui::Context) {
        let position = self
            .backend
            .as_ref()
            .and_then(|b| b.position())
            .unwrap_or(Duration::ZERO);
        if let Some(session) = self.session.as_mut() {
            session.choose(&choice, position);
        }
        self.play_current(None, ctx);
    }

    /// Abort the playing interruption and return to the recorded scene.
    fn skip_interruption(&mut self, ctx: &egui::Context) {
        let resume_at = self
            .session
            .as_mut()
            .and_then(|session| session.finish_interruption());
        if let Some(position) = resume_at {
            self.play_current(Some(position), ctx);
        }
    }

    /// Go back to the story's start scene.
    fn restart(&mut self, ctx: &egui::Context) {
        let Some(start) = self.story.as_ref().map(|s| s.start.clone()) else {
            return;
        };
        if let Some(session) = self.session.as_mut() {
            session.restart(start);
        }
        self.play_current(None, ctx);
    }

    fn toggle_pause(&mut self) {
        if let Some(backend) = self.backend.as_mut() {
            backend.toggle_pause();
        }
    }

    fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        if let Some(backend) = self.backend.as_mut() {
            backend.set_muted(self.muted);
        }
    }

    fn set_volume(&mut self, volume: i32) {
        self.volume = volume.clamp(0, 100);
        if let Some(backend) = self.backend.as_mut() {
            backend.set_volume(self.volume);
        }
    }

    fn seek_fraction(&mut self, fraction: f32) {
        if let Some(backend) = self.backend.as_mut() {
            if let Some(duration) = backend.duration() {
                backend.seek(duration.mul_f32(fraction.clamp(0.0, 1.0)));
            }
        }
    }
}

impl eframe::App for SwitchbackApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Story queued from the command line
        if let Some(path) = self.pending_story.take() {
            self.open_story(path, ctx);
        }

        // Poll the backend for end-of-playback
        if self.phase == Phase::Playing {
            let ended = self
                .backend
                .as_ref()
                .map(|b| b.status() == PlaybackStatus::Ended)
                .unwrap_or(false);
            if ended {
                self.handle_video_end(ctx);
            }
            // Keep polling and keep the seek bar moving without input events
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Story...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Stories", &["yaml", "yml", "json"])
                            .pick_file()
                        {
                            self.open_story(path, ctx);
                        }
                        ui.close_menu();
                    }
                    let can_reload = self.story_path.is_some();
                    if ui
                        .add_enabled(can_reload, egui::Button::new("Reload Story"))
                        .clicked()
                    {
                        if let Some(path) = self.story_path.clone() {
                            self.open_story(path, ctx);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Playback", |ui| {
                    let playing = self.phase == Phase::Playing && self.backend.is_some();
                    let pause_label = if self.paused() {
                        "Play (Space)"
                    } else {
                        "Pause (Space)"
                    };
                    if ui
                        .add_enabled(playing, egui::Button::new(pause_label))
                        .clicked()
                    {
                        self.toggle_pause();
                        ui.close_menu();
                    }

                    let mute_label = if self.muted { "Unmute (M)" } else { "Mute (M)" };
                    if ui
                        .add_enabled(self.backend.is_some(), egui::Button::new(mute_label))
                        .clicked()
                    {
                        self.toggle_mute();
                        ui.close_menu();
                    }

                    ui.separator();

                    if ui
                        .add_enabled(
                            self.in_interruption(),
                            egui::Button::new("Skip Interruption"),
                        )
                        .clicked()
                    {
                        self.skip_interruption(ctx);
                        ui.close_menu();
                    }
                    if ui
                        .add_enabled(self.story.is_some(), egui::Button::new("Restart Story"))
                        .clicked()
                    {
                        self.restart(ctx);
                        ui.close_menu();
                    }
                });

                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        ui.close_menu();
                    }
                });
            });
        });

        // Keyboard shortcuts, skipped while a text field has focus
        if !ctx.wants_keyboard_input() {
            if ctx.input(|i| i.key_pressed(egui::Key::Space)) {
                self.toggle_pause();
            }
            if ctx.input(|i| i.key_pressed(egui::Key::M)) {
                self.toggle_mute();
            }
        }

        let scene = self.current_scene();
        let in_interruption = self.in_interruption();
        let mut chosen: Option<Choice> = None;
        let mut skip = false;
        let mut restart = false;

        // Choice side panel for Main scenes
        if let Some(scene_ref) = scene.as_ref().filter(|s| {
            s.scene_type == SceneType::Main
                && matches!(self.phase, Phase::Playing | Phase::AwaitingChoice)
        }) {
            let action = egui::SidePanel::right("choices")
                .default_width(250.0)
                .show(ctx, |ui| sidebar::show(ui, scene_ref, &self.textures))
                .inner;
            if let sidebar::SidebarAction::Choose(choice) = action {
                chosen = Some(choice);
            }
        }

        // Transport controls
        let controls_view = controls::ControlsView {
            enabled: self.backend.is_some() && self.phase == Phase::Playing,
            paused: self.paused(),
            muted: self.muted,
            volume: self.volume,
            progress: self.backend.as_ref().and_then(|b| {
                if self.phase == Phase::Playing {
                    progress_fraction(b.position(), b.duration())
                } else {
                    None
                }
            }),
        };
        let controls_action = egui::TopBottomPanel::bottom("controls")
            .show(ctx, |ui| controls::show(ui, &controls_view))
            .inner;

        // Video area (center)
        let screen_view = screen::ScreenView {
            scene: scene.as_ref(),
            finished: self.phase == Phase::Finished,
            in_interruption,
            backend_available: self.backend.is_some(),
            error: self.error.as_deref(),
        };
        let (video_rect, screen_action) = egui::CentralPanel::default()
            .show(ctx, |ui| screen::show(ui, &screen_view))
            .inner;
        if let screen::ScreenAction::Restart = screen_action {
            restart = true;
        }

        // End-of-scene choice overlay for Continue/Question scenes
        if self.phase == Phase::AwaitingChoice {
            if let Some(scene_ref) = scene
                .as_ref()
                .filter(|s| s.scene_type != SceneType::Main && !s.is_terminal())
            {
                if let overlay::OverlayAction::Choose(choice) =
                    overlay::show(ctx, video_rect, scene_ref, &self.textures)
                {
                    chosen = Some(choice);
                }
            }
        }

        // Interrupt panel while a video plays
        if self.phase == Phase::Playing {
            if let Some(base) = self
                .interrupt_base_scene()
                .filter(|s| s.has_temporary_choices() || in_interruption)
            {
                match interrupt::show(ctx, video_rect, &base, in_interruption, &self.textures) {
                    interrupt::InterruptAction::Choose(choice) => chosen = Some(choice),
                    interrupt::InterruptAction::Skip => skip = true,
                    interrupt::InterruptAction::None => {}
                }
            }
        }

        // Apply UI actions after all panels have drawn
        match controls_action {
            controls::ControlsAction::TogglePause => self.toggle_pause(),
            controls::ControlsAction::Seek(fraction) => self.seek_fraction(fraction),
            controls::ControlsAction::SetVolume(volume) => self.set_volume(volume),
            controls::ControlsAction::ToggleMute => self.toggle_mute(),
            controls::ControlsAction::None => {}
        }
        if restart {
            self.restart(ctx);
        }
        if skip {
            self.skip_interruption(ctx);
        }
        if let Some(choice) = chosen {
            self.choose(choice, ctx);
        }
    }
}
