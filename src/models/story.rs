// Copyright (c) 2025, Jeremy Holder
// SPDX-License-Identifier: BSD-3-Clause

//! Story file wire format and the validated scene graph built from it.
//!
//! `RawStory` mirrors the YAML/JSON shape on disk. `Story` is the checked
//! in-memory graph: every choice target resolves, the start scene exists,
//! and per-type heading fields are collapsed into a single heading.

use super::scene::{Choice, Scene, SceneId, SceneType};
use anyhow::{bail, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// On-disk story shape: `start`, `videos`, and per-scene `options`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawStory {
    pub start: SceneId,
    pub videos: IndexMap<SceneId, String>,
    #[serde(default)]
    pub options: IndexMap<SceneId, RawOptions>,
}

/// Per-scene presentation block from the story file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawOptions {
    #[serde(default)]
    pub scene_type: Option<SceneType>,
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub continue_heading: Option<String>,
    #[serde(default)]
    pub question_heading: Option<String>,
    #[serde(default)]
    pub interrupt_heading: Option<String>,
    #[serde(default)]
    pub choices: IndexMap<String, RawChoice>,
}

/// A single choice entry from the story file, keyed by its button label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawChoice {
    pub next: SceneId,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub temporary: bool,
}

impl RawOptions {
    /// Heading text for the end-of-scene choices, picked by scene type.
    fn resolved_heading(&self, scene_type: SceneType) -> Option<String> {
        match scene_type {
            SceneType::Continue => self.continue_heading.clone(),
            SceneType::Question => self.question_heading.clone(),
            SceneType::Main => self.heading.clone(),
        }
    }
}

/// Validated scene graph plus the directory media paths resolve against.
#[derive(Debug, Clone)]
pub struct Story {
    pub start: SceneId,
    scenes: IndexMap<SceneId, Scene>,
    base_dir: PathBuf,
}

impl Story {
    /// Build and validate a scene graph from the raw file contents.
    ///
    /// `base_dir` is the directory of the story file; video and image
    /// references are resolved against it.
    pub fn from_raw(raw: RawStory, base_dir: PathBuf) -> Result<Self> {
        if raw.videos.is_empty() {
            bail!("story declares no videos");
        }
        if !raw.videos.contains_key(&raw.start) {
            bail!("start scene '{}' is not a declared video", raw.start);
        }

        let mut scenes = IndexMap::with_capacity(raw.videos.len());
        for (id, video) in &raw.videos {
            let options = raw.options.get(id).cloned().unwrap_or_default();
            let scene_type = options.scene_type.unwrap_or_default();

            let mut choices = Vec::with_capacity(options.choices.len());
            for (label, choice) in &options.choices {
                if !raw.videos.contains_key(&choice.next) {
                    bail!(
                        "scene '{}' choice '{}' points at undeclared scene '{}'",
                        id,
                        label,
                        choice.next
                    );
                }
                choices.push(Choice {
                    label: label.clone(),
                    next: choice.next.clone(),
                    image: choice.image.clone(),
                    temporary: choice.temporary,
                });
            }

            scenes.insert(
                id.clone(),
                Scene {
                    id: id.clone(),
                    video: video.clone(),
                    scene_type,
                    heading: options.resolved_heading(scene_type),
                    interrupt_heading: options.interrupt_heading.clone(),
                    choices,
                },
            );
        }

        for id in raw.options.keys() {
            if !raw.videos.contains_key(id) {
                bail!("options declared for '{}', which is not a declared video", id);
            }
        }

        Ok(Self {
            start: raw.start,
            scenes,
            base_dir,
        })
    }

    pub fn scene(&self, id: &str) -> Option<&Scene> {
        self.scenes.get(id)
    }

    pub fn start_scene(&self) -> &Scene {
        // Validated in from_raw: the start id always resolves.
        &self.scenes[&self.start]
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// Absolute path of a scene's video file.
    pub fn video_path(&self, scene: &Scene) -> PathBuf {
        self.base_dir.join(&scene.video)
    }

    /// Absolute path of a media reference from the story file.
    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.base_dir.join(relative)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_story(yaml: &str) -> RawStory {
        serde_yaml::from_str(yaml).expect("test story should parse")
    }

    const STORY: &str = r#"
start: intro
videos:
  intro: media/intro.mp4
  left: media/left.mp4
  right: media/right.mp4
options:
  intro:
    scene_type: question
    question_heading: "Which way?"
    choices:
      "Go left":
        next: left
      "Go right":
        next: right
        image: art/right.png
"#;

    #[test]
    fn test_valid_story_builds_graph() {
        let story = Story::from_raw(raw_story(STORY), PathBuf::from("/stories")).unwrap();
        assert_eq!(story.scene_count(), 3);
        assert_eq!(story.start_scene().id, "intro");

        let intro = story.scene("intro").unwrap();
        assert_eq!(intro.scene_type, SceneType::Question);
        assert_eq!(intro.heading.as_deref(), Some("Which way?"));

        // Choice order follows declaration order in the file.
        let labels: Vec<_> = intro.choices.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Go left", "Go right"]);
        assert_eq!(intro.choices[1].image.as_deref(), Some("art/right.png"));

        // Scenes without an options block are terminal.
        assert!(story.scene("left").unwrap().is_terminal());
        assert_eq!(
            story.video_path(intro),
            PathBuf::from("/stories/media/intro.mp4")
        );
    }

    #[test]
    fn test_unresolved_choice_target_is_rejected() {
        let raw = raw_story(
            r#"
start: intro
videos:
  intro: intro.mp4
options:
  intro:
    choices:
      "Onward":
        next: missing
"#,
        );
        let err = Story::from_raw(raw, PathBuf::new()).unwrap_err();
        assert!(err.to_string().contains("undeclared scene 'missing'"));
    }

    #[test]
    fn test_undeclared_start_is_rejected() {
        let raw = raw_story("start: nowhere\nvideos:\n  intro: intro.mp4\n");
        let err = Story::from_raw(raw, PathBuf::new()).unwrap_err();
        assert!(err.to_string().contains("start scene 'nowhere'"));
    }

    #[test]
    fn test_options_for_unknown_video_rejected() {
        let raw = raw_story(
            r#"
start: intro
videos:
  intro: intro.mp4
options:
  ghost:
    scene_type: main
"#,
        );
        let err = Story::from_raw(raw, PathBuf::new()).unwrap_err();
        assert!(err.to_string().contains("'ghost'"));
    }

    #[test]
    fn test_heading_follows_scene_type() {
        let raw = raw_story(
            r#"
start: intro
videos:
  intro: intro.mp4
options:
  intro:
    scene_type: continue
    continue_heading: "Carry on"
    question_heading: "Wrong one"
"#,
        );
        let story = Story::from_raw(raw, PathBuf::new()).unwrap();
        assert_eq!(
            story.scene("intro").unwrap().heading.as_deref(),
            Some("Carry on")
        );
    }

    #[test]
    fn test_missing_scene_type_defaults_to_continue() {
        let raw = raw_story(
            r#"
start: intro
videos:
  intro: intro.mp4
options:
  intro:
    continue_heading: "Next"
"#,
        );
        let story = Story::from_raw(raw, PathBuf::new()).unwrap();
        let intro = story.scene("intro").unwrap();
        assert_eq!(intro.scene_type, SceneType::Continue);
        assert_eq!(intro.heading.as_deref(), Some("Next"));
    }
}
