// Copyright (c) 2025, Jeremy Holder
// SPDX-License-Identifier: BSD-3-Clause

//! Story file loading.
//!
//! This module reads a story file (YAML or JSON, picked by extension),
//! parses the raw wire format, and validates it into a scene graph.

use crate::models::story::{RawStory, Story};
use anyhow::{anyhow, bail, Context, Result};
use std::path::Path;

/// Load and validate a story file.
pub fn load_story(path: &Path) -> Result<Story> {
    let extension = path.extension().and_then(|s| s.to_str());
    if !matches!(extension, Some("yaml") | Some("yml") | Some("json")) {
        bail!("unsupported story file extension: {:?}", extension);
    }

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read story file {}", path.display()))?;

    let raw: RawStory = match extension {
        Some("json") => serde_json::from_str(&text)
            .with_context(|| format!("failed to parse JSON story {}", path.display()))?,
        _ => serde_yaml::from_str(&text)
            .with_context(|| format!("failed to parse YAML story {}", path.display()))?,
    };

    let base_dir = path
        .parent()
        .map(|p| p.to_path_buf())
        .ok_or_else(|| anyhow!("story file {} has no parent directory", path.display()))?;

    Story::from_raw(raw, base_dir)
        .with_context(|| format!("invalid story file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_yaml_story() {
        let dir = std::env::temp_dir().join("switchback_test_load_yaml");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("story.yaml");
        std::fs::write(
            &path,
            "start: intro\nvideos:\n  intro: intro.mp4\n  end: end.mp4\noptions:\n  intro:\n    choices:\n      \"Finish\":\n        next: end\n",
        )
        .unwrap();

        let story = load_story(&path).unwrap();
        assert_eq!(story.scene_count(), 2);
        assert_eq!(story.base_dir(), dir.as_path());
        assert_eq!(
            story.video_path(story.start_scene()),
            dir.join("intro.mp4")
        );
    }

    #[test]
    fn test_load_json_story() {
        let dir = std::env::temp_dir().join("switchback_test_load_json");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("story.json");
        std::fs::write(
            &path,
            r#"{"start": "intro", "videos": {"intro": "intro.mp4"}}"#,
        )
        .unwrap();

        let story = load_story(&path).unwrap();
        assert_eq!(story.start, "intro");
        assert!(story.start_scene().is_terminal());
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let err = load_story(Path::new("/tmp/story.toml")).unwrap_err();
        assert!(err.to_string().contains("unsupported story file extension"));
    }
}
