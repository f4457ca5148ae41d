//! Shared test utilities for integration tests.
//!
//! Provides helper functions for writing sample devlog and team JSON files
//! used across multiple test files.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a temporary workspace with a sample devlog JSON file.
///
/// The data exercises image directives, video directives, legacy tags, and
/// gallery blocks so pipeline tests cover every rendering path.
///
/// # Returns
///
/// Temporary directory and the path to the written data file
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn create_sample_devlog() -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let data_path = dir.path().join("devlog.json");

    let data = r##"[
  {
    "smallTitle": "Update 1",
    "bigTitle": "First Look",
    "imageSource": "https://cdn.example/thumb1.png",
    "content": [
      "# First Look",
      "Our opening devlog entry.",
      "![Concept art|left|small|Station concept](https://cdn.example/art.png)",
      "[video|center|medium](https://youtu.be/abc123)",
      "{{gallery-start}}A{{gallery-end}}"
    ]
  },
  {
    "smallTitle": "Update 2",
    "bigTitle": "Engine Deep Dive",
    "imageSource": "https://cdn.example/thumb2.png",
    "content": "{{image-left}} http://cdn.example/engine.png renderer internals {{/image-left}}\n\n```rust\nfn tick() {}\n```"
  }
]"##;

    std::fs::write(&data_path, data)?;
    Ok((dir, data_path))
}

/// Writes a sample team JSON file into the given directory.
///
/// # Errors
///
/// Returns error if the file write fails
pub fn write_sample_team(dir: &Path) -> Result<PathBuf> {
    let team_path = dir.join("team.json");
    let data = r#"[
  {"name": "Sam Chen", "description": "Engine programmer"},
  {"name": "Riley", "image": "https://cdn.example/riley.png",
   "socials": {"github": "https://github.com/riley"}}
]"#;

    std::fs::write(&team_path, data)?;
    Ok(team_path)
}
