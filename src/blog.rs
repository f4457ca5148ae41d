//! Devlog entry data model.
//!
//! Entries come from one JSON resource using the field names the site has
//! always used (`smallTitle`, `bigTitle`, `imageSource`, `content`). Content
//! is either an ordered list of lines or a single string; both forms render
//! identically. Entries are loaded once and read-only afterwards.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One devlog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogEntry {
    pub small_title: String,
    pub big_title: String,
    /// Thumbnail URL shown on the entry card.
    pub image_source: String,
    pub content: EntryContent,
}

/// Raw entry content, authored either line by line or as one block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryContent {
    Lines(Vec<String>),
    Text(String),
}

impl BlogEntry {
    /// Joins the entry's content into one markdown string.
    pub fn markdown(&self) -> String {
        match &self.content {
            EntryContent::Lines(lines) => lines.join("\n"),
            EntryContent::Text(text) => text.clone(),
        }
    }
}

/// Loads the ordered entry list from a JSON file.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not a JSON array of
/// entries. Callers substitute [`fallback_entry`] so the site stays
/// functional when the data resource is unreachable.
pub fn load_entries(path: impl AsRef<Path>) -> Result<Vec<BlogEntry>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read entry data: {}", path.display()))?;

    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse entry data: {}", path.display()))
}

/// Built-in entry used when the data resource is unreachable.
///
/// Exercises the full custom syntax so the offline page still demonstrates
/// every rendering path.
pub fn fallback_entry() -> BlogEntry {
    BlogEntry {
        small_title: "Fallback Entry".to_string(),
        big_title: "Failed to load entry data".to_string(),
        image_source: "assets/fallback.jpg".to_string(),
        content: EntryContent::Lines(vec![
            "# Demo Content".to_string(),
            "Could not load external devlog data.".to_string(),
            "![Alt text|center|medium|Example image](https://picsum.photos/400)".to_string(),
            "[video|center|medium](https://www.youtube.com/embed/dQw4w9WgXcQ)".to_string(),
            "## Gallery Example".to_string(),
            "{{gallery-start}}".to_string(),
            "![Gallery 1|small|First image](https://picsum.photos/300/200)".to_string(),
            "![Gallery 2|small|Second image](https://picsum.photos/300/201)".to_string(),
            "![Gallery 3|small|Third image](https://picsum.photos/300/202)".to_string(),
            "{{gallery-end}}".to_string(),
        ]),
    }
}
