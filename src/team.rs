//! Team member data model.
//!
//! The team page is fed by a small JSON file. Members without an image URL
//! get a generated avatar instead; no network lookups happen at build time.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// One studio member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Optional portrait URL; a generated avatar substitutes when absent.
    #[serde(default)]
    pub image: Option<String>,
    /// Label to URL, e.g. "github" to a profile page.
    #[serde(default)]
    pub socials: BTreeMap<String, String>,
}

/// Loads the team list from a JSON file.
///
/// # Errors
///
/// Returns error if the file cannot be read or parsed; the caller skips the
/// team page rather than failing the build.
pub fn load_team(path: impl AsRef<Path>) -> Result<Vec<TeamMember>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read team data: {}", path.display()))?;

    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse team data: {}", path.display()))
}
