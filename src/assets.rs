//! CSS and JS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");
const LIGHTBOX: &str = include_str!("../assets/lightbox.css");

const INDEX_PAGE: &str = include_str!("../assets/page-index.css");
const ENTRY_PAGE: &str = include_str!("../assets/page-entry.css");
const TEAM_PAGE: &str = include_str!("../assets/page-team.css");

const LIGHTBOX_JS: &str = include_str!("../assets/lightbox.js");

/// Writes all bundled assets to the output assets directory
pub fn write_static_assets(assets_dir: &Path) -> Result<()> {
    write_bundled(assets_dir, "index.css", &[BASE, INDEX_PAGE])?;
    write_bundled(
        assets_dir,
        "entry.css",
        &[BASE, MARKDOWN, LIGHTBOX, ENTRY_PAGE],
    )?;
    write_bundled(assets_dir, "team.css", &[BASE, TEAM_PAGE])?;

    fs::write(assets_dir.join("lightbox.js"), LIGHTBOX_JS)
        .context("Failed to write JS asset: lightbox.js")?;
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}
