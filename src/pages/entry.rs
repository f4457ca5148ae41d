//! Entry detail page generation.

use anyhow::{Context, Result};
use maud::{Markup, PreEscaped, html};

use crate::blog::BlogEntry;
use crate::components::{layout, lightbox};
use crate::highlight::Highlighter;
use crate::markdown::MarkupRenderer;

/// Generates one entry's detail page.
///
/// Renders the entry content through the markup pipeline, applies syntax
/// highlighting to the inserted fragment, and wraps it in the page layout
/// together with the shared lightbox overlay. The fragment is recomputed on
/// every call; entries are small and nothing is cached.
///
/// # Errors
///
/// Returns error if rendering or highlighting fails for this entry; the
/// caller warns and skips the page rather than failing the whole build.
pub fn generate_entry_page(
    renderer: &MarkupRenderer<'_>,
    highlighter: &Highlighter,
    site_name: &str,
    entry: &BlogEntry,
) -> Result<Markup> {
    let fragment = renderer
        .render(&entry.markdown())
        .with_context(|| format!("Failed to render entry: {}", entry.big_title))?;

    let fragment = highlighter
        .highlight_blocks(&fragment)
        .with_context(|| format!("Failed to highlight entry: {}", entry.big_title))?;

    let body = html! {
        nav class="entry-nav" {
            a href="../index.html" { "Back to devlog" }
        }

        article class="entry-detail" {
            header class="entry-header" {
                h2 class="entry-small-title" { (entry.small_title) }
                h1 class="entry-big-title" { (entry.big_title) }
            }
            div class="entry-content" {
                (PreEscaped(fragment))
            }
        }

        (lightbox::overlay())
    };

    Ok(layout::page_wrapper(
        &entry.big_title,
        site_name,
        &["../assets/entry.css"],
        &["../assets/lightbox.js"],
        body,
    ))
}
