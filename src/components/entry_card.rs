//! Devlog entry card for the index page.

use maud::{Markup, html};

use crate::blog::BlogEntry;

/// Renders one entry card linking to its detail page.
///
/// Cards alternate orientation down the page: odd indices get the `reverse`
/// modifier so thumbnails zigzag left and right. The thumbnail uses the
/// site's hexagon crop and loads lazily.
pub fn entry_card(entry: &BlogEntry, index: usize, href: &str) -> Markup {
    let card_class = if index % 2 == 1 {
        "entry-link reverse"
    } else {
        "entry-link"
    };

    html! {
        div class="entry-card" {
            a class=(card_class) href=(href) {
                img class="hexagon" src=(entry.image_source)
                    alt=(format!("Entry {}", index + 1)) loading="lazy";
                div class="entry-titles" {
                    h2 class="entry-small-title" { (entry.small_title) }
                    h1 class="entry-big-title" { (entry.big_title) }
                }
            }
        }
    }
}
