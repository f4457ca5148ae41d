//! Devlog index page generation.

use maud::{Markup, html};

use crate::blog::BlogEntry;
use crate::components::{entry_card, layout};

/// Generates the index page listing every entry.
///
/// Cards appear in data order, alternating orientation, each linking to its
/// detail page. An empty entry list renders an empty-state message instead
/// of a blank page.
///
/// # Arguments
///
/// * `site_name`: Site name for the header and title
/// * `entries`: Entries paired with the href of their detail page
pub fn generate_index_page(site_name: &str, entries: &[(String, &BlogEntry)]) -> Markup {
    let body = html! {
        header class="site-header" {
            h1 class="site-title" { (site_name) }
            p class="site-tagline" { "Development updates" }
        }

        main class="entry-list" {
            @if entries.is_empty() {
                p class="empty-state" { "No entries yet" }
            } @else {
                @for (index, (href, entry)) in entries.iter().enumerate() {
                    (entry_card::entry_card(entry, index, href))
                }
            }
        }
    };

    layout::page_wrapper("Devlog", site_name, &["assets/index.css"], &[], body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blog::EntryContent;

    fn entry(title: &str) -> BlogEntry {
        BlogEntry {
            small_title: "Update".to_string(),
            big_title: title.to_string(),
            image_source: "https://x/t.png".to_string(),
            content: EntryContent::Text(String::new()),
        }
    }

    #[test]
    fn test_index_lists_entries_in_order() {
        // Arrange
        let first = entry("First");
        let second = entry("Second");
        let entries = vec![
            ("entries/00-first.html".to_string(), &first),
            ("entries/01-second.html".to_string(), &second),
        ];

        // Act
        let html = generate_index_page("Hexlog", &entries).into_string();

        // Assert
        assert!(html.contains("entries/00-first.html"), "First entry linked");
        assert!(html.contains("entries/01-second.html"), "Second entry linked");
        let first_pos = html.find("First").expect("First entry present");
        let second_pos = html.find("Second").expect("Second entry present");
        assert!(first_pos < second_pos, "Entries keep data order");
        assert!(html.contains("reverse"), "Second card reverses orientation");
    }

    #[test]
    fn test_index_empty_state() {
        // Arrange & Act
        let html = generate_index_page("Hexlog", &[]).into_string();

        // Assert
        assert!(html.contains("No entries yet"), "Empty list shows an empty state");
    }
}
