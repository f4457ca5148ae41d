//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

/// Wraps page content with standard HTML structure
///
/// Provides consistent DOCTYPE, html, head, and container structure across
/// all page types. The wrapper handles viewport configuration, charset,
/// stylesheet and script loading while the caller provides page-specific
/// body content.
///
/// # Arguments
///
/// * `title`: Page title text
/// * `site_name`: Site name appended to the title
/// * `stylesheets`: Array of CSS file paths to include
/// * `scripts`: Array of deferred JS file paths to include
/// * `body`: Page-specific body markup
pub fn page_wrapper(
    title: &str,
    site_name: &str,
    stylesheets: &[&str],
    scripts: &[&str],
    body: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - " (site_name) }
                @for stylesheet in stylesheets {
                    link rel="stylesheet" href=(stylesheet);
                }
                @for script in scripts {
                    script src=(script) defer {}
                }
            }
            body {
                div class="container" {
                    (body)
                }
                footer class="site-footer" {
                    p { (site_name) }
                }
            }
        }
    }
}
