//! Shared lightbox overlay element.

use maud::{Markup, PreEscaped, html};

/// Emits the single overlay element every lightbox trigger targets.
///
/// Hidden by default; `assets/lightbox.js` toggles it to a flex layout when
/// a trigger is clicked and clears the image source on close. Pages with
/// rendered content include exactly one of these.
pub fn overlay() -> Markup {
    html! {
        div id="lightbox" class="lightbox" {
            button class="lightbox-close" { (PreEscaped("&times;")) }
            img src="" alt="";
        }
    }
}
