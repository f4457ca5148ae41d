//! Positioned media containers for rendered devlog content.
//!
//! These components turn parsed directives into the markup the stylesheet
//! keys off of: `image-container` / `video-container` with position and size
//! modifier classes, `lightbox-trigger` images, caption blocks, and clearing
//! elements after non-floating placements.

use maud::{Markup, html};

use crate::markdown::{ImageDirective, MediaSize, Position, VideoDirective, VideoSource};

/// Builds a container class list with non-default modifiers appended.
///
/// Center position and medium size are unmarked defaults, so a plain
/// directive yields just `image-container` or `video-container`.
fn container_classes(kind: &str, position: Position, size: MediaSize) -> String {
    let mut classes = format!("{kind}-container");
    if !position.is_default() {
        classes.push_str(&format!(" {kind}-{}", position.as_str()));
    }
    if !size.is_default() {
        classes.push_str(&format!(" {kind}-{}", size.as_str()));
    }
    classes
}

/// Renders an image directive as a lightbox-ready figure.
///
/// The inner image carries the `lightbox-trigger` class and stores its source
/// in `data-lightbox` for the overlay script. A caption block is emitted only
/// when a caption was supplied. Center and full placements are followed by a
/// clearing element so they do not run into subsequent content; floating
/// placements are not.
pub fn image_figure(directive: &ImageDirective, src: &str) -> Markup {
    let classes = container_classes("image", directive.position, directive.size);

    html! {
        div class=(classes) {
            img src=(src) alt=(directive.alt) class="lightbox-trigger" data-lightbox=(src);
            @if !directive.caption.is_empty() {
                div class="image-caption" { (directive.caption) }
            }
        }
        @if !directive.position.floats() {
            div class="clear" {}
        }
    }
}

/// Renders a video directive as an embedded player.
///
/// Embeddable sources (YouTube, Vimeo) become a responsive iframe; direct
/// file URLs become a native video element with a single mp4 source. The
/// clearing rule matches image figures.
pub fn video_embed(directive: &VideoDirective) -> Markup {
    let classes = container_classes("video", directive.position, directive.size);

    html! {
        div class=(classes) {
            @match &directive.source {
                VideoSource::Embed(url) => {
                    div class="responsive-iframe" {
                        iframe src=(url) frameborder="0" allowfullscreen loading="lazy" {}
                    }
                }
                VideoSource::File(url) => {
                    video controls preload="metadata" {
                        source src=(url) type="video/mp4";
                        "Your browser does not support the video tag."
                    }
                }
            }
        }
        @if !directive.position.floats() {
            div class="clear" {}
        }
    }
}
