//! Markdown-lite rendering for devlog content.
//!
//! Custom `{{...}}` tags are rewritten into canonical syntax, pipe-delimited
//! directives in image and link tokens are parsed into typed values, and the
//! resulting markdown is rendered to HTML with positioned, captioned,
//! lightbox-ready media markup.

mod directive;
mod preprocess;
mod renderer;

pub use directive::{ImageDirective, MediaSize, Position, VideoDirective, VideoSource};
pub use preprocess::{
    expand_gallery_sections, expand_legacy_image_tags, expand_video_center_tags, preprocess,
};
pub use renderer::{MarkupRenderer, render_content_markup};
