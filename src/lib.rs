//! Static devlog site generator.

mod assets;
pub mod avatar;
mod blog;
pub mod components;
mod config;
mod highlight;
pub mod lightbox;
mod markdown;
pub mod pages;
mod team;
mod util;

pub use assets::write_static_assets;
pub use blog::{BlogEntry, EntryContent, fallback_entry, load_entries};
pub use config::Config;
pub use highlight::Highlighter;
pub use lightbox::{EntryOverlay, EscapeOutcome, Lightbox, dispatch_escape};
pub use markdown::{
    ImageDirective, MarkupRenderer, MediaSize, Position, VideoDirective, VideoSource,
    expand_gallery_sections, expand_legacy_image_tags, expand_video_center_tags, preprocess,
    render_content_markup,
};
pub use team::{TeamMember, load_team};
pub use util::slugify;
