//! HTML page generators for the devlog site.

pub mod entry;
pub mod index;
pub mod team;
