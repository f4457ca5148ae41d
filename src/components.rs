//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions shared across the index,
//! entry, and team pages. Components own specific UI elements with
//! consistent class names so the stylesheets and the lightbox script can
//! key off them.

pub mod entry_card;
pub mod layout;
pub mod lightbox;
pub mod media;
pub mod team_card;
