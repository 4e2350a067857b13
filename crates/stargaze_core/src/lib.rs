//! Core data types and gallery logic for Stargaze.
//!
//! This crate holds the feed record model (`MediaItem`, `MediaKind`), the
//! gallery filter policy, video embed-URL rewriting, and the "did you know"
//! fact list. Everything here is pure logic with no I/O, so the feed client
//! and the TUI both build on it without pulling in each other's stacks.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod embed;
mod facts;
mod filter;
mod item;

pub use config::GalleryConfig;
pub use embed::embed_url;
pub use facts::{FACTS, random_fact};
pub use filter::MediaFilter;
pub use item::{MediaItem, MediaKind, UNTITLED};
