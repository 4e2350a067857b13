//! Stargaze - terminal gallery for the astronomy picture-of-the-day feed.
//!
//! Stargaze fetches a static JSON feed of picture-of-the-day records on
//! demand, renders one card per record in a gallery pane, and opens a detail
//! overlay per item with the full title, date, explanation, and media
//! source. Video records get an embeddable-player URL plus an open-in-browser
//! fallback link.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use stargaze::{FeedBackend, GalleryConfig, run_tui};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut backend = FeedBackend::new(stargaze::DEFAULT_FEED_URL);
//!     run_tui(&mut backend, GalleryConfig::default()).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Stargaze is organized as a workspace with focused crates:
//!
//! - `stargaze_error` - Error types
//! - `stargaze_core` - Feed record model, filter policy, embed rewriting, facts
//! - `stargaze_feed` - HTTP feed client and outcome classification
//! - `stargaze_tui` - Terminal UI
//!
//! This crate (`stargaze`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use stargaze_core::{
    FACTS, GalleryConfig, MediaFilter, MediaItem, MediaKind, UNTITLED, embed_url, random_fact,
};
pub use stargaze_error::{
    ConfigError, FeedError, FeedErrorKind, FeedResult, StargazeError, StargazeErrorKind,
    StargazeResult, TuiError, TuiErrorKind, TuiResult,
};
pub use stargaze_feed::{DEFAULT_FEED_URL, EMPTY_FEED_NOTICE, FeedClient, FeedOutcome, parse_feed};
pub use stargaze_tui::{
    App, AppMode, DetailMedia, DetailView, Event, EventHandler, FeedBackend, GalleryBackend,
    GalleryState, run_tui,
};
