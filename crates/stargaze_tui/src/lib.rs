//! Terminal User Interface for the Stargaze gallery.
//!
//! Provides an interactive gallery over the picture-of-the-day feed: fetch
//! on demand, browse captions, and open a detail overlay per item. Built
//! with ratatui for terminal rendering.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod app;
mod backend;
mod events;
mod feed_backend;
mod runner;
mod ui;

pub use app::{
    App, AppMode, DetailMedia, DetailView, FETCH_LABEL, GalleryState, LOADING_LABEL,
    LOADING_NOTICE,
};
pub use backend::GalleryBackend;
pub use events::{Event, EventHandler};
pub use feed_backend::FeedBackend;
pub use runner::run_tui;
