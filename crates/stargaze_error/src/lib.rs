//! Error types for the Stargaze gallery viewer.
//!
//! This crate provides the foundation error types used throughout the Stargaze
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use stargaze_error::{StargazeResult, FeedError, FeedErrorKind};
//!
//! fn fetch_feed() -> StargazeResult<String> {
//!     Err(FeedError::new(FeedErrorKind::Transport("Connection refused".to_string())))?
//! }
//!
//! match fetch_feed() {
//!     Ok(body) => println!("Got: {}", body),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod feed;
mod tui;

pub use config::ConfigError;
pub use error::{StargazeError, StargazeErrorKind, StargazeResult};
pub use feed::{FeedError, FeedErrorKind, FeedResult};
pub use tui::{TuiError, TuiErrorKind, TuiResult};
