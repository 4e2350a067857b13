//! Feed client for Stargaze.
//!
//! Fetches the picture-of-the-day JSON feed, checks the response status,
//! parses the body tolerantly, and classifies the result into a
//! [`FeedOutcome`]: loaded items, an empty feed, or a feed with no supported
//! items. Only the first of these carries data; the other two are benign
//! empty states, not errors.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod outcome;

pub use client::{DEFAULT_FEED_URL, FeedClient};
pub use outcome::{EMPTY_FEED_NOTICE, FeedOutcome, parse_feed};
