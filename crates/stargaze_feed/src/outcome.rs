//! Feed parsing and outcome classification.

use serde_json::Value;
use stargaze_core::{MediaFilter, MediaItem};
use stargaze_error::{FeedError, FeedErrorKind, FeedResult};

/// Placeholder text for an empty or non-array feed payload.
pub const EMPTY_FEED_NOTICE: &str = "No images found in the dataset.";

/// Classified result of a feed fetch.
///
/// Empty feeds and feeds whose records are all unsupported are outcomes
/// rather than errors: the gallery shows an informational placeholder and
/// nothing is logged as a failure.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedOutcome {
    /// Feed yielded renderable items, in feed order
    Loaded(Vec<MediaItem>),
    /// Payload was not an array or the array was empty
    EmptyFeed,
    /// Records parsed but none survived the media filter
    NoSupportedItems,
}

impl FeedOutcome {
    /// Placeholder text for the non-loaded outcomes.
    pub fn notice(&self, filter: &MediaFilter) -> Option<&'static str> {
        match self {
            Self::Loaded(_) => None,
            Self::EmptyFeed => Some(EMPTY_FEED_NOTICE),
            Self::NoSupportedItems => Some(filter.empty_notice()),
        }
    }
}

/// Parse a feed body and classify it under the given filter.
///
/// A body that is not valid JSON, or an array whose elements are not feed
/// records, is a parse failure. A payload that is valid JSON but not an
/// array (or an empty array) classifies as [`FeedOutcome::EmptyFeed`].
pub fn parse_feed(body: &str, filter: &MediaFilter) -> FeedResult<FeedOutcome> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| FeedError::new(FeedErrorKind::Parse(e.to_string())))?;
    classify(value, filter)
}

fn classify(value: Value, filter: &MediaFilter) -> FeedResult<FeedOutcome> {
    let Value::Array(records) = value else {
        tracing::debug!("Feed payload was not an array");
        return Ok(FeedOutcome::EmptyFeed);
    };
    if records.is_empty() {
        return Ok(FeedOutcome::EmptyFeed);
    }

    let items: Vec<MediaItem> = serde_json::from_value(Value::Array(records))
        .map_err(|e| FeedError::new(FeedErrorKind::Parse(e.to_string())))?;

    let supported = filter.apply(items);
    if supported.is_empty() {
        return Ok(FeedOutcome::NoSupportedItems);
    }
    Ok(FeedOutcome::Loaded(supported))
}
