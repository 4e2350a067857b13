//! HTTP client for the feed endpoint.

use crate::{FeedOutcome, parse_feed};
use reqwest::Client;
use stargaze_core::MediaFilter;
use stargaze_error::{FeedError, FeedErrorKind, FeedResult};
use tracing::{debug, error, instrument};

/// Default feed endpoint: a static JSON array of picture-of-the-day records.
pub const DEFAULT_FEED_URL: &str = "https://cdn.jsdelivr.net/gh/GCA-Classroom/apod/data.json";

/// Feed client.
///
/// Issues exactly one GET per call, with no body, auth, retry, or timeout
/// beyond the transport defaults. Re-entrancy is the caller's concern; the
/// gallery prevents overlapping fetches by disabling its trigger while a
/// request is in flight.
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: Client,
    endpoint: String,
}

impl FeedClient {
    /// Creates a new feed client for the given endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        debug!(endpoint = %endpoint, "Creating new feed client");
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    /// The endpoint this client fetches from.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the feed and classify the payload under the given filter.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn fetch(&self, filter: &MediaFilter) -> FeedResult<FeedOutcome> {
        debug!("Fetching feed");

        let response = self.client.get(&self.endpoint).send().await.map_err(|e| {
            error!(error = ?e, "Failed to reach feed endpoint");
            FeedError::new(FeedErrorKind::Transport(e.to_string()))
        })?;

        let status = response.status();
        if !status.is_success() {
            error!(status = %status, "Feed endpoint returned error status");
            return Err(FeedError::new(FeedErrorKind::Status(status.as_u16())));
        }

        let body = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read feed body");
            FeedError::new(FeedErrorKind::Transport(e.to_string()))
        })?;

        let outcome = parse_feed(&body, filter)?;
        if let FeedOutcome::Loaded(items) = &outcome {
            debug!(count = items.len(), "Feed loaded");
        }
        Ok(outcome)
    }
}
