//! HTTP feed implementation of the gallery backend.

use crate::GalleryBackend;
use async_trait::async_trait;
use stargaze_core::MediaFilter;
use stargaze_error::FeedResult;
use stargaze_feed::{FeedClient, FeedOutcome};

/// Gallery backend backed by the HTTP feed client.
#[derive(Debug, Clone)]
pub struct FeedBackend {
    client: FeedClient,
}

impl FeedBackend {
    /// Create a backend fetching from the given endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: FeedClient::new(endpoint),
        }
    }
}

#[async_trait]
impl GalleryBackend for FeedBackend {
    async fn fetch_gallery(&mut self, filter: &MediaFilter) -> FeedResult<FeedOutcome> {
        self.client.fetch(filter).await
    }
}
