//! Backend trait for gallery data.
//!
//! This module defines the backend trait that allows the TUI to work with
//! different feed sources (HTTP, mock data, etc.) without coupling to
//! specific implementations.

use async_trait::async_trait;
use stargaze_core::MediaFilter;
use stargaze_error::FeedResult;
use stargaze_feed::FeedOutcome;

/// Backend trait for gallery data.
///
/// Implementations provide the feed fetch for the TUI without exposing
/// transport details, so tests can drive the gallery with canned outcomes.
///
/// Note: Only requires `Send` (not `Sync`) since the TUI is single-threaded
/// and awaits each fetch inline.
#[async_trait]
pub trait GalleryBackend: Send {
    /// Fetch the feed once and classify the payload under the given filter.
    async fn fetch_gallery(&mut self, filter: &MediaFilter) -> FeedResult<FeedOutcome>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{App, AppMode, GalleryState};
    use stargaze_core::{GalleryConfig, MediaItem, MediaKind};
    use stargaze_error::{FeedError, FeedErrorKind};

    /// Mock backend returning a fixed outcome per fetch.
    struct CannedBackend {
        outcome: FeedResult<FeedOutcome>,
    }

    #[async_trait]
    impl GalleryBackend for CannedBackend {
        async fn fetch_gallery(&mut self, _filter: &MediaFilter) -> FeedResult<FeedOutcome> {
            self.outcome.clone()
        }
    }

    #[tokio::test]
    async fn test_canned_backend_populates_gallery() {
        let item = MediaItem {
            title: Some("Eagle Nebula".to_string()),
            media_type: MediaKind::Image,
            url: Some("https://x/img.jpg".to_string()),
            ..Default::default()
        };
        let mut backend = CannedBackend {
            outcome: Ok(FeedOutcome::Loaded(vec![item])),
        };

        let mut app = App::new(GalleryConfig::default());
        assert!(app.begin_fetch());
        let result = backend.fetch_gallery(&app.config.filter).await;
        app.finish_fetch(result);

        assert_eq!(app.gallery, GalleryState::Populated);
        assert_eq!(app.items.len(), 1);
        app.open_detail();
        assert_eq!(app.mode, AppMode::Detail);
    }

    #[tokio::test]
    async fn test_canned_backend_failure_shows_placeholder() {
        let mut backend = CannedBackend {
            outcome: Err(FeedError::new(FeedErrorKind::Transport(
                "connection refused".to_string(),
            ))),
        };

        let mut app = App::new(GalleryConfig::default());
        assert!(app.begin_fetch());
        let result = backend.fetch_gallery(&app.config.filter).await;
        app.finish_fetch(result);

        assert!(matches!(app.gallery, GalleryState::Failed(_)));
        assert!(!app.fetch_busy);
    }
}
