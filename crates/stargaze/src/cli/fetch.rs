//! Headless fetch command handler.

use stargaze_core::MediaFilter;
use stargaze_error::StargazeResult;
use stargaze_feed::{FeedClient, FeedOutcome};

/// Fetch the feed once and print captions (or a placeholder) to stdout.
///
/// This is the no-gallery-surface mode: the fact panel and detail overlay
/// are inert here, and fetch failures degrade to a printed placeholder
/// rather than a non-zero exit.
pub async fn run_fetch(feed_url: &str, images_only: bool) -> StargazeResult<()> {
    tracing::debug!("Headless mode: fact panel and detail overlay are inert");
    super::commands::validate_feed_url(feed_url)?;

    let filter = if images_only {
        MediaFilter::ImagesOnly
    } else {
        MediaFilter::ImagesAndVideos
    };

    let client = FeedClient::new(feed_url);
    match client.fetch(&filter).await {
        Ok(FeedOutcome::Loaded(items)) => {
            for item in &items {
                println!("{}", item.caption());
            }
        }
        Ok(outcome) => {
            if let Some(notice) = outcome.notice(&filter) {
                println!("{}", notice);
            }
        }
        Err(err) => {
            tracing::error!(error = %err, "Feed fetch failed");
            println!("Error loading images: {}", err.user_message());
        }
    }

    Ok(())
}
