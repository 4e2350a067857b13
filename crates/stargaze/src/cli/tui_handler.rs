//! TUI launch command handler.

use stargaze_core::{GalleryConfig, MediaFilter};
use stargaze_error::StargazeResult;
use stargaze_tui::{FeedBackend, run_tui};

/// Launch the terminal gallery viewer.
pub async fn launch_tui(feed_url: &str, images_only: bool, no_facts: bool) -> StargazeResult<()> {
    tracing::info!(feed_url = %feed_url, images_only, no_facts, "Launching TUI");
    super::commands::validate_feed_url(feed_url)?;

    let filter = if images_only {
        MediaFilter::ImagesOnly
    } else {
        MediaFilter::ImagesAndVideos
    };
    let config = GalleryConfig::new(filter, !no_facts);

    let mut backend = FeedBackend::new(feed_url);
    run_tui(&mut backend, config).await?;

    Ok(())
}
