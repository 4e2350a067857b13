//! CLI command definitions.

use clap::{Parser, Subcommand};
use stargaze_error::{ConfigError, StargazeResult};
use stargaze_feed::DEFAULT_FEED_URL;

/// Stargaze - terminal gallery viewer for the astronomy picture-of-the-day feed
#[derive(Parser, Debug)]
#[command(name = "stargaze")]
#[command(about = "Terminal gallery viewer for the astronomy picture-of-the-day feed", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the terminal gallery viewer
    Tui {
        /// Feed endpoint returning a JSON array of records
        #[arg(long, env = "STARGAZE_FEED_URL", default_value = DEFAULT_FEED_URL)]
        feed_url: String,

        /// Render image records only (drop videos before rendering)
        #[arg(long)]
        images_only: bool,

        /// Hide the "did you know" fact panel
        #[arg(long)]
        no_facts: bool,
    },

    /// Fetch the feed once and print captions to stdout
    Fetch {
        /// Feed endpoint returning a JSON array of records
        #[arg(long, env = "STARGAZE_FEED_URL", default_value = DEFAULT_FEED_URL)]
        feed_url: String,

        /// Keep image records only (drop videos)
        #[arg(long)]
        images_only: bool,
    },
}

/// Reject a feed endpoint that is not a parseable URL before any component
/// starts up.
pub(crate) fn validate_feed_url(raw: &str) -> StargazeResult<()> {
    url::Url::parse(raw).map_err(|e| {
        ConfigError::new(format!("Feed URL '{}' is not a valid URL: {}", raw, e))
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_feed_url_is_valid() {
        assert!(validate_feed_url(DEFAULT_FEED_URL).is_ok());
    }

    #[test]
    fn test_garbage_feed_url_is_rejected() {
        assert!(validate_feed_url("not a url at all").is_err());
    }
}
