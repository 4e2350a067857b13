//! Stargaze CLI binary.
//!
//! This binary provides command-line access to the gallery:
//! - Launch the terminal gallery viewer
//! - Fetch the feed once and print captions (headless mode)

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, launch_tui, run_fetch};

    // Pick up STARGAZE_FEED_URL and friends from a local .env
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute the requested command
    match cli.command {
        Commands::Tui {
            feed_url,
            images_only,
            no_facts,
        } => {
            launch_tui(&feed_url, images_only, no_facts).await?;
        }

        Commands::Fetch {
            feed_url,
            images_only,
        } => {
            run_fetch(&feed_url, images_only).await?;
        }
    }

    Ok(())
}
