//! wordlens — OCR word-overlay extraction service.
//!
//! Upload an image, get back the recognized words with pixel boxes
//! for overlay rendering.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (before anything else)
    let _ = dotenvy::dotenv();

    // Initialize logging based on verbosity
    let default_filter = if wordlens::cli::is_verbose() {
        "wordlens=info"
    } else {
        "wordlens=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Run CLI
    wordlens::cli::run().await
}
