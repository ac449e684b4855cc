//! Web server for the OCR word-overlay interface.
//!
//! Serves the upload page, accepts image uploads, stores originals,
//! and returns extracted word records as JSON for client-side overlay
//! rendering.

mod assets;
mod handlers;
mod routes;

pub use routes::create_router;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Settings;
use crate::ocr::WordExtractor;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<WordExtractor>,
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            extractor: Arc::new(WordExtractor::with_languages(settings.languages.clone())),
            upload_dir: settings.upload_dir.clone(),
            max_upload_bytes: settings.max_upload_bytes,
        }
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    settings.ensure_upload_dir()?;

    let state = AppState::new(settings);
    if !state.extractor.engine().is_available() {
        tracing::warn!("{}", state.extractor.engine().availability_hint());
    }

    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
