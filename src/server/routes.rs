//! Router configuration for the web server.

use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    Router::new()
        // Upload page
        .route("/", get(handlers::index))
        // Image upload and extraction
        .route("/upload", post(handlers::upload_image))
        // Stored originals, served back for overlay rendering
        .route("/uploads/*path", get(handlers::serve_upload))
        // Engine status
        .route("/api/status", get(handlers::api_status))
        // Static assets (CSS/JS)
        .route("/static/style.css", get(handlers::serve_css))
        .route("/static/overlay.js", get(handlers::serve_js))
        .layer(body_limit)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
