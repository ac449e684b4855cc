//! API endpoint handlers.

use axum::{extract::State, response::IntoResponse, Json};

use super::super::AppState;

/// Engine status endpoint: whether the OCR engine can be invoked,
/// with an actionable hint when it cannot.
pub async fn api_status(State(state): State<AppState>) -> impl IntoResponse {
    let engine = state.extractor.engine();

    Json(serde_json::json!({
        "engine": "tesseract",
        "available": engine.is_available(),
        "hint": engine.availability_hint(),
        "languages": engine.languages(),
    }))
}
