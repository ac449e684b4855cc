//! Static file serving handlers.

use std::path::{Path as FsPath, PathBuf};

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use super::super::assets;
use super::super::AppState;

/// Serve a stored upload back by its relative path.
pub async fn serve_upload(State(state): State<AppState>, Path(path): Path<String>) -> Response {
    let Some(file_path) = resolve_upload_path(&state.upload_dir, &path) else {
        return (StatusCode::NOT_FOUND, "File not found").into_response();
    };

    let content = match tokio::fs::read(&file_path).await {
        Ok(c) => c,
        Err(_) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to read file").into_response();
        }
    };

    let mime = mime_guess::from_path(&file_path)
        .first_or_octet_stream()
        .to_string();

    ([(header::CONTENT_TYPE, mime)], content).into_response()
}

/// Resolve a request path to an existing file inside the upload
/// directory, or `None` for anything that escapes it.
///
/// Canonicalizes both sides so symlinks and `..` segments cannot
/// reach outside the directory.
fn resolve_upload_path(upload_dir: &FsPath, request_path: &str) -> Option<PathBuf> {
    if request_path.contains("..") || request_path.starts_with('/') {
        return None;
    }

    let canonical_dir = upload_dir.canonicalize().ok()?;
    let canonical_file = canonical_dir.join(request_path).canonicalize().ok()?;

    canonical_file
        .starts_with(&canonical_dir)
        .then_some(canonical_file)
}

/// Serve CSS.
pub async fn serve_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], assets::CSS)
}

/// Serve JavaScript.
pub async fn serve_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        assets::JS,
    )
}
