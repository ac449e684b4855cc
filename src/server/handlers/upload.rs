//! Image upload handler: validate, store, extract, respond.

use std::path::Path;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, warn};

use super::super::AppState;
use crate::storage;

/// Handle a multipart image upload.
///
/// The original bytes are stored under a content-hash name, the
/// decoded image goes through the extraction pipeline, and the
/// response carries the stored image URL, its pixel dimensions, and
/// the ordered word records.
pub async fn upload_image(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let (filename, content) = match read_file_field(&mut multipart).await {
        Ok(upload) => upload,
        Err(response) => return response,
    };

    if content.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "invalid_upload", "empty upload");
    }

    // Sniff the content for a supported raster format; the client's
    // filename and content type are not trusted.
    let Some(extension) = storage::sniff_image_extension(&content) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "invalid_upload",
            "unsupported file type (expected PNG, JPEG, BMP, or TIFF)",
        );
    };

    let image = match image::load_from_memory(&content) {
        Ok(image) => image,
        Err(e) => {
            warn!("rejecting upload that failed to decode: {}", e);
            return error_response(
                StatusCode::BAD_REQUEST,
                "invalid_upload",
                "could not decode image",
            );
        }
    };

    let basename = Path::new(&filename)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("upload");

    let relative_path = match storage::save_upload(&state.upload_dir, &content, basename, extension)
    {
        Ok(path) => path,
        Err(e) => {
            error!("failed to store upload: {}", e);
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "storage",
                "failed to store upload",
            );
        }
    };

    // The engine call blocks; keep it off the async runtime.
    let extractor = state.extractor.clone();
    let extraction = tokio::task::spawn_blocking(move || extractor.extract(&image)).await;

    match extraction {
        Ok(Ok(extraction)) => Json(serde_json::json!({
            "image_url": format!("/uploads/{}", relative_path),
            "width": extraction.width,
            "height": extraction.height,
            "words": extraction.words,
        }))
        .into_response(),
        Ok(Err(e)) if e.is_unavailable() => {
            error!("OCR engine unavailable: {}", e);
            error_response(StatusCode::SERVICE_UNAVAILABLE, "engine_unavailable", e.to_string())
        }
        Ok(Err(e)) => {
            error!("OCR processing failed: {}", e);
            error_response(StatusCode::UNPROCESSABLE_ENTITY, "processing", e.to_string())
        }
        Err(e) => {
            error!("extraction task failed: {}", e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "processing",
                "extraction task failed",
            )
        }
    }
}

/// Pull the `file` field out of the multipart body.
async fn read_file_field(multipart: &mut Multipart) -> Result<(String, Vec<u8>), Response> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => {
                return Err(error_response(
                    StatusCode::BAD_REQUEST,
                    "invalid_upload",
                    "no file field in upload",
                ));
            }
            Err(e) => {
                return Err(error_response(
                    StatusCode::BAD_REQUEST,
                    "invalid_upload",
                    format!("malformed multipart body: {}", e),
                ));
            }
        };

        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload").to_string();
        let content = match field.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) => {
                return Err(error_response(
                    StatusCode::BAD_REQUEST,
                    "invalid_upload",
                    format!("failed to read upload: {}", e),
                ));
            }
        };

        return Ok((filename, content));
    }
}

fn error_response(status: StatusCode, kind: &str, message: impl Into<String>) -> Response {
    let message = message.into();
    (
        status,
        Json(serde_json::json!({
            "error": message,
            "kind": kind,
        })),
    )
        .into_response()
}
