//! Storage helpers for uploaded images on disk.
//!
//! Uploads are stored under a content-hash derived name, so the same
//! bytes always land at the same path and distinct uploads cannot
//! collide.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

/// Hex SHA-256 of upload content, the basis for storage names.
pub fn content_hash(content: &[u8]) -> String {
    hex::encode(Sha256::digest(content))
}

/// Construct the storage path for an uploaded image.
///
/// Uses a two-level directory structure based on hash prefix for
/// filesystem efficiency:
/// `{upload_dir}/{hash[0..2]}/{sanitized_basename}-{hash[0..8]}.{extension}`
pub fn upload_storage_path(
    upload_dir: &Path,
    content_hash: &str,
    basename: &str,
    extension: &str,
) -> PathBuf {
    upload_dir
        .join(&content_hash[..2])
        .join(upload_filename(content_hash, basename, extension))
}

/// Filename part of [`upload_storage_path`], also used to build the
/// URL the stored image is served back under.
pub fn upload_filename(content_hash: &str, basename: &str, extension: &str) -> String {
    format!(
        "{}-{}.{}",
        sanitize_filename(basename),
        &content_hash[..8],
        extension
    )
}

/// Reduce a client-supplied basename to a safe filename fragment.
pub fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect();
    let trimmed = cleaned.trim_matches('-');

    if trimmed.is_empty() {
        "upload".to_string()
    } else {
        trimmed.chars().take(64).collect()
    }
}

/// Save upload content to disk under its hash-derived name.
///
/// Returns the path relative to `upload_dir` (e.g. `ab/scan-abcdef12.png`),
/// which doubles as the serving path under `/uploads/`.
pub fn save_upload(
    upload_dir: &Path,
    content: &[u8],
    basename: &str,
    extension: &str,
) -> anyhow::Result<String> {
    let hash = content_hash(content);
    let path = upload_storage_path(upload_dir, &hash, basename, extension);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, content)?;

    Ok(format!(
        "{}/{}",
        &hash[..2],
        upload_filename(&hash, basename, extension)
    ))
}

/// Sniff upload content for a supported raster format and map it to a
/// storage extension. Client-supplied filenames and content types are
/// never trusted for this decision.
pub fn sniff_image_extension(content: &[u8]) -> Option<&'static str> {
    let kind = infer::get(content)?;
    match kind.mime_type() {
        "image/png" => Some("png"),
        "image/jpeg" => Some("jpg"),
        "image/bmp" => Some("bmp"),
        "image/tiff" => Some("tiff"),
        _ => None,
    }
}
