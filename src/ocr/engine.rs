//! Tesseract engine invocation.
//!
//! Runs the system `tesseract` binary in hOCR mode over a temp-file
//! rendering of the decoded image. The binary being missing is a
//! distinct, actionable failure; everything else the engine does
//! wrong is a generic processing failure.

use std::path::Path;
use std::process::Command;

use image::{DynamicImage, ImageFormat};
use tempfile::TempDir;
use tracing::{debug, warn};

use super::OcrError;

const TESSERACT_BINARY: &str = "tesseract";

/// Handle to the system tesseract binary, configured with the
/// language/script selector passed on every invocation.
#[derive(Debug, Clone)]
pub struct TesseractEngine {
    languages: String,
}

impl TesseractEngine {
    pub fn new(languages: impl Into<String>) -> Self {
        Self {
            languages: languages.into(),
        }
    }

    /// Language/script selector passed to the engine (`-l`).
    pub fn languages(&self) -> &str {
        &self.languages
    }

    /// Check whether the engine binary is present in PATH.
    pub fn is_available(&self) -> bool {
        which::which(TESSERACT_BINARY).is_ok()
    }

    /// Human-readable availability message for status displays.
    pub fn availability_hint(&self) -> String {
        if self.is_available() {
            "Tesseract is available".to_string()
        } else {
            "Tesseract not installed. Install with: apt install tesseract-ocr".to_string()
        }
    }

    /// Run the engine over a decoded image, returning raw hOCR markup.
    ///
    /// The image is written as PNG into a temp directory for the
    /// engine's consumption; the directory is removed on return.
    pub fn recognize_markup(&self, image: &DynamicImage) -> Result<String, OcrError> {
        let temp_dir = TempDir::new()?;
        let image_path = temp_dir.path().join("input.png");

        image
            .save_with_format(&image_path, ImageFormat::Png)
            .map_err(|e| OcrError::Processing(format!("failed to stage image for OCR: {}", e)))?;

        self.run_tesseract(&image_path)
    }

    /// Invoke `tesseract <image> stdout -l <languages> hocr`.
    fn run_tesseract(&self, image_path: &Path) -> Result<String, OcrError> {
        debug!(languages = %self.languages, "running tesseract in hOCR mode");

        let output = Command::new(TESSERACT_BINARY)
            .arg(image_path)
            .arg("stdout")
            .args(["-l", &self.languages])
            .arg("hocr")
            .output();

        match output {
            Ok(output) => {
                if output.status.success() {
                    Ok(String::from_utf8_lossy(&output.stdout).to_string())
                } else {
                    let stderr = String::from_utf8_lossy(&output.stderr);
                    warn!(status = ?output.status, "tesseract exited with failure: {}", stderr.trim());
                    Err(OcrError::Processing(format!(
                        "tesseract failed: {}",
                        stderr.trim()
                    )))
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(OcrError::EngineUnavailable(
                "tesseract not found (install tesseract-ocr)".to_string(),
            )),
            Err(e) => Err(OcrError::Io(e)),
        }
    }
}
