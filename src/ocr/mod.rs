//! OCR engine invocation and the extraction pipeline built on it.
//!
//! Tesseract is invoked as a system binary in hOCR mode; its markup
//! feeds the typed parser in [`crate::hocr`].

mod engine;
mod extractor;

pub use engine::TesseractEngine;
pub use extractor::WordExtractor;

use thiserror::Error;

/// Fatal pipeline failures. Per-line and per-word admission failures
/// are not errors; they silently shrink the output set.
#[derive(Debug, Error)]
pub enum OcrError {
    /// The engine binary cannot be located or executed. Kept distinct
    /// so callers can tell users how to fix it.
    #[error("OCR engine unavailable: {0}")]
    EngineUnavailable(String),

    /// Any other failure while invoking the engine or interpreting
    /// its output.
    #[error("OCR processing failed: {0}")]
    Processing(String),

    #[error("I/O error during OCR: {0}")]
    Io(#[from] std::io::Error),
}

impl OcrError {
    /// True when the failure is the engine being missing rather than
    /// a processing problem.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, OcrError::EngineUnavailable(_))
    }
}
