//! Word extraction pipeline: engine invocation, markup parse, word
//! collection.

use image::{DynamicImage, GenericImageView};
use tracing::info;

use super::engine::TesseractEngine;
use super::OcrError;
use crate::hocr::{collect_words, HocrDocument};
use crate::models::WordExtraction;

/// Runs the full image → ordered-word-records pipeline.
///
/// Pure function of its inputs: no state is shared between
/// invocations, so concurrent extractions over different images are
/// safe without locking.
#[derive(Debug, Clone)]
pub struct WordExtractor {
    engine: TesseractEngine,
}

impl WordExtractor {
    pub fn new(engine: TesseractEngine) -> Self {
        Self { engine }
    }

    pub fn with_languages(languages: impl Into<String>) -> Self {
        Self::new(TesseractEngine::new(languages))
    }

    pub fn engine(&self) -> &TesseractEngine {
        &self.engine
    }

    /// Extract ordered word records from a decoded image.
    ///
    /// Fatal failures (engine unavailable, engine error, no page
    /// markup in the output) abort before any partial list is built;
    /// per-line and per-word admission failures only shrink the list.
    pub fn extract(&self, image: &DynamicImage) -> Result<WordExtraction, OcrError> {
        let markup = self.engine.recognize_markup(image)?;
        let extraction = self.extract_from_markup(&markup, image.dimensions())?;
        info!(
            words = extraction.words.len(),
            width = extraction.width,
            height = extraction.height,
            "extracted word records"
        );
        Ok(extraction)
    }

    /// Markup half of the pipeline, split out so it can run without
    /// an engine installation.
    pub fn extract_from_markup(
        &self,
        markup: &str,
        (width, height): (u32, u32),
    ) -> Result<WordExtraction, OcrError> {
        let document = HocrDocument::parse(markup);
        if document.pages.is_empty() {
            return Err(OcrError::Processing(
                "engine output contained no page markup".to_string(),
            ));
        }

        Ok(WordExtraction {
            words: collect_words(&document),
            width,
            height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> WordExtractor {
        WordExtractor::with_languages("eng")
    }

    #[test]
    fn markup_without_page_is_a_processing_error() {
        let result = extractor().extract_from_markup("<html><body></body></html>", (100, 100));
        match result {
            Err(OcrError::Processing(message)) => {
                assert!(message.contains("no page markup"));
            }
            other => panic!("expected processing error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn dimensions_travel_with_the_records() {
        let markup = r#"<div class="ocr_page" title="bbox 0 0 640 480">
          <span class="ocr_line" title="bbox 0 0 100 20">
           <span class="ocrx_word" title="bbox 0 0 50 20">hi</span>
          </span></div>"#;
        let extraction = extractor().extract_from_markup(markup, (640, 480)).unwrap();

        assert_eq!((extraction.width, extraction.height), (640, 480));
        assert_eq!(extraction.words.len(), 1);
    }

    #[test]
    fn page_with_no_accepted_words_is_empty_success_not_error() {
        let markup = r#"<div class="ocr_page" title="bbox 0 0 100 100">
          <span class="ocr_line" title="bad title">
           <span class="ocrx_word" title="bbox 0 0 10 10">dropped</span>
          </span></div>"#;
        let extraction = extractor().extract_from_markup(markup, (100, 100)).unwrap();
        assert!(extraction.words.is_empty());
    }
}
