//! Output records produced by the extraction pipeline.

use serde::Serialize;

use crate::hocr::geometry::BoxExtent;

/// A single recognized word, positioned for overlay rendering.
///
/// Immutable once built. Serialized as
/// `{word, box: [x, y, width, height], line_index, word_index, global_index}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordRecord {
    /// Recognized text, trimmed, never empty.
    #[serde(rename = "word")]
    pub text: String,
    /// Pixel box, top-left origin.
    #[serde(rename = "box")]
    pub extent: BoxExtent,
    /// Zero-based position of the enclosing line within the document
    /// traversal (dropped lines still consume a position).
    pub line_index: usize,
    /// Zero-based position of the word span within its line (dropped
    /// words still consume a position).
    pub word_index: usize,
    /// Zero-based position within the accepted-word sequence; the
    /// authoritative output order.
    pub global_index: usize,
}

/// Full extraction result for one image: the ordered word records
/// plus the source image's pixel dimensions, which the overlay client
/// needs for scaling.
#[derive(Debug, Clone, Serialize)]
pub struct WordExtraction {
    pub words: Vec<WordRecord>,
    pub width: u32,
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_field_names() {
        let record = WordRecord {
            text: "Hello".to_string(),
            extent: BoxExtent([10, 10, 90, 30]),
            line_index: 0,
            word_index: 0,
            global_index: 0,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "word": "Hello",
                "box": [10, 10, 90, 30],
                "line_index": 0,
                "word_index": 0,
                "global_index": 0
            })
        );
    }
}
