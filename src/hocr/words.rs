//! Word collection: walks the typed hOCR tree and builds the ordered
//! record list.
//!
//! Admission policy:
//! - a line whose geometry failed to parse is dropped wholesale,
//!   children included; it still consumes its line_index
//! - a word is dropped, independently of its siblings, when its
//!   geometry failed to parse or its text trims to empty; it still
//!   consumes its word_index
//!
//! Skips are a data-quality tradeoff: one bad span never fails the
//! page, it just shrinks the output.

use tracing::debug;

use super::document::HocrDocument;
use crate::models::WordRecord;

/// Collect accepted words from a parsed document, in the
/// global_index order the caller may rely on.
///
/// line_index counts every markup line seen across pages in document
/// order; word_index counts every span seen within its line;
/// global_index is an accumulator incremented once per accepted word.
/// The final sort by global_index is the authoritative ordering
/// contract, independent of emission order.
pub fn collect_words(document: &HocrDocument) -> Vec<WordRecord> {
    let mut records = Vec::new();
    let mut global_index = 0usize;

    let lines = document.pages.iter().flat_map(|page| page.lines.iter());
    for (line_index, line) in lines.enumerate() {
        if line.geometry.is_none() {
            debug!(line_index, "skipping line without parseable geometry");
            continue;
        }

        for (word_index, word) in line.words.iter().enumerate() {
            let Some(bbox) = word.geometry else {
                debug!(line_index, word_index, "skipping word without parseable geometry");
                continue;
            };

            let text = word.text.trim();
            if text.is_empty() {
                debug!(line_index, word_index, "skipping word with empty text");
                continue;
            }

            records.push(WordRecord {
                text: text.to_string(),
                extent: bbox.to_extent(),
                line_index,
                word_index,
                global_index,
            });
            global_index += 1;
        }
    }

    records.sort_by_key(|record| record.global_index);
    records
}
