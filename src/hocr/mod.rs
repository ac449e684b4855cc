//! hOCR markup handling: geometry parsing, typed document model, and
//! word collection.

pub mod document;
pub mod geometry;
pub mod words;

pub use document::{HocrDocument, HocrLine, HocrPage, HocrWord};
pub use geometry::{parse_bbox, BBox, BoxExtent};
pub use words::collect_words;
