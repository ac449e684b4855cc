//! wordlens — OCR word-overlay extraction service.
//!
//! Uploads (or CLI-supplied images) run through tesseract in hOCR
//! mode; the markup is parsed into typed page/line/word nodes and
//! flattened into an ordered list of word records carrying pixel
//! boxes for client-side overlay rendering.

pub mod cli;
pub mod config;
pub mod hocr;
pub mod models;
pub mod ocr;
pub mod server;
pub mod storage;
