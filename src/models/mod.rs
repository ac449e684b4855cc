//! Data models for wordlens.

mod word;

pub use word::{WordExtraction, WordRecord};
