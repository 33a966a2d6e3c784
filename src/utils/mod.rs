//! Pure text helpers

pub mod chunking;

pub use chunking::{chunk_text, word_count};
