//! Summarization model access and chunk aggregation

pub mod client;
pub mod summarizer;

// Re-export main types for convenience
pub use client::{InferenceClient, SummarizationModel};
pub use summarizer::ReviewSummarizer;
