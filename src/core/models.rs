use serde::{Deserialize, Serialize};

/// Returned instead of a summary when there is no review text at all.
pub const NO_CONTENT_SENTINEL: &str = "No content to summarize.";

/// Prefix of the inline marker that replaces a chunk whose summary failed.
pub const CHUNK_ERROR_PREFIX: &str = "Error during summarization:";

/// Texts longer than this many words are split before summarization.
pub const CHUNK_THRESHOLD_WORDS: usize = 500;

/// Words per chunk once a text is over the threshold.
pub const MAX_CHUNK_WORDS: usize = 500;

pub const DEFAULT_MODEL: &str = "facebook/bart-large-cnn";

/// Decoding parameters forwarded to the summarization model with every chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub max_length: u32,
    pub min_length: u32,
    pub do_sample: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_length: 150,
            min_length: 40,
            do_sample: false,
        }
    }
}

/// One generated summary as returned by the model service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryOutput {
    pub summary_text: String,
}

/// Outcome of summarizing a single chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkSummary {
    Generated(String),
    Failed(String),
}

impl ChunkSummary {
    /// Text placed in the overall summary for this chunk.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            ChunkSummary::Generated(text) => text.clone(),
            ChunkSummary::Failed(detail) => format!("{CHUNK_ERROR_PREFIX} {detail}"),
        }
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, ChunkSummary::Failed(_))
    }
}

/// Space-joins rendered chunk summaries in chunk order.
#[must_use]
pub fn join_summaries(summaries: &[ChunkSummary]) -> String {
    summaries
        .iter()
        .map(ChunkSummary::render)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Result of running the whole fetch-then-summarize pipeline for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummarizeResult {
    Summary(String),
    NoReviews,
}

/// Body accepted by the HTTP handler.
#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub url: String,
}

/// Body returned by the HTTP handler on success.
#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub url: String,
    pub summary: String,
}
