//! Chunked summarization of review text.

use futures::StreamExt;
use futures::stream;
use std::sync::Arc;
use tracing::{info, warn};

use super::client::SummarizationModel;
use crate::core::models::{
    CHUNK_THRESHOLD_WORDS, ChunkSummary, GenerationParams, MAX_CHUNK_WORDS, NO_CONTENT_SENTINEL,
    join_summaries,
};
use crate::errors::ReviewError;
use crate::utils::chunking::{chunk_text, word_count};

/// Turns arbitrarily long review text into a single summary by summarizing
/// it chunk by chunk with a shared model.
#[derive(Clone)]
pub struct ReviewSummarizer {
    model: Arc<dyn SummarizationModel>,
    params: GenerationParams,
    threshold_words: usize,
    max_chunk_words: usize,
    concurrency: usize,
}

impl ReviewSummarizer {
    #[must_use]
    pub fn new(model: Arc<dyn SummarizationModel>) -> Self {
        Self {
            model,
            params: GenerationParams::default(),
            threshold_words: CHUNK_THRESHOLD_WORDS,
            max_chunk_words: MAX_CHUNK_WORDS,
            concurrency: 1,
        }
    }

    /// Allows up to `concurrency` chunk requests in flight at once.
    /// Output order always follows chunk order.
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Splits `text` the way [`summarize`](Self::summarize) will.
    ///
    /// # Errors
    ///
    /// Only fails if the configured chunk size is zero.
    pub fn plan_chunks(&self, text: &str) -> Result<Vec<String>, ReviewError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let words = word_count(text);
        if words <= self.threshold_words {
            return Ok(vec![text.to_string()]);
        }

        chunk_text(text, self.max_chunk_words)
    }

    /// Summarizes `text`, returning the space-joined chunk summaries.
    ///
    /// Blank input short-circuits to [`NO_CONTENT_SENTINEL`] without touching
    /// the model. A chunk whose summary fails is replaced by an inline error
    /// marker; the remaining chunks are still summarized.
    pub async fn summarize(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return NO_CONTENT_SENTINEL.to_string();
        }

        let chunks = match self.plan_chunks(text) {
            Ok(chunks) => chunks,
            Err(e) => return ChunkSummary::Failed(e.to_string()).render(),
        };

        info!(
            words = word_count(text),
            chunks = chunks.len(),
            "Summarizing review text"
        );

        let summaries = self.summarize_chunks(&chunks).await;
        join_summaries(&summaries)
    }

    /// Summarizes each chunk, keeping one entry per chunk in input order.
    ///
    /// A call that succeeds but yields no summary contributes no entry.
    pub async fn summarize_chunks(&self, chunks: &[String]) -> Vec<ChunkSummary> {
        let outcomes: Vec<Option<ChunkSummary>> = stream::iter(chunks.iter().enumerate())
            .map(|(index, chunk)| self.summarize_chunk(index, chunk))
            .buffered(self.concurrency)
            .collect()
            .await;

        outcomes.into_iter().flatten().collect()
    }

    async fn summarize_chunk(&self, index: usize, chunk: &str) -> Option<ChunkSummary> {
        match self.model.summarize(chunk, &self.params).await {
            Ok(outputs) => outputs
                .into_iter()
                .next()
                .map(|output| ChunkSummary::Generated(output.summary_text)),
            Err(e) => {
                warn!(chunk = index, "Chunk summarization failed: {}", e);
                Some(ChunkSummary::Failed(e.to_string()))
            }
        }
    }
}
