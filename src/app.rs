use std::sync::Arc;
use tracing::info;

use crate::ai::{InferenceClient, ReviewSummarizer, SummarizationModel};
use crate::core::config::AppConfig;
use crate::core::models::SummarizeResult;
use crate::errors::ReviewError;
use crate::scrape::{ReviewFetcher, ReviewSource};
use crate::worker::summarize_product;

/// Process-wide wiring of the review source and the summarizer.
///
/// Build it once at startup; the model client inside is reused by every
/// request.
#[derive(Clone)]
pub struct SmartShop {
    source: Arc<dyn ReviewSource>,
    summarizer: ReviewSummarizer,
}

impl SmartShop {
    /// Construct the page fetcher and model client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `ReviewError::Config` if either HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, ReviewError> {
        let source = ReviewFetcher::new(config)?;
        let model = InferenceClient::new(config)?;

        info!(
            endpoint = %model.endpoint(),
            concurrency = config.chunk_concurrency,
            "Summarization model client ready"
        );

        let summarizer =
            ReviewSummarizer::new(Arc::new(model)).with_concurrency(config.chunk_concurrency);

        Ok(Self::from_parts(Arc::new(source), summarizer))
    }

    #[must_use]
    pub fn from_parts(source: Arc<dyn ReviewSource>, summarizer: ReviewSummarizer) -> Self {
        Self { source, summarizer }
    }

    /// Convenience for wiring a custom model with the default summarizer.
    #[must_use]
    pub fn with_model(source: Arc<dyn ReviewSource>, model: Arc<dyn SummarizationModel>) -> Self {
        Self::from_parts(source, ReviewSummarizer::new(model))
    }

    /// # Errors
    ///
    /// See [`summarize_product`].
    pub async fn summarize_url(&self, url: &str) -> Result<SummarizeResult, ReviewError> {
        summarize_product(self.source.as_ref(), &self.summarizer, url).await
    }
}
