use tracing::info;

use crate::ai::ReviewSummarizer;
use crate::core::models::SummarizeResult;
use crate::errors::ReviewError;
use crate::scrape::ReviewSource;

/// Fetch the reviews on `url` and summarize them.
///
/// Acquisition failures abort and propagate. A page without reviews is not an
/// error and yields `SummarizeResult::NoReviews`. Failures on individual
/// chunks are reported inline in the summary text.
///
/// # Errors
///
/// Returns `ReviewError::InvalidRequest` for a blank URL and
/// `ReviewError::Acquisition` when the page cannot be fetched.
pub async fn summarize_product(
    source: &dyn ReviewSource,
    summarizer: &ReviewSummarizer,
    url: &str,
) -> Result<SummarizeResult, ReviewError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ReviewError::InvalidRequest(
            "Please enter a valid URL.".to_string(),
        ));
    }

    let reviews_text = source.fetch_reviews(url).await?;

    if reviews_text.trim().is_empty() {
        info!("No reviews found on {}", url);
        return Ok(SummarizeResult::NoReviews);
    }

    let summary = summarizer.summarize(&reviews_text).await;
    Ok(SummarizeResult::Summary(summary))
}
