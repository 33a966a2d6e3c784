//! Review acquisition from product pages.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode, header};
use scraper::{Html, Selector};
use std::time::Duration;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{error, info, warn};

use crate::core::config::AppConfig;
use crate::errors::ReviewError;

const MAX_RETRIES: usize = 3;

/// Review bodies are marked with this attribute on supported product pages.
pub const REVIEW_BODY_SELECTOR: &str = r#"span[data-hook="review-body"]"#;

static REVIEW_BODY: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(REVIEW_BODY_SELECTOR).expect("Failed to parse review body selector")
});

/// Something that can produce the review text for a product page.
#[async_trait]
pub trait ReviewSource: Send + Sync {
    /// Returns every review body on the page joined by single spaces.
    /// An empty string means the page had no reviews.
    ///
    /// # Errors
    ///
    /// Returns `ReviewError::Acquisition` if the page could not be fetched.
    async fn fetch_reviews(&self, url: &str) -> Result<String, ReviewError>;
}

/// Fetches product pages over HTTP and scrapes their review bodies.
pub struct ReviewFetcher {
    http: Client,
}

impl ReviewFetcher {
    /// # Errors
    ///
    /// Returns `ReviewError::Config` if the user agent is not a valid header
    /// value or the HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, ReviewError> {
        Self::with_settings(&config.user_agent, config.http_timeout)
    }

    /// # Errors
    ///
    /// See [`ReviewFetcher::new`].
    pub fn with_settings(user_agent: &str, timeout: Duration) -> Result<Self, ReviewError> {
        let mut headers = header::HeaderMap::new();
        let ua_value = user_agent
            .parse()
            .map_err(|e| ReviewError::Config(format!("Invalid User-Agent header: {e}")))?;
        headers.insert(header::USER_AGENT, ua_value);

        let http = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| ReviewError::Config(format!("Failed to build page HTTP client: {e}")))?;

        Ok(Self { http })
    }

    async fn fetch_page(&self, url: &str) -> Result<String, ReviewError> {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = format!("HTTP status {status} for {url}");
            return Err(
                if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
                    ReviewError::Unavailable(message)
                } else {
                    ReviewError::Acquisition(message)
                },
            );
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl ReviewSource for ReviewFetcher {
    #[tracing::instrument(level = "info", skip(self))]
    async fn fetch_reviews(&self, url: &str) -> Result<String, ReviewError> {
        let strategy = ExponentialBackoff::from_millis(2)
            .factor(100)
            .max_delay(Duration::from_secs(5))
            .map(jitter)
            .take(MAX_RETRIES);

        let html = RetryIf::spawn(
            strategy,
            || self.fetch_page(url),
            |e: &ReviewError| {
                let retry = e.is_transient();
                if retry {
                    warn!("Retrying page fetch after transient failure: {}", e);
                }
                retry
            },
        )
        .await
        .map_err(|e| {
            let e = e.into_acquisition();
            error!("Failed to fetch product page: {}", e);
            e
        })?;

        let reviews = extract_reviews(&html);
        info!("Extracted {} reviews from page", reviews.len());

        Ok(join_reviews(&reviews))
    }
}

/// Pulls the text of every review body out of a product page.
///
/// Each text fragment inside a review is trimmed and the fragments are
/// concatenated directly. Reviews with no text are skipped.
#[must_use]
pub fn extract_reviews(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    document
        .select(&REVIEW_BODY)
        .map(|element| element.text().map(str::trim).collect::<String>())
        .filter(|review| !review.is_empty())
        .collect()
}

#[must_use]
pub fn join_reviews(reviews: &[String]) -> String {
    reviews.join(" ")
}
