//! Summarization model client
//!
//! Encapsulates all calls to the hosted summarization model.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use std::time::Duration;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, info, warn};

use crate::core::config::AppConfig;
use crate::core::models::{GenerationParams, SummaryOutput};
use crate::errors::ReviewError;

const MAX_RETRIES: usize = 3;

/// Anything that can turn a block of text into one or more summaries.
///
/// Implementations are expected to be expensive to build and cheap to call,
/// so a single instance is shared across requests.
#[async_trait]
pub trait SummarizationModel: Send + Sync {
    /// # Errors
    ///
    /// Returns an error when the model could not produce a summary.
    async fn summarize(
        &self,
        text: &str,
        params: &GenerationParams,
    ) -> Result<Vec<SummaryOutput>, ReviewError>;
}

/// Client for a Hugging Face style inference endpoint.
pub struct InferenceClient {
    http: Client,
    endpoint: String,
    api_token: Option<String>,
}

impl InferenceClient {
    /// # Errors
    ///
    /// Returns `ReviewError::Config` if the HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, ReviewError> {
        let http = Client::builder()
            .timeout(config.model_timeout)
            .build()
            .map_err(|e| ReviewError::Config(format!("Failed to build model HTTP client: {e}")))?;

        Ok(Self {
            http,
            endpoint: model_endpoint(&config.inference_url, &config.model),
            api_token: config.api_token.clone(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn request_once(
        &self,
        body: &Value,
    ) -> Result<Vec<SummaryOutput>, ReviewError> {
        let mut request = self.http.post(&self.endpoint).json(body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() || e.is_connect() {
                ReviewError::Unavailable(format!("Model request failed: {e}"))
            } else {
                ReviewError::Summarization(format!("Model request failed: {e}"))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            let message = format!("Model API error (status {status}): {error_text}");
            return Err(if is_retryable_status(status) {
                ReviewError::Unavailable(message)
            } else {
                ReviewError::Summarization(message)
            });
        }

        let response_json: Value = response.json().await.map_err(|e| {
            ReviewError::Summarization(format!("Failed to parse model response: {e}"))
        })?;

        parse_summary_response(&response_json)
    }
}

#[async_trait]
impl SummarizationModel for InferenceClient {
    async fn summarize(
        &self,
        text: &str,
        params: &GenerationParams,
    ) -> Result<Vec<SummaryOutput>, ReviewError> {
        #[cfg(feature = "debug-logs")]
        debug!("Summarizing chunk:\n{}", text);

        info!(
            endpoint = %self.endpoint,
            bytes = text.len(),
            "Requesting summary from model"
        );

        let body = build_request_body(text, params);

        let strategy = ExponentialBackoff::from_millis(2)
            .factor(100)
            .max_delay(Duration::from_secs(10))
            .map(jitter)
            .take(MAX_RETRIES);

        RetryIf::spawn(
            strategy,
            || self.request_once(&body),
            |e: &ReviewError| {
                let retry = e.is_transient();
                if retry {
                    warn!("Retrying model call after transient failure: {}", e);
                }
                retry
            },
        )
        .await
        .map_err(ReviewError::into_summarization)
    }
}

/// Joins a base URL and model id into the inference endpoint.
#[must_use]
pub fn model_endpoint(base_url: &str, model: &str) -> String {
    format!(
        "{}/models/{}",
        base_url.trim_end_matches('/'),
        model.trim_matches('/')
    )
}

#[must_use]
pub fn build_request_body(text: &str, params: &GenerationParams) -> Value {
    json!({
        "inputs": text,
        "parameters": {
            "max_length": params.max_length,
            "min_length": params.min_length,
            "do_sample": params.do_sample
        }
    })
}

fn is_retryable_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

/// Reads the summaries out of a model response.
///
/// The service answers with a list of `{"summary_text": ...}` objects, or
/// with an `{"error": ...}` object; a still-loading model additionally
/// reports an `estimated_time` and is treated as transient.
///
/// # Errors
///
/// Returns an error if the response reports one or has an unexpected shape.
pub fn parse_summary_response(response_json: &Value) -> Result<Vec<SummaryOutput>, ReviewError> {
    if let Some(error) = response_json.get("error") {
        let message = error
            .as_str()
            .map_or_else(|| error.to_string(), std::string::ToString::to_string);
        if let Some(wait) = response_json.get("estimated_time").and_then(Value::as_f64) {
            return Err(ReviewError::Unavailable(format!(
                "{message} (estimated wait {wait:.1}s)"
            )));
        }
        return Err(ReviewError::Summarization(message));
    }

    let Some(items) = response_json.as_array() else {
        return Err(ReviewError::Summarization(format!(
            "Unexpected model response shape: {response_json}"
        )));
    };

    let outputs: Vec<SummaryOutput> = items
        .iter()
        .filter_map(|item| {
            item.get("summary_text")
                .and_then(Value::as_str)
                .map(|s| SummaryOutput {
                    summary_text: s.to_string(),
                })
        })
        .collect();

    debug!("Model returned {} summaries", outputs.len());

    if outputs.is_empty() && !items.is_empty() {
        return Err(ReviewError::Summarization(
            "No summary_text in model response".to_string(),
        ));
    }

    Ok(outputs)
}
