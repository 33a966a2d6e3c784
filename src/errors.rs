use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("Error fetching page: {0}")]
    Acquisition(String),

    #[error("Chunk size must be a positive number of words, got {0}")]
    InvalidChunkSize(usize),

    #[error("Failed to access summarization model: {0}")]
    Summarization(String),

    /// A failure that may go away on retry (timeouts, 5xx, rate limits).
    #[error("Service temporarily unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ReviewError {
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, ReviewError::Unavailable(_))
    }

    /// Collapses a retry-exhausted `Unavailable` into a fetch failure.
    #[must_use]
    pub fn into_acquisition(self) -> Self {
        match self {
            ReviewError::Unavailable(msg) => ReviewError::Acquisition(msg),
            other => other,
        }
    }

    /// Collapses a retry-exhausted `Unavailable` into a model failure.
    #[must_use]
    pub fn into_summarization(self) -> Self {
        match self {
            ReviewError::Unavailable(msg) => ReviewError::Summarization(msg),
            other => other,
        }
    }
}

impl From<reqwest::Error> for ReviewError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() || error.is_connect() {
            ReviewError::Unavailable(error.to_string())
        } else {
            ReviewError::Acquisition(error.to_string())
        }
    }
}

impl From<anyhow::Error> for ReviewError {
    fn from(error: anyhow::Error) -> Self {
        ReviewError::Acquisition(error.to_string())
    }
}
