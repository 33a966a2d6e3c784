use std::env;
use std::str::FromStr;
use std::time::Duration;

use super::models::DEFAULT_MODEL;
use crate::errors::ReviewError;

pub const DEFAULT_INFERENCE_URL: &str = "https://api-inference.huggingface.co";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) \
    Chrome/90.0.4430.93 Safari/537.36";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub inference_url: String,
    pub model: String,
    pub api_token: Option<String>,
    pub user_agent: String,
    pub http_timeout: Duration,
    pub model_timeout: Duration,
    pub chunk_concurrency: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            inference_url: DEFAULT_INFERENCE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_token: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            http_timeout: Duration::from_secs(30),
            model_timeout: Duration::from_secs(120),
            chunk_concurrency: 1,
        }
    }
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns `ReviewError::Config` when a numeric variable is set but does
    /// not parse, or when the chunk concurrency is zero.
    pub fn from_env() -> Result<Self, ReviewError> {
        let defaults = Self::default();

        let config = Self {
            inference_url: env::var("SMARTSHOP_INFERENCE_URL")
                .unwrap_or(defaults.inference_url),
            model: env::var("SMARTSHOP_MODEL").unwrap_or(defaults.model),
            api_token: env::var("HF_API_TOKEN").ok().filter(|t| !t.trim().is_empty()),
            user_agent: env::var("SMARTSHOP_USER_AGENT").unwrap_or(defaults.user_agent),
            http_timeout: parse_var::<u64>("SMARTSHOP_HTTP_TIMEOUT_SECS")?
                .map_or(defaults.http_timeout, Duration::from_secs),
            model_timeout: parse_var::<u64>("SMARTSHOP_MODEL_TIMEOUT_SECS")?
                .map_or(defaults.model_timeout, Duration::from_secs),
            chunk_concurrency: parse_var::<usize>("SMARTSHOP_CHUNK_CONCURRENCY")?
                .unwrap_or(defaults.chunk_concurrency),
        };

        if config.chunk_concurrency == 0 {
            return Err(ReviewError::Config(
                "SMARTSHOP_CHUNK_CONCURRENCY: must be at least 1".to_string(),
            ));
        }

        Ok(config)
    }
}

fn parse_var<T>(name: &str) -> Result<Option<T>, ReviewError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ReviewError::Config(format!("{name}: {e}"))),
        Err(_) => Ok(None),
    }
}
