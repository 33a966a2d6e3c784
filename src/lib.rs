//! SmartShop - summarizes the customer reviews on a product page.
//!
//! The crate fetches a product page, scrapes its review bodies, and condenses
//! them with a pretrained summarization model:
//! 1. `scrape` pulls the review text out of the page
//! 2. `utils::chunking` splits long text into word-bounded chunks
//! 3. `ai` summarizes each chunk and joins the results in order
//!
//! # Architecture
//!
//! The system uses:
//! - reqwest for page fetches and model calls
//! - scraper for review extraction
//! - a Hugging Face style inference endpoint (`facebook/bart-large-cnn` by default)
//! - AWS Lambda (feature `api`) or a CLI as the front end
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use smartshop::SmartShop;
//! use smartshop::core::config::AppConfig;
//! use smartshop::core::models::SummarizeResult;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Set up structured logging
//!     smartshop::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let app = SmartShop::new(&config)?;
//!
//!     match app.summarize_url("https://www.example.com/dp/B000000000").await? {
//!         SummarizeResult::Summary(summary) => println!("Summary: {}", summary),
//!         SummarizeResult::NoReviews => println!("No reviews to summarize"),
//!     }
//!
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod ai;
pub mod api;
pub mod app;
pub mod core;
pub mod errors;
pub mod scrape;
pub mod utils;
pub mod worker;

pub use app::SmartShop;
pub use errors::ReviewError;

/// Configure structured JSON logging.
///
/// Output goes to stderr so it never mixes with a summary printed on stdout.
/// The level comes from `RUST_LOG` and defaults to `info`.
///
/// # Example
///
/// ```
/// smartshop::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
