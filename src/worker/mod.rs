//! Fetch-then-summarize pipeline

pub mod summarize;

pub use summarize::summarize_product;

/// Shown when a page could be fetched but held no review text.
pub const NO_REVIEWS_MESSAGE: &str = "No reviews found or an error occurred.";
