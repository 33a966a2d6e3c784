//! Product page scraping

pub mod reviews;

pub use reviews::{ReviewFetcher, ReviewSource, extract_reviews};
