use crate::errors::ReviewError;

/// Number of whitespace-separated words in `text`.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Splits `text` into chunks of at most `max_words` words.
///
/// Every chunk holds exactly `max_words` words except the last, which holds
/// the remainder. Words inside a chunk are joined by a single space, so any
/// run of whitespace in the input collapses. Blank input yields no chunks.
///
/// # Errors
///
/// Returns `ReviewError::InvalidChunkSize` when `max_words` is zero.
pub fn chunk_text(text: &str, max_words: usize) -> Result<Vec<String>, ReviewError> {
    if max_words == 0 {
        return Err(ReviewError::InvalidChunkSize(max_words));
    }

    let words: Vec<&str> = text.split_whitespace().collect();

    Ok(words.chunks(max_words).map(|group| group.join(" ")).collect())
}
