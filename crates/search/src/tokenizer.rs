//! Basic tokenizer
//!
//! This module provides the single normalization rule shared by index
//! construction and query processing.

/// Tokenize text into index terms
///
/// - Lowercase
/// - Every character outside `[a-z0-9]` and whitespace becomes a space
/// - Split on whitespace runs, discarding empty strings
///
/// Single-character terms are kept. Non-ASCII letters are treated as
/// punctuation and stripped; internationalized titles would need a wider
/// character class here.
///
/// # Example
///
/// ```
/// use probdex_search::tokenizer::tokenize;
///
/// let tokens = tokenize("Best Time to Buy & Sell Stock II");
/// assert_eq!(tokens, vec!["best", "time", "to", "buy", "sell", "stock", "ii"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .map(String::from)
        .collect()
}
