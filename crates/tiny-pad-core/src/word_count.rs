//! Word counting for the "Word Count" popup.

use std::sync::LazyLock;

use regex::Regex;

/// Any single non-word character acts as a separator.
static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w]").expect("separator pattern is valid"));

/// Label shown before any count has been requested.
pub const INITIAL_LABEL: &str = "Count of words : 0";

/// Counts words by splitting on non-word characters.
///
/// Every token produced by the split counts as one word, minus one for each
/// empty token, so runs of separators and leading/trailing punctuation
/// contribute nothing.
pub fn count_words(text: &str) -> usize {
    SEPARATOR
        .split(text)
        .filter(|token| !token.is_empty())
        .count()
}

/// Formats a count the way the popup displays it.
pub fn format_word_count(count: usize) -> String {
    format!("Count of words : {count}")
}
