use super::{Category, TransformRegistry, TransformResult};
use crate::params::Params;
use crate::string_utils::graphemes;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());
static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(?i)\bhttps?://[^\s<>"'()]+"#).unwrap());
static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"-?\d+(?:\.\d+)?").unwrap());
static SENTENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^.!?\s][^.!?]*(?:[.!?]+|$)").unwrap());

fn matches_per_line(pattern: &Regex, text: &str) -> String {
    pattern
        .find_iter(text)
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn extract_emails(text: &str) -> String {
    matches_per_line(&EMAIL, text)
}

/// Extracts http(s) URLs, dropping sentence punctuation glued to their end
pub fn extract_urls(text: &str) -> String {
    URL.find_iter(text)
        .map(|m| m.as_str().trim_end_matches(['.', ',', ';', ':', '!', '?']))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn extract_numbers(text: &str) -> String {
    matches_per_line(&NUMBER, text)
}

/// Summarizes the text: characters, words, lines and sentences.
///
/// # Examples
///
/// ```
/// use textkit::transforms::extract::word_count;
///
/// assert_eq!(
///     word_count("Hello world. How are you?"),
///     "Characters: 25\nWords: 5\nLines: 1\nSentences: 2"
/// );
/// ```
pub fn word_count(text: &str) -> String {
    format!(
        "Characters: {}\nWords: {}\nLines: {}\nSentences: {}",
        graphemes(text).len(),
        text.split_whitespace().count(),
        text.lines().count(),
        SENTENCE.find_iter(text).count()
    )
}

pub(crate) fn register(registry: &mut TransformRegistry) {
    registry.register(
        "extract-emails",
        Category::Extraction,
        "List the email addresses found in the text",
        |text: &str, _: &Params| -> TransformResult { Ok(extract_emails(text)) },
    );
    registry.register(
        "extract-urls",
        Category::Extraction,
        "List the http(s) URLs found in the text",
        |text: &str, _: &Params| -> TransformResult { Ok(extract_urls(text)) },
    );
    registry.register(
        "extract-numbers",
        Category::Extraction,
        "List the numbers found in the text",
        |text: &str, _: &Params| -> TransformResult { Ok(extract_numbers(text)) },
    );
    registry.register(
        "word-count",
        Category::Extraction,
        "Count characters, words, lines and sentences",
        |text: &str, _: &Params| -> TransformResult { Ok(word_count(text)) },
    );
}
