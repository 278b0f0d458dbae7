use console::measure_text_width;
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

// Case transitions inside identifiers (fooBar, HTTPServer, v2Beta)
static CASE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([\p{Ll}\p{Nd}])(\p{Lu})|(\p{Lu})(\p{Lu}\p{Ll})").unwrap());

/// Pads the text with spaces up to the given visual width.
/// Text already wider than the target is returned unchanged.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let current = measure_text_width(text);
    format!("{}{}", text, " ".repeat(width.saturating_sub(current)))
}

/// Splits the text into its grapheme clusters (user-perceived characters).
pub fn graphemes(text: &str) -> Vec<&str> {
    text.graphemes(true).collect()
}

/// Splits the text into the words used by the case conversions.
/// Words are separated by any non-alphanumeric character and by
/// lower-to-upper case transitions (`fooBar` -> `foo`, `Bar`).
///
/// # Examples
///
/// ```
/// use textkit::string_utils::split_words;
///
/// assert_eq!(split_words("helloWorld foo_bar"), vec!["hello", "World", "foo", "bar"]);
/// assert_eq!(split_words("HTTPServer"), vec!["HTTP", "Server"]);
/// ```
pub fn split_words(text: &str) -> Vec<String> {
    let separated = CASE_BOUNDARY.replace_all(text, "$1$3 $2$4");
    separated
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(String::from)
        .collect()
}

/// Uppercases the first character of the word and lowercases the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
    }
}
