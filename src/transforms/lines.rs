use super::random::RandomTransform;
use super::{Category, TransformRegistry, TransformResult};
use crate::params::Params;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use std::collections::HashSet;

/// Sorts the lines of the text.
///
/// # Arguments
/// * `reverse` - Sort in descending order
/// * `ignore_case` - Compare lines ignoring case. Lines equal but for case keep their relative order.
pub fn sort_lines(text: &str, reverse: bool, ignore_case: bool) -> String {
    let mut lines: Vec<&str> = text.lines().collect();
    if ignore_case {
        lines.sort_by_cached_key(|line| line.to_lowercase());
    } else {
        lines.sort();
    }
    if reverse {
        lines.reverse();
    }
    lines.join("\n")
}

/// Removes repeated lines keeping the first occurrence
pub fn dedupe_lines(text: &str) -> String {
    let mut seen = HashSet::new();
    text.lines()
        .filter(|line| seen.insert(*line))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn reverse_lines(text: &str) -> String {
    text.lines().rev().collect::<Vec<_>>().join("\n")
}

/// Prefixes every line with its number, starting at `start`.
/// Numbers saturate at `i64::MAX`.
pub fn number_lines(text: &str, start: i64) -> String {
    text.lines()
        .zip(0i64..)
        .map(|(line, i)| format!("{}. {}", start.saturating_add(i), line))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn shuffle_lines<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    let mut lines: Vec<&str> = text.lines().collect();
    lines.shuffle(rng);
    lines.join("\n")
}

/// Rotates the characters of the text to the left by `amount` positions.
/// Negative amounts rotate to the right. Empty text is returned as is.
///
/// # Examples
///
/// ```
/// use textkit::transforms::lines::rotate_text;
///
/// assert_eq!(rotate_text("abcdef", 2), "cdefab");
/// assert_eq!(rotate_text("abcdef", -1), "fabcde");
/// assert_eq!(rotate_text("", 3), "");
/// ```
pub fn rotate_text(text: &str, amount: i64) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    let pivot = amount.rem_euclid(chars.len() as i64) as usize;
    chars[pivot..].iter().chain(&chars[..pivot]).collect()
}

fn shuffle_transform(text: &str, _: &Params, rng: &mut dyn RngCore) -> TransformResult {
    Ok(shuffle_lines(text, rng))
}

pub(crate) fn register(registry: &mut TransformRegistry) {
    registry.register(
        "sort-lines",
        Category::Lines,
        "Sort lines alphabetically (flags `reverse`, `ignore_case`)",
        |text: &str, params: &Params| -> TransformResult {
            Ok(sort_lines(
                text,
                params.is_active("reverse"),
                params.is_active("ignore_case"),
            ))
        },
    );
    registry.register(
        "dedupe-lines",
        Category::Lines,
        "Remove duplicated lines",
        |text: &str, _: &Params| -> TransformResult { Ok(dedupe_lines(text)) },
    );
    registry.register(
        "reverse-lines",
        Category::Lines,
        "Reverse the order of the lines",
        |text: &str, _: &Params| -> TransformResult { Ok(reverse_lines(text)) },
    );
    registry.register(
        "number-lines",
        Category::Lines,
        "Number every line starting at `start` (default 1)",
        |text: &str, params: &Params| -> TransformResult {
            Ok(number_lines(text, params.get_number::<i64>("start", 1)))
        },
    );
    registry.register(
        "shuffle-lines",
        Category::Lines,
        "Shuffle the lines randomly",
        RandomTransform::from_entropy(shuffle_transform),
    );
    registry.register(
        "rotate-text",
        Category::Lines,
        "Rotate characters left by `amount` positions",
        |text: &str, params: &Params| -> TransformResult {
            Ok(rotate_text(text, params.get_number::<i64>("amount", 0)))
        },
    );
}
