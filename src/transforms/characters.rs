use super::{Category, TransformRegistry, TransformResult};
use crate::constants::defaults;
use crate::error::Error;
use crate::params::Params;
use crate::string_utils::graphemes;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::UnicodeNormalization;

static UPSIDE_DOWN: Lazy<HashMap<char, char>> = Lazy::new(|| {
    let from = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789.,'?!()[]{}<>_&;\"";
    let to = "ɐqɔpǝɟƃɥᴉɾʞlɯuodbɹsʇnʌʍxʎz∀ᗺƆᗡƎℲ⅁HIſʞ˥WNOԀΌᴚS⊥∩ΛMX⅄Z0ƖᄅƐㄣϛ9ㄥ86˙',¿¡)(][}{><‾⅋؛„";
    from.chars()
        .zip(to.chars())
        .collect()
});

fn is_punctuation(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
    )
}

/// Strips accents and other combining marks from letters.
///
/// # Examples
///
/// ```
/// use textkit::transforms::characters::remove_diacritics;
///
/// assert_eq!(remove_diacritics("café"), "cafe");
/// assert_eq!(remove_diacritics("Ångström über"), "Angstrom uber");
/// ```
pub fn remove_diacritics(text: &str) -> String {
    text.nfd()
        .filter(|c| get_general_category(*c) != GeneralCategory::NonspacingMark)
        .nfc()
        .collect()
}

/// Reverses the text by user-perceived character, so combined glyphs stay intact
pub fn reverse_text(text: &str) -> String {
    graphemes(text).into_iter().rev().collect()
}

/// Reverses the order of the words on every line
pub fn reverse_words(text: &str) -> String {
    text.lines()
        .map(|line| line.split_whitespace().rev().collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn remove_punctuation(text: &str) -> String {
    text.chars().filter(|c| !is_punctuation(*c)).collect()
}

pub fn remove_non_ascii(text: &str) -> String {
    text.chars().filter(char::is_ascii).collect()
}

/// Flips the text upside down: every character with a rotated look-alike is
/// replaced and the whole text is reversed.
pub fn upside_down(text: &str) -> String {
    graphemes(text)
        .into_iter()
        .rev()
        .map(|g| {
            let mut chars = g.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => UPSIDE_DOWN
                    .get(&c)
                    .map_or_else(|| g.to_string(), |flipped| flipped.to_string()),
                _ => g.to_string(),
            }
        })
        .collect()
}

pub fn replace_spaces(text: &str, replacement: &str) -> String {
    text.replace(' ', replacement)
}

/// Replaces every occurrence of `find` with `replace`.
///
/// When `use_regex` is set, `find` is a regular expression and `replace` may
/// refer to capture groups (`$1`, `${name}`). An empty `find` leaves the text unchanged.
///
/// # Errors
/// `InvalidParameter` if `find` is not a valid regular expression.
pub fn find_replace(text: &str, find: &str, replace: &str, use_regex: bool) -> TransformResult {
    if find.is_empty() {
        return Ok(text.to_string());
    }
    if use_regex {
        let pattern = Regex::new(find).map_err(|e| Error::invalid_param("find", e))?;
        Ok(pattern.replace_all(text, replace).into_owned())
    } else {
        Ok(text.replace(find, replace))
    }
}

pub(crate) fn register(registry: &mut TransformRegistry) {
    registry.register(
        "remove-diacritics",
        Category::Characters,
        "Strip accents from letters",
        |text: &str, _: &Params| -> TransformResult { Ok(remove_diacritics(text)) },
    );
    registry.register(
        "reverse-text",
        Category::Characters,
        "Reverse the characters of the text",
        |text: &str, _: &Params| -> TransformResult { Ok(reverse_text(text)) },
    );
    registry.register(
        "reverse-words",
        Category::Characters,
        "Reverse the order of the words on each line",
        |text: &str, _: &Params| -> TransformResult { Ok(reverse_words(text)) },
    );
    registry.register(
        "remove-punctuation",
        Category::Characters,
        "Remove punctuation marks",
        |text: &str, _: &Params| -> TransformResult { Ok(remove_punctuation(text)) },
    );
    registry.register(
        "remove-non-ascii",
        Category::Characters,
        "Remove characters outside ASCII",
        |text: &str, _: &Params| -> TransformResult { Ok(remove_non_ascii(text)) },
    );
    registry.register(
        "upside-down",
        Category::Characters,
        "Flip the text upside down",
        |text: &str, _: &Params| -> TransformResult { Ok(upside_down(text)) },
    );
    registry.register(
        "replace-spaces",
        Category::Characters,
        "Replace spaces with `replacement` (default _)",
        |text: &str, params: &Params| -> TransformResult {
            Ok(replace_spaces(
                text,
                params.get_or("replacement", defaults::SPACE_REPLACEMENT),
            ))
        },
    );
    registry.register(
        "find-replace",
        Category::Characters,
        "Replace `find` with `replace` (set `regex` for patterns)",
        |text: &str, params: &Params| -> TransformResult {
            find_replace(
                text,
                params.get_or("find", ""),
                params.get_or("replace", ""),
                params.is_active("regex"),
            )
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_diacritics() {
        assert_eq!(remove_diacritics("café"), "cafe");
        // Already decomposed input
        assert_eq!(remove_diacritics("cafe\u{301}"), "cafe");
        assert_eq!(remove_diacritics("São Paulo, Zürich, Kraków"), "Sao Paulo, Zurich, Krakow");
        assert_eq!(remove_diacritics("plain"), "plain");
    }

    #[test]
    fn test_reverse() {
        assert_eq!(reverse_text("abc"), "cba");
        assert_eq!(reverse_text("ae\u{301}z"), "ze\u{301}a");
        assert_eq!(reverse_text(""), "");
        assert_eq!(reverse_words("one two  three\nfour five"), "three two one\nfive four");
    }

    #[test]
    fn test_filters() {
        assert_eq!(remove_punctuation("Hello, world! ¿Qué? «ok»"), "Hello world Qué ok");
        assert_eq!(remove_non_ascii("naïve ☕ text"), "nave  text");
    }

    #[test]
    fn test_upside_down() {
        assert_eq!(upside_down("hello"), "ollǝɥ");
        assert_eq!(upside_down("Hi!"), "¡ᴉH");
        assert_eq!(upside_down("é"), "é");
    }

    #[test]
    fn test_upside_down_table_is_aligned() {
        assert_eq!(UPSIDE_DOWN.get(&'z'), Some(&'z'));
        assert_eq!(UPSIDE_DOWN.get(&'Z'), Some(&'Z'));
        assert_eq!(UPSIDE_DOWN.get(&'0'), Some(&'0'));
        assert_eq!(UPSIDE_DOWN.get(&'9'), Some(&'6'));
        assert_eq!(UPSIDE_DOWN.get(&'"'), Some(&'„'));
    }

    #[test]
    fn test_replace_spaces() {
        assert_eq!(replace_spaces("a b c", "_"), "a_b_c");
        assert_eq!(replace_spaces("a b", ""), "ab");
    }

    #[test]
    fn test_find_replace() {
        assert_eq!(find_replace("aaa", "a", "b", false).unwrap(), "bbb");
        assert_eq!(find_replace("a.c", ".", "-", false).unwrap(), "a-c");
        assert_eq!(find_replace("abc", "", "x", false).unwrap(), "abc");
        assert_eq!(
            find_replace("2024-01-31", r"(\d+)-(\d+)-(\d+)", "$3/$2/$1", true).unwrap(),
            "31/01/2024"
        );
        assert!(matches!(
            find_replace("abc", "(", "x", true),
            Err(Error::InvalidParameter { name, .. }) if name == "find"
        ));
    }

    #[test]
    fn test_find_replace_params() {
        let mut registry = TransformRegistry::new();
        register(&mut registry);
        let params = Params::from([("find", r"\s+"), ("replace", " "), ("regex", "true")]);
        assert_eq!(registry.apply("find-replace", "a \t b", &params).unwrap(), "a b");
    }
}
