use super::{Category, TransformRegistry, TransformResult};
use crate::params::Params;
use crate::string_utils::{capitalize, split_words};

pub fn uppercase(text: &str) -> String {
    text.to_uppercase()
}

pub fn lowercase(text: &str) -> String {
    text.to_lowercase()
}

/// Swaps the case of every letter
pub fn inverse_case(text: &str) -> String {
    text.chars()
        .flat_map(|c| {
            if c.is_uppercase() {
                c.to_lowercase().collect::<Vec<_>>()
            } else {
                c.to_uppercase().collect::<Vec<_>>()
            }
        })
        .collect()
}

/// Alternates lower and upper case letters, starting with lower case.
/// Characters that are not letters keep the alternation where it was.
pub fn alternating_case(text: &str) -> String {
    let mut upper = false;
    text.chars()
        .flat_map(|c| {
            if !c.is_alphabetic() {
                return vec![c];
            }
            let converted: Vec<char> = if upper {
                c.to_uppercase().collect()
            } else {
                c.to_lowercase().collect()
            };
            upper = !upper;
            converted
        })
        .collect()
}

/// Capitalizes every whitespace separated word, keeping the original spacing
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Lowercases the text and capitalizes the first letter of each sentence
///
/// # Examples
///
/// ```
/// use textkit::transforms::case::sentence_case;
///
/// assert_eq!(sentence_case("HELLO THERE. how ARE you? fine!"), "Hello there. How are you? Fine!");
/// ```
pub fn sentence_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut capitalize_next = true;
    for c in text.chars() {
        if capitalize_next && c.is_alphanumeric() {
            out.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            out.extend(c.to_lowercase());
        }
        if matches!(c, '.' | '!' | '?') {
            capitalize_next = true;
        }
    }
    out
}

pub fn camel_case(text: &str) -> String {
    split_words(text)
        .iter()
        .enumerate()
        .map(|(i, w)| if i == 0 { w.to_lowercase() } else { capitalize(w) })
        .collect()
}

pub fn pascal_case(text: &str) -> String {
    split_words(text).iter().map(|w| capitalize(w)).collect()
}

pub fn snake_case(text: &str) -> String {
    join_lowercase(text, "_")
}

pub fn kebab_case(text: &str) -> String {
    join_lowercase(text, "-")
}

fn join_lowercase(text: &str, separator: &str) -> String {
    split_words(text)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

pub(crate) fn register(registry: &mut TransformRegistry) {
    let simple: [(&'static str, &'static str, fn(&str) -> String); 10] = [
        ("uppercase", "Convert to UPPER CASE", uppercase),
        ("lowercase", "Convert to lower case", lowercase),
        ("inverse-case", "Swap the case of every letter", inverse_case),
        ("alternating-case", "Alternate lower and upper case letters", alternating_case),
        ("title-case", "Capitalize Every Word", title_case),
        ("sentence-case", "Capitalize the first letter of each sentence", sentence_case),
        ("camel-case", "Convert to camelCase", camel_case),
        ("pascal-case", "Convert to PascalCase", pascal_case),
        ("snake-case", "Convert to snake_case", snake_case),
        ("kebab-case", "Convert to kebab-case", kebab_case),
    ];

    for (name, summary, convert) in simple {
        registry.register(
            name,
            Category::Case,
            summary,
            move |text: &str, _: &Params| -> TransformResult { Ok(convert(text)) },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_cases() {
        assert_eq!(uppercase("straße"), "STRASSE");
        assert_eq!(lowercase("ÀB"), "àb");
        assert_eq!(inverse_case("Hello World"), "hELLO wORLD");
    }

    #[test]
    fn test_alternating_case() {
        assert_eq!(alternating_case("hello world"), "hElLo WoRlD");
        assert_eq!(alternating_case("a-b"), "a-B");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("the QUICK  brown fox"), "The Quick  Brown Fox");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_sentence_case() {
        assert_eq!(sentence_case("one. two"), "One. Two");
        assert_eq!(sentence_case("  1ST PLACE"), "  1st place");
    }

    #[test]
    fn test_identifier_cases() {
        assert_eq!(camel_case("Hello big World"), "helloBigWorld");
        assert_eq!(camel_case("user_id"), "userId");
        assert_eq!(pascal_case("parse http request"), "ParseHttpRequest");
        assert_eq!(snake_case("HTTPServer error"), "http_server_error");
        assert_eq!(kebab_case("someValue-here"), "some-value-here");
        assert_eq!(snake_case("  "), "");
    }

    #[test]
    fn test_registered() {
        let mut registry = TransformRegistry::new();
        register(&mut registry);
        assert_eq!(registry.len(), 10);
        assert_eq!(
            registry.apply("kebab-case", "Hello World", &Params::new()).unwrap(),
            "hello-world"
        );
    }
}
