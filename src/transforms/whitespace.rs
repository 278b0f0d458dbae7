use super::{Category, TransformRegistry, TransformResult};
use crate::constants::defaults;
use crate::params::Params;
use crate::string_utils::graphemes;
use once_cell::sync::Lazy;
use regex::Regex;

// Horizontal whitespace only, line breaks are left alone
static HORIZONTAL_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\S\r\n]+").unwrap());
static COMMA: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\S\r\n]*,[^\S\r\n]*").unwrap());

/// Collapses every run of spaces and tabs into a single space and trims each line.
///
/// # Examples
///
/// ```
/// use textkit::transforms::whitespace::remove_extra_spaces;
///
/// assert_eq!(remove_extra_spaces("a   b    c"), "a b c");
/// assert_eq!(remove_extra_spaces("  one \t two \n three  "), "one two\nthree");
/// ```
pub fn remove_extra_spaces(text: &str) -> String {
    text.split('\n')
        .map(|line| HORIZONTAL_SPACE.replace_all(line, " ").trim().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drops every whitespace character except line breaks
pub fn remove_all_spaces(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace() || *c == '\n' || *c == '\r')
        .collect()
}

/// Joins all the non blank lines with a single space
pub fn remove_line_breaks(text: &str) -> String {
    text.lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn remove_empty_lines(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn trim_lines(text: &str) -> String {
    text.lines().map(str::trim).collect::<Vec<_>>().join("\n")
}

/// Replaces every line break with a comma.
///
/// # Examples
///
/// ```
/// use textkit::transforms::whitespace::newline_to_comma;
///
/// assert_eq!(newline_to_comma("a\nb\nc"), "a,b,c");
/// assert_eq!(newline_to_comma("a\r\nb"), "a,b");
/// ```
pub fn newline_to_comma(text: &str) -> String {
    text.replace("\r\n", ",").replace('\n', ",")
}

/// Replaces every comma (and the spaces around it) with a line break
pub fn comma_to_newline(text: &str) -> String {
    COMMA.replace_all(text, "\n").into_owned()
}

/// Inserts `count` spaces between the characters of each line
pub fn add_spaces(text: &str, count: u8) -> String {
    let separator = " ".repeat(count as usize);
    text.split('\n')
        .map(|line| graphemes(line).join(&separator))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn tabs_to_spaces(text: &str, width: u8) -> String {
    text.replace('\t', &" ".repeat(width as usize))
}

pub(crate) fn register(registry: &mut TransformRegistry) {
    registry.register(
        "remove-extra-spaces",
        Category::Whitespace,
        "Collapse repeated spaces and trim lines",
        |text: &str, _: &Params| -> TransformResult { Ok(remove_extra_spaces(text)) },
    );
    registry.register(
        "remove-all-spaces",
        Category::Whitespace,
        "Remove spaces and tabs, keeping line breaks",
        |text: &str, _: &Params| -> TransformResult { Ok(remove_all_spaces(text)) },
    );
    registry.register(
        "remove-line-breaks",
        Category::Whitespace,
        "Join all lines into a single one",
        |text: &str, _: &Params| -> TransformResult { Ok(remove_line_breaks(text)) },
    );
    registry.register(
        "remove-empty-lines",
        Category::Whitespace,
        "Remove blank lines",
        |text: &str, _: &Params| -> TransformResult { Ok(remove_empty_lines(text)) },
    );
    registry.register(
        "trim-lines",
        Category::Whitespace,
        "Trim leading and trailing spaces of every line",
        |text: &str, _: &Params| -> TransformResult { Ok(trim_lines(text)) },
    );
    registry.register(
        "newline-to-comma",
        Category::Whitespace,
        "Replace line breaks with commas",
        |text: &str, _: &Params| -> TransformResult { Ok(newline_to_comma(text)) },
    );
    registry.register(
        "comma-to-newline",
        Category::Whitespace,
        "Replace commas with line breaks",
        |text: &str, _: &Params| -> TransformResult { Ok(comma_to_newline(text)) },
    );
    registry.register(
        "add-spaces",
        Category::Whitespace,
        "Insert `count` spaces between characters (default 1)",
        |text: &str, params: &Params| -> TransformResult {
            Ok(add_spaces(text, params.get_number::<u8>("count", 1)))
        },
    );
    registry.register(
        "tabs-to-spaces",
        Category::Whitespace,
        "Expand tabs to `width` spaces (default 4)",
        |text: &str, params: &Params| -> TransformResult {
            Ok(tabs_to_spaces(
                text,
                params.get_number::<u8>("width", defaults::TAB_WIDTH),
            ))
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_extra_spaces() {
        assert_eq!(remove_extra_spaces("a   b    c"), "a b c");
        assert_eq!(remove_extra_spaces("\ta\t\tb "), "a b");
        assert_eq!(remove_extra_spaces("line  1\n\nline   2"), "line 1\n\nline 2");
        assert_eq!(remove_extra_spaces(""), "");
    }

    #[test]
    fn test_remove_all_spaces() {
        assert_eq!(remove_all_spaces(" a b\tc \nd e"), "abc\nde");
    }

    #[test]
    fn test_line_breaks() {
        assert_eq!(remove_line_breaks("a\nb\r\n\nc\n"), "a b c");
        assert_eq!(remove_empty_lines("a\n\n  \nb\n"), "a\nb");
        assert_eq!(trim_lines("  a  \n\tb"), "a\nb");
    }

    #[test]
    fn test_commas() {
        assert_eq!(newline_to_comma("a\nb\nc"), "a,b,c");
        assert_eq!(newline_to_comma("a\nb\n"), "a,b,");
        assert_eq!(comma_to_newline("a, b ,c"), "a\nb\nc");
        assert_eq!(comma_to_newline(&newline_to_comma("x\ny")), "x\ny");
    }

    #[test]
    fn test_add_spaces() {
        assert_eq!(add_spaces("abc", 1), "a b c");
        assert_eq!(add_spaces("ab\ncd", 2), "a  b\nc  d");
        assert_eq!(add_spaces("abc", 0), "abc");
        assert_eq!(add_spaces("", 3), "");
    }

    #[test]
    fn test_add_spaces_param_is_clamped() {
        let mut registry = TransformRegistry::new();
        register(&mut registry);
        let params = Params::from([("count", "-4")]);
        assert_eq!(registry.apply("add-spaces", "ab", &params).unwrap(), "ab");
        let params = Params::from([("count", "many")]);
        assert_eq!(registry.apply("add-spaces", "ab", &params).unwrap(), "a b");
    }

    #[test]
    fn test_tabs_to_spaces() {
        assert_eq!(tabs_to_spaces("\tx", 2), "  x");
        assert_eq!(tabs_to_spaces("a\tb", 0), "ab");
    }
}
