use super::{Category, TransformRegistry, TransformResult};
use crate::constants::defaults;
use crate::error::Error;
use crate::params::Params;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

fn parse(transform: &str, text: &str) -> Result<Value, Error> {
    serde_json::from_str(text).map_err(|e| Error::malformed(transform, e))
}

/// Pretty prints a JSON document indenting nested values by `indent` spaces.
/// Key order is preserved.
///
/// # Examples
///
/// ```
/// use textkit::transforms::json::json_format;
///
/// let pretty = json_format(r#"{"b":1,"a":[true,null]}"#, 2).unwrap();
/// assert_eq!(pretty, "{\n  \"b\": 1,\n  \"a\": [\n    true,\n    null\n  ]\n}");
/// ```
pub fn json_format(text: &str, indent: u8) -> TransformResult {
    let value = parse("json-format", text)?;
    let indent = vec![b' '; indent as usize];
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(&indent));
    value.serialize(&mut serializer)?;
    String::from_utf8(buffer).map_err(|e| Error::malformed("json-format", e))
}

pub fn json_minify(text: &str) -> TransformResult {
    let value = parse("json-minify", text)?;
    Ok(serde_json::to_string(&value)?)
}

/// Checks the text is a JSON document
pub fn json_validate(text: &str) -> TransformResult {
    parse("json-validate", text).map(|_| "valid JSON".to_string())
}

pub(crate) fn register(registry: &mut TransformRegistry) {
    registry.register(
        "json-format",
        Category::Json,
        "Pretty print JSON with `indent` spaces (default 2)",
        |text: &str, params: &Params| -> TransformResult {
            json_format(text, params.get_number::<u8>("indent", defaults::JSON_INDENT))
        },
    );
    registry.register(
        "json-minify",
        Category::Json,
        "Remove insignificant whitespace from JSON",
        |text: &str, _: &Params| -> TransformResult { json_minify(text) },
    );
    registry.register(
        "json-validate",
        Category::Json,
        "Check the text is valid JSON",
        |text: &str, _: &Params| -> TransformResult { json_validate(text) },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_indent() {
        assert_eq!(json_format("[1]", 4).unwrap(), "[\n    1\n]");
        assert_eq!(json_format("[1]", 0).unwrap(), "[\n1\n]");
        assert_eq!(json_format("\"x\"", 2).unwrap(), "\"x\"");
    }

    #[test]
    fn test_minify() {
        assert_eq!(
            json_minify("{\n  \"z\": 1,\n  \"a\": [ 1, 2 ]\n}").unwrap(),
            r#"{"z":1,"a":[1,2]}"#
        );
    }

    #[test]
    fn test_validate() {
        assert_eq!(json_validate(" {\"ok\": true} ").unwrap(), "valid JSON");
        let err = json_validate("{\"ok\": }").unwrap_err();
        assert!(matches!(
            &err,
            Error::MalformedInput { transform, .. } if transform == "json-validate"
        ));
        assert!(err.to_string().starts_with("invalid input for json-validate: "));
    }

    #[test]
    fn test_malformed_input() {
        assert!(matches!(
            json_format("", 2),
            Err(Error::MalformedInput { .. })
        ));
        assert!(matches!(
            json_minify("{'single': 1}"),
            Err(Error::MalformedInput { .. })
        ));
    }

    #[test]
    fn test_indent_param() {
        let mut registry = TransformRegistry::new();
        register(&mut registry);
        let params = Params::from([("indent", "1")]);
        assert_eq!(
            registry.apply("json-format", "{\"a\":1}", &params).unwrap(),
            "{\n \"a\": 1\n}"
        );
        assert_eq!(
            registry.apply("json-format", "{\"a\":1}", &Params::new()).unwrap(),
            "{\n  \"a\": 1\n}"
        );
    }
}
