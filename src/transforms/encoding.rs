//! Byte level encodings of UTF-8 text.
//!
//! Encoders never fail. Decoders reject anything that is not a valid
//! encoding, including payloads that do not decode to valid UTF-8.

use super::{Category, TransformRegistry, TransformResult};
use crate::error::Error;
use crate::params::Params;
use base64::Engine;
use std::fmt::Write;

/// Radix based byte encodings sharing the same tokenized layout
#[derive(Debug, Clone, Copy)]
enum ByteFormat {
    Hex,
    Binary,
    Octal,
    Decimal,
}

impl ByteFormat {
    fn radix(self) -> u32 {
        match self {
            ByteFormat::Hex => 16,
            ByteFormat::Binary => 2,
            ByteFormat::Octal => 8,
            ByteFormat::Decimal => 10,
        }
    }

    /// Number of digits used by each encoded byte. Decoding accepts shorter groups.
    fn width(self) -> usize {
        match self {
            ByteFormat::Hex => 2,
            ByteFormat::Binary => 8,
            ByteFormat::Octal | ByteFormat::Decimal => 3,
        }
    }

    fn decoder_name(self) -> &'static str {
        match self {
            ByteFormat::Hex => "hex-to-text",
            ByteFormat::Binary => "binary-to-text",
            ByteFormat::Octal => "octal-to-text",
            ByteFormat::Decimal => "decimal-to-text",
        }
    }

    fn encode(self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() * (self.width() + 1));
        for (i, byte) in text.bytes().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            // Writing into a String cannot fail
            match self {
                ByteFormat::Hex => write!(out, "{:02x}", byte),
                ByteFormat::Binary => write!(out, "{:08b}", byte),
                ByteFormat::Octal => write!(out, "{:03o}", byte),
                ByteFormat::Decimal => write!(out, "{}", byte),
            }
            .ok();
        }
        out
    }

    /// Splits a whitespace separated token into byte sized digit groups.
    /// Hex tokens are always read in pairs; binary tokens longer than a byte
    /// are read in groups of 8.
    fn groups<'a>(self, token: &'a str) -> Vec<&'a str> {
        let chunk = match self {
            ByteFormat::Hex => 2,
            ByteFormat::Binary if token.len() > 8 => 8,
            _ => token.len().max(1),
        };
        token
            .as_bytes()
            .chunks(chunk)
            .filter_map(|c| std::str::from_utf8(c).ok())
            .collect()
    }

    fn decode(self, text: &str) -> TransformResult {
        let name = self.decoder_name();
        let mut bytes = Vec::new();

        for raw in text.split_whitespace() {
            let token = match self {
                ByteFormat::Hex => raw
                    .strip_prefix("0x")
                    .or_else(|| raw.strip_prefix("0X"))
                    .unwrap_or(raw),
                _ => raw,
            };
            if let Some(bad) = token.chars().find(|c| !c.is_digit(self.radix())) {
                return Err(Error::malformed(
                    name,
                    format!("invalid digit '{}' in \"{}\"", bad, raw),
                ));
            }
            if matches!(self, ByteFormat::Hex) && token.len() % 2 != 0 {
                return Err(Error::malformed(
                    name,
                    format!("odd number of hex digits in \"{}\"", raw),
                ));
            }
            if matches!(self, ByteFormat::Binary) && token.len() > 8 && token.len() % 8 != 0 {
                return Err(Error::malformed(
                    name,
                    format!("\"{}\" is not a whole number of bytes", raw),
                ));
            }
            for group in self.groups(token) {
                let byte = u8::from_str_radix(group, self.radix()).map_err(|_| {
                    Error::malformed(name, format!("\"{}\" does not fit in a byte", group))
                })?;
                bytes.push(byte);
            }
        }

        String::from_utf8(bytes).map_err(|e| Error::malformed(name, e))
    }
}

/// Encodes the UTF-8 bytes of the text with the standard Base64 alphabet.
pub fn base64_encode(text: &str) -> String {
    base64::engine::general_purpose::STANDARD.encode(text)
}

/// Decodes standard (padded) Base64 into text.
///
/// # Examples
///
/// ```
/// use textkit::transforms::encoding::{base64_decode, base64_encode};
///
/// assert_eq!(base64_encode("textkit"), "dGV4dGtpdA==");
/// assert_eq!(base64_decode("dGV4dGtpdA==").unwrap(), "textkit");
/// assert!(base64_decode("not-valid-base64!!").is_err());
/// ```
pub fn base64_decode(text: &str) -> TransformResult {
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(text.trim())
        .map_err(|e| Error::malformed("base64-decode", e))?;
    String::from_utf8(bytes).map_err(|e| Error::malformed("base64-decode", e))
}

pub fn text_to_hex(text: &str) -> String {
    ByteFormat::Hex.encode(text)
}

pub fn hex_to_text(text: &str) -> TransformResult {
    ByteFormat::Hex.decode(text)
}

pub fn text_to_binary(text: &str) -> String {
    ByteFormat::Binary.encode(text)
}

pub fn binary_to_text(text: &str) -> TransformResult {
    ByteFormat::Binary.decode(text)
}

pub fn text_to_octal(text: &str) -> String {
    ByteFormat::Octal.encode(text)
}

pub fn octal_to_text(text: &str) -> TransformResult {
    ByteFormat::Octal.decode(text)
}

pub fn text_to_decimal(text: &str) -> String {
    ByteFormat::Decimal.encode(text)
}

pub fn decimal_to_text(text: &str) -> TransformResult {
    ByteFormat::Decimal.decode(text)
}

pub fn url_encode(text: &str) -> String {
    urlencoding::encode(text).into_owned()
}

pub fn url_decode(text: &str) -> TransformResult {
    urlencoding::decode(text)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| Error::malformed("url-decode", e))
}

/// Escapes `&`, `<`, `>`, `"` and `'`
pub fn escape_html(text: &str) -> String {
    html_escape::encode_quoted_attribute(text).into_owned()
}

pub fn unescape_html(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}

pub(crate) fn register(registry: &mut TransformRegistry) {
    registry.register(
        "base64-encode",
        Category::Encoding,
        "Encode text as Base64",
        |text: &str, _: &Params| -> TransformResult { Ok(base64_encode(text)) },
    );
    registry.register(
        "base64-decode",
        Category::Encoding,
        "Decode Base64 into text",
        |text: &str, _: &Params| -> TransformResult { base64_decode(text) },
    );
    registry.register(
        "text-to-hex",
        Category::Encoding,
        "Encode each byte as two hex digits",
        |text: &str, _: &Params| -> TransformResult { Ok(text_to_hex(text)) },
    );
    registry.register(
        "hex-to-text",
        Category::Encoding,
        "Decode hex digits into text",
        |text: &str, _: &Params| -> TransformResult { hex_to_text(text) },
    );
    registry.register(
        "text-to-binary",
        Category::Encoding,
        "Encode each byte as 8 binary digits",
        |text: &str, _: &Params| -> TransformResult { Ok(text_to_binary(text)) },
    );
    registry.register(
        "binary-to-text",
        Category::Encoding,
        "Decode binary digits into text",
        |text: &str, _: &Params| -> TransformResult { binary_to_text(text) },
    );
    registry.register(
        "text-to-octal",
        Category::Encoding,
        "Encode each byte as 3 octal digits",
        |text: &str, _: &Params| -> TransformResult { Ok(text_to_octal(text)) },
    );
    registry.register(
        "octal-to-text",
        Category::Encoding,
        "Decode octal digits into text",
        |text: &str, _: &Params| -> TransformResult { octal_to_text(text) },
    );
    registry.register(
        "text-to-decimal",
        Category::Encoding,
        "Encode each byte as a decimal number",
        |text: &str, _: &Params| -> TransformResult { Ok(text_to_decimal(text)) },
    );
    registry.register(
        "decimal-to-text",
        Category::Encoding,
        "Decode decimal byte values into text",
        |text: &str, _: &Params| -> TransformResult { decimal_to_text(text) },
    );
    registry.register(
        "url-encode",
        Category::Encoding,
        "Percent-encode text for URLs",
        |text: &str, _: &Params| -> TransformResult { Ok(url_encode(text)) },
    );
    registry.register(
        "url-decode",
        Category::Encoding,
        "Decode percent-encoded text",
        |text: &str, _: &Params| -> TransformResult { url_decode(text) },
    );
    registry.register(
        "html-escape",
        Category::Encoding,
        "Escape HTML special characters",
        |text: &str, _: &Params| -> TransformResult { Ok(escape_html(text)) },
    );
    registry.register(
        "html-unescape",
        Category::Encoding,
        "Decode HTML entities",
        |text: &str, _: &Params| -> TransformResult { Ok(unescape_html(text)) },
    );
}
