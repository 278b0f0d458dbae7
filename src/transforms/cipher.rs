//! Letter rotations and substitutions.
//! Only ASCII letters (or printable ASCII for ROT47) are affected; every other
//! character is passed through untouched.

use super::{Category, TransformRegistry, TransformResult};
use crate::constants::defaults;
use crate::params::Params;

/// Shifts an ASCII letter by `shift` positions within its case, wrapping around
fn shift_letter(c: char, shift: i64) -> char {
    let base = match c {
        'a'..='z' => b'a',
        'A'..='Z' => b'A',
        _ => return c,
    };
    let offset = (c as u8 - base) as i64;
    (base + ((offset + shift.rem_euclid(26)) % 26) as u8) as char
}

/// Applies the ROT13 substitution.
///
/// # Examples
///
/// ```
/// use textkit::transforms::cipher::rot13;
///
/// assert_eq!(rot13("Hello, World!"), "Uryyb, Jbeyq!");
/// assert_eq!(rot13(&rot13("Hello")), "Hello");
/// ```
pub fn rot13(text: &str) -> String {
    caesar(text, 13)
}

/// Applies the ROT47 substitution over the printable ASCII range (`!` to `~`).
pub fn rot47(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '!'..='~' => (33 + ((c as u8 - 33 + 47) % 94)) as char,
            _ => c,
        })
        .collect()
}

/// Shifts every ASCII letter by the given amount. Negative amounts shift backwards.
pub fn caesar(text: &str, shift: i64) -> String {
    text.chars().map(|c| shift_letter(c, shift)).collect()
}

/// Mirrors every ASCII letter in the alphabet (`a` <-> `z`, `b` <-> `y`, ...)
pub fn atbash(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'a'..='z' => (b'z' - (c as u8 - b'a')) as char,
            'A'..='Z' => (b'Z' - (c as u8 - b'A')) as char,
            _ => c,
        })
        .collect()
}

pub(crate) fn register(registry: &mut TransformRegistry) {
    registry.register(
        "rot13",
        Category::Cipher,
        "Rotate letters by 13 positions",
        |text: &str, _: &Params| -> TransformResult { Ok(rot13(text)) },
    );
    registry.register(
        "rot47",
        Category::Cipher,
        "Rotate printable ASCII characters by 47 positions",
        |text: &str, _: &Params| -> TransformResult { Ok(rot47(text)) },
    );
    registry.register(
        "caesar",
        Category::Cipher,
        "Shift letters by `shift` positions (default 3)",
        |text: &str, params: &Params| -> TransformResult {
            Ok(caesar(
                text,
                params.get_number::<i64>("shift", defaults::CAESAR_SHIFT),
            ))
        },
    );
    registry.register(
        "atbash",
        Category::Cipher,
        "Mirror letters in the alphabet",
        |text: &str, _: &Params| -> TransformResult { Ok(atbash(text)) },
    );
}
