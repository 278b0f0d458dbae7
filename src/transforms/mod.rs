//! Text transforms
//!
//! Every transform is a pure function mapping an input text and its parameters
//! to an output text or a typed failure. Transforms are grouped by category:
//! - `cipher` : letter rotations and substitutions
//! - `encoding` : Base64, hex, binary, octal, decimal, URL and HTML encodings
//! - `whitespace` : spacing and line break clean-ups
//! - `case` : letter case and identifier style conversions
//! - `characters` : diacritics, punctuation, reversal and replacements
//! - `lines` : line oriented operations
//! - `extract` : pattern extraction and text statistics
//! - `json` : JSON pretty printing, minification and validation
//! - `random` : transforms with an injectable random source

use crate::error::Result;
use crate::params::{Params, TransformInput};
use strum_macros::Display;

pub mod case;
pub mod characters;
pub mod cipher;
pub mod encoding;
pub mod extract;
pub mod json;
pub mod lines;
mod outcome;
pub mod random;
mod registry;
pub mod whitespace;

pub use outcome::Outcome;
pub use registry::{Entry, TransformManager, TransformRegistry};

/// Result of a single transform invocation
pub type TransformResult = Result<String>;

/// Trait for text transformations
pub trait Transform: Send + Sync {
    /// Transforms the input text using the supplied parameters
    ///
    /// # Arguments
    /// * `text` - The text to transform
    /// * `params` - The parameters of the invocation (may be empty)
    ///
    /// # Returns
    /// The transformed text or an error if the input cannot be processed
    fn transform(&self, text: &str, params: &Params) -> TransformResult;

    /// Transforms a full input (text and parameters)
    fn apply(&self, input: &TransformInput) -> TransformResult {
        self.transform(&input.text, &input.params)
    }
}

/// Any plain function or closure with the right shape is a transform
///
/// # Examples
///
/// ```
/// use textkit::params::Params;
/// use textkit::transforms::{Transform, TransformResult};
///
/// let shout = |text: &str, _: &Params| -> TransformResult { Ok(text.to_uppercase()) };
/// assert_eq!(shout.transform("hey", &Params::new()).unwrap(), "HEY");
/// ```
impl<F> Transform for F
where
    F: Fn(&str, &Params) -> TransformResult + Send + Sync,
{
    fn transform(&self, text: &str, params: &Params) -> TransformResult {
        self(text, params)
    }
}

/// Family a transform belongs to, used to group the listings
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    #[strum(serialize = "Cipher")]
    Cipher,
    #[strum(serialize = "Encoding")]
    Encoding,
    #[strum(serialize = "Whitespace")]
    Whitespace,
    #[strum(serialize = "Case")]
    Case,
    #[strum(serialize = "Characters")]
    Characters,
    #[strum(serialize = "Lines")]
    Lines,
    #[strum(serialize = "Extraction")]
    Extraction,
    #[strum(serialize = "JSON")]
    Json,
    #[strum(serialize = "Random")]
    Random,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Cipher,
        Category::Encoding,
        Category::Whitespace,
        Category::Case,
        Category::Characters,
        Category::Lines,
        Category::Extraction,
        Category::Json,
        Category::Random,
    ];

    /// Resolves a category from its display name (case insensitive)
    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|c| c.to_string().eq_ignore_ascii_case(name.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_name() {
        assert_eq!(Category::from_name("json"), Some(Category::Json));
        assert_eq!(Category::from_name(" Cipher "), Some(Category::Cipher));
        assert_eq!(Category::from_name("unknown"), None);
    }

    #[test]
    fn test_apply_uses_params() {
        let repeat = |text: &str, params: &Params| -> TransformResult {
            Ok(text.repeat(params.get_number::<usize>("times", 1)))
        };
        let input = TransformInput::new("ab").with_params(Params::from([("times", "3")]));
        assert_eq!(repeat.apply(&input).unwrap(), "ababab");
    }
}
