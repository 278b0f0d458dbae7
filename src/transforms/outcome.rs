use super::TransformResult;
use std::fmt;

/// What the display surface shows for a transform invocation.
///
/// Folding a `TransformResult` into an `Outcome` is where transform failures
/// stop: the error becomes a short message and never reaches the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(String),
    Failure(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// The text to display, whether it is the output or the failure message
    pub fn text(&self) -> &str {
        match self {
            Outcome::Success(text) | Outcome::Failure(text) => text,
        }
    }

    /// The transformed text, only for successful invocations
    pub fn output(&self) -> Option<&str> {
        match self {
            Outcome::Success(text) => Some(text),
            Outcome::Failure(_) => None,
        }
    }
}

impl From<TransformResult> for Outcome {
    fn from(result: TransformResult) -> Self {
        match result {
            Ok(text) => Outcome::Success(text),
            Err(error) => Outcome::Failure(error.to_string()),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(text) => write!(f, "{}", text),
            Outcome::Failure(message) => write!(f, "Error: {}", message),
        }
    }
}
