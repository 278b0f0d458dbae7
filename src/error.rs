use std::io::Write;
use strum_macros::Display;
use thiserror::Error;

#[derive(Debug, Display)]
pub enum ConfigType {
    #[strum(serialize = "Main config")]
    MAIN,
    #[strum(serialize = "Sitemap")]
    SITEMAP,
}

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("error processing args. Cause : {0}")]
    ArgsProcessingError(String),
    #[error("unable to write to the clipboard. Cause : {0}")]
    Clipboard(String),
    #[error("unable to create default configuration file in {0}")]
    ConfigError(String),
    #[error("unable to read configuration file {file:?}. Cause : {cause}")]
    ConfigReadError { file: String, cause: String },
    #[error("invalid value for parameter \"{name}\". Cause : {cause}")]
    InvalidParameter { name: String, cause: String },
    #[error("unable to interpolate variable. Cause : {cause}")]
    InterpolationError { location: ConfigType, cause: String },
    #[error(transparent)]
    Io(#[from] ::std::io::Error),
    #[error("JSON parsing error: {0}")]
    JsonError(String),
    #[error("invalid input for {transform}: {cause}")]
    MalformedInput { transform: String, cause: String },
    #[error("unable to parse {location} file {file:?}. Cause : {cause}")]
    SerdeTomlError {
        location: ConfigType,
        file: String,
        cause: String,
    },
    #[error("unable to generate sitemap. Cause : {0}")]
    SitemapError(String),
    #[error("unknown transform \"{0}\" (use `textkit list` to see the available ones)")]
    UnknownTransform(String),
    #[error("{0}")]
    Msg(String),
}

impl Error {
    /// Builds a malformed input error for the given transform
    pub fn malformed<T: Into<String>, C: ToString>(transform: T, cause: C) -> Self {
        Error::MalformedInput {
            transform: transform.into(),
            cause: cause.to_string(),
        }
    }

    /// Builds an invalid parameter error
    pub fn invalid_param<N: Into<String>, C: ToString>(name: N, cause: C) -> Self {
        Error::InvalidParameter {
            name: name.into(),
            cause: cause.to_string(),
        }
    }
}

impl From<&'static str> for Error {
    fn from(s: &'static str) -> Self {
        Error::Msg(s.to_owned())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Msg(s)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::JsonError(error.to_string())
    }
}

impl From<tera::Error> for Error {
    fn from(error: tera::Error) -> Self {
        use std::error::Error as StdError;

        let mut error_msg = error.to_string();
        let mut current = error.source();
        while let Some(source) = current {
            error_msg.push_str("\nCaused by: ");
            error_msg.push_str(&source.to_string());
            current = source.source();
        }
        Error::SitemapError(error_msg)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn default_error_handler(error: &Error, output: &mut dyn Write) {
    use nu_ansi_term::Color::Red;

    match error {
        Error::Io(io_error) if io_error.kind() == ::std::io::ErrorKind::BrokenPipe => {
            ::std::process::exit(0);
        }
        Error::ConfigReadError { file: _, cause: _ }
        | Error::ConfigError(_)
        | Error::SerdeTomlError {
            location: _,
            file: _,
            cause: _,
        }
        | Error::InterpolationError {
            location: _,
            cause: _,
        } => {
            writeln!(output, "{}: {}", Red.paint("[config error]"), error).ok();
        }
        Error::MalformedInput {
            transform: _,
            cause: _,
        }
        | Error::InvalidParameter { name: _, cause: _ }
        | Error::JsonError(_) => {
            writeln!(output, "{}: {}", Red.paint("[input error]"), error).ok();
        }
        Error::Clipboard(_) => {
            writeln!(output, "{}: {}", Red.paint("[clipboard error]"), error).ok();
        }
        Error::SitemapError(_) => {
            writeln!(output, "{}: {}", Red.paint("[sitemap error]"), error).ok();
        }
        _ => {
            writeln!(output, "{}: {}", Red.paint("[textkit error]"), error).ok();
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message() {
        let err = Error::malformed("base64-decode", "Invalid byte 45, offset 3.");
        assert_eq!(
            err.to_string(),
            "invalid input for base64-decode: Invalid byte 45, offset 3."
        );
    }

    #[test]
    fn test_error_handler_labels() {
        let mut out = Vec::new();
        default_error_handler(&Error::malformed("hex-to-text", "odd length"), &mut out);
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("[input error]"));
        assert!(printed.contains("odd length"));

        let mut out = Vec::new();
        default_error_handler(&Error::Clipboard("no backend".into()), &mut out);
        assert!(String::from_utf8(out).unwrap().contains("[clipboard error]"));

        let mut out = Vec::new();
        default_error_handler(&Error::UnknownTransform("nope".into()), &mut out);
        assert!(String::from_utf8(out).unwrap().contains("[textkit error]"));
    }
}
