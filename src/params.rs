use crate::error::{Error, Result};
use crate::utils::safe_parse;
use std::collections::BTreeMap;

/// The scalar parameters supplied alongside the input text of a transform.
///
/// Values are kept as strings and parsed on access, so a transform decides
/// how to interpret (and clamp) each of them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Params {
    data: BTreeMap<String, String>,
}

/// Provides the methods to access the values present in the params struct
impl Params {
    pub fn new() -> Self {
        Params {
            data: BTreeMap::new(),
        }
    }

    pub fn from<I, K, V>(params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = Params::new();
        map.extend(params);
        map
    }

    /// Parses a `key=value` assignment and inserts it.
    ///
    /// # Arguments
    /// * `assignment` - The assignment in `key=value` format. The value may contain `=`.
    ///
    /// # Errors
    /// Returns `ArgsProcessingError` when the assignment has no `=` or an empty key.
    pub fn insert_assignment(&mut self, assignment: &str) -> Result<()> {
        match assignment.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                self.insert(key.trim(), value);
                Ok(())
            }
            _ => Err(Error::ArgsProcessingError(format!(
                "Invalid set parameter supplied \"{}\" (Must be in key=value format)",
                assignment
            ))),
        }
    }

    /// Extends the params replacing existing keys.
    pub fn extend<I, K, V>(&mut self, params: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in params {
            self.insert(key, value);
        }
    }

    /// Extends the params keeping the values of existing keys.
    pub fn append<I, K, V>(&mut self, params: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in params {
            let key = key.into();
            if !self.contains(&key) {
                self.insert(key, value);
            }
        }
    }

    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.data.insert(key.into(), value.into());
    }

    pub fn contains<S: AsRef<str>>(&self, name: S) -> bool {
        self.data.contains_key(name.as_ref())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// Retrieves the value for the key or the given default when missing.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Retrieves a numeric value clamped to the bounds of `T`.
    /// Missing or non-numeric values yield the default.
    ///
    /// # Examples
    ///
    /// ```
    /// use textkit::params::Params;
    ///
    /// let params = Params::from([("count", "300"), ("shift", "oops")]);
    /// assert_eq!(params.get_number::<u8>("count", 1), 255);
    /// assert_eq!(params.get_number::<i64>("shift", 3), 3);
    /// assert_eq!(params.get_number::<i64>("missing", 7), 7);
    /// ```
    pub fn get_number<T>(&self, key: &str, default: T) -> T
    where
        T: std::str::FromStr
            + std::cmp::PartialOrd
            + Copy
            + num::Bounded
            + num::Zero
            + std::fmt::Display,
    {
        self.get(key).and_then(safe_parse::<T>).unwrap_or(default)
    }

    /// Checks whether the params provide the given key set to "true", "1" or "yes".
    /// A key present with an empty value also counts as active, so `-s regex=` works as a flag.
    pub fn is_active(&self, key: &str) -> bool {
        match self.get(key) {
            Some(v) => matches!(
                v.trim().to_lowercase().as_str(),
                "" | "true" | "1" | "yes"
            ),
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// The input of a single invocation : the user provided text and its parameters.
#[derive(Debug, Default, Clone)]
pub struct TransformInput {
    pub text: String,
    pub params: Params,
}

impl TransformInput {
    pub fn new<S: Into<String>>(text: S) -> Self {
        TransformInput {
            text: text.into(),
            params: Params::new(),
        }
    }

    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }
}
