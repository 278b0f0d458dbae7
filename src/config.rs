use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::constants::sitemap::{DEFAULT_BASE_URL, DEFAULT_OUTPUT};
use crate::error::*;
use crate::params::Params;

#[derive(Deserialize, Debug, Default)]
pub struct MainConfig {
    #[serde(default)]
    pub defaults: Defaults,
    /// Default parameters per transform, overridden by the command line.
    /// Values are TOML scalars (strings, numbers, booleans or dates).
    #[serde(default)]
    pub params: HashMap<String, HashMap<String, toml::Value>>,
    #[serde(default)]
    pub sitemap: SitemapConfig,
}

#[derive(Deserialize, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Defaults {
    /// Copy every result to the clipboard
    pub copy: bool,
    /// Print a trailing newline after the result
    pub newline: bool,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SitemapConfig {
    pub base_url: String,
    pub output: String,
    /// Extra routes added after the built-in ones
    pub routes: Vec<String>,
    pub blog: Vec<BlogEntry>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BlogEntry {
    pub slug: String,
    /// Last modification date in `YYYY-MM-DD` format
    #[serde(default)]
    pub lastmod: Option<String>,
}

impl Default for Defaults {
    fn default() -> Defaults {
        Defaults {
            copy: false,
            newline: true,
        }
    }
}

impl Default for SitemapConfig {
    fn default() -> SitemapConfig {
        SitemapConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            output: DEFAULT_OUTPUT.to_string(),
            routes: Vec::new(),
            blog: Vec::new(),
        }
    }
}

impl MainConfig {
    pub fn new() -> Self {
        MainConfig::default()
    }

    /// Parses the configuration from its TOML representation
    ///
    /// # Errors
    /// `SerdeTomlError` if the content is not a valid configuration.
    pub fn from_toml(content: &str, file_name: &str) -> Result<Self> {
        let config: MainConfig =
            toml::from_str(content).map_err(|e: toml::de::Error| Error::SerdeTomlError {
                location: ConfigType::MAIN,
                file: file_name.to_string(),
                cause: e.to_string(),
            })?;

        for (transform, params) in &config.params {
            if let Some((key, _)) = params.iter().find(|(_, v)| scalar_to_string(v).is_none()) {
                return Err(Error::SerdeTomlError {
                    location: ConfigType::MAIN,
                    file: file_name.to_string(),
                    cause: format!(
                        "parameter \"{}.{}\" must be a string, number or boolean",
                        transform, key
                    ),
                });
            }
        }
        Ok(config)
    }

    /// Retrieves the default parameters configured for the given transform
    pub fn params_for(&self, transform: &str) -> Params {
        self.params
            .get(transform)
            .map(|p| {
                Params::from(
                    p.iter()
                        .filter_map(|(k, v)| scalar_to_string(v).map(|v| (k.as_str(), v))),
                )
            })
            .unwrap_or_default()
    }
}

/// Renders a TOML scalar the way it would be typed on the command line
fn scalar_to_string(value: &toml::Value) -> Option<String> {
    match value {
        toml::Value::String(s) => Some(s.clone()),
        toml::Value::Integer(i) => Some(i.to_string()),
        toml::Value::Float(f) => Some(f.to_string()),
        toml::Value::Boolean(b) => Some(b.to_string()),
        toml::Value::Datetime(d) => Some(d.to_string()),
        toml::Value::Array(_) | toml::Value::Table(_) => None,
    }
}

pub fn parse(file_path: &Path) -> Result<String> {
    let mut config_content = String::new();
    File::open(file_path)?.read_to_string(&mut config_content)?;
    Ok(config_content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
        [defaults]
        copy = true

        [params.caesar]
        shift = "5"

        [params.json-format]
        indent = "4"

        [sitemap]
        base_url = "https://tools.example.org"
        routes = ["/about"]

        [[sitemap.blog]]
        slug = "hello-world"
        lastmod = "2024-03-01"

        [[sitemap.blog]]
        slug = "second-post"
    "#;

    #[test]
    fn test_defaults() {
        let config = MainConfig::new();
        assert!(!config.defaults.copy);
        assert!(config.defaults.newline);
        assert!(config.params.is_empty());
        assert_eq!(config.sitemap.output, DEFAULT_OUTPUT);
        assert_eq!(config.sitemap.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_from_toml() {
        let config = MainConfig::from_toml(SAMPLE, "textkit.toml").unwrap();
        assert!(config.defaults.copy);
        assert!(config.defaults.newline);
        assert_eq!(config.params_for("caesar").get("shift"), Some("5"));
        assert_eq!(config.params_for("json-format").get("indent"), Some("4"));
        assert!(config.params_for("rot13").is_empty());
        assert_eq!(config.sitemap.routes, vec!["/about".to_string()]);
        assert_eq!(config.sitemap.output, DEFAULT_OUTPUT);
        assert_eq!(
            config.sitemap.blog,
            vec![
                BlogEntry {
                    slug: "hello-world".to_string(),
                    lastmod: Some("2024-03-01".to_string()),
                },
                BlogEntry {
                    slug: "second-post".to_string(),
                    lastmod: None,
                },
            ]
        );
    }

    #[test]
    fn test_scalar_params() {
        let config = MainConfig::from_toml(
            "[params.json-format]\nindent = 4\n\n[params.find-replace]\nregex = true\nfind = \"a+\"\n\n[params.caesar]\nshift = -2\n",
            "textkit.toml",
        )
        .unwrap();
        assert_eq!(config.params_for("json-format").get("indent"), Some("4"));
        assert_eq!(config.params_for("json-format").get_number::<u8>("indent", 2), 4);
        let find_replace = config.params_for("find-replace");
        assert!(find_replace.is_active("regex"));
        assert_eq!(find_replace.get("find"), Some("a+"));
        assert_eq!(config.params_for("caesar").get_number::<i64>("shift", 3), -2);
    }

    #[test]
    fn test_nested_params_are_rejected() {
        let result = MainConfig::from_toml("[params.caesar]\nshift = [1, 2]\n", "textkit.toml");
        assert!(matches!(
            result,
            Err(Error::SerdeTomlError { cause, .. }) if cause.contains("caesar.shift")
        ));
    }

    #[test]
    fn test_empty_file() {
        let config = MainConfig::from_toml("", "textkit.toml").unwrap();
        assert_eq!(config.defaults, Defaults::default());
    }

    #[test]
    fn test_invalid_toml() {
        let result = MainConfig::from_toml("[defaults]\ncopy = \"maybe\"", "textkit.toml");
        assert!(matches!(
            result,
            Err(Error::SerdeTomlError { file, .. }) if file == "textkit.toml"
        ));
    }

    #[test]
    fn test_parse_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[defaults]\nnewline = false\n").unwrap();
        let content = parse(file.path()).unwrap();
        let config = MainConfig::from_toml(&content, "textkit.toml").unwrap();
        assert!(!config.defaults.newline);

        let missing = parse(Path::new("/this/path/does/not/exist.toml"));
        assert!(matches!(missing, Err(Error::Io(_))));
    }
}
