use chrono::prelude::*;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use textkit::constants::config::{DEFAULT_CONF_FILE, DEFAULT_TIME_FORMAT};
use textkit::constants::defaults::{CAESAR_SHIFT, JSON_INDENT};
use textkit::constants::sitemap::{DEFAULT_BASE_URL, DEFAULT_OUTPUT};
use textkit::debug;
pub use textkit::{
    config::{parse as config_parse, MainConfig},
    error::*,
};

use crate::directories::PROJECT_DIRS;

static DEFAULT_CONF: &str = "# File automatically generated on ${date}\n\
                            [defaults]\n\
                            copy    = false\n\
                            newline = true\n\n\
                            # Default parameters per transform (overridden with -s key=value)\n\
                            [params.caesar]\n\
                            shift = ${caesar_shift}\n\n\
                            [params.json-format]\n\
                            indent = ${json_indent}\n\n\
                            [sitemap]\n\
                            base_url = \"${base_url}\"\n\
                            output   = \"${output}\"\n\
                            routes   = []\n";

#[derive(Debug)]
pub struct BootStrap {
    config: MainConfig,
}

impl BootStrap {
    pub fn new() -> Result<Self> {
        Ok(BootStrap {
            config: parse_main_config()?,
        })
    }

    pub fn get_config(&self) -> &MainConfig {
        &self.config
    }
}

/// Creates the default main configuration file in the config directory
/// # Arguments
/// * `config_file` - The path to the configuration file
///
/// # Returns
/// A `Result` containing the configuration data as a `String`
///
/// # Errors
/// * `ConfigError` - If the configuration file cannot be created
/// * `IoError` - If an I/O error occurs while creating the configuration file
fn create_default_config(config_file: &Path) -> Result<String> {
    let parent_dir = config_file
        .parent()
        .ok_or_else(|| Error::ConfigError(config_file.to_string_lossy().into_owned()))?;
    std::fs::create_dir_all(parent_dir)?;
    let current_date = Local::now().format(DEFAULT_TIME_FORMAT).to_string();
    let config_data = DEFAULT_CONF
        .replacen("${date}", &current_date, 1)
        .replacen("${caesar_shift}", &CAESAR_SHIFT.to_string(), 1)
        .replacen("${json_indent}", &JSON_INDENT.to_string(), 1)
        .replacen("${base_url}", DEFAULT_BASE_URL, 1)
        .replacen("${output}", DEFAULT_OUTPUT, 1);

    debug!("Creating default configuration in {}", config_file.display());
    File::create(config_file)?.write_all(config_data.as_bytes())?;
    Ok(config_data)
}

/// Processes the main configuration file retrieving the associated `MainConfig` structure
///
/// If the file does not exist, a default configuration file is created first.
///
/// # Errors
///
/// This function returns an error if the configuration file cannot be read or parsed.
pub fn parse_main_config() -> Result<MainConfig> {
    let config_dir = PROJECT_DIRS
        .as_ref()
        .map(|dirs| dirs.config_dir())
        .ok_or_else(|| Error::Msg("could not determine the configuration directory".to_string()))?;
    let conf_file = config_dir.join(DEFAULT_CONF_FILE);

    let toml_data = match config_parse(&conf_file) {
        Ok(data) => data,
        Err(Error::Io(e)) if e.kind() == ::std::io::ErrorKind::NotFound => {
            create_default_config(&conf_file).map_err(|e| match e {
                Error::Io(io_error) => Error::ConfigError(format!(
                    "{} ({})",
                    config_dir.to_string_lossy(),
                    io_error
                )),
                other => other,
            })?
        }
        Err(Error::Io(e)) => {
            return Err(Error::ConfigReadError {
                file: String::from(DEFAULT_CONF_FILE),
                cause: e.to_string(),
            });
        }
        Err(e) => return Err(e),
    };

    debug!("Loaded configuration from {}", conf_file.display());
    MainConfig::from_toml(&toml_data, DEFAULT_CONF_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let dir = tempfile::tempdir().unwrap();
        let conf_file = dir.path().join("nested").join(DEFAULT_CONF_FILE);
        let data = create_default_config(&conf_file).unwrap();
        assert!(conf_file.exists());
        assert!(!data.contains("${"));

        let config = MainConfig::from_toml(&data, DEFAULT_CONF_FILE).unwrap();
        assert!(!config.defaults.copy);
        assert!(config.defaults.newline);
        assert_eq!(
            config.params_for("caesar").get("shift"),
            Some(CAESAR_SHIFT.to_string().as_str())
        );
        assert_eq!(config.sitemap.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.sitemap.output, DEFAULT_OUTPUT);
    }
}
