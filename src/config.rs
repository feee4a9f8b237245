//! Configuration module for picklist
//!
//! Manages filtering and display settings for the picker.
//! Configuration is stored in the user's config directory.

use crate::filter::{DEFAULT_RESERVED_PREFIX, FilterRules};
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Keys accepted by `picklist config get/set`
pub const CONFIG_KEYS: &[&str] = &[
    "quiet",
    "reserved_prefix",
    "create_suffix",
    "empty_message",
    "max_query_len",
    "output_format",
    "theme",
];

/// How committed values are printed
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum OutputFormat {
    /// One value per line
    #[default]
    Plain,
    /// A JSON array
    Json,
}

impl OutputFormat {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Json => "json",
        }
    }
}

/// Color palette of the picker
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

impl ThemeName {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PicklistConfig {
    /// Suppress informational output by default
    pub quiet: bool,

    /// Labels starting with this prefix are hidden from search results
    /// (empty disables the rule)
    pub reserved_prefix: String,

    /// Suffix rendered after a synthesized "add new" row
    pub create_suffix: String,

    /// Message shown when no row matches
    pub empty_message: String,

    /// Maximum number of characters accepted in the search field
    pub max_query_len: usize,

    /// Output format for committed values
    pub output_format: OutputFormat,

    /// Picker palette
    pub theme: ThemeName,
}

impl Default for PicklistConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            reserved_prefix: DEFAULT_RESERVED_PREFIX.to_string(),
            create_suffix: "(Add New)".to_string(),
            empty_message: "No results found".to_string(),
            max_query_len: 50,
            output_format: OutputFormat::Plain,
            theme: ThemeName::Dark,
        }
    }
}

impl PicklistConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("picklist").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, creating a default file if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Filter rules derived from `reserved_prefix`
    #[must_use]
    pub fn filter_rules(&self) -> FilterRules {
        FilterRules::with_prefix(&self.reserved_prefix)
    }

    /// Read a setting as text
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "quiet" => Some(self.quiet.to_string()),
            "reserved_prefix" => Some(self.reserved_prefix.clone()),
            "create_suffix" => Some(self.create_suffix.clone()),
            "empty_message" => Some(self.empty_message.clone()),
            "max_query_len" => Some(self.max_query_len.to_string()),
            "output_format" => Some(self.output_format.as_str().to_string()),
            "theme" => Some(self.theme.as_str().to_string()),
            _ => None,
        }
    }

    /// Update a setting from text (does not save)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for unknown keys or values that don't parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "quiet" => {
                self.quiet = value.parse().map_err(|_| {
                    ConfigError::Message(format!("Invalid value for quiet: '{value}'. Use 'true' or 'false'"))
                })?;
            }
            "reserved_prefix" => value.clone_into(&mut self.reserved_prefix),
            "create_suffix" => value.clone_into(&mut self.create_suffix),
            "empty_message" => value.clone_into(&mut self.empty_message),
            "max_query_len" => {
                let len: usize = value.parse().map_err(|_| {
                    ConfigError::Message(format!("Invalid value for max_query_len: '{value}'"))
                })?;
                if len == 0 {
                    return Err(ConfigError::Message("max_query_len must be at least 1".to_string()));
                }
                self.max_query_len = len;
            }
            "output_format" => {
                self.output_format = match value {
                    "plain" => OutputFormat::Plain,
                    "json" => OutputFormat::Json,
                    _ => {
                        return Err(ConfigError::Message(format!(
                            "Invalid value for output_format: '{value}'. Use 'plain' or 'json'"
                        )));
                    }
                };
            }
            "theme" => {
                self.theme = match value {
                    "dark" => ThemeName::Dark,
                    "light" => ThemeName::Light,
                    _ => {
                        return Err(ConfigError::Message(format!(
                            "Invalid value for theme: '{value}'. Use 'dark' or 'light'"
                        )));
                    }
                };
            }
            _ => {
                return Err(ConfigError::Message(format!(
                    "Unknown configuration key: '{key}'. Available keys: {}",
                    CONFIG_KEYS.join(", ")
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PicklistConfig::default();
        assert!(!config.quiet);
        assert_eq!(config.reserved_prefix, "add");
        assert_eq!(config.empty_message, "No results found");
        assert_eq!(config.output_format, OutputFormat::Plain);
    }

    #[test]
    fn test_filter_rules_from_prefix() {
        let mut config = PicklistConfig::default();
        assert_eq!(config.filter_rules(), FilterRules::default());

        config.reserved_prefix.clear();
        assert_eq!(config.filter_rules(), FilterRules::permissive());
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = PicklistConfig::load_from(&path).unwrap();
        assert_eq!(config, PicklistConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = PicklistConfig::default();
        config.set("create_suffix", "(new)").unwrap();
        config.set("max_query_len", "20").unwrap();
        config.set("output_format", "json").unwrap();
        config.set("theme", "light").unwrap();
        config.save_to(&path).unwrap();

        let loaded = PicklistConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.theme, ThemeName::Light);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "quiet = true\n").unwrap();

        let loaded = PicklistConfig::load_from(&path).unwrap();
        assert!(loaded.quiet);
        assert_eq!(loaded.max_query_len, 50);
    }

    #[test]
    fn test_get_known_and_unknown_keys() {
        let config = PicklistConfig::default();
        for key in CONFIG_KEYS {
            assert!(config.get(key).is_some(), "missing getter for {key}");
        }
        assert!(config.get("database").is_none());
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = PicklistConfig::default();
        assert!(config.set("quiet", "maybe").is_err());
        assert!(config.set("max_query_len", "0").is_err());
        assert!(config.set("output_format", "yaml").is_err());
        assert!(config.set("theme", "solarized").is_err());
        assert!(config.set("database", "tags.db").is_err());
        assert_eq!(config, PicklistConfig::default());
    }
}
