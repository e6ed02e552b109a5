// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Configuration file support for keytap-bin.
//!
//! Supports loading configuration from TOML files with the following search order:
//! 1. Path specified via `--config` CLI argument
//! 2. `./keytap-rs.toml` (current directory)
//! 3. `~/.config/keytap-rs/config.toml` (XDG config)
//! 4. `/etc/keytap-rs/config.toml` (system-wide)
//!
//! CLI arguments override config file values.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use keytap_core::{KeypadLayout, LayoutError};

/// Top-level configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Keypad layout overrides
    pub layout: LayoutConfig,
    /// Output formatting
    pub output: OutputConfig,
}

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: Option<String>,
}

/// Keypad layout configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Per-key letter overrides applied on top of the standard layout,
    /// e.g. `keys = { "1" = ".,?" }`
    pub keys: HashMap<String, String>,
}

/// Output formatting configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Emit decoded messages as JSON lines instead of plain text
    pub json: bool,
}

impl LayoutConfig {
    /// Build the effective layout: the standard table plus any overrides.
    pub fn build_layout(&self) -> Result<KeypadLayout, ConfigError> {
        let mut overrides = HashMap::new();
        for (key, letters) in &self.keys {
            let mut chars = key.chars();
            let (Some(digit), None) = (chars.next(), chars.next()) else {
                return Err(ConfigError::InvalidLayoutKey(key.clone()));
            };
            overrides.insert(digit, letters.clone());
        }
        Ok(KeypadLayout::standard().with_overrides(overrides)?)
    }
}

impl Config {
    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e.to_string()))?;

        toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(path.to_path_buf(), e.to_string()))
    }

    /// Load configuration from the default search paths.
    /// Returns default config if no config file is found.
    pub fn load_from_default_paths() -> Result<(Self, Option<PathBuf>), ConfigError> {
        for path in Self::default_search_paths() {
            if path.exists() {
                let config = Self::load_from_file(&path)?;
                return Ok((config, Some(path)));
            }
        }

        Ok((Self::default(), None))
    }

    /// Get the default search paths for config files.
    pub fn default_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // Current directory
        paths.push(PathBuf::from("keytap-rs.toml"));

        // XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("keytap-rs").join("config.toml"));
        }

        // System-wide config
        paths.push(PathBuf::from("/etc/keytap-rs/config.toml"));

        paths
    }

    /// Generate an example configuration as a TOML string.
    pub fn example_toml() -> String {
        let example = Config {
            general: GeneralConfig {
                log_level: Some("info".to_string()),
            },
            layout: LayoutConfig {
                keys: HashMap::from([("1".to_string(), "&’(".to_string())]),
            },
            output: OutputConfig { json: false },
        };

        toml::to_string_pretty(&example).unwrap_or_default()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{0}': {1}")]
    ReadError(PathBuf, String),

    #[error("failed to parse config file '{0}': {1}")]
    ParseError(PathBuf, String),

    #[error("layout key '{0}' must be a single keypad digit")]
    InvalidLayoutKey(String),

    #[error(transparent)]
    InvalidLayout(#[from] LayoutError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.general.log_level, None);
        assert!(config.layout.keys.is_empty());
        assert!(!config.output.json);
    }

    #[test]
    fn test_parse_minimal_toml() {
        let toml_str = r#"
[general]
log_level = "debug"
"#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level, Some("debug".to_string()));
        assert!(config.layout.keys.is_empty());
        assert!(!config.output.json);
    }

    #[test]
    fn test_parse_full_toml() {
        let toml_str = r#"
[general]
log_level = "trace"

[layout]
keys = { "1" = ".,?!", "0" = "_" }

[output]
json = true
"#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level, Some("trace".to_string()));
        assert_eq!(config.layout.keys.get("1"), Some(&".,?!".to_string()));
        assert_eq!(config.layout.keys.get("0"), Some(&"_".to_string()));
        assert!(config.output.json);
    }

    #[test]
    fn test_example_toml_parses() {
        let example = Config::example_toml();
        let _config: Config = toml::from_str(&example).unwrap();
    }

    #[test]
    fn test_build_layout_default_is_standard() {
        let layout = LayoutConfig::default().build_layout().unwrap();
        assert_eq!(layout.keys_for('2'), Some("abc"));
    }

    #[test]
    fn test_build_layout_applies_overrides() {
        let config: Config = toml::from_str(
            r#"
[layout]
keys = { "1" = ".,?" }
"#,
        )
        .unwrap();
        let layout = config.layout.build_layout().unwrap();
        assert_eq!(layout.keys_for('1'), Some(".,?"));
        assert_eq!(layout.keys_for('2'), Some("abc"));
    }

    #[test]
    fn test_build_layout_rejects_multi_char_key() {
        let config: Config = toml::from_str(
            r#"
[layout]
keys = { "12" = "abc" }
"#,
        )
        .unwrap();
        let err = config.layout.build_layout().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLayoutKey(_)));
    }

    #[test]
    fn test_build_layout_rejects_empty_letters() {
        let config: Config = toml::from_str(
            r#"
[layout]
keys = { "2" = "" }
"#,
        )
        .unwrap();
        let err = config.layout.build_layout().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidLayout(LayoutError::EmptyKey('2'))
        ));
    }
}
