//! Configuration for the miner.
//!
//! Settings are stored in `~/.config/classlog/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Extension of the source files whose classes are tracked
    pub source_extension: String,
    /// Draw a progress bar on stderr while walking history
    pub progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_extension: ".java".to_string(),
            progress: true,
        }
    }
}

/// Returns the path to the config file: `~/.config/classlog/config.toml`
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("classlog").join("config.toml"))
}

/// Load configuration from disk. Returns default if file is missing or invalid.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };

    match std::fs::read_to_string(&path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_default(),
        Err(_) => Config::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.source_extension, ".java");
        assert!(config.progress);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = Config {
            source_extension: ".kt".to_string(),
            progress: false,
        };

        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(config, parsed);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let partial = r#"
            progress = false
        "#;

        let config: Config = toml::from_str(partial).unwrap();
        assert!(!config.progress);
        assert_eq!(config.source_extension, ".java");
    }

    #[test]
    fn test_invalid_toml_returns_default() {
        let invalid = "this is not valid toml {{{{";
        let config: Config = toml::from_str(invalid).unwrap_or_default();
        assert_eq!(config, Config::default());
    }
}
