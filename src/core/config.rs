//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::PathBuf;

use crate::core::units::Resolution;
use crate::entities::species;

/// Timberlist configuration with layered hierarchy
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default part number prefix for `cutlist`
    pub default_prefix: Option<String>,

    /// Default species selection
    pub default_species: Option<String>,

    /// Default snapping resolution ("eighth" or "quarter")
    pub default_resolution: Option<String>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/timberlist/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                if let Ok(contents) = std::fs::read_to_string(&global_path) {
                    if let Ok(global) = serde_yml::from_str::<Config>(&contents) {
                        config.merge(global);
                    }
                }
            }
        }

        // 3. Environment variables
        if let Ok(prefix) = std::env::var("TIMBERLIST_PREFIX") {
            config.default_prefix = Some(prefix);
        }
        if let Ok(species) = std::env::var("TIMBERLIST_SPECIES") {
            config.default_species = Some(species);
        }
        if let Ok(resolution) = std::env::var("TIMBERLIST_RESOLUTION") {
            config.default_resolution = Some(resolution);
        }

        config
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "timberlist")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.default_prefix.is_some() {
            self.default_prefix = other.default_prefix;
        }
        if other.default_species.is_some() {
            self.default_species = other.default_species;
        }
        if other.default_resolution.is_some() {
            self.default_resolution = other.default_resolution;
        }
    }

    /// The part number prefix to use when none is given on the command line
    pub fn prefix(&self) -> String {
        self.default_prefix
            .clone()
            .unwrap_or_else(|| "LCTF-".to_string())
    }

    /// The species to use when none is given on the command line
    pub fn species(&self) -> String {
        self.default_species
            .clone()
            .unwrap_or_else(|| species::MODEL.to_string())
    }

    /// The snapping resolution to use when none is given on the command line
    pub fn resolution(&self) -> Resolution {
        self.default_resolution
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.prefix(), "LCTF-");
        assert_eq!(config.species(), "Model");
        assert_eq!(config.resolution(), Resolution::Eighth);
    }

    #[test]
    fn test_merge_prefers_other() {
        let mut config = Config {
            default_prefix: Some("LCTF-".to_string()),
            default_species: None,
            default_resolution: None,
        };
        config.merge(Config {
            default_prefix: Some("BARN-".to_string()),
            default_species: Some("Oak, Red".to_string()),
            default_resolution: None,
        });
        assert_eq!(config.prefix(), "BARN-");
        assert_eq!(config.species(), "Oak, Red");
        assert_eq!(config.resolution(), Resolution::Eighth);
    }

    #[test]
    fn test_invalid_resolution_falls_back_to_default() {
        let config = Config {
            default_resolution: Some("sixteenth".to_string()),
            ..Config::default()
        };
        assert_eq!(config.resolution(), Resolution::Eighth);
    }
}
