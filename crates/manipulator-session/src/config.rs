//! Configuration loading and typed config structures for the manipulator
//! session.
//!
//! The canonical configuration lives in `manipulator-config.yaml`. This
//! module defines strongly-typed structs mirroring the YAML structure and
//! a loader that reads the file. All fields default to the values the
//! original application shipped with: a 10x10 grid, 4 samples, and a
//! 300 ms step delay.

use std::path::Path;

use serde::Deserialize;

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "manipulator-config.yaml";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level session configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SessionConfig {
    /// Grid dimensions.
    #[serde(default)]
    pub grid: GridSettings,

    /// Sample placement settings.
    #[serde(default)]
    pub samples: SampleSettings,

    /// Trace playback settings (stored as data; the engine never paces).
    #[serde(default)]
    pub playback: PlaybackSettings,
}

impl SessionConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_yml::from_str(&contents)?;
        Ok(config)
    }
}

/// Grid dimension settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GridSettings {
    /// Number of columns.
    #[serde(default = "default_grid_side")]
    pub width: u32,
    /// Number of rows.
    #[serde(default = "default_grid_side")]
    pub height: u32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            width: default_grid_side(),
            height: default_grid_side(),
        }
    }
}

/// Sample placement settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SampleSettings {
    /// How many samples to scatter at world creation.
    #[serde(default = "default_sample_count")]
    pub count: u32,
}

impl Default for SampleSettings {
    fn default() -> Self {
        Self {
            count: default_sample_count(),
        }
    }
}

/// Trace playback settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaybackSettings {
    /// Delay between displayed steps, in milliseconds. Data only: a host
    /// replays the returned trace at its own pace.
    #[serde(default = "default_step_delay_ms")]
    pub step_delay_ms: u32,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            step_delay_ms: default_step_delay_ms(),
        }
    }
}

const fn default_grid_side() -> u32 {
    10
}

const fn default_sample_count() -> u32 {
    4
}

const fn default_step_delay_ms() -> u32 {
    300
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_original_application() {
        let config = SessionConfig::default();
        assert_eq!(config.grid.width, 10);
        assert_eq!(config.grid.height, 10);
        assert_eq!(config.samples.count, 4);
        assert_eq!(config.playback.step_delay_ms, 300);
    }

    #[test]
    fn partial_yaml_fills_in_defaults() {
        let yaml = "grid:\n  width: 5\n";
        let config: Result<SessionConfig, _> = serde_yml::from_str(yaml);
        assert!(config.is_ok());
        if let Ok(config) = config {
            assert_eq!(config.grid.width, 5);
            assert_eq!(config.grid.height, 10);
            assert_eq!(config.samples.count, 4);
        }
    }

    #[test]
    fn full_yaml_parses() {
        let yaml = concat!(
            "grid:\n  width: 3\n  height: 7\n",
            "samples:\n  count: 2\n",
            "playback:\n  step_delay_ms: 50\n",
        );
        let config: Result<SessionConfig, _> = serde_yml::from_str(yaml);
        assert_eq!(
            config.ok(),
            Some(SessionConfig {
                grid: GridSettings {
                    width: 3,
                    height: 7
                },
                samples: SampleSettings { count: 2 },
                playback: PlaybackSettings { step_delay_ms: 50 },
            })
        );
    }

    #[test]
    fn missing_file_reports_io_error() {
        let result = SessionConfig::load(Path::new("does-not-exist.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
