//! Configuration schema for a gesture-game installation.
//!
//! One YAML file drives the host binary and any embedding application. Every
//! section is optional; missing keys take the defaults below.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Landmark feature extraction settings.
    #[serde(default)]
    pub features: FeatureConfig,
    /// Score store settings.
    #[serde(default)]
    pub store: StoreConfig,
    /// Round orchestration settings.
    #[serde(default)]
    pub session: SessionConfig,
    /// Event log settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Feature extraction configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FeatureConfig {
    /// Landmarks at or below this confidence are encoded as (0, 0).
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f32,
}

fn default_confidence_threshold() -> f32 {
    0.5
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: default_confidence_threshold(),
        }
    }
}

/// Score store configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Path of the persisted scoring record (JSON).
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

fn default_store_path() -> PathBuf {
    PathBuf::from("scores.json")
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

/// Round orchestration configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Opponent RNG seed. If None, the opponent is seeded from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Signal the bonus side-game on every positive multiple of this score (0 disables).
    #[serde(default = "default_bonus_every_points")]
    pub bonus_every_points: u32,
    /// Skip round attempts with no visible hand before invoking the classifier.
    #[serde(default = "default_skip_empty_frames")]
    pub skip_empty_frames: bool,
}

fn default_bonus_every_points() -> u32 {
    20
}

fn default_skip_empty_frames() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            bonus_every_points: default_bonus_every_points(),
            skip_empty_frames: default_skip_empty_frames(),
        }
    }
}

/// Event log configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Optional NDJSON round event log. If None, no event log is written.
    #[serde(default)]
    pub events_path: Option<PathBuf>,
    /// Flush the event log every N lines (0 = flush only on drop).
    #[serde(default = "default_flush_every_lines")]
    pub flush_every_lines: u64,
}

fn default_flush_every_lines() -> u64 {
    1
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            events_path: None,
            flush_every_lines: default_flush_every_lines(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load configuration from a YAML string.
    ///
    /// An empty document yields `Config::default()`.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Config::default());
        }
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = self.features.confidence_threshold;
        if !(0.0..=1.0).contains(&t) {
            return Err(ConfigError::Invalid(format!(
                "features.confidence_threshold must be in [0, 1], got {t}"
            )));
        }
        if self.store.path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("store.path must not be empty".to_string()));
        }
        Ok(())
    }
}
