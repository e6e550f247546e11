//! Engine and ingestion settings.
//!
//! Settings are read from a JSON file; any field left out takes its default.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::engine::{FrequencyPolicy, DEFAULT_MATCH_TOLERANCE, MISSING_RCS};

/// Errors that can occur while loading settings.
#[derive(Debug)]
pub enum ConfigError {
    /// The settings file could not be read.
    Io(std::io::Error),
    /// The settings file is not valid JSON for these settings.
    Parse(serde_json::Error),
    /// A setting holds a value the engine cannot use.
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to read settings: {}", e),
            ConfigError::Parse(e) => write!(f, "Failed to parse settings: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid settings: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

/// Interpolation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Tolerance for matching a sample to a grid corner (MHz and degrees).
    pub match_tolerance: f64,
    /// RCS used for a corner with no sample, in dB(m²).
    pub missing_value: f64,
    /// Upper frequency bound behaviour above the sampled range.
    pub frequency_policy: FrequencyPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            match_tolerance: DEFAULT_MATCH_TOLERANCE,
            missing_value: MISSING_RCS,
            frequency_policy: FrequencyPolicy::default(),
        }
    }
}

impl EngineConfig {
    /// Checks that the tolerance is finite and positive and the missing
    /// value is finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.match_tolerance.is_finite() && self.match_tolerance > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "match_tolerance must be finite and positive, got {}",
                self.match_tolerance
            )));
        }
        if !self.missing_value.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "missing_value must be finite, got {}",
                self.missing_value
            )));
        }
        Ok(())
    }
}

/// Layout of the simulation export directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Root directory holding one folder per incidence direction.
    pub data_directory: PathBuf,
    /// Number of direction folders to look for (numbered from 1).
    pub direction_count: u32,
    /// Folder name prefix followed by the direction number.
    pub direction_prefix: String,
    /// Extension of the data files, without the dot.
    pub extension: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            data_directory: PathBuf::from("cst仿真结果txt文件"),
            direction_count: 8,
            direction_prefix: "方向".to_string(),
            extension: "txt".to_string(),
        }
    }
}

impl ReaderConfig {
    /// Creates a reader configuration rooted at `data_directory`.
    pub fn new(data_directory: impl Into<PathBuf>) -> Self {
        Self {
            data_directory: data_directory.into(),
            ..Default::default()
        }
    }

    /// Sets the number of direction folders.
    pub fn with_direction_count(mut self, direction_count: u32) -> Self {
        self.direction_count = direction_count;
        self
    }

    /// Folder path for a 1-based direction number.
    pub fn direction_path(&self, direction: u32) -> PathBuf {
        self.data_directory
            .join(format!("{}{}", self.direction_prefix, direction))
    }
}

/// Complete application settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkbenchConfig {
    pub engine: EngineConfig,
    pub reader: ReaderConfig,
}

impl WorkbenchConfig {
    /// Parses and validates settings from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        config.engine.validate()?;
        Ok(config)
    }

    /// Loads settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(config)
    }

    /// Loads settings, falling back to defaults if the file is missing.
    ///
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!("Settings file {} not found, using defaults", path.display());
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Serializes settings as pretty JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(ConfigError::Parse)
    }
}
