use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::trim::FlightCondition;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid design configuration: {0}")]
    ValidationError(String),
}

/// Run configuration for a control-design pass.
///
/// ```yaml
/// condition:
///   airspeed: 100.0
///   flight_path_deg: 0.0
///   fuel_fraction: 0.8
/// output: linearized_matrices.csv
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct DesignConfig {
    #[serde(default)]
    pub condition: FlightCondition,
    /// Where to write the system matrices, if anywhere
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            condition: FlightCondition::default(),
            output: None,
        }
    }
}

impl DesignConfig {
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: DesignConfig = serde_yaml::from_str(contents)?;
        config
            .condition
            .validate()
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }
}
