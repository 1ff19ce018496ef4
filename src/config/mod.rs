//! YAML configuration file handling.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

fn default_max_rows() -> usize {
    85_000
}
fn default_max_cols() -> usize {
    75
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Hard cap on input rows; extra rows are truncated before analysis.
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,

    /// Hard cap on input columns; more is a read error.
    #[serde(default = "default_max_cols")]
    pub max_cols: usize,

    /// Default worker → company reference file, used when `--employees`
    /// is not passed on the command line.
    #[serde(default)]
    pub employees_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_rows: default_max_rows(),
            max_cols: default_max_cols(),
            employees_file: None,
        }
    }
}

impl Config {
    /// Standard configuration directory depending on the platform.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".warestat")
    }

    /// Full path of the config file.
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("warestat.conf")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Create the config directory and write the default config file.
    pub fn init_all() -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        let yaml = serde_yaml::to_string(&Self::default()).map_err(|_| AppError::ConfigSave)?;
        fs::write(&path, yaml).map_err(|_| AppError::ConfigSave)?;
        Ok(path)
    }

    /// Validate that the configured values make sense.
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.max_rows == 0 {
            problems.push("max_rows must be greater than 0".to_string());
        }
        if self.max_cols < 3 {
            problems.push("max_cols must be at least 3".to_string());
        }
        if let Some(f) = &self.employees_file {
            if !PathBuf::from(f).exists() {
                problems.push(format!("employees_file does not exist: {}", f));
            }
        }
        problems
    }
}
