//! Planner configuration file support.
//!
//! This module reads crate configuration from a `planner.toml` file with
//! optional `[store]`, `[rest]` and `[optimizer]` tables, every field
//! defaulted so an absent file still yields a working (memory-backed)
//! configuration. Environment variables override file values.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::error::StoreError;

/// Planner configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub store: StoreSettings,
    #[serde(default)]
    pub rest: RestSettings,
    #[serde(default)]
    pub optimizer: OptimizerSettings,
}

/// Store backend selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Backend type: "memory" or "rest".
    #[serde(rename = "type", default = "default_store_type")]
    pub store_type: String,
}

/// REST backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestSettings {
    #[serde(default = "default_rest_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Schedule-generation service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizerSettings {
    #[serde(default = "default_optimizer_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_store_type() -> String {
    "memory".to_string()
}

fn default_rest_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_optimizer_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_timeout_secs() -> u64 {
    20
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            store_type: default_store_type(),
        }
    }
}

impl Default for RestSettings {
    fn default() -> Self {
        Self {
            base_url: default_rest_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for OptimizerSettings {
    fn default() -> Self {
        Self {
            base_url: default_optimizer_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl PlannerConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(PlannerConfig)` if successful
    /// * `Err(StoreError)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            StoreError::Configuration(format!("Failed to read config file: {}", e))
        })?;

        let config: PlannerConfig = toml::from_str(&content).map_err(|e| {
            StoreError::Configuration(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `planner.toml` in:
    /// 1. Current directory
    /// 2. Parent directory
    ///
    /// # Returns
    /// * `Ok(PlannerConfig)` if found and parsed successfully
    /// * `Err(StoreError)` if no config file found or parse error
    pub fn from_default_location() -> Result<Self, StoreError> {
        let search_paths = vec![
            PathBuf::from("planner.toml"),
            PathBuf::from("../planner.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(StoreError::Configuration(
            "No planner.toml found in standard locations".to_string(),
        ))
    }

    /// Resolve the effective configuration: the default-location file when
    /// present, built-in defaults otherwise, then environment overrides.
    pub fn load() -> Self {
        let mut config = Self::from_default_location().unwrap_or_default();
        config.apply_env_overrides();
        config
    }

    /// Apply environment variable overrides on top of this configuration.
    ///
    /// Recognized variables: `PLANNER_STORE_TYPE`, `PLANNER_REST_URL`,
    /// `PLANNER_OPTIMIZER_URL`.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(value) = std::env::var("PLANNER_STORE_TYPE") {
            self.store.store_type = value;
        }
        if let Ok(value) = std::env::var("PLANNER_REST_URL") {
            self.rest.base_url = value;
        }
        if let Ok(value) = std::env::var("PLANNER_OPTIMIZER_URL") {
            self.optimizer.base_url = value;
        }
    }
}
