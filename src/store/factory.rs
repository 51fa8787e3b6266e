//! Store factory for backend selection.
//!
//! This module provides utilities for creating document store instances
//! based on runtime configuration.

use std::sync::Arc;

use super::config::PlannerConfig;
use super::document::DocumentStore;
use super::error::{StoreError, StoreResult};
use super::memory::MemoryStore;

/// Store backend configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// In-memory store (development and tests)
    Memory,
    /// HTTP document store service
    Rest,
}

impl StoreKind {
    /// Parse a store kind from string.
    ///
    /// # Arguments
    /// * `s` - String representation ("memory", "rest")
    ///
    /// # Returns
    /// * `Ok(StoreKind)` if valid
    /// * `Err` if invalid
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "rest" => Ok(Self::Rest),
            _ => Err(format!("Unknown store type: {}", s)),
        }
    }

    /// Get the store kind from the environment.
    ///
    /// Reads the `PLANNER_STORE_TYPE` environment variable. Defaults to
    /// Memory if not set or unrecognized.
    pub fn from_env() -> Self {
        std::env::var("PLANNER_STORE_TYPE")
            .ok()
            .and_then(|s| Self::from_str(&s).ok())
            .unwrap_or(Self::Memory)
    }
}

/// Factory for creating document store instances.
///
/// # Example
/// ```
/// use timetable_rust::store::{PlannerConfig, StoreFactory, StoreKind};
///
/// let config = PlannerConfig::default();
/// let store = StoreFactory::create(StoreKind::Memory, &config).unwrap();
/// ```
pub struct StoreFactory;

impl StoreFactory {
    /// Create a store instance of the given kind.
    ///
    /// # Arguments
    /// * `kind` - Which backend to create
    /// * `config` - Planner configuration (backend settings)
    ///
    /// # Returns
    /// * `Ok(Arc<dyn DocumentStore>)` - Store instance
    /// * `Err(StoreError)` - If creation fails or the backend is not compiled in
    pub fn create(kind: StoreKind, config: &PlannerConfig) -> StoreResult<Arc<dyn DocumentStore>> {
        match kind {
            StoreKind::Memory => Ok(Self::create_memory()),
            StoreKind::Rest => Self::create_rest(config),
        }
    }

    /// Create an in-memory store.
    pub fn create_memory() -> Arc<dyn DocumentStore> {
        Arc::new(MemoryStore::new())
    }

    #[cfg(feature = "rest-store")]
    fn create_rest(config: &PlannerConfig) -> StoreResult<Arc<dyn DocumentStore>> {
        let store = super::rest::RestStore::new(&config.rest)?;
        Ok(Arc::new(store))
    }

    #[cfg(not(feature = "rest-store"))]
    fn create_rest(_config: &PlannerConfig) -> StoreResult<Arc<dyn DocumentStore>> {
        Err(StoreError::Configuration(
            "REST store requested but the rest-store feature is not enabled".to_string(),
        ))
    }

    /// Create a store from a resolved configuration.
    ///
    /// # Returns
    /// * `Ok(Arc<dyn DocumentStore>)` - Store instance
    /// * `Err(StoreError)` - If the configured type is unknown or creation fails
    pub fn from_config(config: &PlannerConfig) -> StoreResult<Arc<dyn DocumentStore>> {
        let kind = StoreKind::from_str(&config.store.store_type)
            .map_err(StoreError::Configuration)?;
        Self::create(kind, config)
    }
}
