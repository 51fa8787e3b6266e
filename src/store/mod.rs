//! Document store module for timetable persistence.
//!
//! This module provides abstractions over the flat document store that holds
//! saved timetables, allowing different storage backends to be swapped
//! easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │  Service Layer (services/) - load/save/session  │
//! └──────────────────────┬──────────────────────────┘
//!                        │
//! ┌──────────────────────▼──────────────────────────┐
//! │  DocumentStore trait (document.rs)              │
//! └──────────────────────┬──────────────────────────┘
//!                        │
//!          ┌─────────────┴─────────────┐
//!          │                           │
//! ┌────────▼─────────┐      ┌──────────▼─────────┐
//! │  MemoryStore     │      │  RestStore         │
//! │  (in-process)    │      │  (HTTP service)    │
//! └──────────────────┘      └────────────────────┘
//! ```
//!
//! The module includes:
//! - `document`: the store contract ([`DocumentStore`], [`DocumentPath`], [`Record`])
//! - `memory`: in-memory implementation for unit testing and local development
//! - `rest`: HTTP implementation (feature `rest-store`)
//! - `config`: `planner.toml` settings with environment overrides
//! - `factory`: backend selection from configuration
//!
//! A process-wide store handle is available through [`init_store`] /
//! [`get_store`] for callers that want one shared backend without threading
//! it through; sessions also accept an explicit handle.

pub mod config;
pub mod document;
pub mod error;
pub mod factory;
pub mod memory;
#[cfg(feature = "rest-store")]
pub mod rest;

pub use config::{OptimizerSettings, PlannerConfig, RestSettings, StoreSettings};
pub use document::{DocumentPath, DocumentStore, Record};
pub use error::{StoreError, StoreResult};
pub use factory::{StoreFactory, StoreKind};
pub use memory::MemoryStore;
#[cfg(feature = "rest-store")]
pub use rest::RestStore;

use anyhow::{Context, Result};
use log::warn;
use std::sync::{Arc, OnceLock};

/// Global store instance initialized once per process.
static STORE: OnceLock<Arc<dyn DocumentStore>> = OnceLock::new();

/// Initialize the global document store.
///
/// Resolves `planner.toml` plus environment overrides and creates the
/// configured backend (memory by default, so no configuration is required
/// for local use).
///
/// This function is idempotent: calling it again after a successful
/// initialization is a no-op.
///
/// # Examples
///
/// ```
/// use timetable_rust::store::init_store;
///
/// fn main() -> anyhow::Result<()> {
///     init_store()?;
///     Ok(())
/// }
/// ```
pub fn init_store() -> Result<()> {
    if STORE.get().is_some() {
        return Ok(());
    }

    let config = PlannerConfig::load();
    let store = StoreFactory::from_config(&config)
        .context("Failed to create document store from configuration")?;

    // A concurrent init may have won the race; either instance is fine.
    let _ = STORE.set(store);

    Ok(())
}

/// Install a specific backend as the global store.
///
/// Useful for tests and embedders that construct their own backend. If the
/// global store is already initialized the call is ignored with a warning.
pub fn init_store_with(store: Arc<dyn DocumentStore>) {
    if STORE.set(store).is_err() {
        warn!("Global document store already initialized; keeping the existing instance");
    }
}

/// Get a reference to the global document store.
///
/// Initializes the store lazily from configuration if nobody has done so
/// yet.
///
/// # Errors
///
/// Returns an error if the store is absent and cannot be initialized.
pub fn get_store() -> Result<&'static Arc<dyn DocumentStore>> {
    if STORE.get().is_none() {
        // Best-effort lazy init so callers need no explicit setup for the
        // default memory backend.
        let _ = init_store();
    }

    STORE
        .get()
        .context("Document store not initialized. Call init_store() first.")
}
