//! In-memory document store implementation.
//!
//! This module provides an in-process implementation of the document store
//! contract suitable for unit testing and local development. All data lives
//! in memory behind a shared lock, giving fast, deterministic and isolated
//! execution, with a health toggle for exercising outage paths.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::document::{DocumentPath, DocumentStore, Record};
use super::error::{StoreError, StoreResult};

/// In-memory document store.
///
/// Cloning is cheap and shares the underlying data, so a test can hold one
/// handle while the code under test owns another.
#[derive(Clone)]
pub struct MemoryStore {
    data: Arc<RwLock<MemoryData>>,
}

struct MemoryData {
    // collection name -> document name -> record
    collections: HashMap<String, HashMap<String, Record>>,
    is_healthy: bool,
}

impl Default for MemoryData {
    fn default() -> Self {
        Self {
            collections: HashMap::new(),
            is_healthy: true,
        }
    }
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(MemoryData::default())),
        }
    }

    /// Set the health status for testing outage behavior. While unhealthy,
    /// every operation fails with [`StoreError::Unavailable`].
    pub fn set_healthy(&self, healthy: bool) {
        let mut data = self.data.write().unwrap();
        data.is_healthy = healthy;
    }

    /// Drop all documents, keeping the health status.
    pub fn clear(&self) {
        let mut data = self.data.write().unwrap();
        data.collections.clear();
    }

    /// Total number of documents across all collections.
    pub fn document_count(&self) -> usize {
        let data = self.data.read().unwrap();
        data.collections.values().map(HashMap::len).sum()
    }

    /// Whether a document exists.
    pub fn has_document(&self, path: &DocumentPath) -> bool {
        let data = self.data.read().unwrap();
        data.collections
            .get(&path.collection)
            .is_some_and(|docs| docs.contains_key(&path.document))
    }

    /// Helper to check health and return an error if unhealthy.
    fn check_health(&self) -> StoreResult<()> {
        let data = self.data.read().unwrap();
        if !data.is_healthy {
            return Err(StoreError::Unavailable(
                "Document store is not healthy".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn health_check(&self) -> StoreResult<bool> {
        let data = self.data.read().unwrap();
        Ok(data.is_healthy)
    }

    async fn get(&self, path: &DocumentPath) -> StoreResult<Option<Record>> {
        self.check_health()?;

        let data = self.data.read().unwrap();
        Ok(data
            .collections
            .get(&path.collection)
            .and_then(|docs| docs.get(&path.document))
            .cloned())
    }

    async fn set(&self, path: &DocumentPath, record: Record) -> StoreResult<()> {
        self.check_health()?;

        let mut data = self.data.write().unwrap();
        data.collections
            .entry(path.collection.clone())
            .or_default()
            .insert(path.document.clone(), record);
        Ok(())
    }

    async fn list_collection(&self, collection: &str) -> StoreResult<Vec<(String, Record)>> {
        self.check_health()?;

        let data = self.data.read().unwrap();
        let mut documents: Vec<(String, Record)> = data
            .collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(name, record)| (name.clone(), record.clone()))
                    .collect()
            })
            .unwrap_or_default();

        documents.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(documents)
    }
}
