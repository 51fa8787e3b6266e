//! Document store contract.
//!
//! The persistence target is a flat document store: each user owns a
//! collection, each timetable slot one document in it, and each document is a
//! plain string field map (course code to encoded assignment). This trait is
//! everything the rest of the crate knows about it; backends are swapped
//! behind it.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::models::{SlotKey, UserId};

use super::error::StoreResult;

/// A stored document: flat map of field name to string value.
pub type Record = HashMap<String, String>;

/// Address of one document: a collection name plus a document name.
///
/// For timetable slots the collection is the user id and the document name is
/// the slot's `"{year}_{label}_{section}"` form.
///
/// # Examples
///
/// ```
/// use timetable_rust::models::{SectionId, Semester, SlotKey, Term, UserId};
/// use timetable_rust::store::DocumentPath;
///
/// let slot = SlotKey::new(Term::new(1, Semester::First), SectionId::from("YA-1"));
/// let path = DocumentPath::for_slot(&UserId::from("uid-1"), &slot);
/// assert_eq!(path.to_string(), "uid-1/1_1st Sem_YA-1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentPath {
    pub collection: String,
    pub document: String,
}

impl DocumentPath {
    pub fn new(collection: impl Into<String>, document: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            document: document.into(),
        }
    }

    /// Path of the document a timetable slot persists under.
    pub fn for_slot(user: &UserId, slot: &SlotKey) -> Self {
        Self::new(user.as_str(), slot.document_name())
    }
}

impl std::fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.collection, self.document)
    }
}

/// Trait for flat document storage backends.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Check if the store is reachable and healthy.
    ///
    /// # Returns
    /// - `Ok(true)` if the store is healthy
    /// - `Ok(false)` if the store reports itself unhealthy without erroring
    /// - `Err(StoreError)` if the check itself fails
    async fn health_check(&self) -> StoreResult<bool>;

    /// Fetch a document.
    ///
    /// # Returns
    /// - `Ok(Some(record))` if the document exists
    /// - `Ok(None)` if it does not; absence is a normal state, not an error
    /// - `Err(StoreError)` if the store cannot answer
    async fn get(&self, path: &DocumentPath) -> StoreResult<Option<Record>>;

    /// Write a document, replacing any existing contents in full.
    ///
    /// There is no merge: fields absent from `record` are gone after the
    /// write. A missing document is created.
    async fn set(&self, path: &DocumentPath, record: Record) -> StoreResult<()>;

    /// List every document in a collection as `(document name, record)`
    /// pairs. An unknown collection is an empty list.
    async fn list_collection(&self, collection: &str) -> StoreResult<Vec<(String, Record)>>;
}
