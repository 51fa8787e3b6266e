//! Store-agnostic load and save of timetables.
//!
//! These functions work with any [`DocumentStore`] implementation and hold
//! the rules that must not vary per backend: the tolerant decode on load and
//! the validate-before-write gate on save. A backend only moves records; what
//! a record means lives here.

use std::collections::HashMap;

use log::{info, warn};
use thiserror::Error;

use crate::codec;
use crate::curriculum::Curriculum;
use crate::models::{CourseCode, SlotKey, UserId};
use crate::services::validation::{validate_complete, ScheduleIncomplete};
use crate::store::{DocumentPath, DocumentStore, Record, StoreError, StoreResult};
use crate::timetable::Timetable;

/// Error from the save path.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The timetable failed the completeness gate; nothing was written.
    #[error(transparent)]
    Incomplete(#[from] ScheduleIncomplete),

    /// The store rejected the write.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Load the timetable stored for one slot.
///
/// # Arguments
/// * `store` - Document store implementation
/// * `user` - Owner of the collection the slot lives in
/// * `slot` - Term and section to load
///
/// # Returns
/// * `Ok(Timetable)` - The decoded timetable; empty when no document exists
/// * `Err` if the store read fails
///
/// The decode is tolerant: a field that fails to decode is logged and
/// skipped, never fatal, so one corrupt value cannot lock a user out of the
/// rest of their schedule. Every field that does decode is installed,
/// including those with an empty time range; whether such an assignment
/// counts as scheduled is the validation gate's business, and a later save
/// rewrites the field rather than dropping it.
pub async fn load_timetable<S: DocumentStore + ?Sized>(
    store: &S,
    user: &UserId,
    slot: &SlotKey,
) -> StoreResult<Timetable> {
    let path = DocumentPath::for_slot(user, slot);
    info!("Service layer: loading timetable {}", path);

    let record = match store.get(&path).await? {
        Some(record) => record,
        None => {
            info!("Service layer: no document at {}, starting empty", path);
            return Ok(Timetable::new());
        }
    };

    Ok(decode_record(&path, record))
}

fn decode_record(path: &DocumentPath, record: Record) -> Timetable {
    let mut assignments = HashMap::new();
    for (course, field) in record {
        match codec::decode(&field) {
            Ok(assignment) => {
                assignments.insert(CourseCode::from(course), assignment);
            }
            Err(err) => {
                warn!(
                    "Service layer: skipping undecodable field '{}' in {}: {}",
                    course, path, err
                );
            }
        }
    }
    Timetable::from(assignments)
}

/// Persist a slot's timetable, replacing the stored document in full.
///
/// # Arguments
/// * `store` - Document store implementation
/// * `user` - Owner of the collection the slot lives in
/// * `slot` - Term and section to save under
/// * `timetable` - The assignments to persist
/// * `curriculum` - Requirement table the timetable is validated against
///
/// # Returns
/// * `Ok(())` if the document was written
/// * `Err(SaveError::Incomplete)` if required courses are unscheduled; the
///   store is not touched in that case
/// * `Err(SaveError::Store)` if the write fails
pub async fn save_timetable<S: DocumentStore + ?Sized>(
    store: &S,
    user: &UserId,
    slot: &SlotKey,
    timetable: &Timetable,
    curriculum: &Curriculum,
) -> Result<(), SaveError> {
    let path = DocumentPath::for_slot(user, slot);
    info!(
        "Service layer: saving timetable {} ({} assignments)",
        path,
        timetable.len()
    );

    if let Err(incomplete) = validate_complete(&slot.term, timetable, curriculum) {
        warn!("Service layer: refusing to save {}: {}", path, incomplete);
        return Err(incomplete.into());
    }

    let record = encode_record(timetable);
    store.set(&path, record).await?;
    info!("Service layer: saved timetable {}", path);
    Ok(())
}

fn encode_record(timetable: &Timetable) -> Record {
    timetable
        .iter()
        .map(|(course, assignment)| (course.as_str().to_string(), codec::encode(assignment)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::{SectionId, Semester, Term, Weekday};
    use crate::store::MemoryStore;

    fn tiny_curriculum() -> Curriculum {
        let mut terms = HashMap::new();
        terms.insert(
            "1-1st Sem".to_string(),
            vec![CourseCode::from("AAA101"), CourseCode::from("BBB102")],
        );
        Curriculum::new(terms)
    }

    fn slot() -> SlotKey {
        SlotKey::new(Term::new(1, Semester::First), SectionId::from("YA-1"))
    }

    fn user() -> UserId {
        UserId::from("uid-1")
    }

    fn record(fields: &[(&str, &str)]) -> Record {
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_load_missing_document_is_empty() {
        let store = MemoryStore::new();

        let timetable = load_timetable(&store, &user(), &slot()).await.unwrap();
        assert!(timetable.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let store = MemoryStore::new();
        let mut timetable = Timetable::new();
        timetable.set_assignment("AAA101".into(), Weekday::Monday, "7:00 - 10:00");
        timetable.set_assignment("BBB102".into(), Weekday::Friday, "13:00 - 16:00");

        save_timetable(&store, &user(), &slot(), &timetable, &tiny_curriculum())
            .await
            .unwrap();

        let loaded = load_timetable(&store, &user(), &slot()).await.unwrap();
        assert_eq!(loaded, timetable);
    }

    #[tokio::test]
    async fn test_load_skips_undecodable_fields() {
        let store = MemoryStore::new();
        let path = DocumentPath::for_slot(&user(), &slot());
        store
            .set(
                &path,
                record(&[
                    ("AAA101", "Monday | 7:00 - 10:00"),
                    ("BBB102", "not a valid field"),
                    ("CCC103", "Blursday | 7:00 - 10:00"),
                ]),
            )
            .await
            .unwrap();

        let loaded = load_timetable(&store, &user(), &slot()).await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded.assignment("AAA101").is_some());
        assert!(loaded.assignment("BBB102").is_none());
        assert!(loaded.assignment("CCC103").is_none());
    }

    #[tokio::test]
    async fn test_load_installs_fields_with_empty_time_range() {
        let store = MemoryStore::new();
        let path = DocumentPath::for_slot(&user(), &slot());
        store
            .set(
                &path,
                record(&[
                    ("AAA101", "Monday | "),
                    ("BBB102", "Tuesday | 10:00 - 13:00"),
                ]),
            )
            .await
            .unwrap();

        // The day stays pinned even without a time; only validation treats
        // the course as unscheduled.
        let loaded = load_timetable(&store, &user(), &slot()).await.unwrap();
        assert_eq!(loaded.len(), 2);
        let blank = loaded.assignment("AAA101").unwrap();
        assert_eq!(blank.day, Weekday::Monday);
        assert_eq!(blank.time_range, "");
        assert!(!blank.has_time());
    }

    #[tokio::test]
    async fn test_incomplete_save_is_refused_and_writes_nothing() {
        let store = MemoryStore::new();
        let mut timetable = Timetable::new();
        timetable.set_assignment("AAA101".into(), Weekday::Monday, "7:00 - 10:00");

        let err = save_timetable(&store, &user(), &slot(), &timetable, &tiny_curriculum())
            .await
            .unwrap_err();

        match err {
            SaveError::Incomplete(incomplete) => {
                let codes: Vec<&str> = incomplete.missing.iter().map(CourseCode::as_str).collect();
                assert_eq!(codes, vec!["BBB102"]);
            }
            other => panic!("expected Incomplete, got {:?}", other),
        }
        assert_eq!(store.document_count(), 0);
    }

    #[tokio::test]
    async fn test_save_replaces_the_whole_document() {
        let store = MemoryStore::new();
        let path = DocumentPath::for_slot(&user(), &slot());
        // Stale field from an earlier version of the schedule.
        store
            .set(&path, record(&[("ZZZ999", "Sunday | 7:00 - 10:00")]))
            .await
            .unwrap();

        let mut timetable = Timetable::new();
        timetable.set_assignment("AAA101".into(), Weekday::Monday, "7:00 - 10:00");
        timetable.set_assignment("BBB102".into(), Weekday::Friday, "13:00 - 16:00");
        save_timetable(&store, &user(), &slot(), &timetable, &tiny_curriculum())
            .await
            .unwrap();

        let loaded = load_timetable(&store, &user(), &slot()).await.unwrap();
        assert!(loaded.assignment("ZZZ999").is_none());
        assert_eq!(loaded.len(), 2);
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let store = MemoryStore::new();
        store.set_healthy(false);

        let err = load_timetable(&store, &user(), &slot()).await.unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));

        let mut timetable = Timetable::new();
        timetable.set_assignment("AAA101".into(), Weekday::Monday, "7:00 - 10:00");
        timetable.set_assignment("BBB102".into(), Weekday::Friday, "13:00 - 16:00");
        let err = save_timetable(&store, &user(), &slot(), &timetable, &tiny_curriculum())
            .await
            .unwrap_err();
        assert!(matches!(err, SaveError::Store(StoreError::Unavailable(_))));
    }
}
