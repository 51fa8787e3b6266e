//! Integration tests for the document store and the persistence services.

use std::collections::HashMap;
use std::sync::Arc;

use timetable_rust::models::{SectionId, Semester, SlotKey, Term, UserId, Weekday};
use timetable_rust::services::{load_timetable, save_timetable, SaveError};
use timetable_rust::store::{DocumentPath, DocumentStore, MemoryStore, StoreError};
use timetable_rust::{Curriculum, Timetable};

fn first_term() -> Term {
    Term::new(1, Semester::First)
}

fn slot(section: &str) -> SlotKey {
    SlotKey::new(first_term(), SectionId::from(section))
}

fn user() -> UserId {
    UserId::from("integration-user")
}

/// A timetable with every required course of the term scheduled.
fn complete_timetable(term: &Term) -> Timetable {
    let mut timetable = Timetable::new();
    for course in Curriculum::builtin().required_courses(term) {
        timetable.set_assignment(course.clone(), Weekday::Monday, "7:00 - 10:00");
    }
    timetable
}

#[tokio::test]
async fn test_store_health_check() {
    let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
    let result = store.health_check().await;
    assert!(result.is_ok());
    assert!(result.unwrap());
}

#[tokio::test]
async fn test_absent_document_loads_empty() {
    let store = MemoryStore::new();

    let timetable = load_timetable(&store, &user(), &slot("YA-1")).await.unwrap();
    assert!(timetable.is_empty());
    assert_eq!(store.document_count(), 0);
}

#[tokio::test]
async fn test_save_and_reload_round_trip() {
    let store = MemoryStore::new();
    let timetable = complete_timetable(&first_term());

    save_timetable(
        &store,
        &user(),
        &slot("YA-1"),
        &timetable,
        Curriculum::builtin(),
    )
    .await
    .unwrap();

    let reloaded = load_timetable(&store, &user(), &slot("YA-1")).await.unwrap();
    assert_eq!(reloaded, timetable);
    assert!(store.has_document(&DocumentPath::new(
        "integration-user",
        "1_1st Sem_YA-1"
    )));
}

#[tokio::test]
async fn test_save_replaces_the_stored_document() {
    let store = MemoryStore::new();

    // First save includes an extra course beyond the requirements.
    let mut first = complete_timetable(&first_term());
    first.set_assignment("ZZZ999".into(), Weekday::Saturday, "8:00 - 11:00");
    save_timetable(&store, &user(), &slot("YA-1"), &first, Curriculum::builtin())
        .await
        .unwrap();

    // Second save no longer has it; the reload must not either.
    let second = complete_timetable(&first_term());
    save_timetable(&store, &user(), &slot("YA-1"), &second, Curriculum::builtin())
        .await
        .unwrap();

    let reloaded = load_timetable(&store, &user(), &slot("YA-1")).await.unwrap();
    assert!(reloaded.assignment("ZZZ999").is_none());
    assert_eq!(reloaded, second);
}

#[tokio::test]
async fn test_blank_time_fields_survive_a_save_cycle() {
    let store = MemoryStore::new();
    let path = DocumentPath::new("integration-user", "1_1st Sem_YA-1");

    // A stored record may hold a day with no time yet. Loading, editing an
    // unrelated course and saving writes that field back unchanged.
    let mut stored: HashMap<String, String> = Curriculum::builtin()
        .required_courses(&first_term())
        .iter()
        .map(|course| (course.to_string(), "Monday | 7:00 - 10:00".to_string()))
        .collect();
    stored.insert("XTRA101".to_string(), "Tuesday | ".to_string());
    store.set(&path, stored).await.unwrap();

    let mut timetable = load_timetable(&store, &user(), &slot("YA-1")).await.unwrap();
    timetable.set_assignment("UNDS111".into(), Weekday::Tuesday, "8:00 - 11:00");
    save_timetable(
        &store,
        &user(),
        &slot("YA-1"),
        &timetable,
        Curriculum::builtin(),
    )
    .await
    .unwrap();

    let saved = store.get(&path).await.unwrap().unwrap();
    assert_eq!(saved.get("XTRA101").map(String::as_str), Some("Tuesday | "));
    assert_eq!(
        saved.get("UNDS111").map(String::as_str),
        Some("Tuesday | 8:00 - 11:00")
    );
}

#[tokio::test]
async fn test_slots_are_isolated() {
    let store = MemoryStore::new();
    let timetable = complete_timetable(&first_term());

    save_timetable(
        &store,
        &user(),
        &slot("YA-1"),
        &timetable,
        Curriculum::builtin(),
    )
    .await
    .unwrap();

    let other = load_timetable(&store, &user(), &slot("YA-2")).await.unwrap();
    assert!(other.is_empty());

    let other_user = load_timetable(&store, &UserId::from("someone-else"), &slot("YA-1"))
        .await
        .unwrap();
    assert!(other_user.is_empty());
}

#[tokio::test]
async fn test_unhealthy_store_rejects_operations() {
    let store = MemoryStore::new();
    store.set_healthy(false);

    assert!(!store.health_check().await.unwrap());

    let result = load_timetable(&store, &user(), &slot("YA-1")).await;
    assert!(matches!(result.unwrap_err(), StoreError::Unavailable(_)));

    let timetable = complete_timetable(&first_term());
    let result = save_timetable(
        &store,
        &user(),
        &slot("YA-1"),
        &timetable,
        Curriculum::builtin(),
    )
    .await;
    assert!(matches!(
        result.unwrap_err(),
        SaveError::Store(StoreError::Unavailable(_))
    ));

    // Health recovers and so do the operations.
    store.set_healthy(true);
    save_timetable(
        &store,
        &user(),
        &slot("YA-1"),
        &timetable,
        Curriculum::builtin(),
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn test_concurrent_saves_to_distinct_slots() {
    use tokio::task::JoinSet;

    let store = Arc::new(MemoryStore::new());
    let mut set = JoinSet::new();

    for i in 1..=10 {
        let store_clone = store.clone();
        set.spawn(async move {
            let timetable = complete_timetable(&first_term());
            let slot = SlotKey::new(first_term(), SectionId::new(format!("YA-{}", i)));
            save_timetable(
                store_clone.as_ref(),
                &user(),
                &slot,
                &timetable,
                Curriculum::builtin(),
            )
            .await
        });
    }

    let mut count = 0;
    while let Some(result) = set.join_next().await {
        assert!(result.is_ok());
        assert!(result.unwrap().is_ok());
        count += 1;
    }
    assert_eq!(count, 10);
    assert_eq!(store.document_count(), 10);
}

#[tokio::test]
async fn test_helper_methods() {
    let store = MemoryStore::new();
    let path = DocumentPath::new("integration-user", "1_1st Sem_YA-1");

    assert_eq!(store.document_count(), 0);
    assert!(!store.has_document(&path));

    let timetable = complete_timetable(&first_term());
    save_timetable(
        &store,
        &user(),
        &slot("YA-1"),
        &timetable,
        Curriculum::builtin(),
    )
    .await
    .unwrap();

    assert_eq!(store.document_count(), 1);
    assert!(store.has_document(&path));

    store.clear();
    assert_eq!(store.document_count(), 0);
}
