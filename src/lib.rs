//! Core library for a student timetable planner.
//!
//! Each user owns one weekly timetable per term-and-section slot. The crate
//! covers the whole editing loop: the domain types, the string codec the
//! persisted documents use, the completeness validation that gates saving,
//! the document store abstraction with its backends, and the stateful
//! session that ties sign-in, slot selection, editing and saving together.
//!
//! # Features
//!
//! * `memory-store` (default) - in-memory backend, also used by tests
//! * `rest-store` - HTTP backend speaking to a document-store gateway
//! * `optimizer` - client for the external schedule generation service
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use timetable_rust::models::{SectionId, Semester, SlotKey, Term, UserId, Weekday};
//! use timetable_rust::services::PlannerSession;
//! use timetable_rust::store::MemoryStore;
//! use timetable_rust::Curriculum;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut session = PlannerSession::new(Arc::new(MemoryStore::new()));
//!     session.sign_in(UserId::from("uid-1"));
//!
//!     let term = Term::new(1, Semester::First);
//!     session.add_section(&term);
//!     session
//!         .activate(SlotKey::new(term, SectionId::from("YA-1")))
//!         .await?;
//!
//!     for course in Curriculum::builtin().required_courses(&term) {
//!         session.edit(course.clone(), Weekday::Monday, "7:00 - 10:00")?;
//!     }
//!     session.save().await?;
//!     Ok(())
//! }
//! ```

pub mod codec;
pub mod curriculum;
pub mod models;
#[cfg(feature = "optimizer")]
pub mod optimizer;
pub mod sections;
pub mod services;
pub mod store;
pub mod timetable;

pub use curriculum::Curriculum;
pub use timetable::Timetable;
