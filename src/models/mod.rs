//! Core domain types for student timetables.
//!
//! This module provides the vocabulary the rest of the crate is written in:
//! days, course codes, terms and sections, assignments, and the opaque user
//! identity handed over by the authentication provider.

pub mod assignment;
pub mod course;
pub mod day;
pub mod term;
pub mod user;

pub use assignment::Assignment;
pub use course::CourseCode;
pub use day::Weekday;
pub use term::{SectionId, Semester, SlotKey, Term};
pub use user::UserId;
