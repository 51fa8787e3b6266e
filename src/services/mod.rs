//! Service layer for timetable business logic.
//!
//! This module sits between the domain types and the document store
//! backends. Services orchestrate store calls and implement the rules that
//! hold regardless of backend: tolerant decoding on load, completeness
//! validation before save, and the session lifecycle around both.

pub mod session;
pub mod timetables;
pub mod validation;


pub use session::{LoadState, LoadTicket, PlannerSession, SaveOutcome, SessionError};
pub use timetables::{load_timetable, save_timetable, SaveError};
pub use validation::{validate_complete, ScheduleIncomplete};
