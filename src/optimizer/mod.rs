//! Client for the external schedule generation service.
//!
//! Generation does not run in-process. A separate optimization service takes
//! every stored timetable a user has, plus their availability and retake
//! list, and answers with two candidate schedules (labelled hybrid and PSO)
//! along with their fitness scores. This module holds the wire types and the
//! HTTP client for that service; nothing here interprets the candidates
//! beyond their shape.

pub mod client;
pub mod types;

pub use client::{collect_user_data, OptimizerClient, OptimizerError};
pub use types::{CandidatePlacement, GenerateRequest, GenerateResponse};
