//! Wire types for the schedule generation service.
//!
//! The service speaks camelCase JSON; the serde renames below are the
//! contract. `userData` is the user's stored documents keyed by document
//! name, each record carrying its own name again under `documentName` so the
//! service can group records by slot prefix.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::Term;

/// Request payload for one generation run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Every stored timetable document of the user, keyed by document name.
    pub user_data: HashMap<String, HashMap<String, String>>,
    pub full_name: String,
    /// Year-level half of the document-name prefix, e.g. `"1"`.
    pub year_level: String,
    /// Semester half of the document-name prefix, e.g. `"1st Sem"`.
    pub semester_year: String,
    /// Days the student can attend, as day names.
    pub available_day: Vec<String>,
    /// Courses being retaken; the service weighs them higher.
    pub back_subjects: Vec<String>,
}

impl GenerateRequest {
    /// Build a request for one term.
    ///
    /// The service selects documents whose name starts with
    /// `"{year}_{label}"`, so the two prefix fields are derived from the
    /// term rather than passed as free text.
    pub fn for_term(
        user_data: HashMap<String, HashMap<String, String>>,
        full_name: impl Into<String>,
        term: &Term,
        available_day: Vec<String>,
        back_subjects: Vec<String>,
    ) -> Self {
        Self {
            user_data,
            full_name: full_name.into(),
            year_level: term.year.to_string(),
            semester_year: term.semester.label().to_string(),
            available_day,
            back_subjects,
        }
    }
}

/// One placement in a generated schedule: the encoded assignment field plus
/// the section it was taken from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidatePlacement {
    pub schedule: String,
    pub section: String,
}

/// Response payload: two candidate schedules with their fitness scores.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub message: String,
    pub hybrid_schedule: HashMap<String, CandidatePlacement>,
    pub hybrid_score: f64,
    pub pso_schedule: HashMap<String, CandidatePlacement>,
    pub pso_score: f64,
}
