//! Completeness validation for a slot's timetable.
//!
//! A timetable may only be persisted once every course the term requires has
//! a scheduled assignment. The check is exhaustive on purpose: it reports
//! every missing course in curriculum order, not just the first one found,
//! so a caller can surface the whole list at once.
//!
//! A course counts as missing when it has no assignment at all, or when its
//! assignment's time range is the empty string. Whitespace-only ranges count
//! as scheduled; only a loaded record can carry one.

use thiserror::Error;

use crate::curriculum::Curriculum;
use crate::models::{CourseCode, Term};
use crate::timetable::Timetable;

/// A timetable that cannot be saved yet: one or more required courses of its
/// term have no scheduled time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Incomplete schedule for {term}: missing {}", join_codes(.missing))]
pub struct ScheduleIncomplete {
    /// The term whose requirements were checked.
    pub term: Term,
    /// Every unscheduled required course, in curriculum order.
    pub missing: Vec<CourseCode>,
}

fn join_codes(codes: &[CourseCode]) -> String {
    codes
        .iter()
        .map(CourseCode::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Check a timetable against the required courses of a term.
///
/// Returns `Ok(())` when every required course is scheduled. Terms the
/// curriculum does not know pass vacuously, exactly as an empty requirement
/// list would.
pub fn validate_complete(
    term: &Term,
    timetable: &Timetable,
    curriculum: &Curriculum,
) -> Result<(), ScheduleIncomplete> {
    let missing: Vec<CourseCode> = curriculum
        .required_courses(term)
        .iter()
        .filter(|course| {
            timetable
                .assignment(course.as_str())
                .map_or(true, |assignment| !assignment.has_time())
        })
        .cloned()
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ScheduleIncomplete {
            term: *term,
            missing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::models::{Assignment, Semester, Weekday};

    fn first_term() -> Term {
        Term::new(1, Semester::First)
    }

    #[test]
    fn empty_timetable_reports_every_course_in_order() {
        let err = validate_complete(&first_term(), &Timetable::new(), Curriculum::builtin())
            .unwrap_err();

        let codes: Vec<&str> = err.missing.iter().map(CourseCode::as_str).collect();
        assert_eq!(
            codes,
            vec![
                "UNDS111", "STAS111", "TCWD111", "ENGL111", "VRTS111", "FOPR111", "ICOM111",
                "PCAS111"
            ]
        );
        assert_eq!(err.term, first_term());
    }

    #[test]
    fn partial_timetable_reports_only_the_gaps() {
        let mut timetable = Timetable::new();
        // Scheduled out of curriculum order; the report must not care.
        timetable.set_assignment("PCAS111".into(), Weekday::Friday, "13:00 - 16:00");
        timetable.set_assignment("UNDS111".into(), Weekday::Monday, "7:00 - 10:00");
        timetable.set_assignment("VRTS111".into(), Weekday::Wednesday, "10:00 - 13:00");

        let err = validate_complete(&first_term(), &timetable, Curriculum::builtin())
            .unwrap_err();

        let codes: Vec<&str> = err.missing.iter().map(CourseCode::as_str).collect();
        assert_eq!(codes, vec!["STAS111", "TCWD111", "ENGL111", "FOPR111", "ICOM111"]);
    }

    #[test]
    fn complete_timetable_passes() {
        let mut timetable = Timetable::new();
        for course in Curriculum::builtin().required_courses(&first_term()) {
            timetable.set_assignment(course.clone(), Weekday::Monday, "7:00 - 10:00");
        }

        assert!(validate_complete(&first_term(), &timetable, Curriculum::builtin()).is_ok());
    }

    #[test]
    fn empty_time_range_counts_as_missing() {
        // The editor cannot store an empty range, but a raw loaded record
        // can carry one; build the state directly.
        let mut assignments = HashMap::new();
        for course in Curriculum::builtin().required_courses(&first_term()) {
            assignments.insert(course.clone(), Assignment::new(Weekday::Monday, "7:00 - 10:00"));
        }
        assignments.insert(CourseCode::from("ENGL111"), Assignment::new(Weekday::Tuesday, ""));
        let timetable = Timetable::from(assignments);

        let err = validate_complete(&first_term(), &timetable, Curriculum::builtin())
            .unwrap_err();
        let codes: Vec<&str> = err.missing.iter().map(CourseCode::as_str).collect();
        assert_eq!(codes, vec!["ENGL111"]);
    }

    #[test]
    fn whitespace_time_range_counts_as_scheduled() {
        let mut assignments = HashMap::new();
        for course in Curriculum::builtin().required_courses(&first_term()) {
            assignments.insert(course.clone(), Assignment::new(Weekday::Monday, " "));
        }
        let timetable = Timetable::from(assignments);

        assert!(validate_complete(&first_term(), &timetable, Curriculum::builtin()).is_ok());
    }

    #[test]
    fn unknown_term_passes_vacuously() {
        let unknown = Term::new(3, Semester::Summer);
        assert!(validate_complete(&unknown, &Timetable::new(), Curriculum::builtin()).is_ok());
    }

    #[test]
    fn error_message_lists_courses() {
        let err = ScheduleIncomplete {
            term: first_term(),
            missing: vec![CourseCode::from("UNDS111"), CourseCode::from("STAS111")],
        };
        assert_eq!(
            err.to_string(),
            "Incomplete schedule for 1-1st Sem: missing UNDS111, STAS111"
        );
    }
}
