//! Working timetable for one slot.
//!
//! A `Timetable` is the in-memory editing state behind one grid: at most one
//! assignment per course. All edits funnel through [`Timetable::set_assignment`],
//! which is what upholds the one-day-per-course rule; there is no way to give
//! a course a second day without replacing the first.

use std::collections::HashMap;

use crate::models::{Assignment, CourseCode, Weekday};

/// Map of course code to its single assignment.
///
/// # Examples
///
/// ```
/// use timetable_rust::Timetable;
/// use timetable_rust::models::Weekday;
///
/// let mut timetable = Timetable::new();
/// timetable.set_assignment("FOPR111".into(), Weekday::Monday, "7:00 - 10:00");
/// timetable.set_assignment("FOPR111".into(), Weekday::Friday, "13:00 - 16:00");
///
/// // The Friday edit replaced Monday; one day per course, always.
/// let assignment = timetable.assignment("FOPR111").unwrap();
/// assert_eq!(assignment.day, Weekday::Friday);
/// assert_eq!(timetable.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timetable {
    assignments: HashMap<CourseCode, Assignment>,
}

impl Timetable {
    /// Create an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one edit: place `course` on `day` at `time_range`, or clear it.
    ///
    /// A time range that is blank after trimming never installs anything: it
    /// removes the course's existing assignment if there is one and is a
    /// no-op otherwise, whatever day was supplied. A non-blank time range
    /// installs the assignment verbatim (untrimmed), replacing any previous
    /// day for that course.
    ///
    /// Returns whether the timetable changed. Re-applying an identical edit
    /// returns `false` and leaves the state untouched.
    pub fn set_assignment(&mut self, course: CourseCode, day: Weekday, time_range: &str) -> bool {
        if time_range.trim().is_empty() {
            return self.assignments.remove(&course).is_some();
        }

        let next = Assignment::new(day, time_range);
        match self.assignments.get(&course) {
            Some(current) if *current == next => false,
            _ => {
                self.assignments.insert(course, next);
                true
            }
        }
    }

    /// Current assignment for a course, if any.
    pub fn assignment(&self, course: &str) -> Option<&Assignment> {
        self.assignments.get(course)
    }

    /// Remove a course's assignment, returning it if present.
    pub fn remove(&mut self, course: &str) -> Option<Assignment> {
        self.assignments.remove(course)
    }

    /// Replace the entire contents, as the load path does after decoding a
    /// stored document.
    pub fn replace_all(&mut self, assignments: HashMap<CourseCode, Assignment>) {
        self.assignments = assignments;
    }

    /// Discard all assignments.
    pub fn clear(&mut self) {
        self.assignments.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Iterate over `(course, assignment)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&CourseCode, &Assignment)> {
        self.assignments.iter()
    }
}

impl From<HashMap<CourseCode, Assignment>> for Timetable {
    fn from(assignments: HashMap<CourseCode, Assignment>) -> Self {
        Self { assignments }
    }
}
