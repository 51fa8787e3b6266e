//! Academic terms, sections and the slot key addressing one timetable.

use std::fmt;
use std::str::FromStr;

/// Semester within an academic year.
///
/// The label is the canonical string used in curriculum keys and document
/// names; note that two of the three contain a space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Semester {
    First,
    Second,
    Summer,
}

impl Semester {
    pub const ALL: [Semester; 3] = [Semester::First, Semester::Second, Semester::Summer];

    /// The canonical label: `"1st Sem"`, `"2nd Sem"` or `"Summer"`.
    pub fn label(&self) -> &'static str {
        match self {
            Semester::First => "1st Sem",
            Semester::Second => "2nd Sem",
            Semester::Summer => "Summer",
        }
    }

    /// Parse a canonical label back into a semester.
    pub fn from_label(s: &str) -> Option<Self> {
        Semester::ALL.iter().copied().find(|sem| sem.label() == s)
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Semester {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Semester::from_label(s).ok_or_else(|| format!("Unknown semester label: {}", s))
    }
}

/// One academic term: a year level paired with a semester.
///
/// Year levels run 1..=4 by convention but are not enforced; a term outside
/// the curriculum table simply has no required courses.
///
/// # Examples
///
/// ```
/// use timetable_rust::models::{Semester, Term};
///
/// let term = Term::new(2, Semester::First);
/// assert_eq!(term.curriculum_key(), "2-1st Sem");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Term {
    pub year: u8,
    pub semester: Semester,
}

impl Term {
    pub fn new(year: u8, semester: Semester) -> Self {
        Self { year, semester }
    }

    /// Key into the curriculum table: `"{year}-{label}"`.
    pub fn curriculum_key(&self) -> String {
        format!("{}-{}", self.year, self.semester.label())
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year, self.semester.label())
    }
}

/// Identifier of one section within a term (e.g. `"YA-1"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Address of one editable timetable: a term plus a section within it.
///
/// The document name is `"{year}_{label}_{section}"`, so a slot for year 1,
/// first semester, section YA-1 persists under `"1_1st Sem_YA-1"`. The space
/// inside the semester label is part of the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotKey {
    pub term: Term,
    pub section: SectionId,
}

impl SlotKey {
    pub fn new(term: Term, section: SectionId) -> Self {
        Self { term, section }
    }

    /// Name of the document this slot persists under.
    pub fn document_name(&self) -> String {
        format!(
            "{}_{}_{}",
            self.term.year,
            self.term.semester.label(),
            self.section
        )
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.document_name())
    }
}
