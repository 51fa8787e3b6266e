//! Course code identifier.

use std::borrow::Borrow;
use std::fmt;

/// Identifier of a course in the curriculum (e.g. `"FOPR111"`).
///
/// The code is treated as an opaque string; the curriculum table is the only
/// authority on which codes exist for a given term.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseCode(String);

impl CourseCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CourseCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CourseCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// Lets `HashMap<CourseCode, _>` be queried with a plain `&str`.
impl Borrow<str> for CourseCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}
