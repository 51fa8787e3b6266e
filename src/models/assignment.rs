//! A single course placement within a week.

use crate::models::Weekday;

/// Placement of one course: a day plus an opaque time-range label.
///
/// The time range (e.g. `"7:00 - 10:00"`) is never parsed or compared beyond
/// emptiness; it is stored and displayed verbatim. An assignment loaded from
/// an old record may carry an empty time range, the edit path never installs
/// one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub day: Weekday,
    pub time_range: String,
}

impl Assignment {
    pub fn new(day: Weekday, time_range: impl Into<String>) -> Self {
        Self {
            day,
            time_range: time_range.into(),
        }
    }

    /// Whether the time range is the empty string. Such an assignment counts
    /// as unscheduled for validation purposes.
    pub fn has_time(&self) -> bool {
        !self.time_range.is_empty()
    }
}
