//! Days of the week as they appear in stored timetable records.

use std::fmt;
use std::str::FromStr;

/// Day of the week an assignment occupies.
///
/// The `Display` form ("Monday" .. "Sunday") is the exact string written into
/// persisted records, and parsing accepts only those strings.
///
/// # Examples
///
/// ```
/// use timetable_rust::models::Weekday;
///
/// assert_eq!(Weekday::Monday.to_string(), "Monday");
/// assert_eq!(Weekday::parse("Friday"), Some(Weekday::Friday));
/// assert_eq!(Weekday::parse("friday"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All days in calendar order, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// The stored string form of this day.
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Parse a stored day name. Case-sensitive; returns `None` for anything
    /// that is not one of the seven exact names.
    pub fn parse(s: &str) -> Option<Self> {
        Weekday::ALL.iter().copied().find(|d| d.name() == s)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::parse(s).ok_or_else(|| format!("Unknown day name: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for day in Weekday::ALL {
            assert_eq!(Weekday::parse(day.name()), Some(day));
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(Weekday::parse("monday"), None);
        assert_eq!(Weekday::parse("MONDAY"), None);
        assert_eq!(Weekday::parse(""), None);
        assert_eq!(Weekday::parse("Mon"), None);
    }

    #[test]
    fn from_str_reports_input() {
        let err = "Smonday".parse::<Weekday>().unwrap_err();
        assert!(err.contains("Smonday"));
    }
}
