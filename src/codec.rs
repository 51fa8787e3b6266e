//! Field codec for timetable records.
//!
//! A persisted timetable document is a flat map of course code to one string
//! field per course. This module defines that field format: the day name and
//! the time-range label joined by `" | "`.
//!
//! Decoding is shape-level only. It rejects fields without the separator and
//! fields whose day token is not a weekday name, but it accepts an empty time
//! range; whether an assignment is complete is the validation gate's concern,
//! not the codec's.

use crate::models::{Assignment, Weekday};

/// Separator between the day name and the time range in an encoded field.
pub const FIELD_SEPARATOR: &str = " | ";

/// Error type for decoding a stored assignment field.
///
/// Decode errors are recoverable: the load path logs and skips the offending
/// field rather than failing the whole document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("missing \" | \" separator in field: {0:?}")]
    MissingSeparator(String),

    #[error("unrecognized day name in field: {0:?}")]
    UnknownDay(String),
}

/// Encode an assignment into its stored field form.
///
/// # Examples
///
/// ```
/// use timetable_rust::codec::encode;
/// use timetable_rust::models::{Assignment, Weekday};
///
/// let field = encode(&Assignment::new(Weekday::Monday, "7:00 - 10:00"));
/// assert_eq!(field, "Monday | 7:00 - 10:00");
/// ```
///
/// The separator is not escaped if it appears inside the time range; decoding
/// recovers by splitting on the first occurrence only.
pub fn encode(assignment: &Assignment) -> String {
    format!(
        "{}{}{}",
        assignment.day,
        FIELD_SEPARATOR,
        assignment.time_range
    )
}

/// Decode a stored field back into an assignment.
///
/// Splits on the first `" | "`; everything after it is the time range,
/// verbatim. An empty time range decodes successfully.
///
/// # Examples
///
/// ```
/// use timetable_rust::codec::decode;
/// use timetable_rust::models::Weekday;
///
/// let assignment = decode("Friday | 13:00 - 16:00").unwrap();
/// assert_eq!(assignment.day, Weekday::Friday);
/// assert_eq!(assignment.time_range, "13:00 - 16:00");
///
/// assert!(decode("no separator here").is_err());
/// ```
pub fn decode(field: &str) -> Result<Assignment, DecodeError> {
    let (day_token, time_range) = field
        .split_once(FIELD_SEPARATOR)
        .ok_or_else(|| DecodeError::MissingSeparator(field.to_string()))?;

    let day = Weekday::parse(day_token).ok_or_else(|| DecodeError::UnknownDay(field.to_string()))?;

    Ok(Assignment::new(day, time_range))
}
