//! Date parsing.
//!
//! Two kinds of dates pass through this module:
//! - season start dates, stored as a year-less `MM-DD` string and anchored
//!   to a concrete year at resolution time
//! - reference dates supplied by callers, either `YYYY-MM-DD` or an RFC3339
//!   timestamp (e.g., `2024-02-04T08:30:00+09:00`)

use chrono::{DateTime, NaiveDate};

use crate::error::{Result, SekkiError};
use crate::models::SeasonRecord;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Anchor a season's `MM-DD` start to the given year.
///
/// Surrounding whitespace is ignored. Returns `None` when the month-day does
/// not name a real day in that year. This includes `02-29` outside leap years.
///
/// # Examples
///
/// ```
/// use sekki_core::parse::start_in_year;
/// use chrono::NaiveDate;
///
/// let start = start_in_year("02-04", 2024).unwrap();
/// assert_eq!(start, NaiveDate::from_ymd_opt(2024, 2, 4).unwrap());
/// ```
pub fn start_in_year(month_day: &str, year: i32) -> Option<NaiveDate> {
    let (month, day) = month_day.trim().split_once('-')?;
    let month: u32 = parse_digits(month)?;
    let day: u32 = parse_digits(day)?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parse a plain run of ASCII digits, rejecting signs and inner whitespace.
fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Anchor a record's start date to the given year, naming the record on
/// failure.
pub fn season_start_in_year(record: &SeasonRecord, year: i32) -> Result<NaiveDate> {
    start_in_year(&record.start_date, year).ok_or_else(|| SekkiError::MalformedDateEntry {
        id: record.id.clone(),
        start_date: record.start_date.clone(),
    })
}

/// Parse a caller-supplied reference date.
///
/// Accepts a plain calendar date (`2024-02-04`) or an RFC3339 timestamp.
/// For timestamps the calendar date is taken in the timestamp's own offset,
/// so `2024-02-03T23:30:00-05:00` is February 3rd.
pub fn parse_reference_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.date_naive())
        .map_err(|e| {
            SekkiError::InvalidDate(format!(
                "'{}'. Expected YYYY-MM-DD or RFC3339. Error: {}",
                input, e
            ))
        })
}
