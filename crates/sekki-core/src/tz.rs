//! What "today" means.
//!
//! Resolution works on calendar dates only. This module turns the current
//! instant into a calendar date, either in an IANA timezone or in the
//! system's local zone.

use chrono::{DateTime, Local, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::error::{Result, SekkiError};

/// Parse an IANA timezone name into a [`chrono_tz::Tz`].
///
/// # Examples
///
/// ```
/// use sekki_core::tz::parse_tz;
///
/// let tz = parse_tz("Asia/Tokyo").unwrap();
/// assert_eq!(tz.to_string(), "Asia/Tokyo");
/// ```
pub fn parse_tz(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| SekkiError::InvalidTimezone(name.to_string()))
}

/// The calendar date of `instant` in `tz`, or in the system local zone when
/// no zone is given.
pub fn date_in(instant: DateTime<Utc>, tz: Option<Tz>) -> NaiveDate {
    match tz {
        Some(tz) => instant.with_timezone(&tz).date_naive(),
        None => instant.with_timezone(&Local).date_naive(),
    }
}

/// Today's calendar date in `tz`, or in the system local zone.
pub fn today_in(tz: Option<Tz>) -> NaiveDate {
    date_in(Utc::now(), tz)
}
