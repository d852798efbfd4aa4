// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for calendar-date handling.
//!
//! Occurrence dates are stored as UTC-midnight timestamps, so the calendar
//! day of a record is its UTC date.

use chrono::{DateTime, NaiveDate, Utc};

/// ISO date format used for bucket keys and API fields.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Normalize an instant to its UTC calendar day.
pub fn utc_day(instant: DateTime<Utc>) -> NaiveDate {
    instant.date_naive()
}

/// Format a calendar day as `YYYY-MM-DD`.
pub fn date_key(day: NaiveDate) -> String {
    day.format(DATE_KEY_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` string into a UTC-midnight instant.
pub fn parse_date_key(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(raw, DATE_KEY_FORMAT)
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_utc_day_drops_time_of_day() {
        let late = Utc.with_ymd_and_hms(2026, 3, 9, 23, 59, 59).unwrap();
        assert_eq!(utc_day(late), NaiveDate::from_ymd_opt(2026, 3, 9).unwrap());
    }

    #[test]
    fn test_parse_date_key() {
        let parsed = parse_date_key("2026-03-09").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 3, 9, 0, 0, 0).unwrap());
        assert_eq!(date_key(utc_day(parsed)), "2026-03-09");

        assert!(parse_date_key("2026-13-01").is_none());
        assert!(parse_date_key("09/03/2026").is_none());
    }
}
