//! Weekday and tick-window arithmetic.
//!
//! All weekday values use the ISO convention: 0=Monday through 6=Sunday.
//! Scheduled transitions fire at hour 0 UTC on their configured weekday.

use chrono::{DateTime, Datelike, Duration, NaiveTime, Timelike, Utc};

pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// ISO weekday index (0=Monday) of a UTC instant.
pub fn weekday_index(at: DateTime<Utc>) -> u8 {
    at.weekday().num_days_from_monday() as u8
}

/// Human-readable name for an ISO weekday index. Out-of-range values are
/// clamped by the caller's validation; this panics only on programmer error.
pub fn weekday_name(day: u8) -> &'static str {
    WEEKDAY_NAMES[day as usize]
}

/// Parses a weekday from its English name (case-insensitive, full name or
/// three-letter abbreviation) into an ISO index.
pub fn parse_weekday(input: &str) -> Option<u8> {
    let lowered = input.to_lowercase();
    WEEKDAY_NAMES.iter().position(|name| {
        let name = name.to_lowercase();
        name == lowered || (lowered.len() == 3 && name.starts_with(&lowered))
    }).map(|index| index as u8)
}

/// Smallest instant greater than or equal to `after` falling on weekday
/// `day` at 00:00 UTC.
pub fn next_at_midnight(day: u8, after: DateTime<Utc>) -> DateTime<Utc> {
    let mut date = after.date_naive();
    loop {
        if date.weekday().num_days_from_monday() as u8 == day {
            let candidate = date.and_time(NaiveTime::MIN).and_utc();
            if candidate >= after {
                return candidate;
            }
        }
        date += Duration::days(1);
    }
}

/// Largest instant strictly before `before` falling on weekday `day` at
/// 00:00 UTC.
pub fn previous_at_midnight(day: u8, before: DateTime<Utc>) -> DateTime<Utc> {
    let mut date = before.date_naive();
    loop {
        if date.weekday().num_days_from_monday() as u8 == day {
            let candidate = date.and_time(NaiveTime::MIN).and_utc();
            if candidate < before {
                return candidate;
            }
        }
        date -= Duration::days(1);
    }
}

/// Truncates an instant to the top of its hour, the boundary of the tick
/// window it belongs to.
pub fn truncate_to_hour(at: DateTime<Utc>) -> DateTime<Utc> {
    at.date_naive()
        .and_time(NaiveTime::MIN)
        .and_utc()
        + Duration::hours(at.hour() as i64)
}
