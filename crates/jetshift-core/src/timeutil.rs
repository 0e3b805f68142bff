//! Time and date arithmetic for schedule generation.
//!
//! Wall-clock times are "HH:MM" strings throughout the plan model, so
//! every generator funnels through the helpers here:
//! - parse/format between "HH:MM" and hour/minute pairs
//! - shift a time by signed fractional hours with midnight wraparound
//! - overnight-aware sleep duration
//! - calendar-day arithmetic for day numbering
//!
//! Parsing assumes pre-validated input (see [`is_valid_time`] and
//! `TripParameters::validate`); malformed strings degrade to 00:00
//! rather than failing, which matches the clamp-over-throw policy of
//! the planner.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Parse an "HH:MM" string into an (hours, minutes) pair.
///
/// Absent or unparseable parts default to 0.
pub fn parse_time(time: &str) -> (u32, u32) {
    let mut parts = time.split(':');
    let hours = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
    let minutes = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
    (hours, minutes)
}

/// Format an (hours, minutes) pair as zero-padded "HH:MM".
pub fn format_time(hours: u32, minutes: u32) -> String {
    format!("{hours:02}:{minutes:02}")
}

/// Add a signed number of hours (fractional allowed) to an "HH:MM"
/// time, wrapping around midnight in either direction.
///
/// The result is rounded to the nearest whole minute and normalized
/// into [00:00, 24:00), so deltas larger than a day are fine.
pub fn add_hours(time: &str, delta: f64) -> String {
    let (hours, minutes) = parse_time(time);
    let total = f64::from(hours * 60 + minutes) + delta * 60.0;
    let normalized = (total.round() as i64).rem_euclid(24 * 60);
    format_time((normalized / 60) as u32, (normalized % 60) as u32)
}

/// Sleep duration in hours from a bedtime to the following wake time.
///
/// A wake time at or before the bedtime is treated as next-day, so the
/// result is always in (0, 24].
pub fn sleep_duration(bedtime: &str, wake_time: &str) -> f64 {
    let (bed_h, bed_m) = parse_time(bedtime);
    let (wake_h, wake_m) = parse_time(wake_time);

    let bed_minutes = i64::from(bed_h * 60 + bed_m);
    let mut wake_minutes = i64::from(wake_h * 60 + wake_m);
    if wake_minutes <= bed_minutes {
        wake_minutes += 24 * 60;
    }

    (wake_minutes - bed_minutes) as f64 / 60.0
}

/// Strict 24-hour "HH:MM" shape check: zero-padded, hours 00-23,
/// minutes 00-59.
pub fn is_valid_time(time: &str) -> bool {
    let bytes = time.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return false;
    }
    if ![bytes[0], bytes[1], bytes[3], bytes[4]]
        .iter()
        .all(u8::is_ascii_digit)
    {
        return false;
    }
    let hours = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
    let minutes = (bytes[3] - b'0') * 10 + (bytes[4] - b'0');
    hours <= 23 && minutes <= 59
}

/// Shift a calendar date by a signed number of days.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

/// Whole-day difference between two calendar dates.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Combine a calendar date with an "HH:MM" wall time.
///
/// Falls back to midnight if the time is out of range; shape validation
/// happens upstream.
pub fn combine_date_time(date: NaiveDate, time: &str) -> NaiveDateTime {
    let (hours, minutes) = parse_time(time);
    date.and_hms_opt(hours, minutes, 0)
        .unwrap_or_else(|| date.and_time(NaiveTime::MIN))
}
