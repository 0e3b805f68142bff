//! Timezone resolution and offset helpers.
//!
//! Wraps chrono-tz so the rest of the crate never walks timezone
//! databases directly. Every function takes an explicit instant;
//! nothing here reads the system clock, which keeps offset resolution
//! deterministic and testable.

use chrono::{NaiveDateTime, Offset, TimeZone};
use chrono_tz::Tz;
use serde::Serialize;

use crate::error::{CoreError, Result};

/// A commonly traveled timezone, for interactive pickers.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TimezoneEntry {
    /// IANA identifier
    pub id: &'static str,
    /// Display name
    pub city: &'static str,
    /// Geographic region for grouping
    pub region: &'static str,
}

/// Parse an IANA timezone identifier.
///
/// # Errors
///
/// Returns [`CoreError::UnknownTimezone`] if the id is not in the IANA
/// database.
pub fn resolve(id: &str) -> Result<Tz> {
    id.parse::<Tz>()
        .map_err(|_| CoreError::UnknownTimezone(id.to_string()))
}

/// UTC offset of a zone at a given instant, in hours.
///
/// Fractional for half- and quarter-hour zones. The instant is
/// interpreted as UTC when sampling the zone's DST rules.
pub fn utc_offset_hours(tz: Tz, at: NaiveDateTime) -> f64 {
    let offset_secs = tz.offset_from_utc_datetime(&at).fix().local_minus_utc();
    f64::from(offset_secs) / 3600.0
}

/// Destination-minus-home offset in hours at the given instant.
///
/// Positive means the destination clock runs ahead of home, eastward
/// travel in circadian terms.
///
/// # Errors
///
/// Returns [`CoreError::UnknownTimezone`] if either id is invalid.
pub fn offset_between(home: &str, destination: &str, at: NaiveDateTime) -> Result<f64> {
    let home_tz = resolve(home)?;
    let dest_tz = resolve(destination)?;
    Ok(utc_offset_hours(dest_tz, at) - utc_offset_hours(home_tz, at))
}

/// Format an offset in hours for display, e.g. "UTC+05:30" or "UTC-08:00".
pub fn format_utc_offset(offset_hours: f64) -> String {
    let total_minutes = (offset_hours * 60.0).round() as i64;
    let sign = if total_minutes >= 0 { '+' } else { '-' };
    let abs_minutes = total_minutes.abs();
    format!("UTC{}{:02}:{:02}", sign, abs_minutes / 60, abs_minutes % 60)
}

/// Commonly traveled zones, grouped by region.
pub fn common_timezones() -> &'static [TimezoneEntry] {
    COMMON_TIMEZONES
}

const COMMON_TIMEZONES: &[TimezoneEntry] = &[
    // Americas
    TimezoneEntry { id: "America/New_York", city: "New York", region: "Americas" },
    TimezoneEntry { id: "America/Chicago", city: "Chicago", region: "Americas" },
    TimezoneEntry { id: "America/Denver", city: "Denver", region: "Americas" },
    TimezoneEntry { id: "America/Los_Angeles", city: "Los Angeles", region: "Americas" },
    TimezoneEntry { id: "America/Anchorage", city: "Anchorage", region: "Americas" },
    TimezoneEntry { id: "Pacific/Honolulu", city: "Honolulu", region: "Americas" },
    TimezoneEntry { id: "America/Toronto", city: "Toronto", region: "Americas" },
    TimezoneEntry { id: "America/Vancouver", city: "Vancouver", region: "Americas" },
    TimezoneEntry { id: "America/Mexico_City", city: "Mexico City", region: "Americas" },
    TimezoneEntry { id: "America/Sao_Paulo", city: "São Paulo", region: "Americas" },
    TimezoneEntry { id: "America/Buenos_Aires", city: "Buenos Aires", region: "Americas" },
    // Europe
    TimezoneEntry { id: "Europe/London", city: "London", region: "Europe" },
    TimezoneEntry { id: "Europe/Paris", city: "Paris", region: "Europe" },
    TimezoneEntry { id: "Europe/Berlin", city: "Berlin", region: "Europe" },
    TimezoneEntry { id: "Europe/Rome", city: "Rome", region: "Europe" },
    TimezoneEntry { id: "Europe/Madrid", city: "Madrid", region: "Europe" },
    TimezoneEntry { id: "Europe/Amsterdam", city: "Amsterdam", region: "Europe" },
    TimezoneEntry { id: "Europe/Stockholm", city: "Stockholm", region: "Europe" },
    TimezoneEntry { id: "Europe/Athens", city: "Athens", region: "Europe" },
    TimezoneEntry { id: "Europe/Moscow", city: "Moscow", region: "Europe" },
    TimezoneEntry { id: "Europe/Istanbul", city: "Istanbul", region: "Europe" },
    // Asia
    TimezoneEntry { id: "Asia/Dubai", city: "Dubai", region: "Asia" },
    TimezoneEntry { id: "Asia/Kolkata", city: "Mumbai/Delhi", region: "Asia" },
    TimezoneEntry { id: "Asia/Bangkok", city: "Bangkok", region: "Asia" },
    TimezoneEntry { id: "Asia/Singapore", city: "Singapore", region: "Asia" },
    TimezoneEntry { id: "Asia/Hong_Kong", city: "Hong Kong", region: "Asia" },
    TimezoneEntry { id: "Asia/Shanghai", city: "Shanghai", region: "Asia" },
    TimezoneEntry { id: "Asia/Tokyo", city: "Tokyo", region: "Asia" },
    TimezoneEntry { id: "Asia/Seoul", city: "Seoul", region: "Asia" },
    TimezoneEntry { id: "Asia/Jakarta", city: "Jakarta", region: "Asia" },
    TimezoneEntry { id: "Asia/Manila", city: "Manila", region: "Asia" },
    // Pacific
    TimezoneEntry { id: "Australia/Sydney", city: "Sydney", region: "Pacific" },
    TimezoneEntry { id: "Australia/Melbourne", city: "Melbourne", region: "Pacific" },
    TimezoneEntry { id: "Australia/Perth", city: "Perth", region: "Pacific" },
    TimezoneEntry { id: "Pacific/Auckland", city: "Auckland", region: "Pacific" },
    TimezoneEntry { id: "Pacific/Fiji", city: "Fiji", region: "Pacific" },
    // Africa & Middle East
    TimezoneEntry { id: "Africa/Cairo", city: "Cairo", region: "Africa" },
    TimezoneEntry { id: "Africa/Johannesburg", city: "Johannesburg", region: "Africa" },
    TimezoneEntry { id: "Africa/Lagos", city: "Lagos", region: "Africa" },
    TimezoneEntry { id: "Africa/Nairobi", city: "Nairobi", region: "Africa" },
];
