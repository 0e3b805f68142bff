//! Adaptation plan generation.
//!
//! This module turns validated trip parameters plus a resolved timezone
//! offset into a complete [`TravelPlan`]:
//! - sizes the pre-travel phase from the offset and the days available
//! - derives the per-day cumulative sleep shift
//! - delegates to the daily and travel-day generators
//! - assembles the immutable plan record with identity and timestamp
//!
//! Everything is pure computation. Degenerate inputs (offset too small,
//! departure today or past) degrade to empty pre-travel phases instead
//! of erroring.

mod daily;
mod travel_day;

use chrono::{NaiveDate, Utc};

use crate::plan::{TravelDirection, TravelPlan, TripParameters};
use crate::timeutil;

/// Ceiling on ideal adjustment days for very large offsets.
const MAX_ADJUSTMENT_DAYS: u32 = 7;
/// Most pre-travel days a schedule will ever ask of a traveler.
const MAX_PRE_TRAVEL_DAYS: i64 = 5;

/// Ideal number of adjustment days for an offset of the given size.
pub fn ideal_adjustment_days(offset_hours: f64) -> u32 {
    let magnitude = offset_hours.abs();

    // Small differences need little adjustment.
    if magnitude <= 2.0 {
        return 1;
    }
    if magnitude <= 4.0 {
        return 2;
    }

    // Larger differences use the standard rate of 1.5 hours per day.
    ((magnitude / 1.5).ceil() as u32).min(MAX_ADJUSTMENT_DAYS)
}

/// Pre-travel days actually scheduled, after clamping the ideal count
/// against the days available before departure and the hard cap.
///
/// Zero whenever the offset is small enough (within 2 hours) to skip
/// pre-adaptation, or the departure is today or already past.
pub fn pre_travel_days(offset_hours: f64, days_until_departure: i64) -> u32 {
    if offset_hours.abs() <= 2.0 || days_until_departure <= 0 {
        return 0;
    }
    let ideal = i64::from(ideal_adjustment_days(offset_hours));
    ideal.min(days_until_departure).min(MAX_PRE_TRAVEL_DAYS) as u32
}

/// Build the complete adaptation plan for one trip.
///
/// `offset_hours` is the destination-minus-home offset, usually from
/// [`crate::tz::offset_between`]. `today` anchors the days-until-departure
/// computation; passing it in keeps generation deterministic.
pub fn generate_plan(params: &TripParameters, offset_hours: f64, today: NaiveDate) -> TravelPlan {
    let direction = TravelDirection::from_offset(offset_hours);
    let adjustment_days = ideal_adjustment_days(offset_hours);

    // 1. Size the pre-travel phase from the days actually available.
    let days_until_departure = timeutil::days_between(today, params.departure_date);
    let days_used = pre_travel_days(offset_hours, days_until_departure);
    let shift_rate = if days_used > 0 {
        offset_hours.abs() / f64::from(days_used)
    } else {
        0.0
    };

    // 2. Generate the three phases independently.
    let pre_travel =
        daily::pre_travel_recommendations(params, direction, offset_hours, days_used, shift_rate);
    let travel_day = travel_day::travel_day_recommendation(params, direction, offset_hours);
    let post_arrival = vec![daily::post_arrival_recommendation(params, direction, offset_hours)];

    // 3. Assemble the immutable plan record.
    TravelPlan {
        id: format!("plan-{}", uuid::Uuid::new_v4()),
        created_at: Utc::now(),
        home_timezone: params.home_timezone.clone(),
        destination_timezone: params.destination_timezone.clone(),
        departure_date: params.departure_date,
        departure_time: params.departure_time.clone(),
        days_at_destination: params.days_at_destination,
        current_bedtime: params.current_bedtime.clone(),
        current_wake_time: params.current_wake_time.clone(),
        current_sleep_duration: timeutil::sleep_duration(
            &params.current_bedtime,
            &params.current_wake_time,
        ),
        timezone_offset_hours: offset_hours,
        direction,
        adjustment_days,
        pre_travel,
        travel_day,
        post_arrival,
    }
}
