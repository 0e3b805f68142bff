//! # Jetshift Core Library
//!
//! This library provides the core logic for Jetshift, a jet lag adaptation
//! planner. Given a traveler's home and destination timezones, departure,
//! trip length, and current sleep habits, it deterministically derives a
//! multi-phase sleep/light/activity schedule that reduces jet lag.
//!
//! ## Architecture
//!
//! - **Planner**: pure functions that size the pre-travel shift, pace it
//!   across the available days, and emit per-day recommendations plus
//!   travel-day and post-arrival guidance
//! - **Timezone resolution**: chrono-tz-backed offset lookup between two
//!   IANA identifiers at an explicit instant
//! - **Time arithmetic**: "HH:MM" wall-clock math with midnight wraparound
//!   and calendar-day arithmetic
//!
//! The engine holds no state between calls and performs no I/O; the
//! ambient clock ("today") is injected by the caller so plan generation
//! stays deterministic and testable.
//!
//! ## Key Components
//!
//! - [`generate_plan`]: Build a complete [`TravelPlan`] from validated input
//! - [`TripParameters`]: Traveler input, with [`TripParameters::validate`]
//! - [`tz::offset_between`]: Destination-minus-home offset in hours

pub mod error;
pub mod plan;
pub mod planner;
pub mod timeutil;
pub mod tz;

pub use error::{CoreError, Result, ValidationError};
pub use plan::{
    CaffeineGuidance, DailyRecommendation, ExerciseBlock, Intensity, MealSchedule,
    MelatoninGuidance, Priority, SleepBlock, TimeWindow, TravelDayRecommendation,
    TravelDirection, TravelPlan, TripParameters,
};
pub use planner::{generate_plan, ideal_adjustment_days};
pub use tz::{common_timezones, format_utc_offset, offset_between, TimezoneEntry};
