//! Plan data model: trip input, the generated plan, and its parts.
//!
//! Everything here is a plain immutable value. Records are built once
//! by the planner and never mutated; regeneration replaces the whole
//! plan. All public types serialize to JSON for display or storage.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};
use crate::timeutil;
use crate::tz;

/// Direction of travel in circadian terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelDirection {
    /// Destination clock runs ahead of home; the body clock must advance
    East,
    /// Destination clock runs behind home (or equal); the body clock must delay
    West,
}

impl TravelDirection {
    /// Classify a destination-minus-home offset. Zero maps to west.
    pub fn from_offset(offset_hours: f64) -> Self {
        if offset_hours > 0.0 {
            TravelDirection::East
        } else {
            TravelDirection::West
        }
    }
}

impl std::fmt::Display for TravelDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TravelDirection::East => write!(f, "east"),
            TravelDirection::West => write!(f, "west"),
        }
    }
}

/// How strongly a daily window should be honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Skipping this window undermines the whole adjustment
    Critical,
    /// Helpful but not essential
    Recommended,
    /// Nice to have
    Optional,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Critical => write!(f, "critical"),
            Priority::Recommended => write!(f, "recommended"),
            Priority::Optional => write!(f, "optional"),
        }
    }
}

/// Exercise intensity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Moderate,
    High,
}

impl std::fmt::Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intensity::Low => write!(f, "low"),
            Intensity::Moderate => write!(f, "moderate"),
            Intensity::High => write!(f, "high"),
        }
    }
}

/// Validated traveler input for plan generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripParameters {
    /// IANA identifier of the home timezone (e.g. "America/New_York")
    pub home_timezone: String,
    /// IANA identifier of the destination timezone
    pub destination_timezone: String,
    /// Calendar date of departure
    pub departure_date: NaiveDate,
    /// Departure time (HH:MM)
    pub departure_time: String,
    /// Days spent at the destination
    pub days_at_destination: u32,
    /// Usual bedtime at home (HH:MM)
    pub current_bedtime: String,
    /// Usual wake time at home (HH:MM)
    pub current_wake_time: String,
}

impl TripParameters {
    /// Check all fields against the supported ranges. First failure wins.
    ///
    /// Rules: timezone fields present, destination differs from home,
    /// both timezone ids resolve, all times are valid HH:MM, departure
    /// is not before `today`, trip length is 1-365 days, and the sleep
    /// window is a plausible 4-14 hours.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoreError::UnknownTimezone`] for unresolvable
    /// timezone ids and [`crate::CoreError::Validation`] for everything
    /// else.
    pub fn validate(&self, today: NaiveDate) -> Result<()> {
        if self.home_timezone.is_empty() {
            return Err(ValidationError::MissingField("home_timezone").into());
        }
        if self.destination_timezone.is_empty() {
            return Err(ValidationError::MissingField("destination_timezone").into());
        }
        if self.destination_timezone == self.home_timezone {
            return Err(ValidationError::SameTimezone.into());
        }
        tz::resolve(&self.home_timezone)?;
        tz::resolve(&self.destination_timezone)?;

        let times = [
            ("departure_time", &self.departure_time),
            ("current_bedtime", &self.current_bedtime),
            ("current_wake_time", &self.current_wake_time),
        ];
        for (field, value) in times {
            if !timeutil::is_valid_time(value) {
                return Err(ValidationError::InvalidTime {
                    field,
                    value: value.clone(),
                }
                .into());
            }
        }

        if self.departure_date < today {
            return Err(ValidationError::DepartureInPast.into());
        }
        if self.days_at_destination < 1 || self.days_at_destination > 365 {
            return Err(ValidationError::TripLengthOutOfRange(self.days_at_destination).into());
        }

        let duration = timeutil::sleep_duration(&self.current_bedtime, &self.current_wake_time);
        if !(4.0..=14.0).contains(&duration) {
            return Err(ValidationError::UnusualSleepDuration(duration).into());
        }

        Ok(())
    }
}

/// A wall-clock window within a single day. May wrap past midnight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Window start (HH:MM)
    pub start: String,
    /// Window end (HH:MM); earlier than start when wrapping
    pub end: String,
    pub priority: Priority,
    /// What to do during the window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Target sleep window for one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepBlock {
    /// Target bedtime (HH:MM)
    pub bedtime: String,
    /// Target wake time (HH:MM)
    pub wake_time: String,
    /// Resulting sleep duration in hours
    pub duration_hours: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// When and how hard to exercise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseBlock {
    pub window: TimeWindow,
    pub intensity: Intensity,
}

/// Caffeine cutoff for one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaffeineGuidance {
    /// Last time caffeine is advisable (HH:MM)
    pub cutoff: String,
    pub note: String,
}

/// Melatonin timing and dosage guidance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MelatoninGuidance {
    /// When to take it (HH:MM)
    pub timing: String,
    /// Suggested dose range
    pub dosage: String,
    pub note: String,
}

/// Destination-time meal schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealSchedule {
    /// Breakfast time (HH:MM)
    pub breakfast: String,
    /// Lunch time (HH:MM)
    pub lunch: String,
    /// Dinner time (HH:MM)
    pub dinner: String,
    pub note: String,
}

/// One day of adaptation guidance, before departure or after arrival.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRecommendation {
    /// Calendar date the guidance applies to
    pub date: NaiveDate,
    /// Day number relative to departure (negative = pre-travel,
    /// positive = post-arrival)
    pub day_number: i32,
    pub sleep: SleepBlock,
    /// Windows to seek bright light
    pub light_exposure: Vec<TimeWindow>,
    /// Windows to avoid light
    pub light_avoidance: Vec<TimeWindow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise: Option<ExerciseBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caffeine: Option<CaffeineGuidance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub melatonin: Option<MelatoninGuidance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meals: Option<MealSchedule>,
    /// Free-text guidance for the day
    pub notes: Vec<String>,
}

/// Flight-day guidance. Not tied to a day-by-day shift, so no day number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelDayRecommendation {
    /// Departure date
    pub date: NaiveDate,
    /// How to handle sleep during the flight
    pub sleep_strategy: String,
    /// How to handle light during the flight
    pub light_strategy: String,
    /// How to time meals in transit
    pub meal_strategy: String,
    pub hydration: String,
    pub movement: String,
    pub notes: Vec<String>,
}

/// Complete adaptation plan. Built in one call, never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelPlan {
    /// Unique plan identifier
    pub id: String,
    /// When the plan was generated
    pub created_at: DateTime<Utc>,

    /// IANA identifier of the home timezone
    pub home_timezone: String,
    /// IANA identifier of the destination timezone
    pub destination_timezone: String,
    /// Calendar date of departure
    pub departure_date: NaiveDate,
    /// Departure time (HH:MM)
    pub departure_time: String,
    /// Days spent at the destination
    pub days_at_destination: u32,
    /// Usual bedtime at home (HH:MM)
    pub current_bedtime: String,
    /// Usual wake time at home (HH:MM)
    pub current_wake_time: String,
    /// Usual sleep duration in hours
    pub current_sleep_duration: f64,

    /// Destination-minus-home offset in hours at departure
    pub timezone_offset_hours: f64,
    pub direction: TravelDirection,
    /// Ideal number of adjustment days for this offset, before clamping
    /// against the days actually available
    pub adjustment_days: u32,

    /// One record per pre-departure adjustment day, earliest first
    pub pre_travel: Vec<DailyRecommendation>,
    pub travel_day: TravelDayRecommendation,
    /// Single day-1 record at the destination
    pub post_arrival: Vec<DailyRecommendation>,
}
