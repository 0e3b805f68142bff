//! Flight-day guidance.
//!
//! One record keyed to the departure date. Unlike the daily generator
//! this is not anchored to a shifted sleep window; the guidance is
//! about conduct in transit.

use crate::plan::{TravelDayRecommendation, TravelDirection, TripParameters};

/// Absolute offset (hours) at or below which in-flight sleep
/// scheduling is not worth the effort.
const SHORT_CHANGE_THRESHOLD: f64 = 3.0;
/// Absolute offset (hours) from which a flight counts as long-haul.
const LONG_HAUL_THRESHOLD: f64 = 6.0;

/// Guidance for the departure day itself.
pub(super) fn travel_day_recommendation(
    params: &TripParameters,
    direction: TravelDirection,
    offset_hours: f64,
) -> TravelDayRecommendation {
    TravelDayRecommendation {
        date: params.departure_date,
        sleep_strategy: sleep_strategy(offset_hours, direction),
        light_strategy: light_strategy(direction),
        meal_strategy: "Eat meals according to destination time, not your home time. Decline \
                        meal service if it's not mealtime at your destination. Stay hydrated \
                        with water."
            .to_string(),
        hydration: "Drink water regularly (8oz every 2 hours). Avoid excessive alcohol and \
                    caffeine."
            .to_string(),
        movement: "Stand and walk every 2 hours. Do seated stretches. This helps circulation \
                   and reduces jet lag."
            .to_string(),
        notes: travel_day_notes(offset_hours),
    }
}

fn sleep_strategy(offset_hours: f64, direction: TravelDirection) -> String {
    if offset_hours.abs() <= SHORT_CHANGE_THRESHOLD {
        return "Short timezone change: Stay awake during the flight if possible, sleep \
                according to destination time."
            .to_string();
    }

    match direction {
        TravelDirection::East => "Eastward flight: Try to sleep on the plane if it's nighttime \
                                  at your destination. Use eye mask, earplugs, and neck pillow. \
                                  Avoid sleep if it's daytime at destination."
            .to_string(),
        TravelDirection::West => "Westward flight: Stay awake during the flight if possible. If \
                                  you must sleep, keep it short (1-2 hours max). Watch movies, \
                                  read, walk around."
            .to_string(),
    }
}

fn light_strategy(direction: TravelDirection) -> String {
    match direction {
        TravelDirection::East => "Wear sunglasses during the first half of the flight. Remove \
                                  them and seek light during the second half as you approach \
                                  destination morning."
            .to_string(),
        TravelDirection::West => "Keep lights bright during the flight. Read, watch screens. \
                                  Avoid darkness until close to landing if it will be nighttime."
            .to_string(),
    }
}

fn travel_day_notes(offset_hours: f64) -> Vec<String> {
    let mut notes = vec![
        "Travel day! Your main goal is to start thinking in destination time.".to_string(),
        "Set your watch/phone to destination time as soon as you board.".to_string(),
    ];
    if offset_hours.abs() >= LONG_HAUL_THRESHOLD {
        notes.push(
            "Long-haul flight: strategic sleep on the plane can help. See recommendations below."
                .to_string(),
        );
    }
    notes.push("Stay hydrated and move around regularly to reduce travel fatigue.".to_string());
    notes
}
