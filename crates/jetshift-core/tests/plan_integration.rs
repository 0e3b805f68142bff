//! End-to-end plan generation: timezone resolution, validation, and the
//! assembled plan consumed through the public API.

use chrono::NaiveDate;

use jetshift_core::{generate_plan, offset_between, timeutil, TravelDirection, TripParameters};

fn params(home: &str, dest: &str, departure: NaiveDate) -> TripParameters {
    TripParameters {
        home_timezone: home.to_string(),
        destination_timezone: dest.to_string(),
        departure_date: departure,
        departure_time: "18:30".to_string(),
        days_at_destination: 10,
        current_bedtime: "23:00".to_string(),
        current_wake_time: "07:00".to_string(),
    }
}

#[test]
fn new_york_to_tokyo_full_pipeline() {
    let today = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
    let departure = NaiveDate::from_ymd_opt(2026, 6, 8).unwrap();
    let trip = params("America/New_York", "Asia/Tokyo", departure);
    trip.validate(today).unwrap();

    let at = timeutil::combine_date_time(departure, &trip.departure_time);
    let offset = offset_between(&trip.home_timezone, &trip.destination_timezone, at).unwrap();
    assert_eq!(offset, 13.0); // EDT in June

    let plan = generate_plan(&trip, offset, today);
    assert_eq!(plan.direction, TravelDirection::East);
    assert_eq!(plan.adjustment_days, 7); // ceil(13 / 1.5) capped
    assert_eq!(plan.pre_travel.len(), 5); // hard cap beats the 7 days available
    assert_eq!(plan.post_arrival.len(), 1);
    assert_eq!(plan.travel_day.date, departure);

    // Phase ordering: strictly increasing day numbers ending at -1
    let day_numbers: Vec<i32> = plan.pre_travel.iter().map(|d| d.day_number).collect();
    assert_eq!(day_numbers, [-5, -4, -3, -2, -1]);
    assert_eq!(plan.post_arrival[0].day_number, 1);
}

#[test]
fn london_to_kolkata_fractional_offset_flows_through() {
    let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
    let departure = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
    let trip = params("Europe/London", "Asia/Kolkata", departure);

    let at = timeutil::combine_date_time(departure, &trip.departure_time);
    let offset = offset_between(&trip.home_timezone, &trip.destination_timezone, at).unwrap();
    assert_eq!(offset, 5.5);

    let plan = generate_plan(&trip, offset, today);
    assert_eq!(plan.pre_travel.len(), 4); // ceil(5.5 / 1.5)
    // Final day reaches the full fractional offset on a :30 boundary
    assert_eq!(plan.pre_travel.last().unwrap().sleep.bedtime, "17:30");
}

#[test]
fn westward_plan_keeps_melatonin_and_duration_invariants() {
    let today = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
    let departure = NaiveDate::from_ymd_opt(2026, 9, 6).unwrap();
    let trip = params("Asia/Tokyo", "Europe/Paris", departure);

    let at = timeutil::combine_date_time(departure, &trip.departure_time);
    let offset = offset_between(&trip.home_timezone, &trip.destination_timezone, at).unwrap();
    assert_eq!(offset, -7.0);

    let plan = generate_plan(&trip, offset, today);
    assert_eq!(plan.direction, TravelDirection::West);
    for day in &plan.pre_travel {
        assert_eq!(day.sleep.duration_hours, plan.current_sleep_duration);
        assert!(day.melatonin.is_some());
    }
    assert!(plan.travel_day.sleep_strategy.starts_with("Westward flight"));
}

#[test]
fn plan_serializes_to_json_and_back() {
    let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
    let departure = NaiveDate::from_ymd_opt(2026, 3, 13).unwrap();
    let trip = params("America/New_York", "Europe/Paris", departure);

    let plan = generate_plan(&trip, 6.0, today);
    let json = serde_json::to_string_pretty(&plan).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["direction"], "east");
    assert_eq!(value["pre_travel"].as_array().unwrap().len(), 3);
    assert_eq!(value["post_arrival"][0]["day_number"], 1);
    assert_eq!(
        value["pre_travel"][0]["light_exposure"][0]["priority"],
        "critical"
    );

    let restored: jetshift_core::TravelPlan = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.id, plan.id);
    assert_eq!(restored.pre_travel.len(), plan.pre_travel.len());
}

#[test]
fn validation_gates_the_pipeline() {
    let today = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
    let departure = NaiveDate::from_ymd_opt(2026, 5, 20).unwrap();
    let trip = params("America/New_York", "Asia/Tokyo", departure);

    // Departure before today never reaches the engine.
    assert!(trip.validate(today).is_err());
}
