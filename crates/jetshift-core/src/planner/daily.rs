//! Per-day recommendation generation.
//!
//! Builds the pre-travel adjustment records and the single post-arrival
//! record. The east/west differences in window placement are captured
//! once in [`DirectionPolicy`] instead of branching inside every
//! generator.

use crate::plan::{
    CaffeineGuidance, DailyRecommendation, ExerciseBlock, Intensity, MealSchedule,
    MelatoninGuidance, Priority, SleepBlock, TimeWindow, TravelDirection, TripParameters,
};
use crate::timeutil;

/// Hours of bright light exposure to seek per day.
const LIGHT_EXPOSURE_DURATION: f64 = 2.0;
/// Hours of the critical light avoidance period.
const LIGHT_AVOIDANCE_DURATION: f64 = 3.0;
/// Absolute offset (hours) from which melatonin is suggested.
const MELATONIN_THRESHOLD: f64 = 3.0;

/// Window placement that differs between advancing (east) and delaying
/// (west) the body clock.
struct DirectionPolicy {
    /// Hours after wake to start seeking bright light
    light_after_wake: f64,
    /// Hours before bedtime the light avoidance period starts
    avoidance_before_bed: f64,
    /// Hours after wake to start exercising
    exercise_after_wake: f64,
    light_note: &'static str,
    avoidance_note: &'static str,
    exercise_note: &'static str,
}

/// Morning light and early activity advance the clock.
const EAST: DirectionPolicy = DirectionPolicy {
    light_after_wake: 0.5,
    avoidance_before_bed: 3.0,
    exercise_after_wake: 1.0,
    light_note: "Seek bright light immediately. Go outside, open curtains, or use a light therapy lamp (10,000 lux).",
    avoidance_note: "Dim lights, wear blue-blocking glasses, avoid screens. This helps shift your clock earlier.",
    exercise_note: "Morning exercise combined with light exposure is powerful for advancing your clock. Even a 20-minute walk helps.",
};

/// Evening light and late activity delay the clock; the avoidance
/// window targets the early-morning hours instead of the evening.
const WEST: DirectionPolicy = DirectionPolicy {
    light_after_wake: 10.0,
    avoidance_before_bed: 8.0,
    exercise_after_wake: 9.0,
    light_note: "Seek bright light in the evening. Stay outdoors, use bright indoor lighting, or light therapy.",
    avoidance_note: "Keep room dark, use blackout curtains, wear eye mask if awake early.",
    exercise_note: "Evening exercise helps delay your clock. Aim for moderate intensity, not too vigorous.",
};

fn policy(direction: TravelDirection) -> &'static DirectionPolicy {
    match direction {
        TravelDirection::East => &EAST,
        TravelDirection::West => &WEST,
    }
}

/// One record per scheduled adjustment day, from day `-days_used` up to
/// day `-1`, shifting the sleep window linearly toward destination time.
pub(super) fn pre_travel_recommendations(
    params: &TripParameters,
    direction: TravelDirection,
    offset_hours: f64,
    days_used: u32,
    shift_rate: f64,
) -> Vec<DailyRecommendation> {
    let mut recommendations = Vec::with_capacity(days_used as usize);

    for day in -(days_used as i32)..0 {
        let date = timeutil::add_days(params.departure_date, i64::from(day));
        // 0-indexed from the first adjustment day.
        let days_from_start = days_used as i32 + day;

        // Cumulative shift grows linearly, reaching the full offset on day -1.
        let cumulative_shift = f64::from(days_from_start + 1) * shift_rate;
        // East = go to bed earlier, west = later.
        let signed_shift = match direction {
            TravelDirection::East => -cumulative_shift,
            TravelDirection::West => cumulative_shift,
        };

        let bedtime = timeutil::add_hours(&params.current_bedtime, signed_shift);
        let wake_time = timeutil::add_hours(&params.current_wake_time, signed_shift);

        recommendations.push(DailyRecommendation {
            date,
            day_number: day,
            sleep: SleepBlock {
                bedtime: bedtime.clone(),
                wake_time: wake_time.clone(),
                duration_hours: timeutil::sleep_duration(&bedtime, &wake_time),
                note: Some(sleep_note(day, direction, shift_rate)),
            },
            light_exposure: light_exposure_windows(&wake_time, direction),
            light_avoidance: light_avoidance_windows(&bedtime, direction),
            exercise: Some(exercise_block(&wake_time, direction)),
            caffeine: Some(caffeine_guidance(&bedtime)),
            melatonin: (offset_hours.abs() >= MELATONIN_THRESHOLD)
                .then(|| melatonin_guidance(&bedtime)),
            meals: None,
            notes: pre_travel_notes(day, direction),
        });
    }

    recommendations
}

/// The single day-1 record at the destination: normal bed and wake
/// times verbatim (destination-local time is now "home" time), with the
/// direction-based windows re-anchored on the unshifted times.
pub(super) fn post_arrival_recommendation(
    params: &TripParameters,
    direction: TravelDirection,
    offset_hours: f64,
) -> DailyRecommendation {
    let bedtime = &params.current_bedtime;
    let wake_time = &params.current_wake_time;

    DailyRecommendation {
        date: timeutil::add_days(params.departure_date, 1),
        day_number: 1,
        sleep: SleepBlock {
            bedtime: bedtime.clone(),
            wake_time: wake_time.clone(),
            duration_hours: timeutil::sleep_duration(bedtime, wake_time),
            note: Some(
                "First day at destination. Resume your normal sleep schedule according to local \
                 time. Avoid naps longer than 20 minutes if needed."
                    .to_string(),
            ),
        },
        light_exposure: light_exposure_windows(wake_time, direction),
        light_avoidance: light_avoidance_windows(bedtime, direction),
        exercise: Some(exercise_block(wake_time, direction)),
        caffeine: Some(caffeine_guidance(bedtime)),
        melatonin: (offset_hours.abs() >= MELATONIN_THRESHOLD)
            .then(|| melatonin_guidance(bedtime)),
        meals: Some(meal_schedule(wake_time)),
        notes: arrival_day_notes(offset_hours.abs()),
    }
}

/// Bright light window: morning light advances the clock (east),
/// evening light delays it (west).
fn light_exposure_windows(wake_time: &str, direction: TravelDirection) -> Vec<TimeWindow> {
    let policy = policy(direction);
    let start = timeutil::add_hours(wake_time, policy.light_after_wake);
    let end = timeutil::add_hours(&start, LIGHT_EXPOSURE_DURATION);
    vec![TimeWindow {
        start,
        end,
        priority: Priority::Critical,
        note: Some(policy.light_note.to_string()),
    }]
}

/// Light avoidance window: evening light works against an advance
/// (east); early-morning light works against a delay (west).
fn light_avoidance_windows(bedtime: &str, direction: TravelDirection) -> Vec<TimeWindow> {
    let policy = policy(direction);
    let start = timeutil::add_hours(bedtime, -policy.avoidance_before_bed);
    let end = timeutil::add_hours(&start, LIGHT_AVOIDANCE_DURATION);
    vec![TimeWindow {
        start,
        end,
        priority: Priority::Critical,
        note: Some(policy.avoidance_note.to_string()),
    }]
}

fn exercise_block(wake_time: &str, direction: TravelDirection) -> ExerciseBlock {
    let policy = policy(direction);
    let start = timeutil::add_hours(wake_time, policy.exercise_after_wake);
    let end = timeutil::add_hours(&start, 1.0);
    ExerciseBlock {
        window: TimeWindow {
            start,
            end,
            priority: Priority::Recommended,
            note: Some(policy.exercise_note.to_string()),
        },
        intensity: Intensity::Moderate,
    }
}

fn caffeine_guidance(bedtime: &str) -> CaffeineGuidance {
    // 6 hours before bed
    let cutoff = timeutil::add_hours(bedtime, -6.0);
    let note = format!(
        "Stop caffeine by {cutoff} to ensure it doesn't interfere with sleep. Caffeine has a 5-6 \
         hour half-life."
    );
    CaffeineGuidance { cutoff, note }
}

fn melatonin_guidance(bedtime: &str) -> MelatoninGuidance {
    MelatoninGuidance {
        // 30 minutes before bed
        timing: timeutil::add_hours(bedtime, -0.5),
        dosage: "0.5-3mg".to_string(),
        note: "Take low-dose melatonin 30 minutes before your target bedtime. Start with 0.5mg \
               and adjust if needed. Consult your doctor first."
            .to_string(),
    }
}

fn meal_schedule(wake_time: &str) -> MealSchedule {
    MealSchedule {
        breakfast: timeutil::add_hours(wake_time, 1.0),
        lunch: timeutil::add_hours(wake_time, 5.0),
        dinner: timeutil::add_hours(wake_time, 11.0),
        note: "Eating at local meal times helps entrain your circadian rhythm. Try to eat at \
               destination times immediately."
            .to_string(),
    }
}

fn sleep_note(day_number: i32, direction: TravelDirection, shift_rate: f64) -> String {
    let days_until = day_number.unsigned_abs();
    let action = match direction {
        TravelDirection::East => "earlier",
        TravelDirection::West => "later",
    };

    if days_until == 1 {
        return format!("Final adjustment day. Go to bed {action} to match your destination schedule.");
    }
    format!(
        "Shift your sleep {shift_rate:.1} hours {action} than usual. This gradual adjustment \
         reduces jet lag."
    )
}

fn pre_travel_notes(day_number: i32, direction: TravelDirection) -> Vec<String> {
    let days_until = day_number.unsigned_abs();
    let plural = if days_until == 1 { "" } else { "s" };

    let mut notes = vec![format!("{days_until} day{plural} until departure")];
    match direction {
        TravelDirection::East => notes.push(
            "Eastward travel tip: The key is advancing your clock gradually with morning light \
             and early bedtimes."
                .to_string(),
        ),
        TravelDirection::West => notes.push(
            "Westward travel tip: The key is delaying your clock with evening light and staying \
             up later."
                .to_string(),
        ),
    }
    if days_until <= 2 {
        notes.push("Almost time to travel! Stay consistent with your adjusted schedule.".to_string());
    }
    notes
}

fn arrival_day_notes(abs_offset: f64) -> Vec<String> {
    let mut notes = vec![
        "Welcome to your destination! Today is about establishing your normal routine in local \
         time."
            .to_string(),
        "Follow your regular sleep schedule - go to bed and wake up at your usual times (in \
         local time)."
            .to_string(),
        "Get outside and stay active during daylight hours to help your body adjust.".to_string(),
    ];
    if abs_offset >= 6.0 {
        notes.push(
            "Large time difference - you may feel tired, but try to stay awake until your normal \
             bedtime."
                .to_string(),
        );
    }
    notes.push("Eat meals at normal local times and stay well hydrated.".to_string());
    notes.push(
        "If you need a nap, keep it short (20 minutes max) and before 3 PM local time.".to_string(),
    );
    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_test_params() -> TripParameters {
        TripParameters {
            home_timezone: "America/New_York".to_string(),
            destination_timezone: "Europe/Paris".to_string(),
            departure_date: NaiveDate::from_ymd_opt(2026, 3, 13).unwrap(),
            departure_time: "09:00".to_string(),
            days_at_destination: 7,
            current_bedtime: "23:00".to_string(),
            current_wake_time: "07:00".to_string(),
        }
    }

    #[test]
    fn test_light_exposure_east_is_morning() {
        let windows = light_exposure_windows("07:00", TravelDirection::East);
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].start, "07:30");
        assert_eq!(windows[0].end, "09:30");
        assert_eq!(windows[0].priority, Priority::Critical);
    }

    #[test]
    fn test_light_exposure_west_is_evening() {
        let windows = light_exposure_windows("07:00", TravelDirection::West);
        assert_eq!(windows[0].start, "17:00");
        assert_eq!(windows[0].end, "19:00");
    }

    #[test]
    fn test_light_avoidance_east_ends_at_bedtime() {
        let windows = light_avoidance_windows("23:00", TravelDirection::East);
        assert_eq!(windows[0].start, "20:00");
        assert_eq!(windows[0].end, "23:00");
    }

    #[test]
    fn test_light_avoidance_west_targets_early_morning() {
        let windows = light_avoidance_windows("23:00", TravelDirection::West);
        assert_eq!(windows[0].start, "15:00");
        assert_eq!(windows[0].end, "18:00");
    }

    #[test]
    fn test_exercise_windows_by_direction() {
        let east = exercise_block("07:00", TravelDirection::East);
        assert_eq!(east.window.start, "08:00");
        assert_eq!(east.window.end, "09:00");
        assert_eq!(east.intensity, Intensity::Moderate);

        let west = exercise_block("07:00", TravelDirection::West);
        assert_eq!(west.window.start, "16:00");
        assert_eq!(west.window.end, "17:00");
    }

    #[test]
    fn test_caffeine_cutoff_six_hours_before_bed() {
        let caffeine = caffeine_guidance("23:00");
        assert_eq!(caffeine.cutoff, "17:00");
        assert!(caffeine.note.contains("17:00"));
    }

    #[test]
    fn test_melatonin_half_hour_before_bed() {
        let melatonin = melatonin_guidance("23:00");
        assert_eq!(melatonin.timing, "22:30");
        assert_eq!(melatonin.dosage, "0.5-3mg");
    }

    #[test]
    fn test_meal_schedule_anchored_on_wake() {
        let meals = meal_schedule("07:00");
        assert_eq!(meals.breakfast, "08:00");
        assert_eq!(meals.lunch, "12:00");
        assert_eq!(meals.dinner, "18:00");
    }

    #[test]
    fn test_sleep_note_final_day() {
        let note = sleep_note(-1, TravelDirection::East, 2.0);
        assert!(note.starts_with("Final adjustment day"));
        assert!(note.contains("earlier"));
    }

    #[test]
    fn test_sleep_note_reports_rate_to_one_decimal() {
        let note = sleep_note(-3, TravelDirection::West, 1.5);
        assert!(note.contains("1.5 hours later"));
    }

    #[test]
    fn test_pre_travel_notes_count_down() {
        let notes = pre_travel_notes(-3, TravelDirection::East);
        assert_eq!(notes[0], "3 days until departure");
        assert!(notes[1].starts_with("Eastward travel tip"));
        assert_eq!(notes.len(), 2);

        let last = pre_travel_notes(-1, TravelDirection::West);
        assert_eq!(last[0], "1 day until departure");
        assert!(last[2].contains("Almost time to travel"));
    }

    #[test]
    fn test_pre_travel_shifts_grow_linearly() {
        let params = make_test_params();
        let days = pre_travel_recommendations(&params, TravelDirection::East, 6.0, 3, 2.0);

        assert_eq!(days.len(), 3);
        assert_eq!(days[0].day_number, -3);
        assert_eq!(days[0].sleep.bedtime, "21:00");
        assert_eq!(days[0].sleep.wake_time, "05:00");
        assert_eq!(days[1].sleep.bedtime, "19:00");
        assert_eq!(days[1].sleep.wake_time, "03:00");
        assert_eq!(days[2].day_number, -1);
        assert_eq!(days[2].sleep.bedtime, "17:00");
        assert_eq!(days[2].sleep.wake_time, "01:00");
    }

    #[test]
    fn test_pre_travel_dates_count_up_to_departure() {
        let params = make_test_params();
        let days = pre_travel_recommendations(&params, TravelDirection::East, 6.0, 3, 2.0);

        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2026, 3, 10).unwrap());
        assert_eq!(days[2].date, NaiveDate::from_ymd_opt(2026, 3, 12).unwrap());
    }

    #[test]
    fn test_pre_travel_preserves_sleep_duration() {
        let params = make_test_params();
        let days = pre_travel_recommendations(&params, TravelDirection::West, -5.0, 4, 1.25);

        for day in &days {
            assert_eq!(day.sleep.duration_hours, 8.0);
        }
    }

    #[test]
    fn test_pre_travel_melatonin_threshold() {
        let params = make_test_params();

        let with = pre_travel_recommendations(&params, TravelDirection::East, 3.0, 2, 1.5);
        assert!(with.iter().all(|d| d.melatonin.is_some()));

        let without = pre_travel_recommendations(&params, TravelDirection::East, 2.5, 1, 2.5);
        assert!(without.iter().all(|d| d.melatonin.is_none()));
    }

    #[test]
    fn test_pre_travel_has_no_meal_schedule() {
        let params = make_test_params();
        let days = pre_travel_recommendations(&params, TravelDirection::East, 6.0, 3, 2.0);
        assert!(days.iter().all(|d| d.meals.is_none()));
    }

    #[test]
    fn test_post_arrival_uses_unshifted_times() {
        let params = make_test_params();
        let day = post_arrival_recommendation(&params, TravelDirection::East, 6.0);

        assert_eq!(day.day_number, 1);
        assert_eq!(day.date, NaiveDate::from_ymd_opt(2026, 3, 14).unwrap());
        assert_eq!(day.sleep.bedtime, "23:00");
        assert_eq!(day.sleep.wake_time, "07:00");
        assert_eq!(day.sleep.duration_hours, 8.0);
    }

    #[test]
    fn test_post_arrival_windows_follow_direction() {
        let params = make_test_params();

        let east = post_arrival_recommendation(&params, TravelDirection::East, 6.0);
        assert_eq!(east.light_exposure[0].start, "07:30");
        assert_eq!(east.light_avoidance[0].start, "20:00");

        let west = post_arrival_recommendation(&params, TravelDirection::West, -6.0);
        assert_eq!(west.light_exposure[0].start, "17:00");
        assert_eq!(west.light_avoidance[0].start, "15:00");
    }

    #[test]
    fn test_post_arrival_includes_meals() {
        let params = make_test_params();
        let day = post_arrival_recommendation(&params, TravelDirection::East, 6.0);
        let meals = day.meals.expect("meal schedule missing");

        assert_eq!(meals.breakfast, "08:00");
        assert_eq!(meals.lunch, "12:00");
        assert_eq!(meals.dinner, "18:00");
    }

    #[test]
    fn test_post_arrival_large_offset_gets_stay_awake_note() {
        let params = make_test_params();

        let large = post_arrival_recommendation(&params, TravelDirection::East, 7.0);
        assert!(large.notes.iter().any(|n| n.contains("Large time difference")));

        let small = post_arrival_recommendation(&params, TravelDirection::East, 4.0);
        assert!(!small.notes.iter().any(|n| n.contains("Large time difference")));
    }
}
