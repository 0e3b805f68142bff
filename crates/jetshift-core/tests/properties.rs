//! Property tests for the time arithmetic the planner leans on.

use proptest::prelude::*;

use jetshift_core::timeutil::{add_hours, format_time, is_valid_time, sleep_duration};

fn arb_time() -> impl Strategy<Value = String> {
    (0u32..24, 0u32..60).prop_map(|(h, m)| format_time(h, m))
}

proptest! {
    #[test]
    fn add_hours_always_yields_valid_time(time in arb_time(), delta in -72.0f64..72.0) {
        let shifted = add_hours(&time, delta);
        prop_assert!(is_valid_time(&shifted), "invalid result: {shifted}");
    }

    #[test]
    fn add_hours_zero_is_identity(time in arb_time()) {
        prop_assert_eq!(add_hours(&time, 0.0), time);
    }

    #[test]
    fn add_hours_full_day_is_identity(time in arb_time()) {
        prop_assert_eq!(add_hours(&time, 24.0), time.clone());
        prop_assert_eq!(add_hours(&time, -24.0), time);
    }

    #[test]
    fn sleep_duration_stays_in_range(bed in arb_time(), wake in arb_time()) {
        let duration = sleep_duration(&bed, &wake);
        prop_assert!(duration > 0.0 && duration <= 24.0, "out of range: {duration}");
    }

    // Shifting both endpoints by the same delta must not change the
    // sleep duration; this is what keeps pre-travel days restful.
    #[test]
    fn equal_shift_preserves_sleep_duration(
        bed in arb_time(),
        wake in arb_time(),
        delta in -14.0f64..14.0,
    ) {
        prop_assume!(bed != wake);
        let before = sleep_duration(&bed, &wake);
        let after = sleep_duration(&add_hours(&bed, delta), &add_hours(&wake, delta));
        prop_assert!((before - after).abs() < 1.0 / 60.0 + 1e-9);
    }
}
