use chrono::{NaiveDate, Utc};
use clap::Args;

use jetshift_core::{
    format_utc_offset, generate_plan, offset_between, timeutil, DailyRecommendation, TravelPlan,
    TripParameters,
};

use crate::config::Config;

#[derive(Args)]
pub struct PlanArgs {
    /// Home timezone IANA id (falls back to the configured default)
    #[arg(long)]
    from: Option<String>,
    /// Destination timezone IANA id
    #[arg(long)]
    to: String,
    /// Departure date (YYYY-MM-DD)
    #[arg(long)]
    date: String,
    /// Departure time (HH:MM)
    #[arg(long)]
    time: Option<String>,
    /// Days at the destination
    #[arg(long, default_value_t = 7)]
    days: u32,
    /// Usual bedtime (HH:MM)
    #[arg(long)]
    bedtime: Option<String>,
    /// Usual wake time (HH:MM)
    #[arg(long)]
    wake: Option<String>,
    /// Print the plan as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: PlanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();

    let home_timezone = match args.from {
        Some(tz) => tz,
        None if !config.home_timezone.is_empty() => config.home_timezone.clone(),
        None => {
            return Err("no home timezone: pass --from or set it with \
                        `jetshift config set home_timezone <id>`"
                .into())
        }
    };

    let departure_date = NaiveDate::parse_from_str(&args.date, "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{}': expected YYYY-MM-DD", args.date))?;

    let params = TripParameters {
        home_timezone,
        destination_timezone: args.to,
        departure_date,
        departure_time: args.time.unwrap_or(config.departure_time),
        days_at_destination: args.days,
        current_bedtime: args.bedtime.unwrap_or(config.bedtime),
        current_wake_time: args.wake.unwrap_or(config.wake_time),
    };

    let today = Utc::now().date_naive();
    params.validate(today)?;

    // Resolve the offset at the departure instant so DST on the travel
    // date is accounted for.
    let at = timeutil::combine_date_time(departure_date, &params.departure_time);
    let offset = offset_between(&params.home_timezone, &params.destination_timezone, at)?;

    let plan = generate_plan(&params, offset, today);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print_plan(&plan);
    }
    Ok(())
}

fn print_plan(plan: &TravelPlan) {
    println!(
        "Trip: {} -> {} ({}, {} heading {})",
        plan.home_timezone,
        plan.destination_timezone,
        format_utc_offset(plan.timezone_offset_hours),
        plan.departure_date,
        plan.direction,
    );
    println!(
        "Current sleep: {} - {} ({:.1}h)",
        plan.current_bedtime, plan.current_wake_time, plan.current_sleep_duration
    );
    println!();

    if plan.pre_travel.is_empty() {
        println!("No pre-travel adjustment needed.");
    } else {
        println!("Pre-travel adjustment ({} days):", plan.pre_travel.len());
        for day in &plan.pre_travel {
            print_daily(day);
        }
    }

    println!();
    println!("Travel day ({}):", plan.travel_day.date);
    println!("  Sleep: {}", plan.travel_day.sleep_strategy);
    println!("  Light: {}", plan.travel_day.light_strategy);
    println!("  Meals: {}", plan.travel_day.meal_strategy);
    println!("  Hydration: {}", plan.travel_day.hydration);
    println!("  Movement: {}", plan.travel_day.movement);
    for note in &plan.travel_day.notes {
        println!("  - {note}");
    }

    println!();
    println!("After arrival:");
    for day in &plan.post_arrival {
        print_daily(day);
    }
}

fn print_daily(day: &DailyRecommendation) {
    println!(
        "  Day {:+} ({}): sleep {} - {}",
        day.day_number, day.date, day.sleep.bedtime, day.sleep.wake_time
    );
    for window in &day.light_exposure {
        println!("    Seek light {} - {} [{}]", window.start, window.end, window.priority);
    }
    for window in &day.light_avoidance {
        println!("    Avoid light {} - {} [{}]", window.start, window.end, window.priority);
    }
    if let Some(exercise) = &day.exercise {
        println!(
            "    Exercise {} - {} ({})",
            exercise.window.start, exercise.window.end, exercise.intensity
        );
    }
    if let Some(caffeine) = &day.caffeine {
        println!("    Caffeine until {}", caffeine.cutoff);
    }
    if let Some(melatonin) = &day.melatonin {
        println!("    Melatonin {} at {}", melatonin.dosage, melatonin.timing);
    }
    if let Some(meals) = &day.meals {
        println!(
            "    Meals: breakfast {}, lunch {}, dinner {}",
            meals.breakfast, meals.lunch, meals.dinner
        );
    }
    for note in &day.notes {
        println!("    - {note}");
    }
}
