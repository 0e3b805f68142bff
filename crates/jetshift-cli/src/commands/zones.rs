use clap::Args;

use jetshift_core::common_timezones;

#[derive(Args)]
pub struct ZonesArgs {
    /// Filter by substring of the id or city name
    #[arg(long)]
    search: Option<String>,
    /// Print the list as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: ZonesArgs) -> Result<(), Box<dyn std::error::Error>> {
    let needle = args.search.map(|s| s.to_lowercase());
    let entries: Vec<_> = common_timezones()
        .iter()
        .filter(|entry| match &needle {
            Some(needle) => {
                entry.id.to_lowercase().contains(needle)
                    || entry.city.to_lowercase().contains(needle)
            }
            None => true,
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("no matching timezones");
        return Ok(());
    }
    for entry in entries {
        println!("{:<22} {} ({})", entry.id, entry.city, entry.region);
    }
    Ok(())
}
