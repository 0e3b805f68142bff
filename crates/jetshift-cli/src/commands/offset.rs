use clap::Args;

use jetshift_core::{format_utc_offset, offset_between, TravelDirection};

#[derive(Args)]
pub struct OffsetArgs {
    /// Home timezone IANA id
    #[arg(long)]
    from: String,
    /// Destination timezone IANA id
    #[arg(long)]
    to: String,
}

pub fn run(args: OffsetArgs) -> Result<(), Box<dyn std::error::Error>> {
    let now = chrono::Utc::now().naive_utc();
    let offset = offset_between(&args.from, &args.to, now)?;
    let direction = TravelDirection::from_offset(offset);
    println!(
        "{} -> {}: {} ({:+.1} hours, {}ward travel)",
        args.from,
        args.to,
        format_utc_offset(offset),
        offset,
        direction,
    );
    Ok(())
}
