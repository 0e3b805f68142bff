use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "jetshift", version, about = "Jet lag adaptation planner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an adaptation plan for a trip
    Plan(commands::plan::PlanArgs),
    /// List or search common timezones
    Zones(commands::zones::ZonesArgs),
    /// Show the current offset between two timezones
    Offset(commands::offset::OffsetArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Plan(args) => commands::plan::run(args),
        Commands::Zones(args) => commands::zones::run(args),
        Commands::Offset(args) => commands::offset::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
