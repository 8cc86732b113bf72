use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hotseat_cli::Session;
use hotseat_game::Settings;

/// Two-player chess on one terminal, with clocks.
#[derive(Parser, Debug)]
#[command(name = "hotseat", version, about, long_about = None)]
struct Args {
    /// Minutes on each clock at the start of a game
    #[arg(long, default_value_t = 10)]
    minutes: u32,

    /// Seconds added to a player's clock after each of their moves
    #[arg(long, default_value_t = 0)]
    increment: u32,

    /// Reject moves that leave the mover's own king attacked
    #[arg(long)]
    strict: bool,

    /// Do not run the clocks
    #[arg(long)]
    no_clock: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let settings = Settings {
        time_control_minutes: args.minutes,
        increment_seconds: args.increment,
        strict_legality: args.strict,
    };
    info!(?settings, clock = !args.no_clock, "hotseat starting");

    Session::new(settings, !args.no_clock, std::io::stdout())
        .run()
        .context("hotseat session failed")?;
    Ok(())
}
