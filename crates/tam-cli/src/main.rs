use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tam_cli::commands::{check, status, trackers, util};
use tam_cli::{Cli, Commands, Config};

/// Resolve the reference time for an evaluation. Defaults to now.
fn reference_time(at: Option<&str>) -> Result<DateTime<Utc>> {
    at.map_or_else(|| Ok(Utc::now()), util::parse_datetime)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Some(Commands::Status {
            treatments,
            at,
            json,
        }) => {
            let reference = reference_time(at.as_deref())?;
            status::run(&mut out, &config, treatments.as_deref(), reference, *json)?;
        }
        Some(Commands::Check { treatments, at }) => {
            let reference = reference_time(at.as_deref())?;
            check::run(&mut out, &config, treatments.as_deref(), reference)?;
        }
        Some(Commands::Trackers { json }) => {
            trackers::run(&mut out, &config, *json)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
