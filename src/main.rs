use anyhow::Context;
use clap::Parser;
use tracing::warn;

use huddle_schedule::{RosterConfig, ScheduleStore};

mod cli;

fn main() {
    if let Err(error) = run() {
        eprintln!("huddle error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = RosterConfig::load(cli.config.as_deref())
        .context("failed to load roster configuration")?;

    if matches!(cli.command, cli::Commands::Check) {
        return cli::commands::check(&config);
    }

    if let Err(errors) = config.validate() {
        for error in &errors {
            warn!(kind = ?error.kind, "{}", error.message);
        }
    }

    let mut store = ScheduleStore::from_config(&config).context("failed to generate roster")?;
    for edit in &cli.edits {
        edit.apply(&mut store)
            .with_context(|| format!("failed to apply edit '{edit}'"))?;
    }

    let locale = cli.locale.unwrap_or(config.output.locale);
    cli::commands::dispatch(&cli.command, &store, &config, locale)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("HUDDLE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
