//! Ballot CLI - Command-line interface for the ballot ledger.
//!
//! Submits grant, vote, and delegate operations to ballots stored in a local
//! ledger file and reports results.

pub mod commands;
pub mod config;
pub mod ledger;
pub mod output;
pub mod telemetry;

use clap::Parser;

use crate::commands::Session;
use crate::config::CliConfig;

fn main() {
    let cli = commands::Cli::parse();

    if let Err(e) = run(cli) {
        output::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: commands::Cli) -> anyhow::Result<()> {
    let config_path = CliConfig::config_path()?;
    let config = CliConfig::load_from(&config_path)?;

    let log_level = match (&cli.log_level, cli.verbose) {
        (Some(level), _) => level.clone(),
        (None, true) => "debug".to_string(),
        (None, false) => config.log_level.clone(),
    };
    telemetry::init_telemetry(&log_level, false)?;

    let session = Session::new(config, config_path, cli.ledger, cli.from);
    tracing::debug!("Using ledger {:?}", session.ledger_path);

    commands::execute(cli.command, &session)
}
