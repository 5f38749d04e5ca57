//! CLI command implementations.
//!
//! Each command loads the ledger, performs at most one ballot operation as
//! the caller given by `--from`, and reports the outcome.

use ballot_types::Address;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::CliConfig;
use crate::ledger::LocalLedger;
use crate::output::*;

/// Main CLI.
#[derive(Parser, Debug)]
#[command(name = "ballot")]
#[command(about = "Ballot CLI - delegated, weighted voting ledger")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Ledger file (defaults to the configured ledger_path)
    #[arg(short, long, global = true, env = "BALLOT_LEDGER")]
    pub ledger: Option<PathBuf>,

    /// Caller address: hex, Bech32m, or @label
    #[arg(short, long, global = true, env = "BALLOT_FROM")]
    pub from: Option<String>,

    /// Log filter, e.g. "info" or "ballot_core=debug"
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deploy a new ballot; the caller becomes chairperson
    Deploy {
        /// Proposal names, in order (text or 0x-prefixed 32-byte hex)
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Give an address the right to vote (chairperson only)
    GiveRight {
        /// Ballot address
        ballot: String,
        /// Voter address
        voter: String,
    },
    /// Vote for a proposal by index
    Vote {
        /// Ballot address
        ballot: String,
        /// Proposal index
        proposal: usize,
    },
    /// Delegate your vote to another voter
    Delegate {
        /// Ballot address
        ballot: String,
        /// Delegate address
        to: String,
    },
    /// Show the winning proposal
    Winner {
        /// Ballot address
        ballot: String,
    },
    /// Show proposals and tallies
    Proposals {
        /// Ballot address
        ballot: String,
    },
    /// Show a voter record
    Voter {
        /// Ballot address
        ballot: String,
        /// Voter address
        address: String,
    },
    /// List deployed ballots
    Ballots,
    /// Show the address derived from a label
    Address {
        /// Label
        label: String,
    },
    /// Configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Config commands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current config
    Show,
    /// Set config value
    Set {
        /// Key
        key: String,
        /// Value
        value: String,
    },
    /// Get config value
    Get {
        /// Key
        key: String,
    },
    /// Reset to defaults
    Reset,
}

/// Settings resolved for one invocation.
#[derive(Debug, Clone)]
pub struct Session {
    pub config: CliConfig,
    pub config_path: PathBuf,
    pub ledger_path: PathBuf,
    pub from: Option<String>,
}

impl Session {
    /// Combine command-line overrides with the loaded config.
    pub fn new(
        config: CliConfig,
        config_path: PathBuf,
        ledger: Option<PathBuf>,
        from: Option<String>,
    ) -> Self {
        let ledger_path = ledger.unwrap_or_else(|| config.ledger_path.clone());
        let from = from.or_else(|| config.default_account.clone());
        Self {
            config,
            config_path,
            ledger_path,
            from,
        }
    }

    /// Address operations are submitted as.
    pub fn caller(&self) -> anyhow::Result<Address> {
        let from = self.from.as_deref().ok_or_else(|| {
            anyhow::anyhow!("No caller address: pass --from or set default_account")
        })?;
        parse_address(from)
    }

    fn ledger(&self) -> anyhow::Result<LocalLedger> {
        LocalLedger::open(&self.ledger_path)
    }
}

/// Parse an address given as hex, Bech32m, or `@label`.
pub fn parse_address(s: &str) -> anyhow::Result<Address> {
    let s = s.trim();
    if let Some(label) = s.strip_prefix('@') {
        if label.is_empty() {
            anyhow::bail!("Empty address label");
        }
        return Ok(Address::from_label(label));
    }
    Address::from_str(s).map_err(|e| anyhow::anyhow!("Invalid address '{}': {}", s, e))
}

/// Execute a CLI command.
pub fn execute(cmd: Commands, session: &Session) -> anyhow::Result<()> {
    match cmd {
        Commands::Deploy { names } => {
            let caller = session.caller()?;
            print_info(&format!("Using address {}", caller));

            let mut ledger = session.ledger()?;
            let address = ledger.deploy(caller, &names, session.config.ballot_config())?;

            print_success(&format!("Deployed ballot with {} proposals", names.len()));
            println!("Ballot:       {}", address.to_string().bright_cyan());
            println!("Chairperson:  {}", caller.to_string().bright_green());
        }

        Commands::GiveRight { ballot, voter } => {
            let caller = session.caller()?;
            let ballot = parse_address(&ballot)?;
            let voter = parse_address(&voter)?;

            let mut ledger = session.ledger()?;
            ledger.submit(&ballot, |b| b.give_right_to_vote(caller, voter))?;
            print_success(&format!("Gave right to vote to {}", voter));
        }

        Commands::Vote { ballot, proposal } => {
            let caller = session.caller()?;
            let ballot = parse_address(&ballot)?;
            print_info(&format!("Using address {}", caller));

            let mut ledger = session.ledger()?;
            if let Some(p) = ledger.ballot(&ballot)?.proposal(proposal) {
                println!("Casting vote to '{}'", p.name);
            }
            ledger.submit(&ballot, |b| b.vote(caller, proposal))?;
            print_success("Vote recorded");
        }

        Commands::Delegate { ballot, to } => {
            let caller = session.caller()?;
            let ballot = parse_address(&ballot)?;
            let to = parse_address(&to)?;
            print_info(&format!("Using address {}", caller));

            println!("Delegate vote to {}", to);
            let mut ledger = session.ledger()?;
            ledger.submit(&ballot, |b| b.delegate(caller, to))?;

            let resolved = ledger.ballot(&ballot)?.voter(&caller).delegate;
            if let Some(resolved) = resolved.filter(|r| *r != to) {
                print_info(&format!("Delegation resolved to {}", resolved));
            }
            print_success("Delegation recorded");
        }

        Commands::Winner { ballot } => {
            let ballot = parse_address(&ballot)?;
            let ledger = session.ledger()?;
            let b = ledger.ballot(&ballot)?;
            println!("Winner is '{}'", b.winner_name());
        }

        Commands::Proposals { ballot } => {
            let ballot = parse_address(&ballot)?;
            let ledger = session.ledger()?;
            print_ballot_info(&ballot, ledger.ballot(&ballot)?);
        }

        Commands::Voter { ballot, address } => {
            let ballot = parse_address(&ballot)?;
            let address = parse_address(&address)?;
            let ledger = session.ledger()?;
            let b = ledger.ballot(&ballot)?;
            print_voter(&address, &b.voter(&address), b);
        }

        Commands::Ballots => {
            let ledger = session.ledger()?;
            let addresses = ledger.ballot_addresses();
            if addresses.is_empty() {
                println!("{}", "No ballots deployed".yellow());
                println!("Deploy one with: ballot deploy <NAME>...");
            } else {
                println!("{}", "Ballots:".bold());
                for address in &addresses {
                    let b = ledger.ballot(address)?;
                    println!(
                        "  • {} ({}) - {} proposals, leading: {}",
                        address.to_string().bright_cyan(),
                        format_address(address),
                        b.proposal_count(),
                        b.winner_name().to_string().bright_green()
                    );
                }
                println!("\nTotal: {} ballot(s)", addresses.len());
            }
        }

        Commands::Address { label } => {
            let address = Address::from_label(&label);
            println!("Address: {}", address.to_string().bright_cyan());
            println!("Hex:     {:x}", address);
        }

        Commands::Config(cmd) => execute_config(cmd, session)?,
    }

    Ok(())
}

/// Execute config commands.
fn execute_config(cmd: ConfigCommands, session: &Session) -> anyhow::Result<()> {
    match cmd {
        ConfigCommands::Show => {
            println!("{}", "Configuration".bold());
            println!("{}", "=".repeat(50));
            println!("{}", toml::to_string_pretty(&session.config)?);
            println!("File: {}", session.config_path.display());
        }
        ConfigCommands::Get { key } => {
            println!("{}", session.config.get(&key)?);
        }
        ConfigCommands::Set { key, value } => {
            let mut config = session.config.clone();
            config.set(&key, &value)?;
            config.save_to(&session.config_path)?;
            print_success(&format!("Set {} = {}", key, value));
        }
        ConfigCommands::Reset => {
            CliConfig::default().save_to(&session.config_path)?;
            print_warning("Configuration reset to defaults");
        }
    }
    Ok(())
}
