//! Output formatting utilities.
//!
//! Pretty printing for CLI commands.

use ballot_core::{Ballot, Voter};
use ballot_types::Address;
use colored::Colorize;
use tabled::{Table, Tabled};

/// Format address for display (short hex).
pub fn format_address(addr: &Address) -> String {
    format_address_short(&format!("0x{}", addr.to_hex()))
}

/// Format address (short version).
pub fn format_address_short(addr: &str) -> String {
    if addr.len() > 12 {
        format!("{}...{}", &addr[..10], &addr[addr.len() - 8..])
    } else {
        addr.to_string()
    }
}

/// Print success message.
pub fn print_success(msg: &str) {
    println!("{}", format!("✓ {}", msg).green());
}

/// Print error message.
pub fn print_error(msg: &str) {
    eprintln!("{}", format!("Error: {}", msg).red());
}

/// Print warning message.
pub fn print_warning(msg: &str) {
    println!("{}", format!("⚠ {}", msg).yellow());
}

/// Print info message.
pub fn print_info(msg: &str) {
    println!("{}", format!("ℹ {}", msg).blue());
}

#[derive(Tabled)]
struct ProposalRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Encoded")]
    encoded: String,
    #[tabled(rename = "Votes")]
    votes: u64,
    #[tabled(rename = "")]
    marker: String,
}

/// Render the proposal tally as a table, marking the current winner.
pub fn proposals_table(ballot: &Ballot) -> String {
    let winner = ballot.winning_proposal();
    let rows: Vec<ProposalRow> = ballot
        .proposals()
        .iter()
        .enumerate()
        .map(|(index, p)| ProposalRow {
            index,
            name: p.name.to_string(),
            encoded: format!("0x{}", hex::encode(p.name.to_bytes32())),
            votes: p.vote_count,
            marker: if index == winner { "winning".to_string() } else { String::new() },
        })
        .collect();

    Table::new(rows).to_string()
}

/// Print ballot summary.
pub fn print_ballot_info(address: &Address, ballot: &Ballot) {
    println!("{}", "Ballot Information".bold());
    println!("{}", "=".repeat(50));
    println!("Address:      {}", address.to_string().bright_cyan());
    println!("Chairperson:  {}", ballot.chairperson().to_string().bright_green());
    println!("Proposals:    {}", ballot.proposal_count().to_string().bright_magenta());
    println!("Cast weight:  {}", ballot.spent_weight().to_string().bright_yellow());
    println!();
    println!("{}", proposals_table(ballot));
}

/// Print one voter record.
pub fn print_voter(address: &Address, voter: &Voter, ballot: &Ballot) {
    println!("{}", "Voter".bold());
    println!("{}", "=".repeat(50));
    println!("Address:   {}", address.to_string().bright_cyan());
    println!("Weight:    {}", voter.weight.to_string().bright_yellow());

    let status = if voter.is_delegating() {
        "delegated".yellow()
    } else if voter.voted {
        "voted".green()
    } else if voter.has_right() {
        "not voted".normal()
    } else {
        "no right to vote".red()
    };
    println!("Status:    {}", status);

    if let Some(delegate) = voter.delegate {
        println!("Delegate:  {}", delegate.to_string().bright_cyan());
    } else if voter.voted {
        let name = ballot
            .proposal(voter.vote)
            .map(|p| p.name.to_string())
            .unwrap_or_default();
        println!("Vote:      {} ({})", voter.vote, name.bright_green());
    }
}
