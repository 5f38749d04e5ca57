//! Proposals and tally.
//!
//! The proposal list is fixed at construction; a proposal's index is its
//! permanent identifier.

use ballot_types::ProposalName;
use serde::{Deserialize, Serialize};

/// Proposal with its running tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    /// Short name
    pub name: ProposalName,
    /// Accumulated weight
    pub vote_count: u64,
}

impl Proposal {
    /// Create a proposal with an empty tally.
    pub fn new(name: ProposalName) -> Self {
        Self {
            name,
            vote_count: 0,
        }
    }
}

/// Index of the proposal with the greatest tally.
///
/// Scans in index order and keeps the first maximum, so ties resolve to the
/// lowest index. All-zero tallies (or an empty slice) give 0.
pub fn winning_index(proposals: &[Proposal]) -> usize {
    let mut winning_vote_count = 0;
    let mut winner = 0;
    for (index, proposal) in proposals.iter().enumerate() {
        if proposal.vote_count > winning_vote_count {
            winning_vote_count = proposal.vote_count;
            winner = index;
        }
    }
    winner
}

/// Total weight recorded across all tallies.
pub fn total_votes(proposals: &[Proposal]) -> u64 {
    proposals.iter().map(|p| p.vote_count).sum()
}
