//! Per-address voter records.

use ballot_types::Address;
use serde::{Deserialize, Serialize};

/// Voting record of one address.
///
/// Every address implicitly has a default record: no weight, not voted,
/// no delegate. Records are never deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Voter {
    /// Votes this address is worth (0 = no right to vote)
    pub weight: u64,
    /// Whether the address has voted or delegated
    pub voted: bool,
    /// Address delegated to, if the vote was delegated
    pub delegate: Option<Address>,
    /// Index of the proposal voted for
    pub vote: usize,
}

impl Voter {
    /// Record granted by the chairperson.
    pub fn with_right() -> Self {
        Self {
            weight: 1,
            ..Self::default()
        }
    }

    /// Check if the address may still vote or delegate.
    pub fn has_right(&self) -> bool {
        self.weight != 0
    }

    /// Check if the vote went to a delegate rather than a proposal.
    pub fn is_delegating(&self) -> bool {
        self.voted && self.delegate.is_some()
    }

    /// Check if the address voted for a proposal itself.
    pub fn voted_directly(&self) -> bool {
        self.voted && self.delegate.is_none()
    }
}
