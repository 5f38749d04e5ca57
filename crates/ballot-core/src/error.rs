use ballot_types::{Address, TypesError};
use thiserror::Error;

/// Errors that can occur in ballot operations.
///
/// Every rejection leaves the ballot exactly as it was before the call.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BallotError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Already voted")]
    AlreadyVoted,

    #[error("No right to vote")]
    NoRight,

    #[error("Self-delegation not allowed")]
    SelfDelegation,

    #[error("Delegation cycle detected")]
    DelegationCycle,

    #[error("Invalid proposal index: {index} (proposal count {count})")]
    InvalidIndex { index: usize, count: usize },

    #[error("Voter already has the right to vote")]
    AlreadyGranted,

    #[error("Ballot needs at least one proposal")]
    NoProposals,

    #[error("Delegate has no right to vote: {0}")]
    DelegateHasNoRight(Address),

    #[error("Weight overflow")]
    WeightOverflow,

    #[error("Invalid proposal name: {0}")]
    InvalidProposalName(#[from] TypesError),

    #[error("Invalid ballot state: {0}")]
    InvalidState(String),
}
