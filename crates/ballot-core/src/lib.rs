//! Ballot Core - Delegated, weighted voting ledger.
//!
//! This crate provides:
//! - The `Ballot` state machine (grant rights, vote, delegate, tally)
//! - Transitive delegation with bounded chain resolution
//! - First-maximal winner selection
//!
//! Operations take the caller address explicitly and are expected to be
//! invoked one at a time; each one applies fully or not at all.

pub mod ballot;
pub mod config;
pub mod delegation;
pub mod error;
pub mod proposal;
pub mod voter;

pub use ballot::Ballot;
pub use config::{BallotConfig, DEFAULT_MAX_DELEGATION_DEPTH};
pub use delegation::DelegationView;
pub use error::BallotError;
pub use proposal::{winning_index, Proposal};
pub use voter::Voter;

pub use ballot_types::{Address, ProposalName};
