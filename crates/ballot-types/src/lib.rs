//! Ballot Types - Primitive value types for the ballot ledger.
//!
//! This crate provides:
//! - Addresses (20-byte, Bech32m or hex encoded)
//! - Proposal names (fixed 32-byte storage form)

pub mod address;
pub mod proposal_name;
pub mod error;

#[cfg(feature = "serde")]
mod serialization;

pub use address::Address;
pub use proposal_name::ProposalName;
pub use error::TypesError;
