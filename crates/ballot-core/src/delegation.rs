//! Delegation chain resolution.
//!
//! A voter who delegates points at another address; that address may itself
//! have delegated. Weight always follows the chain to its final, non-delegating
//! address. Resolution is read-only so a rejected delegation has nothing to undo.

use std::collections::HashMap;
use ballot_types::Address;
use tracing::debug;
use crate::error::BallotError;
use crate::voter::Voter;

/// Read-only view over the voter map for following delegate pointers.
#[derive(Debug, Clone, Copy)]
pub struct DelegationView<'a> {
    voters: &'a HashMap<Address, Voter>,
    /// Maximum number of pointers followed before giving up
    max_depth: usize,
}

impl<'a> DelegationView<'a> {
    /// Create a view over `voters`.
    pub fn new(voters: &'a HashMap<Address, Voter>, max_depth: usize) -> Self {
        Self { voters, max_depth }
    }

    /// Get the address `address` delegated to, if any.
    fn next_hop(&self, address: &Address) -> Option<Address> {
        self.voters.get(address).and_then(|v| v.delegate)
    }

    /// Resolve where `delegator`'s weight lands when delegating to `to`.
    ///
    /// # Errors
    /// - `SelfDelegation` if `to == delegator`
    /// - `DelegationCycle` if the chain from `to` reaches `delegator`, or is
    ///   longer than `max_depth` hops
    pub fn resolve_delegate(
        &self,
        delegator: Address,
        to: Address,
    ) -> Result<Address, BallotError> {
        if to == delegator {
            return Err(BallotError::SelfDelegation);
        }

        let mut current = to;
        let mut hops = 0usize;
        while let Some(next) = self.next_hop(&current) {
            hops += 1;
            if hops > self.max_depth {
                debug!("Delegation chain from {} exceeds {} hops", to, self.max_depth);
                return Err(BallotError::DelegationCycle);
            }
            if next == delegator {
                debug!("Delegation from {} to {} loops back", delegator, to);
                return Err(BallotError::DelegationCycle);
            }
            current = next;
        }

        Ok(current)
    }

    /// Follow the chain starting at `address`.
    ///
    /// Returns the addresses reached, in order, excluding `address` itself.
    /// Stops after `max_depth` hops or on a revisit.
    pub fn chain(&self, address: Address) -> Vec<Address> {
        let mut result = Vec::new();
        let mut current = address;
        while result.len() < self.max_depth {
            match self.next_hop(&current) {
                Some(next) if next != address && !result.contains(&next) => {
                    result.push(next);
                    current = next;
                }
                _ => break,
            }
        }
        result
    }
}
