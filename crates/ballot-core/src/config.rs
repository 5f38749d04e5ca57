//! Ballot configuration.

use serde::{Deserialize, Serialize};

/// Default bound on delegation hops followed while resolving a chain.
pub const DEFAULT_MAX_DELEGATION_DEPTH: usize = 64;

/// Tunables of a ballot. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallotConfig {
    /// Maximum number of `delegate` pointers followed from the chosen
    /// delegate before the call is rejected as a loop.
    pub max_delegation_depth: usize,
}

impl Default for BallotConfig {
    fn default() -> Self {
        Self {
            max_delegation_depth: DEFAULT_MAX_DELEGATION_DEPTH,
        }
    }
}

impl BallotConfig {
    /// Create with custom max depth.
    pub fn with_max_delegation_depth(mut self, depth: usize) -> Self {
        self.max_delegation_depth = depth;
        self
    }
}
