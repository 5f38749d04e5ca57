//! Fixed-width proposal names.
//!
//! A proposal name is stored as 32 bytes: the UTF-8 text followed by zero
//! padding. The readable form is recovered by stripping the padding.

use crate::error::TypesError;
use std::fmt;
use std::str::FromStr;

/// Proposal name, at most 32 bytes of UTF-8 without NUL bytes.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ProposalName(String);

impl ProposalName {
    /// Width of the encoded storage form.
    pub const MAX_LEN: usize = 32;

    /// Create a name from its readable form.
    pub fn new(name: &str) -> Result<Self, TypesError> {
        if name.len() > Self::MAX_LEN {
            return Err(TypesError::ProposalNameTooLong {
                max: Self::MAX_LEN,
                actual: name.len(),
            });
        }
        if name.contains('\0') {
            return Err(TypesError::InvalidProposalName(
                "NUL byte in name".to_string(),
            ));
        }
        Ok(Self(name.to_string()))
    }

    /// Decode the 32-byte storage form.
    pub fn from_bytes32(bytes: [u8; 32]) -> Result<Self, TypesError> {
        let end = bytes
            .iter()
            .rposition(|&b| b != 0)
            .map(|i| i + 1)
            .unwrap_or(0);
        let text = std::str::from_utf8(&bytes[..end])
            .map_err(|e| TypesError::InvalidProposalName(e.to_string()))?;
        Self::new(text)
    }

    /// Encode to the 32-byte storage form.
    pub fn to_bytes32(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out[..self.0.len()].copy_from_slice(self.0.as_bytes());
        out
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProposalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for ProposalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProposalName({:?})", self.0)
    }
}

impl FromStr for ProposalName {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ProposalName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
