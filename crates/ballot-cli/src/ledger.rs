//! Local ballot ledger.
//!
//! Stands in for the shared ledger the ballots live on: a JSON file holding
//! every deployed ballot keyed by its address. Each submission applies one
//! operation and the file is written back only when it succeeds.

use anyhow::Context;
use ballot_core::{Ballot, BallotConfig, BallotError};
use ballot_types::{Address, ProposalName};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Persisted ledger contents.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerData {
    /// Deployments per deployer, used to derive ballot addresses
    #[serde(default)]
    pub nonces: BTreeMap<Address, u64>,
    /// Deployed ballots
    #[serde(default)]
    pub ballots: BTreeMap<Address, Ballot>,
}

/// Ledger backed by a JSON file.
#[derive(Debug)]
pub struct LocalLedger {
    path: PathBuf,
    data: LedgerData,
}

impl LocalLedger {
    /// Open the ledger at `path`. A missing file is an empty ledger.
    pub fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        let data = if path.exists() {
            let json = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read ledger '{}'", path.display()))?;
            let data: LedgerData = serde_json::from_str(&json)
                .with_context(|| format!("Failed to parse ledger '{}'", path.display()))?;
            tracing::debug!("Loaded ledger with {} ballots", data.ballots.len());
            data
        } else {
            tracing::debug!("No ledger at {:?}, starting empty", path);
            LedgerData::default()
        };
        Ok(Self { path, data })
    }

    /// Persist the ledger. Writes a sibling temp file then renames it over
    /// the ledger so a crash never leaves a half-written file.
    pub fn save(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(&self.data)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .with_context(|| format!("Failed to write ledger '{}'", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace ledger '{}'", self.path.display()))?;

        tracing::debug!("Ledger persisted to {:?}", self.path);
        Ok(())
    }

    /// Deploy a new ballot with `deployer` as chairperson and save.
    pub fn deploy(
        &mut self,
        deployer: Address,
        names: &[String],
        config: BallotConfig,
    ) -> anyhow::Result<Address> {
        let names = names
            .iter()
            .map(|n| parse_proposal_name(n))
            .collect::<Result<Vec<_>, _>>()?;
        let ballot = Ballot::with_config(names, deployer, config)?;

        let nonce = self.data.nonces.get(&deployer).copied().unwrap_or(0);
        let address = compute_ballot_address(&deployer, nonce);

        self.data.nonces.insert(deployer, nonce + 1);
        self.data.ballots.insert(address, ballot);
        self.save()?;

        tracing::info!("Deployed ballot at {}", address);
        Ok(address)
    }

    /// Get a deployed ballot.
    pub fn ballot(&self, address: &Address) -> anyhow::Result<&Ballot> {
        self.data
            .ballots
            .get(address)
            .ok_or_else(|| anyhow::anyhow!("No ballot deployed at {}", address))
    }

    /// Apply one operation to the ballot at `address`.
    ///
    /// On success the ledger is saved; on rejection the file is not touched.
    /// Ballot operations are atomic, so the in-memory copy is unchanged too.
    pub fn submit<F>(&mut self, address: &Address, operation: F) -> anyhow::Result<()>
    where
        F: FnOnce(&mut Ballot) -> Result<(), BallotError>,
    {
        let ballot = self
            .data
            .ballots
            .get_mut(address)
            .ok_or_else(|| anyhow::anyhow!("No ballot deployed at {}", address))?;

        if let Err(e) = operation(ballot) {
            tracing::debug!("Operation on {} rejected: {}", address, e);
            return Err(e.into());
        }

        self.save()
    }

    /// Addresses of all deployed ballots.
    pub fn ballot_addresses(&self) -> Vec<Address> {
        self.data.ballots.keys().copied().collect()
    }
}

/// Parse a proposal name given either as text or as its 32-byte
/// `0x`-prefixed hex storage form.
pub fn parse_proposal_name(s: &str) -> anyhow::Result<ProposalName> {
    let encoded = s.strip_prefix("0x").filter(|h| h.len() == 64);
    let Some(encoded) = encoded else {
        return Ok(ProposalName::new(s)?);
    };
    let mut bytes = [0u8; 32];
    hex::decode_to_slice(encoded, &mut bytes)
        .with_context(|| format!("Invalid encoded proposal name '{}'", s))?;
    Ok(ProposalName::from_bytes32(bytes)?)
}

/// Derive a ballot address from its deployer and deployment count.
/// `address = blake3(deployer || nonce_le)[12..32]`
pub fn compute_ballot_address(deployer: &Address, nonce: u64) -> Address {
    let mut hasher = blake3::Hasher::new();
    hasher.update(deployer.as_bytes());
    hasher.update(&nonce.to_le_bytes());
    let hash = hasher.finalize();
    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&hash.as_bytes()[12..]);
    Address::from_bytes(bytes)
}
