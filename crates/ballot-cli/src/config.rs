//! CLI configuration management.
//!
//! Handles the ledger location, default caller, and logging settings.

use ballot_core::{BallotConfig, DEFAULT_MAX_DELEGATION_DEPTH};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Ledger file holding deployed ballots
    pub ledger_path: PathBuf,
    /// Caller used when `--from` is not given
    pub default_account: Option<String>,
    /// Log filter (tracing EnvFilter syntax)
    pub log_level: String,
    /// Delegation hop bound for newly deployed ballots
    pub max_delegation_depth: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            ledger_path: Self::base_dir().join("ledger.json"),
            default_account: None,
            log_level: "warn".to_string(),
            max_delegation_depth: DEFAULT_MAX_DELEGATION_DEPTH,
        }
    }
}

impl CliConfig {
    /// Load configuration from `path`, creating it if missing.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            let config: CliConfig = toml::from_str(&contents)
                .map_err(|e| anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e))?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Get configuration file path.
    pub fn config_path() -> anyhow::Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;
        Ok(home.join(".ballot").join("config.toml"))
    }

    fn base_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".ballot")
    }

    /// Ballot settings applied at deployment.
    pub fn ballot_config(&self) -> BallotConfig {
        BallotConfig::default().with_max_delegation_depth(self.max_delegation_depth)
    }

    /// Get a value by key.
    pub fn get(&self, key: &str) -> anyhow::Result<String> {
        match key {
            "ledger_path" => Ok(self.ledger_path.display().to_string()),
            "default_account" => Ok(self.default_account.clone().unwrap_or_default()),
            "log_level" => Ok(self.log_level.clone()),
            "max_delegation_depth" => Ok(self.max_delegation_depth.to_string()),
            _ => anyhow::bail!("Unknown config key: {}", key),
        }
    }

    /// Set a value by key. An empty `default_account` clears it.
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "ledger_path" => self.ledger_path = PathBuf::from(value),
            "default_account" => {
                self.default_account = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            "log_level" => self.log_level = value.to_string(),
            "max_delegation_depth" => {
                self.max_delegation_depth = value
                    .parse()
                    .map_err(|e| anyhow::anyhow!("Invalid max_delegation_depth '{}': {}", value, e))?;
            }
            _ => anyhow::bail!("Unknown config key: {}", key),
        }
        Ok(())
    }
}
