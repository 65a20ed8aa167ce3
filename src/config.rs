use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub ledger: LedgerConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ledger: LedgerConfig::default(),
            ranking: RankingConfig::default(),
        }
    }
}

/// Capacity and retention tunables for the usage ledgers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerConfig {
    /// Maximum tracked commands
    #[serde(default = "default_command_capacity")]
    pub command_capacity: usize,
    /// Command record retention in hours
    #[serde(default = "default_command_ttl_hours")]
    pub command_ttl_hours: u64,
    /// Maximum tracked (provider, tool) pairs
    #[serde(default = "default_tool_capacity")]
    pub tool_capacity: usize,
    /// Tool record retention in days
    #[serde(default = "default_tool_ttl_days")]
    pub tool_ttl_days: u64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            command_capacity: default_command_capacity(),
            command_ttl_hours: default_command_ttl_hours(),
            tool_capacity: default_tool_capacity(),
            tool_ttl_days: default_tool_ttl_days(),
        }
    }
}

impl LedgerConfig {
    /// Command retention as a duration
    pub fn command_ttl(&self) -> Duration {
        Duration::from_secs(self.command_ttl_hours * 60 * 60)
    }

    /// Tool retention as a duration
    pub fn tool_ttl(&self) -> Duration {
        Duration::from_secs(self.tool_ttl_days * 24 * 60 * 60)
    }
}

/// Shortlist tunables for the relevance ranker
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankingConfig {
    /// Default shortlist size
    #[serde(default = "default_shortlist_limit")]
    pub shortlist_limit: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            shortlist_limit: default_shortlist_limit(),
        }
    }
}

fn default_command_capacity() -> usize {
    50
}

fn default_command_ttl_hours() -> u64 {
    24
}

fn default_tool_capacity() -> usize {
    200
}

fn default_tool_ttl_days() -> u64 {
    7
}

fn default_shortlist_limit() -> usize {
    5
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path
    pub fn load_from(config_path: &PathBuf) -> Result<Self> {
        if !config_path.exists() {
            let config = Config::default();
            config.save_to(config_path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(config_path)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents)
            .context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, config_path: &PathBuf) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(config_path, toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .context("Could not determine home directory")?;

        Ok(home.join(".toolscout").join("config.toml"))
    }
}
