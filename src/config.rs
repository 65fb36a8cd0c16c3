//! Configuration management for Hashledger

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::LedgerError;
use crate::hashing::HASH_HEX_LEN;
use crate::ledger::DEFAULT_DIFFICULTY;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub mining: MiningConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MiningConfig {
    #[serde(default = "default_difficulty")]
    pub difficulty: u32,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            difficulty: default_difficulty(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DemoConfig {
    /// Payloads the demo driver appends, in order.
    #[serde(default)]
    pub payloads: Vec<String>,
}

fn default_difficulty() -> u32 {
    DEFAULT_DIFFICULTY
}

/// Load configuration from a TOML file, falling back to defaults when the
/// file is absent.
pub fn load_config(path: &Path) -> Result<Config, LedgerError> {
    let config_str = fs::read_to_string(path).unwrap_or_default();
    let config: Config = if config_str.is_empty() {
        Config {
            mining: MiningConfig::default(),
            demo: DemoConfig::default(),
        }
    } else {
        toml::from_str(&config_str)?
    };

    // Validate critical values
    if config.mining.difficulty as usize > HASH_HEX_LEN {
        return Err(LedgerError::Config(format!(
            "mining.difficulty must be at most {}, got {}",
            HASH_HEX_LEN, config.mining.difficulty
        )));
    }

    Ok(config)
}
