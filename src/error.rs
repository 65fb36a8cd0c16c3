//! Error types for Hashledger

use thiserror::Error;

use crate::hashing::HASH_HEX_LEN;

#[derive(Debug, Error)]
pub enum LedgerError {
    /// A difficulty no SHA-256 hash can ever satisfy: the hex encoding is
    /// only `HASH_HEX_LEN` digits wide.
    #[error("invalid difficulty {0} (expected at most {max} leading zero hex digits)", max = HASH_HEX_LEN)]
    InvalidDifficulty(u32),

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, LedgerError>;
