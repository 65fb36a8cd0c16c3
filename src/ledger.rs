//! Append-only ledger of hash-linked records

use std::fmt;

use serde::Serialize;

use crate::error::LedgerError;
use crate::hashing::HASH_HEX_LEN;
use crate::miner::mine_record;
use crate::record::{Record, RecordDraft};

/// Link sentinel carried by the genesis record.
pub const GENESIS_LINK_HASH: &str = "0";
/// Payload of the genesis record.
pub const GENESIS_PAYLOAD: &str = "Genesis Block";
/// Difficulty used when none is configured.
pub const DEFAULT_DIFFICULTY: u32 = 4;

/// Fixed creation timestamp of the genesis record (2023-01-01T00:00:00Z),
/// so every ledger shares the same genesis hash.
const GENESIS_TIMESTAMP: u64 = 1_672_531_200_000;

/// Why a record failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationFault {
    /// The stored content hash no longer matches the hash recomputed from
    /// the record's own fields.
    HashMismatch,
    /// The record's link hash does not match its predecessor's content hash.
    BrokenLink,
}

impl fmt::Display for ValidationFault {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValidationFault::HashMismatch => write!(f, "content hash mismatch"),
            ValidationFault::BrokenLink => write!(f, "broken link to predecessor"),
        }
    }
}

/// Outcome of a validation pass. A reported result, not an error: the caller
/// decides how to react to an invalid ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationReport {
    Valid,
    Invalid { position: u64, fault: ValidationFault },
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationReport::Valid)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValidationReport::Valid => write!(f, "ledger is valid"),
            ValidationReport::Invalid { position, fault } => {
                write!(f, "record {} is invalid: {}", position, fault)
            }
        }
    }
}

/// The ordered, append-only record sequence plus the fixed difficulty policy
/// governing admission of new records.
///
/// Records are owned exclusively by the ledger; callers only ever see shared
/// references to sealed records.
#[derive(Debug)]
pub struct Ledger {
    records: Vec<Record>,
    difficulty: u32,
}

impl Ledger {
    /// Create a ledger seeded with the genesis record.
    ///
    /// The genesis hash is computed once and never searched against the
    /// difficulty target. Difficulties beyond the hex width of the digest
    /// are rejected here rather than left to hang the first `append`.
    pub fn new(difficulty: u32) -> Result<Self, LedgerError> {
        if difficulty as usize > HASH_HEX_LEN {
            return Err(LedgerError::InvalidDifficulty(difficulty));
        }
        let genesis = RecordDraft::with_created_at(
            0,
            GENESIS_LINK_HASH.to_string(),
            GENESIS_PAYLOAD.to_string(),
            GENESIS_TIMESTAMP,
        )
        .seal();
        Ok(Self {
            records: vec![genesis],
            difficulty,
        })
    }

    /// Append a payload as a freshly mined record and return it.
    ///
    /// Blocks for the duration of the nonce search; with difficulty d the
    /// expected cost is around 16^d hash attempts.
    pub fn append(&mut self, payload: impl Into<String>) -> &Record {
        let position = self.records.len() as u64;
        let draft = RecordDraft::new(position, self.tip_hash(), payload.into());
        let sealed = mine_record(draft, self.difficulty);
        self.records.push(sealed);
        &self.records[position as usize]
    }

    /// Walk the chain from index 1, recomputing every record's hash from its
    /// stored fields and checking its link to the predecessor. Stops at the
    /// first failure. Never re-runs mining and never mutates the ledger.
    pub fn validate(&self) -> ValidationReport {
        for window in self.records.windows(2) {
            let previous = &window[0];
            let current = &window[1];

            if current.recompute_hash() != current.content_hash {
                return ValidationReport::Invalid {
                    position: current.position,
                    fault: ValidationFault::HashMismatch,
                };
            }

            if current.link_hash != previous.content_hash {
                return ValidationReport::Invalid {
                    position: current.position,
                    fault: ValidationFault::BrokenLink,
                };
            }
        }
        ValidationReport::Valid
    }

    /// Shorthand for `validate().is_valid()`.
    pub fn is_valid(&self) -> bool {
        self.validate().is_valid()
    }

    /// Read-only view of the sealed records, genesis first.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The most recently sealed record.
    pub fn tip(&self) -> Option<&Record> {
        self.records.last()
    }

    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn tip_hash(&self) -> String {
        self.records
            .last()
            .map(|tip| tip.content_hash.clone())
            .unwrap_or_else(|| GENESIS_LINK_HASH.to_string())
    }
}
