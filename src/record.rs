//! Record structure and the draft-to-sealed lifecycle
//!
//! A record passes through three phases: building (fields assigned), mining
//! (nonce search in progress) and sealed. The first two live in
//! [`RecordDraft`]; sealing produces an immutable [`Record`] that can no
//! longer be reached through a mutable handle.

use serde::Serialize;

use crate::hashing::record_digest;

/// A candidate record that has not been sealed yet.
///
/// All fields except the search counter are fixed at creation; the counter
/// advances only inside the mining loop.
#[derive(Debug, Clone)]
pub struct RecordDraft {
    pub(crate) position: u64,
    pub(crate) link_hash: String,
    pub(crate) payload: String,
    pub(crate) created_at: u64,
    pub(crate) search_counter: u64,
}

impl RecordDraft {
    /// Create a draft stamped with the current wall-clock time.
    pub fn new(position: u64, link_hash: String, payload: String) -> Self {
        Self::with_created_at(
            position,
            link_hash,
            payload,
            chrono::Utc::now().timestamp_millis() as u64,
        )
    }

    /// Create a draft with an explicit creation timestamp (epoch millis).
    pub fn with_created_at(position: u64, link_hash: String, payload: String, created_at: u64) -> Self {
        Self {
            position,
            link_hash,
            payload,
            created_at,
            search_counter: 0,
        }
    }

    /// Content hash over the draft's current field values.
    pub fn content_hash(&self) -> String {
        record_digest(
            self.position,
            &self.link_hash,
            &self.payload,
            self.created_at,
            self.search_counter,
        )
    }

    /// Freeze the draft, fixing the content hash computed from its fields.
    pub(crate) fn seal(self) -> Record {
        let content_hash = self.content_hash();
        Record {
            position: self.position,
            link_hash: self.link_hash,
            payload: self.payload,
            created_at: self.created_at,
            search_counter: self.search_counter,
            content_hash,
        }
    }
}

/// A sealed record in the ledger. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub(crate) position: u64,
    pub(crate) link_hash: String,
    pub(crate) payload: String,
    pub(crate) created_at: u64,
    pub(crate) search_counter: u64,
    pub(crate) content_hash: String,
}

impl Record {
    /// 0-based index of the record in the ledger.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Content hash of the immediately preceding record, or the `"0"`
    /// sentinel for the genesis record.
    pub fn link_hash(&self) -> &str {
        &self.link_hash
    }

    /// Caller-supplied payload.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Creation timestamp in epoch milliseconds.
    pub fn created_at(&self) -> u64 {
        self.created_at
    }

    /// Nonce found by the proof-of-work search (0 for the genesis record).
    pub fn search_counter(&self) -> u64 {
        self.search_counter
    }

    /// Hash the record was sealed with.
    pub fn content_hash(&self) -> &str {
        &self.content_hash
    }

    /// Recompute the hash from the stored fields.
    ///
    /// Reuses the stored creation timestamp verbatim; resampling the clock
    /// here would make every later validation fail.
    pub fn recompute_hash(&self) -> String {
        record_digest(
            self.position,
            &self.link_hash,
            &self.payload,
            self.created_at,
            self.search_counter,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_hash_is_stable_across_calls() {
        let draft = RecordDraft::new(1, "00ab".to_string(), "hello".to_string());
        assert_eq!(draft.content_hash(), draft.content_hash());
    }

    #[test]
    fn test_seal_fixes_the_content_hash() {
        let draft = RecordDraft::with_created_at(3, "ff".to_string(), "data".to_string(), 1000);
        let expected = draft.content_hash();
        let record = draft.seal();
        assert_eq!(record.content_hash(), expected);
        assert_eq!(record.recompute_hash(), expected);
    }

    #[test]
    fn test_recompute_reuses_the_stored_timestamp() {
        let record = RecordDraft::new(1, "00".to_string(), "timed".to_string()).seal();
        let first = record.recompute_hash();
        // Let the wall clock move on; the recomputed hash must not.
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert_eq!(record.recompute_hash(), first);
        assert_eq!(record.content_hash(), first);
    }

    #[test]
    fn test_counter_changes_the_hash() {
        let mut draft = RecordDraft::with_created_at(1, "00".to_string(), "x".to_string(), 1000);
        let before = draft.content_hash();
        draft.search_counter += 1;
        assert_ne!(draft.content_hash(), before);
    }
}
