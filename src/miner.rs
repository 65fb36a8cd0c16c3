//! Proof-of-work search for sealing records

use std::time::Instant;

use tracing::info;

use crate::record::{Record, RecordDraft};

/// True when the hash starts with at least `difficulty` `'0'` hex digits.
/// Difficulty 0 is satisfied by every hash.
pub fn meets_difficulty(hash: &str, difficulty: u32) -> bool {
    let difficulty = difficulty as usize;
    hash.len() >= difficulty && hash.bytes().take(difficulty).all(|b| b == b'0')
}

/// Brute-force the draft's search counter until the content hash meets the
/// difficulty target, then seal the record.
///
/// The counter is incremented before each hash attempt, so even a trivial
/// target leaves it at 1. Expected cost grows as 16^difficulty and the loop
/// has no upper bound; `Ledger::new` rejects targets that can never be met,
/// which is what guarantees termination for ledger-born drafts.
pub fn mine_record(mut draft: RecordDraft, difficulty: u32) -> Record {
    let started = Instant::now();
    loop {
        draft.search_counter += 1;
        let hash = draft.content_hash();
        if meets_difficulty(&hash, difficulty) {
            info!(
                "Sealed record {} after {} attempts in {:?} (hash {})",
                draft.position,
                draft.search_counter,
                started.elapsed(),
                hash
            );
            return draft.seal();
        }
    }
}
