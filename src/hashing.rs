//! Stateless digest helpers for Hashledger
//!
//! The digest primitive carries no state of its own, so it is exposed as free
//! functions rather than as a member of `Record` or `Ledger`.

use sha2::{Digest, Sha256};

/// Width of a SHA-256 digest in hex digits. Also the upper bound on the
/// number of leading zero hex digits any hash can exhibit.
pub const HASH_HEX_LEN: usize = 64;

/// Digest over the canonical encoding of a record's fields.
///
/// Numbers are folded in as decimal text and strings as-is, in the fixed
/// order: position, link hash, payload, creation timestamp, search counter.
/// Returns the lowercase hex encoding, always `HASH_HEX_LEN` characters.
pub fn record_digest(
    position: u64,
    link_hash: &str,
    payload: &str,
    created_at: u64,
    search_counter: u64,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(position.to_string());
    hasher.update(link_hash);
    hasher.update(payload);
    hasher.update(created_at.to_string());
    hasher.update(search_counter.to_string());
    hex::encode(hasher.finalize())
}
