use crate::ledger::hash::Keccak256Digest;

/// Returns the production digest primitive for action hashing.
///
/// Keccak-256, matching the host signature stack so co-signed action bytes
/// and chain links digest identically on both sides of the channel. Tests
/// inject their own [`ActionDigest`](crate::ledger::hash::ActionDigest)
/// instead.
pub fn default_digest() -> Keccak256Digest {
    Keccak256Digest
}
