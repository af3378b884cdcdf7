use sha3::{Digest, Keccak256};

use crate::engine::hu::errors::ReplayError;
use crate::ledger::record::ActionRecord;
use crate::ledger::types::{ActionHash, ChannelId, HandId, MAX_ACTIONS_PER_HAND};
use crate::signing::TranscriptBuilder;

const DOMAIN_GENESIS: &[u8] = b"holdem-channel/hand-genesis/v1";

/// The 32-byte collision-resistant digest the chain is built from.
///
/// Injected rather than hardcoded: the production primitive is Keccak-256
/// (shared with the host's signature stack), tests swap in a deterministic
/// mock to pin down what the chain actually covers.
pub trait ActionDigest {
    fn digest(&self, bytes: &[u8]) -> [u8; 32];
}

/// Production digest primitive.
#[derive(Clone, Copy, Debug, Default)]
pub struct Keccak256Digest;

impl ActionDigest for Keccak256Digest {
    fn digest(&self, bytes: &[u8]) -> [u8; 32] {
        let mut hasher = Keccak256::new();
        hasher.update(bytes);
        hasher.finalize().into()
    }
}

/// Chain anchor for action 0 of a hand: digest of the genesis domain tag
/// concatenated with the channel and hand identifiers.
pub fn hand_genesis<D: ActionDigest>(
    digest: &D,
    channel_id: &ChannelId,
    hand_id: &HandId,
) -> ActionHash {
    let mut builder = TranscriptBuilder::with_domain(DOMAIN_GENESIS);
    builder.append_raw(channel_id.as_bytes());
    builder.append_raw(hand_id.as_bytes());
    ActionHash::from_raw(digest.digest(&builder.finish()))
}

/// Digest of one action's canonical encoding; the next action must carry it
/// as `prev_hash`.
pub fn action_hash<D: ActionDigest>(digest: &D, action: &ActionRecord) -> ActionHash {
    ActionHash::from_raw(digest.digest(&action.canonical_bytes()))
}

/// Standalone sequence/hash-chain check over a stream prefix.
///
/// The replay entry point performs the same link checks inline, interleaved
/// with semantic validation; hosts use this to vet an incoming stream before
/// countersigning it. An empty stream is trivially chained.
pub fn verify_chain<D: ActionDigest>(
    digest: &D,
    actions: &[ActionRecord],
) -> Result<(), ReplayError> {
    if actions.len() > MAX_ACTIONS_PER_HAND {
        return Err(ReplayError::TooManyActions {
            len: actions.len(),
        });
    }
    let Some(first) = actions.first() else {
        return Ok(());
    };

    if first.seq != 0 {
        return Err(ReplayError::SmallBlindSequenceInvalid);
    }
    let genesis = hand_genesis(digest, &first.channel_id, &first.hand_id);
    if first.prev_hash != genesis {
        return Err(ReplayError::SmallBlindPrevHashInvalid);
    }

    let mut prev_hash = action_hash(digest, first);
    let mut prev_seq = first.seq;
    for (index, action) in actions.iter().enumerate().skip(1) {
        if action.seq != prev_seq + 1 {
            return Err(if index == 1 {
                ReplayError::BigBlindSequenceInvalid
            } else {
                ReplayError::SequenceInvalid {
                    expected: prev_seq + 1,
                    got: action.seq,
                }
            });
        }
        if action.prev_hash != prev_hash {
            return Err(if index == 1 {
                ReplayError::BigBlindPrevHashInvalid
            } else {
                ReplayError::PrevHashInvalid { seq: action.seq }
            });
        }
        prev_hash = action_hash(digest, action);
        prev_seq = action.seq;
    }
    Ok(())
}
