//! Builders shared by the ledger and engine tests.

use crate::ledger::hash::{action_hash, hand_genesis, ActionDigest};
use crate::ledger::record::{ActionKind, ActionRecord};
use crate::ledger::types::{ActionHash, ChannelId, Chips, HandId};

/// Deterministic non-cryptographic digest used to prove the primitive is
/// injected and to keep fixtures readable.
#[derive(Clone, Copy, Debug, Default)]
pub struct ByteSumDigest;

impl ActionDigest for ByteSumDigest {
    fn digest(&self, bytes: &[u8]) -> [u8; 32] {
        let mut out = [0u8; 32];
        let mut acc: u8 = 0x5f;
        for (i, byte) in bytes.iter().enumerate() {
            acc = acc.wrapping_mul(31).wrapping_add(*byte);
            out[i % 32] ^= acc;
        }
        out
    }
}

/// Builds correctly chained action streams: each pushed record carries the
/// next sequence number and the previous record's hash (the first one, the
/// hand genesis).
pub struct StreamBuilder<'a, D: ActionDigest> {
    digest: &'a D,
    channel_id: ChannelId,
    hand_id: HandId,
    next_seq: u32,
    next_prev: ActionHash,
    actions: Vec<ActionRecord>,
}

impl<'a, D: ActionDigest> StreamBuilder<'a, D> {
    pub fn new(digest: &'a D, channel_low: u64, hand_low: u64) -> Self {
        let channel_id = ChannelId::from_low_u64(channel_low);
        let hand_id = HandId::from_low_u64(hand_low);
        let genesis = hand_genesis(digest, &channel_id, &hand_id);
        Self {
            digest,
            channel_id,
            hand_id,
            next_seq: 0,
            next_prev: genesis,
            actions: Vec::new(),
        }
    }

    pub fn push(mut self, kind: ActionKind, amount: Chips) -> Self {
        let record = ActionRecord {
            channel_id: self.channel_id,
            hand_id: self.hand_id,
            seq: self.next_seq,
            kind,
            amount,
            prev_hash: self.next_prev,
        };
        self.next_prev = action_hash(self.digest, &record);
        self.next_seq += 1;
        self.actions.push(record);
        self
    }

    pub fn finish(self) -> Vec<ActionRecord> {
        self.actions
    }
}

/// One-shot chained stream from `(kind, amount)` pairs, hand 1 on channel 1
/// (player 0 is the small blind).
pub fn chained_stream<D: ActionDigest>(
    digest: &D,
    moves: &[(ActionKind, Chips)],
) -> Vec<ActionRecord> {
    let mut builder = StreamBuilder::new(digest, 1, 1);
    for (kind, amount) in moves {
        builder = builder.push(*kind, *amount);
    }
    builder.finish()
}
