use serde::{Deserialize, Serialize};

use crate::engine::hu::errors::ReplayError;
use crate::ledger::types::{ActionHash, ChannelId, Chips, HandId};
use crate::signing::{Signable, TranscriptBuilder};

/// Wire width of one canonically encoded action:
/// channel (32) + hand (32) + seq (4) + kind (1) + amount (16) + prev hash (32).
pub const ACTION_ENCODED_LEN: usize = 117;

/// The five action kinds a hand is built from. Wire codes are fixed; both
/// parties sign over them, so renumbering is a protocol break.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum ActionKind {
    SmallBlind = 0,
    BigBlind = 1,
    CheckCall = 2,
    BetRaise = 3,
    Fold = 4,
}

impl ActionKind {
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for ActionKind {
    type Error = ReplayError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(ActionKind::SmallBlind),
            1 => Ok(ActionKind::BigBlind),
            2 => Ok(ActionKind::CheckCall),
            3 => Ok(ActionKind::BetRaise),
            4 => Ok(ActionKind::Fold),
            code => Err(ReplayError::UnknownAction { code }),
        }
    }
}

/// One co-signed action inside a hand.
///
/// `amount` semantics depend on `kind`: the posted blind for the two blind
/// kinds, the additional chips pushed for a bet/raise, and zero for
/// check/call and fold (the engine computes the call price itself).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub channel_id: ChannelId,
    pub hand_id: HandId,
    pub seq: u32,
    pub kind: ActionKind,
    pub amount: Chips,
    pub prev_hash: ActionHash,
}

impl Signable for ActionRecord {
    fn write_transcript(&self, builder: &mut TranscriptBuilder) {
        builder.append_raw(self.channel_id.as_bytes());
        builder.append_raw(self.hand_id.as_bytes());
        builder.append_u32(self.seq);
        builder.append_u8(self.kind.code());
        builder.append_u128(self.amount);
        builder.append_raw(self.prev_hash.as_bytes());
    }
}

impl ActionRecord {
    /// Tightly packed big-endian encoding, identical for the hash chain and
    /// the host's signature layer.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        self.to_signing_bytes()
    }
}
