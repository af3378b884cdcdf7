pub mod hash;
pub mod record;
pub mod types;
pub mod verifier;

#[cfg(test)]
pub mod test_support;

pub use hash::{action_hash, hand_genesis, verify_chain, ActionDigest, Keccak256Digest};
pub use record::{ActionKind, ActionRecord, ACTION_ENCODED_LEN};
pub use types::{
    small_blind_is_player_a, ActionHash, ChannelId, Chips, HandId, PlayerIdx,
    MAX_ACTIONS_PER_HAND,
};
pub use verifier::replay;
