pub mod config;
pub mod engine;
pub mod ledger;
pub mod signing;

#[cfg(test)]
pub mod test_utils;

pub use config::default_digest;
pub use engine::hu::{
    finish_partial, legal_actions_for, EndKind, HandState, LegalActions, Outcome, ReplayError,
    Street,
};
pub use ledger::{
    replay, verify_chain, ActionDigest, ActionHash, ActionKind, ActionRecord, ChannelId, Chips,
    HandId, Keccak256Digest, PlayerIdx, MAX_ACTIONS_PER_HAND,
};
