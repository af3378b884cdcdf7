use super::errors::ReplayError;
use super::state::HandState;
use super::types::Street;
use crate::ledger::record::{ActionKind, ActionRecord};
use crate::ledger::types::{ActionHash, Chips};

/// Chain anchors for the two blind slots, computed by the caller so the
/// betting engine stays digest-free.
pub struct BlindContext {
    /// Expected `prev_hash` of action 0: the hand genesis.
    pub genesis: ActionHash,
    /// Expected `prev_hash` of action 1: the small blind's action hash.
    pub first_hash: ActionHash,
}

/// Validates the forced blind prologue (actions 0 and 1) and produces the
/// initial betting state.
///
/// `stack_a` is the small blind's starting stack for the hand, `stack_b` the
/// big blind's. The small blind may post short (an all-in blind); the big
/// blind must be exactly twice the small blind and within its stack.
pub fn post_blinds(
    ctx: &BlindContext,
    small: &ActionRecord,
    big: &ActionRecord,
    stack_a: Chips,
    stack_b: Chips,
) -> Result<HandState, ReplayError> {
    if small.seq != 0 {
        return Err(ReplayError::SmallBlindSequenceInvalid);
    }
    if small.prev_hash != ctx.genesis {
        return Err(ReplayError::SmallBlindPrevHashInvalid);
    }
    if small.kind != ActionKind::SmallBlind {
        return Err(ReplayError::SmallBlindActionInvalid);
    }
    if small.amount == 0 || small.amount > stack_a {
        return Err(ReplayError::SmallBlindAmountInvalid);
    }

    if big.seq != 1 {
        return Err(ReplayError::BigBlindSequenceInvalid);
    }
    if big.prev_hash != ctx.first_hash {
        return Err(ReplayError::BigBlindPrevHashInvalid);
    }
    if big.kind != ActionKind::BigBlind {
        return Err(ReplayError::BigBlindActionInvalid);
    }
    if small.amount.checked_mul(2) != Some(big.amount) {
        return Err(ReplayError::BigBlindAmountInvalid);
    }
    if big.amount > stack_b {
        return Err(ReplayError::BigBlindStackInvalid);
    }

    let sb = small.amount;
    let bb = big.amount;
    let stacks = [stack_a - sb, stack_b - bb];
    let all_in = [stacks[0] == 0, stacks[1] == 0];

    let mut state = HandState {
        stacks,
        contrib: [sb, bb],
        total: [sb, bb],
        all_in,
        // small blind opens the preflop action
        actor: 0,
        street: Street::Preflop,
        to_call: bb - sb,
        last_raise: bb,
        checked: false,
        reopen: true,
        // the posted big blind counts as the street's first raise
        raise_count: 1,
        big_blind: bb,
        end: None,
    };

    if state.both_all_in() {
        // blinds consumed both stacks; nothing left to contest
        state.end_in_showdown();
    }

    Ok(state)
}
