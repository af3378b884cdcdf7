use crate::engine::hu::betting::apply_action;
use crate::engine::hu::blinds::{post_blinds, BlindContext};
use crate::engine::hu::errors::ReplayError;
use crate::engine::hu::types::Outcome;
use crate::ledger::hash::{action_hash, hand_genesis, ActionDigest};
use crate::ledger::record::ActionRecord;
use crate::ledger::types::{Chips, MAX_ACTIONS_PER_HAND};

/// Replays a complete co-signed action stream to its outcome.
///
/// This is the neutral-verifier entry point: it checks the hash chain and
/// the betting grammar action by action, then settles the hand. `stack_a` is
/// the small blind's starting stack for this hand, `stack_b` the big
/// blind's; the genesis anchor is derived from the identifiers carried by
/// action 0. A stream that stops short of a finished hand is rejected with
/// [`ReplayError::HandNotDone`] — prefixes go through the dispute path
/// ([`finish_partial`]) instead.
///
/// [`finish_partial`]: crate::engine::hu::resolver::finish_partial
pub fn replay<D: ActionDigest>(
    digest: &D,
    actions: &[ActionRecord],
    stack_a: Chips,
    stack_b: Chips,
) -> Result<Outcome, ReplayError> {
    if actions.len() > MAX_ACTIONS_PER_HAND {
        return Err(ReplayError::TooManyActions {
            len: actions.len(),
        });
    }
    if actions.len() < 2 {
        return Err(ReplayError::NoBlinds);
    }

    let genesis = hand_genesis(digest, &actions[0].channel_id, &actions[0].hand_id);
    let ctx = BlindContext {
        genesis,
        first_hash: action_hash(digest, &actions[0]),
    };
    let mut state = post_blinds(&ctx, &actions[0], &actions[1], stack_a, stack_b)?;
    tracing::debug!(
        actions = actions.len(),
        big_blind = %state.big_blind,
        "replaying hand"
    );

    let mut prev_hash = action_hash(digest, &actions[1]);
    let mut prev_seq = actions[1].seq;
    for action in &actions[2..] {
        let expected = prev_seq + 1;
        if action.seq != expected {
            return Err(ReplayError::SequenceInvalid {
                expected,
                got: action.seq,
            });
        }
        if action.prev_hash != prev_hash {
            return Err(ReplayError::PrevHashInvalid { seq: action.seq });
        }
        tracing::trace!(seq = action.seq, kind = ?action.kind, "applying action");
        state = apply_action(state, action)?;
        prev_hash = action_hash(digest, action);
        prev_seq = action.seq;
    }

    if !state.is_settled() {
        return Err(ReplayError::HandNotDone);
    }
    let outcome = state.settle();
    tracing::debug!(end = ?outcome.end, won = %outcome.won, "hand replayed");
    Ok(outcome)
}
