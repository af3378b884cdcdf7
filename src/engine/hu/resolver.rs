use super::state::HandState;
use super::types::Outcome;
use crate::ledger::types::PlayerIdx;

/// Dispute/timeout settlement: drives a mid-hand state to a deterministic
/// outcome as if the pending actor timed out.
///
/// Total by construction — any state this engine produced resolves. The
/// timed-out actor folds when facing chips to call and checks down
/// otherwise; with an all-in player in the hand the remaining streets run
/// out to showdown. `bb_player_idx` names the seat acting first on later
/// streets, so hosts holding states in their own seat order can resolve them
/// directly (the replay indexing always has the big blind at 1).
///
/// Already-terminal states return their outcome unchanged.
pub fn finish_partial(mut state: HandState, bb_player_idx: PlayerIdx) -> Outcome {
    let outcome = loop {
        if state.end.is_some() {
            break state.settle();
        }
        if state.all_in[state.actor] || state.both_all_in() {
            break Outcome::showdown(state.won_amount());
        }
        if state.to_call > 0 {
            // won amount is fixed before the implicit fold: the folder
            // keeps the unmatched part of the opponent's bet out of play
            break Outcome::fold(state.actor, state.won_amount());
        }

        // nothing to call: the actor checks
        if state.checked {
            state.close_street(bb_player_idx);
        } else {
            state.checked = true;
            state.actor = 1 - state.actor;
        }
    };
    tracing::debug!(end = ?outcome.end, won = %outcome.won, "partial hand resolved");
    outcome
}
