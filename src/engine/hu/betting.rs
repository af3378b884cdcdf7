use super::errors::ReplayError;
use super::state::HandState;
use super::types::MAX_RAISES_PER_STREET;
use crate::ledger::record::{ActionKind, ActionRecord};

/// Big-blind seat in the replay indexing; acts first on every postflop
/// street.
const BB_SEAT: usize = 1;

/// Validates and applies one mid-hand action (anything after the blind
/// prologue) to an owned state.
///
/// Every check runs before the first field is written, so an error never
/// corresponds to a half-applied action. Chain linkage (seq / prev-hash) is
/// the caller's concern; this function covers the betting grammar.
pub fn apply_action(state: HandState, action: &ActionRecord) -> Result<HandState, ReplayError> {
    if state.end.is_some() {
        return Err(ReplayError::HandAlreadyOver);
    }
    if state.all_in[state.actor] {
        return Err(ReplayError::PlayerAllIn);
    }

    match action.kind {
        ActionKind::SmallBlind | ActionKind::BigBlind => Err(ReplayError::BlindOnlyStart),
        ActionKind::Fold => apply_fold(state, action),
        ActionKind::CheckCall => apply_check_call(state, action),
        ActionKind::BetRaise => apply_bet_raise(state, action),
    }
}

fn apply_fold(mut state: HandState, action: &ActionRecord) -> Result<HandState, ReplayError> {
    if action.amount != 0 {
        return Err(ReplayError::FoldAmountInvalid);
    }
    let folder = state.actor;
    state.end_in_fold(folder);
    Ok(state)
}

fn apply_check_call(mut state: HandState, action: &ActionRecord) -> Result<HandState, ReplayError> {
    if action.amount != 0 {
        // the engine computes the price itself; explicit amounts are a
        // protocol violation, not a convenience
        return Err(if state.to_call == 0 {
            ReplayError::CheckAmountInvalid
        } else {
            ReplayError::CallAmountInvalid
        });
    }

    let actor = state.actor;
    if state.to_call > 0 {
        // call, clamped to the stack; a short call puts the actor all-in
        let pay = state.to_call.min(state.stacks[actor]);
        state.contrib[actor] += pay;
        state.total[actor] += pay;
        state.stacks[actor] -= pay;
        if state.stacks[actor] == 0 {
            state.all_in[actor] = true;
        }
        // a call settles the street, the preflop limp included: the caller
        // matches the standing bet and concedes the initiative
        state.close_street(BB_SEAT);
    } else if state.checked {
        // second check of the street
        state.close_street(BB_SEAT);
    } else {
        state.checked = true;
        state.actor = 1 - actor;
    }
    Ok(state)
}

fn apply_bet_raise(mut state: HandState, action: &ActionRecord) -> Result<HandState, ReplayError> {
    let amount = action.amount;
    if amount == 0 {
        return Err(ReplayError::RaiseAmountZero);
    }

    let actor = state.actor;
    let opp = 1 - actor;
    // `amount` is additional chips past the actor's current-street
    // commitment. Saturation is safe: a saturated sum always exceeds the
    // stack and is rejected below.
    let new_contrib = state.contrib[actor].saturating_add(amount);
    if new_contrib <= state.contrib[opp] {
        return Err(ReplayError::RaiseInsufficientIncrease);
    }
    let increment = new_contrib - state.contrib[opp];

    if state.raise_count >= MAX_RAISES_PER_STREET {
        return Err(ReplayError::RaiseLimitExceeded);
    }
    if amount > state.stacks[actor] {
        return Err(ReplayError::RaiseStackInvalid);
    }

    let is_all_in = amount == state.stacks[actor];
    if !is_all_in {
        if !state.reopen {
            return Err(ReplayError::NoReopenAllowed);
        }
        if increment < state.last_raise {
            return Err(ReplayError::MinimumRaiseNotMet);
        }
    }

    state.contrib[actor] = new_contrib;
    state.total[actor] += amount;
    state.stacks[actor] -= amount;
    if state.stacks[actor] == 0 {
        state.all_in[actor] = true;
    }
    state.to_call = new_contrib - state.contrib[opp];

    // a full-size increment re-arms the minimum and reopens the betting;
    // a short all-in leaves the opponent without a raising right
    if increment >= state.last_raise {
        state.last_raise = increment;
        state.reopen = true;
    } else {
        state.reopen = false;
    }
    state.raise_count += 1;
    state.checked = false;
    state.actor = opp;
    Ok(state)
}
