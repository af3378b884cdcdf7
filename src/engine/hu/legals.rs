use std::ops::RangeInclusive;

use super::state::HandState;
use super::types::MAX_RAISES_PER_STREET;
use crate::ledger::types::Chips;

/// What the pending actor may submit next, in replay-grammar terms. Clients
/// use this to offer only moves the verifier will accept; the randomized
/// tests use it to generate legal streams.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegalActions {
    pub may_fold: bool,
    /// True when there is nothing to call (a zero-amount CHECK_CALL checks).
    pub may_check: bool,
    /// Chips a CHECK_CALL would actually commit, clamped to the stack.
    /// `Some(0)` when checking.
    pub call_amount: Option<Chips>,
    /// BET_RAISE `amount` band for full-size raises:
    /// `to_call + last_raise ..= stack`. Empty (`None`) when the stack cannot
    /// cover a full raise or betting is not reopened.
    pub full_raise_amounts: Option<RangeInclusive<Chips>>,
    /// The all-in `amount`, when shoving is a legal raise (it may fall below
    /// the full-raise band; such a short all-in does not reopen betting).
    pub all_in_amount: Option<Chips>,
}

impl LegalActions {
    pub fn none() -> Self {
        Self {
            may_fold: false,
            may_check: false,
            call_amount: None,
            full_raise_amounts: None,
            all_in_amount: None,
        }
    }
}

pub fn legal_actions_for(state: &HandState) -> LegalActions {
    if state.is_settled() {
        return LegalActions::none();
    }

    let actor = state.actor;
    let stack = state.stacks[actor];
    let mut legals = LegalActions {
        may_fold: true,
        may_check: state.to_call == 0,
        call_amount: Some(state.to_call.min(stack)),
        full_raise_amounts: None,
        all_in_amount: None,
    };

    if state.raise_count >= MAX_RAISES_PER_STREET {
        return legals;
    }

    // any raise must push the actor past the opponent's commitment
    if stack > state.to_call {
        legals.all_in_amount = Some(stack);
    }

    if state.reopen {
        let min_full = state.to_call.saturating_add(state.last_raise);
        if stack >= min_full {
            legals.full_raise_amounts = Some(min_full..=stack);
        }
    }

    legals
}
