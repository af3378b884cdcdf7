#![cfg(test)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::betting::apply_action;
use super::blinds::{post_blinds, BlindContext};
use super::errors::ReplayError;
use super::legals::legal_actions_for;
use super::resolver::finish_partial;
use super::state::HandState;
use super::types::{EndKind, Street, MAX_RAISES_PER_STREET};
use crate::ledger::record::ActionKind::{BetRaise, CheckCall, Fold};
use crate::ledger::record::{ActionKind, ActionRecord};
use crate::ledger::types::{ActionHash, ChannelId, Chips, HandId};

// The betting engine never looks at chain fields, so engine-level tests use
// placeholder hashes and sequence numbers throughout.
fn record(kind: ActionKind, amount: Chips) -> ActionRecord {
    ActionRecord {
        channel_id: ChannelId::from_low_u64(1),
        hand_id: HandId::from_low_u64(1),
        seq: 0,
        kind,
        amount,
        prev_hash: ActionHash::from_raw([0; 32]),
    }
}

fn setup(sb: Chips, stack_a: Chips, stack_b: Chips) -> HandState {
    let anchor = ActionHash::from_raw([0; 32]);
    let ctx = BlindContext {
        genesis: anchor,
        first_hash: anchor,
    };
    let small = record(ActionKind::SmallBlind, sb);
    let mut big = record(ActionKind::BigBlind, sb * 2);
    big.seq = 1;
    post_blinds(&ctx, &small, &big, stack_a, stack_b).unwrap()
}

fn act(state: HandState, kind: ActionKind, amount: Chips) -> Result<HandState, ReplayError> {
    apply_action(state, &record(kind, amount))
}

#[test]
fn preflop_limp_settles_the_street_and_resets_the_round() {
    let state = setup(1, 10, 10);
    let state = act(state, CheckCall, 0).unwrap();
    assert_eq!(state.street, Street::Flop);
    assert_eq!(state.actor, 1); // big blind opens every postflop street
    assert_eq!(state.contrib, [0, 0]);
    assert_eq!(state.total, [2, 2]);
    assert_eq!(state.last_raise, 2);
    assert_eq!(state.raise_count, 0);
    assert!(state.reopen);
    state.validate_invariants().unwrap();
}

#[test]
fn postflop_street_closes_on_the_second_check() {
    let state = setup(1, 10, 10);
    let state = act(state, CheckCall, 0).unwrap();
    let state = act(state, CheckCall, 0).unwrap();
    assert_eq!(state.street, Street::Flop);
    assert!(state.checked);
    assert_eq!(state.actor, 0);
    let state = act(state, CheckCall, 0).unwrap();
    assert_eq!(state.street, Street::Turn);
    assert!(!state.checked);
}

#[test]
fn a_raise_reopens_the_action_to_the_opponent() {
    let state = setup(1, 50, 50);
    let state = act(state, BetRaise, 3).unwrap();
    assert_eq!(state.actor, 1);
    assert_eq!(state.to_call, 2);
    assert_eq!(state.last_raise, 2);
    assert_eq!(state.raise_count, 2);
    assert!(state.end.is_none());
    state.validate_invariants().unwrap();
}

#[test]
fn fold_ends_the_hand_with_the_stake_fixed_before_the_fold() {
    let state = setup(1, 50, 50);
    let state = act(state, BetRaise, 9).unwrap(); // small blind makes it 10
    let state = act(state, Fold, 0).unwrap();
    let outcome = state.settle();
    assert_eq!(outcome.end, EndKind::Fold);
    assert_eq!(outcome.folder, Some(1));
    // the folder had only the blind in; that is all that changes hands
    assert_eq!(outcome.won, 2);
}

#[test]
fn short_call_puts_the_caller_all_in_and_settles_the_hand() {
    let state = setup(1, 50, 6);
    let state = act(state, BetRaise, 19).unwrap(); // to 20, covering the table
    let state = act(state, CheckCall, 0).unwrap(); // big blind calls for 4 more
    assert!(state.all_in[1]);
    assert_eq!(state.total, [20, 6]);
    let outcome = state.settle();
    assert_eq!(outcome.end, EndKind::Showdown);
    assert_eq!(outcome.won, 6);
}

#[test]
fn all_in_players_take_no_further_actions() {
    let state = setup(1, 3, 10);
    let state = act(state, BetRaise, 2).unwrap(); // small blind shoves short
    assert!(state.all_in[0]);
    let state = act(state, CheckCall, 0).unwrap(); // big blind calls
    // hand is settled; and even mid-hand the shover could never act again
    assert!(state.is_settled());
    assert_eq!(act(state, CheckCall, 0), Err(ReplayError::HandAlreadyOver));
}

#[test]
fn acting_for_an_all_in_seat_is_rejected() {
    // big blind is all-in from the blind itself; a raise leaves them on turn
    let state = setup(1, 10, 2);
    let state = act(state, BetRaise, 5).unwrap();
    assert!(state.all_in[1]);
    assert_eq!(state.actor, 1);
    assert_eq!(
        act(state.clone(), CheckCall, 0),
        Err(ReplayError::PlayerAllIn)
    );
    // with nobody able to act the state is settled as a showdown
    assert!(state.is_settled());
    assert_eq!(state.settle().won, 2);
}

#[test]
fn resolver_completes_a_replayed_prefix_by_folding_the_bettor_out() {
    let state = setup(1, 50, 50);
    let state = act(state, BetRaise, 4).unwrap(); // small blind makes it 5
    let outcome = finish_partial(state, 1);
    assert_eq!(outcome.end, EndKind::Fold);
    assert_eq!(outcome.folder, Some(1));
    assert_eq!(outcome.won, 2);
}

#[test]
fn resolver_checks_every_prefix_of_a_checked_down_hand_to_the_same_stake() {
    let moves: &[(ActionKind, Chips)] = &[
        (CheckCall, 0),
        (CheckCall, 0),
        (CheckCall, 0),
        (CheckCall, 0),
        (CheckCall, 0),
        (CheckCall, 0),
        (CheckCall, 0),
    ];
    // the empty prefix leaves the small blind owing the blind difference,
    // so the resolver folds them out for it
    let outcome = finish_partial(setup(1, 10, 10), 1);
    assert_eq!(outcome, crate::engine::hu::types::Outcome::fold(0, 1));

    // once the limp is in, every prefix checks down to the same stake
    for prefix_len in 1..=moves.len() {
        let mut state = setup(1, 10, 10);
        for (kind, amount) in &moves[..prefix_len] {
            state = act(state, *kind, *amount).unwrap();
        }
        let outcome = finish_partial(state, 1);
        assert_eq!(outcome.end, EndKind::Showdown);
        assert_eq!(outcome.won, 2, "prefix of {prefix_len} moves");
    }
}

#[test]
fn betting_reopens_only_on_full_increments() {
    // full-size raise keeps the round open
    let state = setup(2, 100, 100);
    let state = act(state, BetRaise, 6).unwrap(); // increment 4, full
    assert!(state.reopen);
    assert_eq!(state.last_raise, 4);

    // short shove closes it
    let state = setup(2, 7, 100);
    let state = act(state, BetRaise, 5).unwrap(); // all-in, increment 3 < 4
    assert!(!state.reopen);
    assert_eq!(state.last_raise, 4);
    assert_eq!(
        act(state.clone(), BetRaise, 10),
        Err(ReplayError::NoReopenAllowed)
    );
    // calling the short shove is still fine
    let state = act(state, CheckCall, 0).unwrap();
    assert!(state.is_settled());
}

#[test]
fn raise_validation_is_ordered_and_mutation_free() {
    let state = setup(1, 10, 10);
    let before = state.clone();

    for (amount, expected) in [
        (0, ReplayError::RaiseAmountZero),
        (1, ReplayError::RaiseInsufficientIncrease),
        (11, ReplayError::RaiseStackInvalid),
        (2, ReplayError::MinimumRaiseNotMet),
    ] {
        assert_eq!(act(before.clone(), BetRaise, amount), Err(expected));
    }
    // the rejected attempts left nothing behind
    assert_eq!(act(before.clone(), CheckCall, 0).unwrap().total, [2, 2]);
}

#[test]
fn random_legal_hands_conserve_chips_and_respect_street_caps() {
    let mut rng = StdRng::seed_from_u64(0xFEED5EED);

    for _ in 0..300 {
        let sb = rng.gen_range(1..=10u128);
        let start = [rng.gen_range(sb..=sb * 30), rng.gen_range(sb * 2..=sb * 30)];
        let mut state = setup(sb, start[0], start[1]);
        let mut was_all_in = [false, false];

        let mut steps = 0usize;
        while !state.is_settled() {
            steps += 1;
            assert!(steps < 100, "hand refused to settle");

            let actor = state.actor;
            assert!(!was_all_in[actor], "all-in seat acted again");

            let legals = legal_actions_for(&state);
            let mut options: Vec<(ActionKind, Chips)> = vec![(CheckCall, 0); 3];
            if rng.gen_ratio(1, 10) {
                options.push((Fold, 0));
            }
            if let Some(range) = legals.full_raise_amounts.clone() {
                options.push((BetRaise, rng.gen_range(*range.start()..=*range.end())));
            }
            if let Some(shove) = legals.all_in_amount {
                if rng.gen_ratio(1, 6) {
                    options.push((BetRaise, shove));
                }
            }
            let (kind, amount) = options[rng.gen_range(0..options.len())];
            state = act(state, kind, amount).unwrap();

            state.validate_invariants().unwrap();
            assert!(state.raise_count <= MAX_RAISES_PER_STREET);
            for i in 0..2 {
                if was_all_in[i] {
                    assert!(state.all_in[i]);
                }
                was_all_in[i] = state.all_in[i];
            }
        }

        // every chip is either behind or committed, never minted or lost
        for i in 0..2 {
            assert_eq!(state.stacks[i] + state.total[i], start[i]);
        }
        let outcome = state.settle();
        assert_eq!(outcome.won, state.total[0].min(state.total[1]));

        // the dispute path agrees with the settled state
        assert_eq!(finish_partial(state.clone(), 1), outcome);
    }
}
