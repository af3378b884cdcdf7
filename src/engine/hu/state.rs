use serde::{Deserialize, Serialize};

use super::errors::InvariantViolation;
use super::types::{EndKind, Outcome, Street};
use crate::ledger::types::{Chips, PlayerIdx};

/// Terminal marker set once a hand-ending action has been consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandEnd {
    pub kind: EndKind,
    pub folder: Option<PlayerIdx>,
}

/// Mutable replay state of one heads-up hand.
///
/// Index 0 is the small blind, index 1 the big blind. Serializable so hosts
/// can persist the state a disputed prefix produced and hand it to
/// [`finish_partial`] when the dispute window lapses.
///
/// [`finish_partial`]: super::resolver::finish_partial
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandState {
    /// Chips remaining behind, per player.
    pub stacks: [Chips; 2],
    /// Chips committed on the current street.
    pub contrib: [Chips; 2],
    /// Chips committed across all streets.
    pub total: [Chips; 2],
    pub all_in: [bool; 2],
    /// Whose turn it is.
    pub actor: PlayerIdx,
    pub street: Street,
    /// Chips the actor must add to match the opponent on this street.
    pub to_call: Chips,
    /// Size of the last full raise increment; floor for the next raise.
    pub last_raise: Chips,
    /// Whether the first postflop check of this street has happened (the
    /// second one closes the street).
    pub checked: bool,
    /// Whether betting is reopenable; a short all-in clears it.
    pub reopen: bool,
    /// Raises so far this street, the posted big blind included preflop.
    pub raise_count: u8,
    /// Posted big-blind amount; the minimum-bet floor resets to it on every
    /// postflop street.
    pub big_blind: Chips,
    pub end: Option<HandEnd>,
}

impl HandState {
    /// The transferable stake: what the losing side committed.
    pub fn won_amount(&self) -> Chips {
        self.total[0].min(self.total[1])
    }

    pub fn both_all_in(&self) -> bool {
        self.all_in[0] && self.all_in[1]
    }

    /// Whether no further voluntary action is possible. True once a terminal
    /// action was consumed, and also when the pending actor is all-in (the
    /// opponent has nobody left to bet against, so the hand runs out).
    pub fn is_settled(&self) -> bool {
        self.end.is_some() || self.all_in[self.actor]
    }

    /// Outcome of a settled state. States without an explicit end are
    /// settled only by an all-in actor, which always means showdown.
    pub fn settle(&self) -> Outcome {
        match self.end {
            Some(HandEnd {
                kind: EndKind::Fold,
                folder,
            }) => Outcome {
                end: EndKind::Fold,
                folder,
                won: self.won_amount(),
            },
            _ => Outcome::showdown(self.won_amount()),
        }
    }

    pub(crate) fn end_in_fold(&mut self, folder: PlayerIdx) {
        self.end = Some(HandEnd {
            kind: EndKind::Fold,
            folder: Some(folder),
        });
    }

    pub(crate) fn end_in_showdown(&mut self) {
        self.end = Some(HandEnd {
            kind: EndKind::Showdown,
            folder: None,
        });
    }

    /// Street settled: either finish the hand or deal the next street.
    ///
    /// With any player all-in no voluntary action can follow heads-up, so
    /// the remaining streets run out and the hand is a showdown. Otherwise
    /// the betting round state resets, with the minimum-bet floor back at
    /// the big blind and `first_postflop` (the big blind seat) to act.
    pub(crate) fn close_street(&mut self, first_postflop: PlayerIdx) {
        if self.all_in[0] || self.all_in[1] {
            self.end_in_showdown();
            return;
        }
        match self.street.next() {
            None => self.end_in_showdown(),
            Some(next) => {
                tracing::trace!(street = ?next, "street settled");
                self.street = next;
                self.contrib = [0, 0];
                self.to_call = 0;
                self.last_raise = self.big_blind;
                self.checked = false;
                self.reopen = true;
                self.raise_count = 0;
                self.actor = first_postflop;
            }
        }
    }

    /// Debug/test guard: checks the relations every reachable state upholds.
    pub fn validate_invariants(&self) -> Result<(), InvariantViolation> {
        for i in 0..2 {
            if self.contrib[i] > self.total[i] {
                return Err(InvariantViolation(
                    "street contribution exceeds hand total",
                ));
            }
            if self.all_in[i] != (self.stacks[i] == 0) {
                return Err(InvariantViolation("all-in flag out of sync with stack"));
            }
        }
        if self.actor > 1 {
            return Err(InvariantViolation("actor index out of range"));
        }
        if self.raise_count > super::types::MAX_RAISES_PER_STREET {
            return Err(InvariantViolation("raise count above street cap"));
        }
        if self.end.is_none() {
            let opp = 1 - self.actor;
            let owed = self.contrib[opp].saturating_sub(self.contrib[self.actor]);
            if self.to_call != owed {
                return Err(InvariantViolation("to_call out of sync with contributions"));
            }
        }
        Ok(())
    }
}
