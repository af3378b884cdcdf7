use serde::{Deserialize, Serialize};

use crate::ledger::types::{Chips, PlayerIdx};

/// Raises permitted per street, counting the posted big blind as the first
/// preflop raise.
pub const MAX_RAISES_PER_STREET: u8 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    pub fn next(self) -> Option<Street> {
        match self {
            Street::Preflop => Some(Street::Flop),
            Street::Flop => Some(Street::Turn),
            Street::Turn => Some(Street::River),
            Street::River => None,
        }
    }
}

/// How a hand terminated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndKind {
    /// One player surrendered; the other wins outright.
    Fold,
    /// Betting finished with both hands live; the host's card evaluator
    /// decides the winner.
    Showdown,
}

/// Settlement result the host's escrow consumes. `won` is the transferable
/// stake: the smaller of the two players' total commitments, i.e. what the
/// losing side actually put at risk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub end: EndKind,
    /// `Some` exactly when `end` is [`EndKind::Fold`]; the winner is the
    /// other index.
    pub folder: Option<PlayerIdx>,
    pub won: Chips,
}

impl Outcome {
    pub fn fold(folder: PlayerIdx, won: Chips) -> Self {
        Self {
            end: EndKind::Fold,
            folder: Some(folder),
            won,
        }
    }

    pub fn showdown(won: Chips) -> Self {
        Self {
            end: EndKind::Showdown,
            folder: None,
            won,
        }
    }
}
