//! Plain-data records of what happened each round.
//!
//! The engine never prints. Every round returns a `RoundReport` and every
//! finished game a `GameSummary`; front ends render them however they like.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Drawn};
use crate::core::player::{Seat, SeatMap};
use crate::rules::GameResult;

/// How a single comparison ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// `winner` took the whole table pile.
    Won { winner: Seat, cards_won: usize },
    /// Face-up cards tied; `depth` consecutive ties are now pending.
    War { depth: u32 },
}

impl RoundOutcome {
    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        match self {
            RoundOutcome::Won { winner, .. } => Some(*winner),
            RoundOutcome::War { .. } => None,
        }
    }

    #[must_use]
    pub fn is_war(&self) -> bool {
        matches!(self, RoundOutcome::War { .. })
    }
}

/// Everything observable about one played round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// 1-based round number.
    pub round: u64,

    /// Cards each player drew this round.
    pub cards_drawn: usize,

    /// The drawn cards, oldest first. The last one is face up.
    pub drawn: SeatMap<Drawn>,

    /// The compared cards.
    pub face_up: SeatMap<Card>,

    pub outcome: RoundOutcome,

    /// Hand sizes after the round.
    pub card_counts: SeatMap<usize>,

    /// Cards left on the table after the round (non-zero only during a war).
    pub table_size: usize,
}

/// Table state shown to a continuation collaborator before a draw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStatus {
    /// Number of the round about to be played.
    pub round: u64,

    pub card_counts: SeatMap<usize>,

    pub table_size: usize,

    /// Cards each player is about to draw.
    pub cards_to_draw: usize,
}

/// Final state of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub result: GameResult,

    /// Normalized player names.
    pub names: SeatMap<String>,

    /// Rounds actually played (ties included).
    pub rounds: u64,

    pub card_counts: SeatMap<usize>,

    /// Cards left on the table, only non-zero when a war was cut short.
    pub table_size: usize,
}

impl GameSummary {
    /// Name of the winner, if there is one.
    #[must_use]
    pub fn winner_name(&self) -> Option<&str> {
        self.result.winner().map(|seat| self.names[seat].as_str())
    }
}
