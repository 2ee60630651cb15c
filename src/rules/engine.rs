//! War rules that do not depend on engine state.
//!
//! - How many cards each side commits, given the current war depth
//! - Who wins when a hand runs short
//! - How a finished game is described

use serde::{Deserialize, Serialize};

use crate::core::player::{Seat, SeatMap};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// One side could not cover the next draw; the other side won.
    Winner(Seat),
    /// The human declined to keep drawing.
    Stopped,
    /// The round limit ran out with neither side short.
    RoundLimit,
}

impl GameResult {
    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, seat: Seat) -> bool {
        matches!(self, GameResult::Winner(s) if *s == seat)
    }

    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        match self {
            GameResult::Winner(seat) => Some(*seat),
            GameResult::Stopped | GameResult::RoundLimit => None,
        }
    }
}

/// Cards each player draws for the next comparison.
///
/// One card normally. The first war adds three face-down cards under the
/// face-up one; every later tie in the same war adds one face-down card.
///
/// ```
/// use war_engine::rules::cards_to_draw;
///
/// let schedule: Vec<_> = (0..5).map(cards_to_draw).collect();
/// assert_eq!(schedule, vec![1, 3, 2, 2, 2]);
/// ```
#[must_use]
pub const fn cards_to_draw(consecutive_ties: u32) -> usize {
    match consecutive_ties {
        0 => 1,
        1 => 3,
        _ => 2,
    }
}

/// Winner by shortage, if any seat cannot cover `required` cards.
///
/// Seats are checked in [`Seat::ALL`] order, computer first. When both
/// hands are short the human therefore wins.
#[must_use]
pub fn shortage_winner(card_counts: &SeatMap<usize>, required: usize) -> Option<Seat> {
    Seat::ALL
        .into_iter()
        .find(|&seat| card_counts[seat] < required)
        .map(Seat::opponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(Seat::Human);
        assert!(result.is_winner(Seat::Human));
        assert!(!result.is_winner(Seat::Computer));
        assert_eq!(result.winner(), Some(Seat::Human));

        let stopped = GameResult::Stopped;
        assert!(!stopped.is_winner(Seat::Human));
        assert!(!stopped.is_winner(Seat::Computer));
        assert_eq!(stopped.winner(), None);
        assert_eq!(GameResult::RoundLimit.winner(), None);
    }

    #[test]
    fn test_draw_schedule() {
        assert_eq!(cards_to_draw(0), 1);
        assert_eq!(cards_to_draw(1), 3);
        assert_eq!(cards_to_draw(2), 2);
        assert_eq!(cards_to_draw(3), 2);
        assert_eq!(cards_to_draw(u32::MAX), 2);
    }

    #[test]
    fn test_no_shortage() {
        let counts = SeatMap::from_parts(3, 3);
        assert_eq!(shortage_winner(&counts, 3), None);
        assert_eq!(shortage_winner(&counts, 1), None);
    }

    #[test]
    fn test_computer_short() {
        let counts = SeatMap::from_parts(0, 52);
        assert_eq!(shortage_winner(&counts, 1), Some(Seat::Human));
    }

    #[test]
    fn test_human_short() {
        let counts = SeatMap::from_parts(50, 2);
        assert_eq!(shortage_winner(&counts, 3), Some(Seat::Computer));
    }

    #[test]
    fn test_both_short_favors_human() {
        let counts = SeatMap::from_parts(1, 1);
        assert_eq!(shortage_winner(&counts, 2), Some(Seat::Human));
    }
}
