//! A player's hand: a queue drawn from the front and refilled at the back.
//!
//! Backed by `im::Vector` so splitting off the front is cheap and cloning a
//! hand (for snapshots or reports) is O(1).

use std::fmt;

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Card;
use crate::core::error::WarError;

/// Cards taken from a hand in one draw, oldest first.
///
/// A War round never draws more than three cards per player.
pub type Drawn = SmallVec<[Card; 4]>;

/// Ordered cards owned by one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vector<Card>,
}

impl Hand {
    /// Create a hand holding `cards`, front first.
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Remove and return the first `count` cards.
    ///
    /// Fails without modifying the hand when fewer than `count` cards are
    /// available.
    pub fn draw(&mut self, count: usize) -> Result<Drawn, WarError> {
        if count > self.cards.len() {
            return Err(WarError::InsufficientCards {
                requested: count,
                available: self.cards.len(),
            });
        }

        let rest = self.cards.split_off(count);
        let drawn = std::mem::replace(&mut self.cards, rest);
        Ok(drawn.into_iter().collect())
    }

    /// Append cards to the back, keeping their order.
    pub fn receive(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cards: Vec<String> = self.cards.iter().map(Card::to_string).collect();
        f.write_str(&cards.join(" "))
    }
}
