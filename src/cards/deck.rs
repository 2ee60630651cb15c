//! The 52-card deck: construction, shuffling, and the opening split.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::error::WarError;
use crate::core::rng::Shuffler;

/// A full deck of 52 unique cards.
///
/// Every constructor guarantees the 52-unique-cards invariant, so
/// [`Deck::split_in_half`] never has to check it.
///
/// ```
/// use war_engine::cards::Deck;
/// use war_engine::core::GameRng;
///
/// let mut rng = GameRng::new(42);
/// let (first, second) = Deck::new().shuffle(&mut rng).split_in_half();
/// assert_eq!(first.len(), 26);
/// assert_eq!(second.len(), 26);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Cards in each half after [`Deck::split_in_half`].
    pub const HALF: usize = Card::COUNT / 2;

    /// A fresh deck in canonical order: suits outer, ranks inner.
    #[must_use]
    pub fn new() -> Self {
        Self { cards: Card::all().collect() }
    }

    /// Build a deck from an explicit card order.
    ///
    /// Fails unless `cards` holds each of the 52 cards exactly once.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, WarError> {
        if cards.len() != Card::COUNT {
            return Err(WarError::DeckSize {
                expected: Card::COUNT,
                found: cards.len(),
            });
        }

        let mut seen = HashSet::with_capacity(Card::COUNT);
        for &card in &cards {
            if !seen.insert(card) {
                return Err(WarError::DuplicateCard(card));
            }
        }

        Ok(Self { cards })
    }

    /// Shuffle in place. Returns `self` for chaining.
    pub fn shuffle(&mut self, shuffler: &mut impl Shuffler) -> &mut Self {
        shuffler.shuffle(&mut self.cards);
        self
    }

    /// Split into cards `0..26` and `26..52`, keeping the current order.
    #[must_use]
    pub fn split_in_half(&self) -> (Vec<Card>, Vec<Card>) {
        let (first, second) = self.cards.split_at(Self::HALF);
        (first.to_vec(), second.to_vec())
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<Card>> for Deck {
    type Error = WarError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::from_cards(cards)
    }
}

impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.cards
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cards: Vec<String> = self.cards.iter().map(Card::to_string).collect();
        write!(f, "[{}]", cards.join(", "))
    }
}
