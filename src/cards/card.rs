//! Playing cards: suits, ranks, and rank-only comparison.
//!
//! Cards render as suit symbol followed by rank symbol, e.g. `H10`, `SA`,
//! `C2`, and parse back from the same text.
//!
//! ```
//! use war_engine::cards::{Card, Rank, Suit};
//!
//! let ace: Card = "SA".parse().unwrap();
//! assert_eq!(ace, Card::new(Suit::Spades, Rank::Ace));
//! assert_eq!(ace.to_string(), "SA");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::WarError;

/// Card suit. Never affects ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Spades,
    Clubs,
}

impl Suit {
    pub const COUNT: usize = 4;

    /// Canonical suit order used when enumerating a fresh deck.
    pub const ALL: [Suit; Suit::COUNT] = [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs];

    /// Single-letter symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Spades => 'S',
            Suit::Clubs => 'C',
        }
    }

    /// Parse a suit symbol.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.symbol() == symbol)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank, declared in canonical order from lowest to highest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const COUNT: usize = 13;

    /// All ranks, lowest first.
    pub const ALL: [Rank; Rank::COUNT] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Position in the canonical ordering (`Two` = 0, `Ace` = 12).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    /// Parse a rank symbol.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.symbol() == symbol)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An immutable playing card.
///
/// `PartialEq` compares suit and rank; use [`Card::compare`] for the
/// rank-only ordering the game is played by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    /// Cards in a standard deck.
    pub const COUNT: usize = Suit::COUNT * Rank::COUNT;

    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    /// Compare by rank only.
    ///
    /// `Less`, `Equal` and `Greater` stand for -1, 0 and 1.
    #[must_use]
    pub fn compare(&self, other: &Card) -> Ordering {
        self.rank.cmp(&other.rank)
    }

    /// All 52 cards, suits outer and ranks inner.
    pub fn all() -> impl Iterator<Item = Card> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(suit, rank)))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit, self.rank)
    }
}

impl FromStr for Card {
    type Err = WarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let suit = chars.next().and_then(Suit::from_symbol);
        let rank = Rank::from_symbol(chars.as_str());
        match (suit, rank) {
            (Some(suit), Some(rank)) => Ok(Card::new(suit, rank)),
            _ => Err(WarError::InvalidCard(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_by_rank() {
        let two = Card::new(Suit::Hearts, Rank::Two);
        let ace = Card::new(Suit::Hearts, Rank::Ace);

        assert_eq!(two.compare(&ace), Ordering::Less);
        assert_eq!(ace.compare(&two), Ordering::Greater);
        assert_eq!(ace.compare(&ace), Ordering::Equal);
    }

    #[test]
    fn test_compare_ignores_suit() {
        let heart_king = Card::new(Suit::Hearts, Rank::King);
        let club_king = Card::new(Suit::Clubs, Rank::King);

        assert_eq!(heart_king.compare(&club_king), Ordering::Equal);
        assert_ne!(heart_king, club_king);
    }

    #[test]
    fn test_ten_beats_nine() {
        // Ordering is by position, not by symbol text
        let ten: Card = "D10".parse().unwrap();
        let nine: Card = "S9".parse().unwrap();
        assert_eq!(ten.compare(&nine), Ordering::Greater);
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Suit::Hearts, Rank::Ten).to_string(), "H10");
        assert_eq!(Card::new(Suit::Clubs, Rank::Two).to_string(), "C2");
        assert_eq!(Card::new(Suit::Spades, Rank::Queen).to_string(), "SQ");
    }

    #[test]
    fn test_parse() {
        assert_eq!("DJ".parse::<Card>().unwrap(), Card::new(Suit::Diamonds, Rank::Jack));
        assert_eq!("H10".parse::<Card>().unwrap(), Card::new(Suit::Hearts, Rank::Ten));

        assert!(matches!("".parse::<Card>(), Err(WarError::InvalidCard(_))));
        assert!(matches!("X5".parse::<Card>(), Err(WarError::InvalidCard(_))));
        assert!(matches!("H1".parse::<Card>(), Err(WarError::InvalidCard(_))));
        assert!(matches!("HA ".parse::<Card>(), Err(WarError::InvalidCard(_))));
    }

    #[test]
    fn test_all_order() {
        let cards: Vec<_> = Card::all().collect();
        assert_eq!(cards.len(), Card::COUNT);
        assert_eq!(cards[0].to_string(), "H2");
        assert_eq!(cards[12].to_string(), "HA");
        assert_eq!(cards[13].to_string(), "D2");
        assert_eq!(cards[51].to_string(), "CA");
    }

    #[test]
    fn test_rank_ordinals() {
        assert_eq!(Rank::Two.ordinal(), 0);
        assert_eq!(Rank::Ace.ordinal(), 12);
        for pair in Rank::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_card_serde() {
        let card = Card::new(Suit::Spades, Rank::Seven);
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
