//! Seats, per-seat storage, and players.
//!
//! ## Seat
//!
//! War is strictly two-handed: the automated opponent sits at
//! `Seat::Computer`, the person at `Seat::Human`.
//!
//! ## SeatMap
//!
//! Fixed per-seat storage indexed by `Seat`.
//!
//! ## Player
//!
//! A named owner of a `Hand`.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Drawn, Hand};
use crate::core::error::WarError;

/// Which side of the table a player sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    Computer,
    Human,
}

impl Seat {
    /// Both seats in check order: the computer's hand is always looked at
    /// first.
    pub const ALL: [Seat; 2] = [Seat::Computer, Seat::Human];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::Computer => 0,
            Seat::Human => 1,
        }
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Seat {
        match self {
            Seat::Computer => Seat::Human,
            Seat::Human => Seat::Computer,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Computer => f.write_str("computer"),
            Seat::Human => f.write_str("human"),
        }
    }
}

/// One value per seat.
///
/// ```
/// use war_engine::core::{Seat, SeatMap};
///
/// let mut counts: SeatMap<usize> = SeatMap::with_value(26);
/// counts[Seat::Human] += 2;
/// assert_eq!(counts[Seat::Computer], 26);
/// assert_eq!(counts[Seat::Human], 28);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create with values from a factory function.
    pub fn new(mut factory: impl FnMut(Seat) -> T) -> Self {
        Self {
            data: [factory(Seat::Computer), factory(Seat::Human)],
        }
    }

    /// Create from the two values directly.
    pub fn from_parts(computer: T, human: T) -> Self {
        Self { data: [computer, human] }
    }

    /// Create with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_parts(value.clone(), value)
    }

    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs, computer first.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().zip(self.data.iter())
    }

    /// Apply `f` to each entry.
    pub fn map<U>(&self, mut f: impl FnMut(Seat, &T) -> U) -> SeatMap<U> {
        SeatMap::new(|seat| f(seat, self.get(seat)))
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}

/// Normalize a display name: trimmed, first letter upper-case, rest
/// lower-case.
///
/// ```
/// use war_engine::core::player::normalize_name;
///
/// assert_eq!(normalize_name("  ALICE ").unwrap(), "Alice");
/// assert!(normalize_name("   ").is_err());
/// ```
pub fn normalize_name(raw: &str) -> Result<String, WarError> {
    let mut chars = raw.trim().chars();
    let first = chars.next().ok_or(WarError::EmptyName)?;
    Ok(first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect())
}

/// A named player and their hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    hand: Hand,
}

impl Player {
    /// Create a player. The name is normalized with [`normalize_name`].
    pub fn new(name: &str, hand: Hand) -> Result<Self, WarError> {
        Ok(Self {
            name: normalize_name(name)?,
            hand,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Draw `count` cards from the front of the hand.
    pub fn draw(&mut self, count: usize) -> Result<Drawn, WarError> {
        self.hand.draw(count)
    }

    /// Add cards to the back of the hand.
    pub fn receive(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.receive(cards);
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:\n {}", self.name, self.hand)
    }
}
