//! Cards and the containers they move between.
//!
//! ## Key Types
//!
//! - `Card`: Suit and rank, compared by rank only
//! - `Deck`: The 52-card deck, shuffled once and split at deal time
//! - `Hand`: A player's queue of cards

pub mod card;
pub mod deck;
pub mod hand;

pub use card::{Card, Rank, Suit};
pub use deck::Deck;
pub use hand::{Drawn, Hand};
