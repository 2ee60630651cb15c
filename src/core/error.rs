//! Error type for precondition violations.
//!
//! Running out of cards is how War ends, so it is a `GameResult`, not an
//! error. `WarError` only covers malformed input: bad decks, unparsable
//! cards, empty names, and draws that a hand cannot satisfy.

use thiserror::Error;

use crate::cards::Card;

/// Errors that can occur while setting up or driving a War game.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WarError {
    #[error("deck must hold {expected} cards, found {found}")]
    DeckSize { expected: usize, found: usize },

    #[error("card {0} appears more than once in the deck")]
    DuplicateCard(Card),

    #[error("invalid card '{0}'")]
    InvalidCard(String),

    #[error("player name must not be empty")]
    EmptyName,

    #[error("cannot draw {requested} cards from a hand of {available}")]
    InsufficientCards { requested: usize, available: usize },
}
