//! # war-engine
//!
//! A two-player War card game engine: a human against the computer.
//!
//! ## Design Principles
//!
//! 1. **UI-Agnostic**: The engine never prints or prompts. Every round
//!    returns a `RoundReport`; front ends render it.
//!
//! 2. **Deterministic**: All randomness flows through a `Shuffler`. A seeded
//!    `GameRng` replays the same game round for round.
//!
//! 3. **Ownership Transfer**: Cards move between hands and the table by
//!    value. A draw shrinks the hand and hands the caller owned cards.
//!
//! ## Modules
//!
//! - `cards`: Card, Deck, Hand
//! - `core`: Seats, players, RNG, configuration, errors
//! - `rules`: Draw schedule, shortage check, game results
//! - `games`: The War engine itself

pub mod cards;
pub mod core;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::cards::{Card, Deck, Drawn, Hand, Rank, Suit};

pub use crate::core::{
    GameRng, KeepOrder, Player, Seat, SeatMap, Shuffler, WarConfig, WarError,
};

pub use crate::rules::{cards_to_draw, shortage_winner, GameResult};

pub use crate::games::war::{
    AlwaysContinue, Continuation, GameSummary, Phase, RoundOutcome, RoundReport, RoundStep,
    TableStatus, WarGame, WarGameBuilder,
};
