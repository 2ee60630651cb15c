//! War rules: draw schedule, shortage check, and game results.
//!
//! These are pure functions over card counts. The engine in `games::war`
//! owns the state and calls into them every round.

pub mod engine;

pub use engine::{cards_to_draw, shortage_winner, GameResult};
