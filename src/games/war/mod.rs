//! Two-player War.
//!
//! The deck is shuffled and split 26/26 between the computer and the human.
//! Each round both draw from the front of their hands and compare the last
//! card drawn; the higher card takes the whole table pile. Ties start a war:
//! the next draw is three cards each, then two for every further tie, until
//! someone wins the pile. A player who cannot cover the next draw loses.

mod control;
mod game;
mod report;

pub use control::{AlwaysContinue, Continuation};
pub use game::{Phase, RoundStep, WarGame, WarGameBuilder};
pub use report::{GameSummary, RoundOutcome, RoundReport, TableStatus};
