//! Core engine types: seats, players, RNG, configuration, errors.
//!
//! Everything here is independent of the War round protocol, which lives
//! in `rules` and `games::war`.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{WarConfig, DEFAULT_COMPUTER_NAME, DEFAULT_ROUND_LIMIT};
pub use error::WarError;
pub use player::{Player, Seat, SeatMap};
pub use rng::{GameRng, KeepOrder, Shuffler};
