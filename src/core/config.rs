//! Game configuration.
//!
//! `WarConfig` collects everything needed to set up a game: who is
//! playing, how the deck is shuffled, and whether rounds wait for a
//! go-ahead. It is plain data so front ends can load it from anywhere.

use serde::{Deserialize, Serialize};

use super::error::WarError;
use super::player::normalize_name;

/// Default display name of the automated opponent.
pub const DEFAULT_COMPUTER_NAME: &str = "computer";

/// Rounds played before a game is called off as `GameResult::RoundLimit`.
///
/// Shuffled games end in a few hundred rounds. The limit only matters for
/// shufflers that can repeat a position forever, such as `KeepOrder`.
pub const DEFAULT_ROUND_LIMIT: u64 = 100_000;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarConfig {
    /// Name of the human player, as typed.
    pub human_name: String,

    /// Name of the automated opponent.
    #[serde(default = "default_computer_name")]
    pub computer_name: String,

    /// RNG seed. `None` draws one from entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Ask before every draw whether to keep playing.
    #[serde(default)]
    pub manual: bool,

    /// Most rounds a game may last.
    #[serde(default = "default_round_limit")]
    pub round_limit: u64,
}

fn default_computer_name() -> String {
    DEFAULT_COMPUTER_NAME.to_string()
}

fn default_round_limit() -> u64 {
    DEFAULT_ROUND_LIMIT
}

impl WarConfig {
    /// Create a configuration for `human_name` with default settings.
    pub fn new(human_name: impl Into<String>) -> Self {
        Self {
            human_name: human_name.into(),
            computer_name: default_computer_name(),
            seed: None,
            manual: false,
            round_limit: DEFAULT_ROUND_LIMIT,
        }
    }

    /// Set the opponent's name.
    #[must_use]
    pub fn with_computer_name(mut self, name: impl Into<String>) -> Self {
        self.computer_name = name.into();
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Toggle manual mode.
    #[must_use]
    pub fn with_manual(mut self, manual: bool) -> Self {
        self.manual = manual;
        self
    }

    /// Cap the number of rounds.
    #[must_use]
    pub fn with_round_limit(mut self, round_limit: u64) -> Self {
        self.round_limit = round_limit;
        self
    }

    /// Check that both names normalize to something non-empty.
    pub fn validate(&self) -> Result<(), WarError> {
        normalize_name(&self.human_name)?;
        normalize_name(&self.computer_name)?;
        Ok(())
    }
}
