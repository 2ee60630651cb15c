//! The War engine: dealing, the round loop, wars, and game over.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::control::{AlwaysContinue, Continuation};
use super::report::{GameSummary, RoundOutcome, RoundReport, TableStatus};
use crate::cards::{Card, Deck, Drawn, Hand};
use crate::core::config::{WarConfig, DEFAULT_ROUND_LIMIT};
use crate::core::error::WarError;
use crate::core::player::{Player, Seat, SeatMap};
use crate::core::rng::{GameRng, Shuffler};
use crate::rules::{cards_to_draw, shortage_winner, GameResult};

/// Where the engine is in its round cycle.
///
/// `Dealing` → `RoundStart` → `Comparing` → (`RoundResolved` |
/// `WarEscalation`) → `RoundStart` … until `GameOver`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Hands are dealt, no round played yet.
    Dealing,
    RoundStart,
    Comparing,
    /// Last round had a winner.
    RoundResolved,
    /// Last round tied; the table pile is still in play.
    WarEscalation,
    GameOver(GameResult),
}

/// What `play_round` did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundStep {
    Played(RoundReport),
    Finished(GameResult),
}

/// Builder for creating a dealt `WarGame`.
#[derive(Clone, Debug)]
pub struct WarGameBuilder {
    config: WarConfig,
}

impl WarGameBuilder {
    pub fn new(human_name: impl Into<String>) -> Self {
        Self::from_config(WarConfig::new(human_name))
    }

    pub fn from_config(config: WarConfig) -> Self {
        Self { config }
    }

    pub fn computer_name(mut self, name: impl Into<String>) -> Self {
        self.config.computer_name = name.into();
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Deal a game shuffled by a `GameRng`.
    ///
    /// Without a configured seed one is drawn from entropy and logged so
    /// the game can be replayed.
    pub fn build(self) -> Result<WarGame<GameRng>, WarError> {
        let rng = match self.config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        log::info!("dealing war game with seed {}", rng.seed());
        self.build_with(rng)
    }

    /// Deal a game using `shuffler` for the deck and every table pile.
    pub fn build_with<S: Shuffler>(self, mut shuffler: S) -> Result<WarGame<S>, WarError> {
        self.config.validate()?;

        let (first, second) = Deck::new().shuffle(&mut shuffler).split_in_half();
        let computer = Player::new(&self.config.computer_name, Hand::new(first))?;
        let human = Player::new(&self.config.human_name, Hand::new(second))?;

        Ok(WarGame::from_players(computer, human, shuffler)
            .with_manual(self.config.manual)
            .with_round_limit(self.config.round_limit))
    }
}

/// Two-player War game state.
///
/// Drive it one round at a time with [`WarGame::play_round`], or to the end
/// with [`WarGame::run`].
///
/// ```
/// use war_engine::games::war::WarGameBuilder;
///
/// let mut game = WarGameBuilder::new("alice").seed(7).build().unwrap();
/// let summary = game.play_to_end().unwrap();
/// assert!(summary.result.winner().is_some());
/// ```
#[derive(Clone, Debug)]
pub struct WarGame<S: Shuffler = GameRng> {
    players: SeatMap<Player>,
    /// Cards at stake, in the order they were put down.
    table: Vec<Card>,
    consecutive_ties: u32,
    rounds_played: u64,
    phase: Phase,
    shuffler: S,
    manual: bool,
    round_limit: u64,
}

impl<S: Shuffler> WarGame<S> {
    /// Start a game from already-dealt players.
    pub fn from_players(computer: Player, human: Player, shuffler: S) -> Self {
        log::debug!(
            "{} holds {} cards, {} holds {} cards",
            computer.name(),
            computer.card_count(),
            human.name(),
            human.card_count()
        );
        Self {
            players: SeatMap::from_parts(computer, human),
            table: Vec::new(),
            consecutive_ties: 0,
            rounds_played: 0,
            phase: Phase::Dealing,
            shuffler,
            manual: false,
            round_limit: DEFAULT_ROUND_LIMIT,
        }
    }

    /// Mark the game as manual. Front ends use [`WarGame::is_manual`] to
    /// pick the `Continuation` they drive it with.
    #[must_use]
    pub fn with_manual(mut self, manual: bool) -> Self {
        self.manual = manual;
        self
    }

    /// End the game as `GameResult::RoundLimit` once `round_limit` rounds
    /// have been played.
    #[must_use]
    pub fn with_round_limit(mut self, round_limit: u64) -> Self {
        self.round_limit = round_limit;
        self
    }

    #[must_use]
    pub fn is_manual(&self) -> bool {
        self.manual
    }

    #[must_use]
    pub fn round_limit(&self) -> u64 {
        self.round_limit
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat]
    }

    #[must_use]
    pub fn players(&self) -> &SeatMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn card_counts(&self) -> SeatMap<usize> {
        self.players.map(|_, p| p.card_count())
    }

    /// Cards currently at stake.
    #[must_use]
    pub fn table(&self) -> &[Card] {
        &self.table
    }

    /// Cards in both hands plus the table.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.players.iter().map(|(_, p)| p.card_count()).sum::<usize>() + self.table.len()
    }

    /// Pending ties in the current war (0 outside a war).
    #[must_use]
    pub fn consecutive_ties(&self) -> u32 {
        self.consecutive_ties
    }

    /// Cards each player will draw next round.
    #[must_use]
    pub fn next_draw_count(&self) -> usize {
        cards_to_draw(self.consecutive_ties)
    }

    #[must_use]
    pub fn rounds_played(&self) -> u64 {
        self.rounds_played
    }

    /// The result once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            Phase::GameOver(result) => Some(result),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result().is_some()
    }

    /// What a continuation collaborator sees before the next draw.
    #[must_use]
    pub fn status(&self) -> TableStatus {
        TableStatus {
            round: self.rounds_played + 1,
            card_counts: self.card_counts(),
            table_size: self.table.len(),
            cards_to_draw: self.next_draw_count(),
        }
    }

    /// Play one round in automatic mode.
    pub fn play_round(&mut self) -> Result<RoundStep, WarError> {
        self.play_round_with(&mut AlwaysContinue)
    }

    /// Play one round, asking `control` before any card is drawn.
    ///
    /// Once the game is over this keeps returning the same
    /// `RoundStep::Finished`.
    pub fn play_round_with<C>(&mut self, control: &mut C) -> Result<RoundStep, WarError>
    where
        C: Continuation + ?Sized,
    {
        if let Phase::GameOver(result) = self.phase {
            return Ok(RoundStep::Finished(result));
        }

        self.transition(Phase::RoundStart);
        let count = self.next_draw_count();

        if let Some(winner) = shortage_winner(&self.card_counts(), count) {
            return Ok(RoundStep::Finished(self.finish(GameResult::Winner(winner))));
        }

        if self.rounds_played >= self.round_limit {
            return Ok(RoundStep::Finished(self.finish(GameResult::RoundLimit)));
        }

        if !control.proceed(&self.status()) {
            return Ok(RoundStep::Finished(self.finish(GameResult::Stopped)));
        }

        let drawn = SeatMap::from_parts(
            self.players[Seat::Computer].draw(count)?,
            self.players[Seat::Human].draw(count)?,
        );
        let face_up = drawn.map(|_, cards| face_up_card(cards));
        for (_, cards) in drawn.iter() {
            self.table.extend(cards.iter().copied());
        }

        self.transition(Phase::Comparing);
        let outcome = match face_up[Seat::Computer].compare(&face_up[Seat::Human]) {
            Ordering::Greater => self.award_table(Seat::Computer),
            Ordering::Less => self.award_table(Seat::Human),
            Ordering::Equal => self.escalate(),
        };
        self.rounds_played += 1;

        let report = RoundReport {
            round: self.rounds_played,
            cards_drawn: count,
            drawn,
            face_up,
            outcome,
            card_counts: self.card_counts(),
            table_size: self.table.len(),
        };
        log::debug!(
            "round {}: {} vs {} -> {:?} ({} / {} / table {})",
            report.round,
            report.face_up[Seat::Computer],
            report.face_up[Seat::Human],
            report.outcome,
            report.card_counts[Seat::Computer],
            report.card_counts[Seat::Human],
            report.table_size
        );

        Ok(RoundStep::Played(report))
    }

    /// Play until the game ends, handing every report to `observer`.
    ///
    /// Returns after at most [`WarGame::round_limit`] rounds even when the
    /// shuffler lets the game cycle.
    pub fn run<C>(
        &mut self,
        control: &mut C,
        mut observer: impl FnMut(&RoundReport),
    ) -> Result<GameSummary, WarError>
    where
        C: Continuation + ?Sized,
    {
        loop {
            match self.play_round_with(control)? {
                RoundStep::Played(report) => observer(&report),
                RoundStep::Finished(result) => return Ok(self.summary(result)),
            }
        }
    }

    /// Play to the end in automatic mode.
    pub fn play_to_end(&mut self) -> Result<GameSummary, WarError> {
        self.run(&mut AlwaysContinue, |_| {})
    }

    fn summary(&self, result: GameResult) -> GameSummary {
        GameSummary {
            result,
            names: self.players.map(|_, p| p.name().to_string()),
            rounds: self.rounds_played,
            card_counts: self.card_counts(),
            table_size: self.table.len(),
        }
    }

    fn award_table(&mut self, winner: Seat) -> RoundOutcome {
        let cards_won = self.table.len();
        self.shuffler.shuffle(&mut self.table);
        self.players[winner].receive(self.table.drain(..));
        self.consecutive_ties = 0;
        self.transition(Phase::RoundResolved);
        RoundOutcome::Won { winner, cards_won }
    }

    fn escalate(&mut self) -> RoundOutcome {
        self.consecutive_ties += 1;
        self.transition(Phase::WarEscalation);
        RoundOutcome::War {
            depth: self.consecutive_ties,
        }
    }

    fn finish(&mut self, result: GameResult) -> GameResult {
        self.transition(Phase::GameOver(result));
        log::info!(
            "game over after {} rounds: {:?} ({} / {} / table {})",
            self.rounds_played,
            result,
            self.players[Seat::Computer].card_count(),
            self.players[Seat::Human].card_count(),
            self.table.len()
        );
        result
    }

    fn transition(&mut self, next: Phase) {
        log::trace!("{:?} -> {:?}", self.phase, next);
        self.phase = next;
    }
}

impl WarGame<GameRng> {
    /// Seed that reproduces this game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.shuffler.seed()
    }
}

/// The compared card is the last one drawn. Draw counts are never zero.
fn face_up_card(cards: &Drawn) -> Card {
    cards[cards.len() - 1]
}
