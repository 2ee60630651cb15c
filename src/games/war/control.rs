//! Between-round go-ahead, used by manual mode.

use super::report::TableStatus;

/// Decides whether the next draw happens.
///
/// Asked once per round, after the shortage check and before any card
/// moves. Returning `false` ends the game as `GameResult::Stopped`.
///
/// Closures work directly:
///
/// ```
/// use war_engine::games::war::{Continuation, TableStatus};
///
/// let mut rounds_left = 3;
/// let mut control = |_: &TableStatus| {
///     rounds_left -= 1;
///     rounds_left >= 0
/// };
/// # let _ = &mut control as &mut dyn Continuation;
/// ```
pub trait Continuation {
    fn proceed(&mut self, status: &TableStatus) -> bool;
}

impl<F> Continuation for F
where
    F: FnMut(&TableStatus) -> bool,
{
    fn proceed(&mut self, status: &TableStatus) -> bool {
        self(status)
    }
}

/// Automatic mode: never asks, always draws.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AlwaysContinue;

impl Continuation for AlwaysContinue {
    fn proceed(&mut self, _status: &TableStatus) -> bool {
        true
    }
}
