//! Random sources for dealing and for reshuffling won cards.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical deals and reshuffles
//! - **Replayable**: Unseeded games draw a seed from OS entropy and keep it
//! - **Swappable**: The engine only sees the [`Shuffler`] trait
//!
//! ```
//! use war_engine::core::{GameRng, Shuffler};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut left = vec![1, 2, 3, 4, 5, 6];
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//! assert_eq!(left, right);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of uniform permutations.
///
/// The engine shuffles the deck once at deal time and the table pile every
/// time a round is won. Tests substitute [`KeepOrder`] or a seeded
/// [`GameRng`].
pub trait Shuffler {
    /// Permute `items` in place.
    fn shuffle<T>(&mut self, items: &mut [T]);
}

/// Seeded RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG with a seed drawn from the thread RNG.
    ///
    /// The seed is still recorded, so the game can be replayed with
    /// [`GameRng::new`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Shuffler for GameRng {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        rand::seq::SliceRandom::shuffle(items, &mut self.inner);
    }
}

/// Identity shuffler: leaves every sequence in its current order.
///
/// Won piles go back in play order, so a game can return to a position it
/// has already seen and cycle. Such games end at the engine's round limit
/// as `GameResult::RoundLimit`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeepOrder;

impl Shuffler for KeepOrder {
    fn shuffle<T>(&mut self, _items: &mut [T]) {}
}

impl<S: Shuffler + ?Sized> Shuffler for &mut S {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        (**self).shuffle(items);
    }
}
