//! Opponent gesture selection.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

use crate::gesture::{Gesture, PLAYABLE};

/// Source of opponent gestures. Draws only from [`PLAYABLE`].
pub enum Opponent {
    /// Uniform draw backed by a small PRNG.
    Rng { rng: Box<ChaCha8Rng> },
    /// Fixed sequence, repeated cyclically. Used for reproducible sessions.
    Scripted { moves: Vec<Gesture>, next: usize },
}

impl Opponent {
    pub fn from_seed(seed: u64) -> Self {
        Self::Rng {
            rng: Box::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    pub fn from_entropy() -> Self {
        Self::Rng {
            rng: Box::new(ChaCha8Rng::from_entropy()),
        }
    }

    /// Seeded when `seed` is set, entropy-backed otherwise.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::from_seed(s),
            None => Self::from_entropy(),
        }
    }

    /// Cycle through `moves`, skipping `Unknown`.
    ///
    /// Returns `None` when no playable gesture remains.
    pub fn scripted<I: IntoIterator<Item = Gesture>>(moves: I) -> Option<Self> {
        let moves: Vec<Gesture> = moves.into_iter().filter(Gesture::is_playable).collect();
        if moves.is_empty() {
            return None;
        }
        Some(Self::Scripted { moves, next: 0 })
    }

    /// Draw the next opponent gesture.
    pub fn draw(&mut self) -> Gesture {
        match self {
            Opponent::Rng { rng } => PLAYABLE[rng.gen_range(0..PLAYABLE.len())],
            Opponent::Scripted { moves, next } => {
                let g = moves[*next % moves.len()];
                *next = (*next + 1) % moves.len();
                g
            }
        }
    }
}
