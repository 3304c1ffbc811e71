//! Deterministic random number generation for dice.
//!
//! The engine never touches a global random source. Whoever builds a game
//! passes in something implementing [`RandomSource`]:
//!
//! - [`GameRng`] for real play, reproducible from its seed
//! - [`LoadedDice`] for scripted, fully predictable rolls
//!
//! ```
//! use rust_boardgame::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! // Same seed, same faces
//! for _ in 0..20 {
//!     assert_eq!(a.next_face(), b.next_face());
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Number of faces on one die.
pub const DIE_FACES: u8 = 6;

/// A source of die faces in `1..=6`.
pub trait RandomSource {
    /// Produce the next face value, uniformly distributed in `1..=6`.
    fn next_face(&mut self) -> u8;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_face(&mut self) -> u8 {
        (**self).next_face()
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn next_face(&mut self) -> u8 {
        (**self).next_face()
    }
}

/// Seeded dice roller for real play.
///
/// ChaCha8 keeps a seed fully reproducible across platforms, and its stream
/// position makes [`DiceCheckpoint`] a fixed-size snapshot.
#[derive(Clone, Debug)]
pub struct GameRng {
    stream: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            stream: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from the thread-local OS-backed generator.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Snapshot the roller so a saved game can resume with the same rolls.
    #[must_use]
    pub fn checkpoint(&self) -> DiceCheckpoint {
        DiceCheckpoint {
            seed: self.seed,
            word_pos: self.stream.get_word_pos(),
        }
    }

    /// Rebuild a roller at a saved position.
    #[must_use]
    pub fn resume(checkpoint: &DiceCheckpoint) -> Self {
        let mut stream = ChaCha8Rng::seed_from_u64(checkpoint.seed);
        stream.set_word_pos(checkpoint.word_pos);
        Self {
            stream,
            seed: checkpoint.seed,
        }
    }
}

impl RandomSource for GameRng {
    fn next_face(&mut self) -> u8 {
        self.stream.gen_range(1..=DIE_FACES)
    }
}

/// Position of a [`GameRng`] in its stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceCheckpoint {
    pub seed: u64,
    pub word_pos: u128,
}

/// Scripted dice: replays a fixed face sequence, cycling when exhausted.
///
/// ```
/// use rust_boardgame::core::{LoadedDice, RandomSource};
///
/// let mut dice = LoadedDice::new([3, 4]).unwrap();
/// assert_eq!(dice.next_face(), 3);
/// assert_eq!(dice.next_face(), 4);
/// assert_eq!(dice.next_face(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct LoadedDice {
    faces: Vec<u8>,
    next: usize,
}

impl LoadedDice {
    /// Create loaded dice. Fails if the script is empty or a face is not in `1..=6`.
    pub fn new(faces: impl IntoIterator<Item = u8>) -> super::Result<Self> {
        let faces: Vec<u8> = faces.into_iter().collect();
        if faces.is_empty() {
            return Err(super::GameError::invalid_argument(
                "loaded dice need at least one face",
            ));
        }
        if let Some(bad) = faces.iter().find(|&&f| !(1..=DIE_FACES).contains(&f)) {
            return Err(super::GameError::invalid_argument(format!(
                "die face {bad} is outside 1..={DIE_FACES}"
            )));
        }
        Ok(Self { faces, next: 0 })
    }
}

impl RandomSource for LoadedDice {
    fn next_face(&mut self) -> u8 {
        let face = self.faces[self.next];
        self.next = (self.next + 1) % self.faces.len();
        face
    }
}
