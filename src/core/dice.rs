//! Dice rolls.
//!
//! [`Dice`] is stateless: every roll pulls fresh faces from the
//! [`RandomSource`] it is handed.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{GameError, Result};
use super::rng::RandomSource;

/// Stateless dice roller.
#[derive(Clone, Copy, Debug, Default)]
pub struct Dice;

impl Dice {
    /// Roll `count` independent dice.
    ///
    /// Fails with `InvalidArgument` if `count` is zero.
    pub fn roll(count: usize, source: &mut impl RandomSource) -> Result<DiceRoll> {
        if count < 1 {
            return Err(GameError::invalid_argument("must roll at least one die"));
        }

        let values = (0..count).map(|_| source.next_face()).collect();
        Ok(DiceRoll { values })
    }
}

/// The face values of one roll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    values: SmallVec<[u8; 4]>,
}

impl DiceRoll {
    /// Build a roll from known faces (useful for replays and tests).
    pub fn from_values(values: impl IntoIterator<Item = u8>) -> Result<Self> {
        let values: SmallVec<[u8; 4]> = values.into_iter().collect();
        if values.is_empty() {
            return Err(GameError::invalid_argument("a roll needs at least one die"));
        }
        if values.iter().any(|v| !(1..=6).contains(v)) {
            return Err(GameError::invalid_argument("die faces must be in 1..=6"));
        }
        Ok(Self { values })
    }

    /// Individual face values, in roll order.
    #[must_use]
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Number of dice rolled.
    #[must_use]
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// Sum of all faces.
    #[must_use]
    pub fn total(&self) -> usize {
        self.values.iter().map(|&v| v as usize).sum()
    }

    /// Whether every die shows the same face (doubles, triples, ...).
    ///
    /// Meaningless for a single die, which fails with `UnsupportedOperation`.
    pub fn all_equal(&self) -> Result<bool> {
        if self.values.len() < 2 {
            return Err(GameError::unsupported(
                "all_equal needs at least two dice",
            ));
        }
        Ok(self.values.windows(2).all(|w| w[0] == w[1]))
    }
}
