//! Core engine types: errors, players, dice, RNG, turn order, configuration.
//!
//! This module contains the building blocks shared by every rule set.
//! Rule sets configure these via `GameConfig` rather than modifying the core.

pub mod config;
pub mod dice;
pub mod error;
pub mod player;
pub mod rng;
pub mod turn;

pub use config::{EconomyConfig, GameConfig};
pub use dice::{Dice, DiceRoll};
pub use error::{GameError, LayoutViolation, Result};
pub use player::{Player, PlayerId, PlayerProfile};
pub use rng::{DiceCheckpoint, GameRng, LoadedDice, RandomSource};
pub use turn::TurnManager;
