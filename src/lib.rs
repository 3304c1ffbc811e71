//! # rust-boardgame
//!
//! A turn-based board game rules engine with two rule sets sharing one
//! turn and movement core: a property-trading economic game and a
//! snakes-and-ladders race.
//!
//! ## Design Principles
//!
//! 1. **Rule-Set Agnostic Core**: The turn loop rolls, moves and manages
//!    turn order. Everything a cell does lives behind the `RuleSet` trait.
//!
//! 2. **Injected Collaborators**: Dice, purchase decisions and notifications
//!    are passed in. The engine has no global state and no UI dependency.
//!
//! 3. **Configuration Over Convention**: Prices, rents, bonuses and limits
//!    come from `EconomyConfig` and `GameConfig`.
//!
//! ## Example
//!
//! ```
//! use rust_boardgame::{
//!     EconomicRules, EconomyConfig, Game, GameConfig, GameRng, PlayerProfile,
//! };
//!
//! let rules = EconomicRules::classic(EconomyConfig::default()).unwrap();
//! let players = vec![
//!     PlayerProfile::new("Ada", "car"),
//!     PlayerProfile::new("Bo", "hat"),
//! ];
//!
//! let mut game = Game::new(rules, players, GameConfig::new().with_max_rounds(50))
//!     .unwrap()
//!     .with_dice(GameRng::new(7));
//!
//! game.run(1_000).unwrap();
//! assert!(game.is_ended());
//! assert!(game.result().is_some());
//! ```
//!
//! ## Modules
//!
//! - `core`: Errors, players, dice, RNG, turn order, configuration
//! - `economy`: Assets, owners, upgrades, asset registry
//! - `board`: Tiles, board layout, board factory, race track
//! - `rules`: RuleSet trait and economic tile dispatch
//! - `games`: The economic and race rule sets
//! - `game`: The orchestrator, notifications and confirmations

pub mod board;
pub mod core;
pub mod economy;
pub mod game;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Dice, DiceCheckpoint, DiceRoll, EconomyConfig, GameConfig, GameError, GameRng, LayoutViolation,
    LoadedDice, Player, PlayerId, PlayerProfile, RandomSource, Result, TurnManager,
};

pub use crate::economy::{
    AssetCategory, AssetId, AssetRegistry, ColorGroup, Improvements, Ownable, Owner, Upgrade,
    UpgradeKind,
};

pub use crate::board::{
    build_board, classic_board, Board, BoardCorner, CornerKind, Jump, Tile, TileDescriptor, Track,
};

pub use crate::rules::{Effect, GameResult, LandingOutcome, Movement, RuleSet, TurnContext};

pub use crate::games::{EconomicRules, RaceRules};

pub use crate::game::{
    AutoConfirm, ConfirmationProvider, EventSink, Game, GameEvent, NullSink, Prompt,
};
