//! Property-trading game on a ring board.
//!
//! - Players start with the configured balance on the start tile
//! - Passing the start tile pays a bonus
//! - Unowned assets can be bought, owned ones charge rent, own properties
//!   can be built on
//! - A player who cannot pay rent or tax is bankrupt and leaves the game
//! - The last solvent player wins; on a round limit, highest net worth wins

mod rules;

pub use rules::{owner_of, EconomicRules};
