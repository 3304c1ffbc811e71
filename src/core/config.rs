//! Game configuration types.
//!
//! Rule sets are configured at startup rather than hardcoded:
//! - `GameConfig`: turn-core settings shared by every rule set
//! - `EconomyConfig`: prices, bonuses and rents of the economic rule set
//!
//! Both are serde-serializable so a host can load them from its own files.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Turn-core configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Dice rolled per turn.
    pub dice_count: usize,

    /// End the game after this many completed rounds. `None` for no limit.
    pub max_rounds: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dice_count: 2,
            max_rounds: None,
        }
    }
}

impl GameConfig {
    /// Two dice, no round limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// One die, as race games are usually played.
    #[must_use]
    pub fn race() -> Self {
        Self {
            dice_count: 1,
            max_rounds: None,
        }
    }

    /// Set the number of dice rolled per turn.
    #[must_use]
    pub fn with_dice_count(mut self, dice_count: usize) -> Self {
        self.dice_count = dice_count;
        self
    }

    /// Set a round limit.
    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = Some(rounds);
        self
    }

    /// Reject settings the turn core cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.dice_count < 1 {
            return Err(GameError::invalid_argument("dice_count must be at least 1"));
        }
        if self.max_rounds == Some(0) {
            return Err(GameError::invalid_argument("max_rounds must be at least 1"));
        }
        Ok(())
    }
}

/// Economic rule set configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EconomyConfig {
    /// Balance every player starts with.
    pub starting_balance: i64,

    /// Credited when a move wraps past the start tile.
    pub pass_start_bonus: i64,

    /// Property base rent as a percentage of its price.
    pub base_rent_percentage: i64,

    /// Cost of one house.
    pub house_cost: i64,

    /// Rent bonus added by each house, in percent of base rent.
    pub house_rent_bonus: i64,

    /// Cost of the hotel.
    pub hotel_cost: i64,

    /// Rent bonus of the hotel, in percent of base rent.
    pub hotel_rent_bonus: i64,

    /// Houses required before a hotel may be bought.
    pub houses_before_hotel: usize,

    /// Fixed railroad rent.
    pub railroad_rent: i64,

    /// Fixed utility rent.
    pub utility_rent: i64,

    /// Turns a player sent to jail sits out.
    pub jail_sentence: u32,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            starting_balance: 1500,
            pass_start_bonus: 200,
            base_rent_percentage: 70,
            house_cost: 50,
            house_rent_bonus: 25,
            hotel_cost: 200,
            hotel_rent_bonus: 200,
            houses_before_hotel: 4,
            railroad_rent: 25,
            utility_rent: 20,
            jail_sentence: 2,
        }
    }
}

impl EconomyConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_starting_balance(mut self, balance: i64) -> Self {
        self.starting_balance = balance;
        self
    }

    #[must_use]
    pub fn with_pass_start_bonus(mut self, bonus: i64) -> Self {
        self.pass_start_bonus = bonus;
        self
    }

    #[must_use]
    pub fn with_house(mut self, cost: i64, rent_bonus: i64) -> Self {
        self.house_cost = cost;
        self.house_rent_bonus = rent_bonus;
        self
    }

    #[must_use]
    pub fn with_hotel(mut self, cost: i64, rent_bonus: i64) -> Self {
        self.hotel_cost = cost;
        self.hotel_rent_bonus = rent_bonus;
        self
    }

    #[must_use]
    pub fn with_fixed_rents(mut self, railroad: i64, utility: i64) -> Self {
        self.railroad_rent = railroad;
        self.utility_rent = utility;
        self
    }

    #[must_use]
    pub fn with_jail_sentence(mut self, turns: u32) -> Self {
        self.jail_sentence = turns;
        self
    }

    /// Every amount must be non-negative.
    pub fn validate(&self) -> Result<()> {
        let amounts = [
            ("starting_balance", self.starting_balance),
            ("pass_start_bonus", self.pass_start_bonus),
            ("base_rent_percentage", self.base_rent_percentage),
            ("house_cost", self.house_cost),
            ("house_rent_bonus", self.house_rent_bonus),
            ("hotel_cost", self.hotel_cost),
            ("hotel_rent_bonus", self.hotel_rent_bonus),
            ("railroad_rent", self.railroad_rent),
            ("utility_rent", self.utility_rent),
        ];
        for (name, value) in amounts {
            if value < 0 {
                return Err(GameError::invalid_argument(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}
