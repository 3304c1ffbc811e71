//! Purchasable assets.
//!
//! `Ownable` is a closed set of asset kinds. Each kind has a price and a
//! rent formula; ownership itself lives with the owner, not the asset.

use serde::{Deserialize, Serialize};

use super::upgrade::Improvements;
use crate::core::{EconomyConfig, GameError, Result};

/// Identifier of a registered asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AssetId(pub u16);

impl AssetId {
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Asset({})", self.0)
    }
}

/// The color sets of properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorGroup {
    Brown,
    LightBlue,
    Pink,
    Orange,
    Red,
    Yellow,
    Green,
    DarkBlue,
}

/// Asset kind, without the asset's data. Shown to confirmation prompts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetCategory {
    Property,
    Railroad,
    Utility,
}

impl std::fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AssetCategory::Property => "property",
            AssetCategory::Railroad => "railroad",
            AssetCategory::Utility => "utility",
        };
        f.write_str(name)
    }
}

/// `amount * percentage / 100`, truncated toward zero and clamped to the
/// `i64` range instead of overflowing.
#[must_use]
pub fn percent_of(amount: i64, percentage: i64) -> i64 {
    let scaled = i128::from(amount) * i128::from(percentage) / 100;
    i64::try_from(scaled).unwrap_or(if scaled < 0 { i64::MIN } else { i64::MAX })
}

/// A street in a color group. The only asset kind that takes upgrades.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id: AssetId,
    pub name: String,
    pub color: ColorGroup,
    pub price: i64,
}

impl Property {
    /// Rent before upgrades: `price * base_rent_percentage / 100`, truncated.
    #[must_use]
    pub fn base_rent(&self, config: &EconomyConfig) -> i64 {
        percent_of(self.price, config.base_rent_percentage)
    }

    /// Base rent plus `base * (sum of upgrade bonuses) / 100`, truncated.
    #[must_use]
    pub fn rent(&self, improvements: &Improvements, config: &EconomyConfig) -> i64 {
        let base = self.base_rent(config);
        base.saturating_add(percent_of(base, improvements.rent_bonus_percentage()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Railroad {
    pub id: AssetId,
    pub name: String,
    pub price: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utility {
    pub id: AssetId,
    pub name: String,
    pub price: i64,
}

/// A purchasable asset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ownable {
    Property(Property),
    Railroad(Railroad),
    Utility(Utility),
}

impl Ownable {
    #[must_use]
    pub fn id(&self) -> AssetId {
        match self {
            Ownable::Property(p) => p.id,
            Ownable::Railroad(r) => r.id,
            Ownable::Utility(u) => u.id,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Ownable::Property(p) => &p.name,
            Ownable::Railroad(r) => &r.name,
            Ownable::Utility(u) => &u.name,
        }
    }

    #[must_use]
    pub fn price(&self) -> i64 {
        match self {
            Ownable::Property(p) => p.price,
            Ownable::Railroad(r) => r.price,
            Ownable::Utility(u) => u.price,
        }
    }

    #[must_use]
    pub fn category(&self) -> AssetCategory {
        match self {
            Ownable::Property(_) => AssetCategory::Property,
            Ownable::Railroad(_) => AssetCategory::Railroad,
            Ownable::Utility(_) => AssetCategory::Utility,
        }
    }

    /// Rent owed by a visitor.
    ///
    /// Railroad and utility rents are fixed amounts; they do not scale with
    /// how many of the kind the owner holds, nor with the dice.
    #[must_use]
    pub fn rent(&self, improvements: &Improvements, config: &EconomyConfig) -> i64 {
        match self {
            Ownable::Property(p) => p.rent(improvements, config),
            Ownable::Railroad(_) => config.railroad_rent,
            Ownable::Utility(_) => config.utility_rent,
        }
    }

    /// Only properties can be built on.
    #[must_use]
    pub fn is_upgradable(&self) -> bool {
        matches!(self, Ownable::Property(_))
    }

    /// Reject empty names and negative prices.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.name().trim().is_empty() {
            return Err(GameError::invalid_argument("asset name must not be empty"));
        }
        if self.price() < 0 {
            return Err(GameError::invalid_argument(format!(
                "price of {} must be non-negative, got {}",
                self.name(),
                self.price()
            )));
        }
        Ok(())
    }
}
