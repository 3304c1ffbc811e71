//! Property upgrades.
//!
//! A property takes up to `houses_before_hotel` houses; the hotel then
//! replaces them and nothing can be built after it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{EconomyConfig, GameError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeKind {
    House,
    Hotel,
}

impl std::fmt::Display for UpgradeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpgradeKind::House => f.write_str("house"),
            UpgradeKind::Hotel => f.write_str("hotel"),
        }
    }
}

/// One building and the rent bonus it grants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Upgrade {
    pub kind: UpgradeKind,
    /// Added to rent as a percentage of base rent.
    pub rent_bonus_percentage: i64,
}

impl Upgrade {
    #[must_use]
    pub const fn new(kind: UpgradeKind, rent_bonus_percentage: i64) -> Self {
        Self {
            kind,
            rent_bonus_percentage,
        }
    }

    /// The configured upgrade of `kind`.
    #[must_use]
    pub fn configured(kind: UpgradeKind, config: &EconomyConfig) -> Self {
        match kind {
            UpgradeKind::House => Self::new(kind, config.house_rent_bonus),
            UpgradeKind::Hotel => Self::new(kind, config.hotel_rent_bonus),
        }
    }

    /// The configured price of `kind`.
    #[must_use]
    pub fn cost(kind: UpgradeKind, config: &EconomyConfig) -> i64 {
        match kind {
            UpgradeKind::House => config.house_cost,
            UpgradeKind::Hotel => config.hotel_cost,
        }
    }
}

/// Buildings standing on one property.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Improvements {
    upgrades: SmallVec<[Upgrade; 4]>,
}

impl Improvements {
    /// Number of houses standing.
    #[must_use]
    pub fn houses(&self) -> usize {
        self.upgrades
            .iter()
            .filter(|u| u.kind == UpgradeKind::House)
            .count()
    }

    #[must_use]
    pub fn has_hotel(&self) -> bool {
        self.upgrades.iter().any(|u| u.kind == UpgradeKind::Hotel)
    }

    /// Sum of all bonus percentages.
    #[must_use]
    pub fn rent_bonus_percentage(&self) -> i64 {
        self.upgrades
            .iter()
            .map(|u| u.rent_bonus_percentage)
            .fold(0, i64::saturating_add)
    }

    #[must_use]
    pub fn upgrades(&self) -> &[Upgrade] {
        &self.upgrades
    }

    /// What may be built next, or `None` once the hotel stands.
    #[must_use]
    pub fn next_upgrade(&self, houses_before_hotel: usize) -> Option<UpgradeKind> {
        if self.has_hotel() {
            None
        } else if self.houses() < houses_before_hotel {
            Some(UpgradeKind::House)
        } else {
            Some(UpgradeKind::Hotel)
        }
    }

    /// Build `upgrade`. A hotel replaces the houses.
    ///
    /// Fails with `UnsupportedOperation` when `upgrade` is not the next
    /// legal building.
    pub fn apply(&mut self, upgrade: Upgrade, houses_before_hotel: usize) -> Result<()> {
        match self.next_upgrade(houses_before_hotel) {
            Some(next) if next == upgrade.kind => {
                if upgrade.kind == UpgradeKind::Hotel {
                    self.upgrades.clear();
                }
                self.upgrades.push(upgrade);
                Ok(())
            }
            Some(next) => Err(GameError::unsupported(format!(
                "cannot build a {} here, next upgrade is a {}",
                upgrade.kind, next
            ))),
            None => Err(GameError::unsupported("property already has a hotel")),
        }
    }
}
