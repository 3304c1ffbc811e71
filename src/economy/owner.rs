//! The owner side of the economy.
//!
//! An `Owner` holds a non-negative balance and a set of assets. Every debit
//! runs the solvency check first, so a failed debit leaves the owner exactly
//! as it was.

use rustc_hash::FxHashSet;

use super::ownable::{AssetId, Ownable};
use super::registry::AssetRegistry;
use crate::core::{GameError, Player, PlayerId, Result};

/// An economic participant.
///
/// Only the state accessors and the four mutating operations are required;
/// the predicates and `net_worth` derive from them.
pub trait Owner {
    /// Identity used for ownership lookups.
    fn owner_id(&self) -> PlayerId;

    /// Current balance, never negative.
    fn balance(&self) -> i64;

    /// Assets currently owned.
    fn holdings(&self) -> &FxHashSet<AssetId>;

    /// Deduct `amount`.
    ///
    /// Fails with `InvalidArgument` for a negative amount and
    /// `InsufficientFunds` when it exceeds the balance.
    fn pay(&mut self, amount: i64) -> Result<()>;

    /// Credit `amount`. Fails with `InvalidArgument` for a negative amount.
    fn add_balance(&mut self, amount: i64) -> Result<()>;

    /// Buy `asset` at its price.
    ///
    /// Fails with `InsufficientFunds` when the price exceeds the balance
    /// and `InvalidArgument` when the asset is already held.
    fn purchase(&mut self, asset: &Ownable) -> Result<()>;

    /// Give up every held asset, returning their ids.
    fn release_all(&mut self) -> Vec<AssetId>;

    fn is_owner_of(&self, asset: AssetId) -> bool {
        self.holdings().contains(&asset)
    }

    /// Solvency check: `Ok` when `amount` can be debited.
    fn check_funds(&self, amount: i64) -> Result<()> {
        if amount < 0 {
            return Err(GameError::invalid_argument(format!(
                "amount must be non-negative, got {amount}"
            )));
        }
        let available = self.balance();
        if amount > available {
            return Err(GameError::InsufficientFunds {
                required: amount,
                available,
            });
        }
        Ok(())
    }

    /// Non-failing form of [`Owner::check_funds`].
    fn has_sufficient_funds(&self, amount: i64) -> bool {
        self.check_funds(amount).is_ok()
    }

    /// Balance plus the purchase price of every held asset.
    ///
    /// Upgrades do not count. Assets missing from `registry` are skipped.
    fn net_worth(&self, registry: &AssetRegistry) -> i64 {
        let assets: i64 = self
            .holdings()
            .iter()
            .filter_map(|&id| registry.get(id).ok())
            .map(Ownable::price)
            .sum();
        self.balance() + assets
    }
}

impl Owner for Player {
    fn owner_id(&self) -> PlayerId {
        self.id()
    }

    fn balance(&self) -> i64 {
        self.balance
    }

    fn holdings(&self) -> &FxHashSet<AssetId> {
        &self.holdings
    }

    fn pay(&mut self, amount: i64) -> Result<()> {
        self.check_funds(amount)?;
        self.balance -= amount;
        Ok(())
    }

    fn add_balance(&mut self, amount: i64) -> Result<()> {
        if amount < 0 {
            return Err(GameError::invalid_argument(format!(
                "cannot add a negative amount ({amount})"
            )));
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| GameError::invalid_argument("balance overflow"))?;
        Ok(())
    }

    fn purchase(&mut self, asset: &Ownable) -> Result<()> {
        if self.holdings.contains(&asset.id()) {
            return Err(GameError::invalid_argument(format!(
                "{} already owns {}",
                self.name(),
                asset.name()
            )));
        }
        self.pay(asset.price())?;
        self.holdings.insert(asset.id());
        Ok(())
    }

    fn release_all(&mut self) -> Vec<AssetId> {
        let mut released: Vec<AssetId> = self.holdings.drain().collect();
        released.sort_unstable();
        released
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerProfile;
    use crate::economy::ColorGroup;

    fn player(balance: i64) -> Player {
        Player::new(PlayerId(0), PlayerProfile::new("Ada", "car"), balance).unwrap()
    }

    fn registry() -> (AssetRegistry, AssetId, AssetId) {
        let mut registry = AssetRegistry::new();
        let park = registry
            .add_property("Park Place", ColorGroup::DarkBlue, 350)
            .unwrap();
        let rail = registry.add_railroad("Reading Railroad", 200).unwrap();
        (registry, park, rail)
    }

    #[test]
    fn test_purchase_deducts_and_records() {
        let (registry, park, _) = registry();
        let mut ada = player(1500);

        ada.purchase(registry.get(park).unwrap()).unwrap();
        assert_eq!(ada.balance(), 1150);
        assert!(ada.is_owner_of(park));
    }

    #[test]
    fn test_purchase_insufficient_leaves_state() {
        let (registry, park, _) = registry();
        let mut ada = player(100);

        let err = ada.purchase(registry.get(park).unwrap()).unwrap_err();
        assert_eq!(
            err,
            GameError::InsufficientFunds {
                required: 350,
                available: 100
            }
        );
        assert_eq!(ada.balance(), 100);
        assert!(!ada.is_owner_of(park));
    }

    #[test]
    fn test_purchase_twice_rejected() {
        let (registry, park, _) = registry();
        let mut ada = player(1500);
        ada.purchase(registry.get(park).unwrap()).unwrap();

        assert!(matches!(
            ada.purchase(registry.get(park).unwrap()),
            Err(GameError::InvalidArgument(_))
        ));
        assert_eq!(ada.balance(), 1150);
    }

    #[test]
    fn test_pay_and_add_balance() {
        let mut ada = player(50);

        ada.pay(50).unwrap();
        assert_eq!(ada.balance(), 0);
        assert!(ada.pay(1).unwrap_err().is_insufficient_funds());
        assert!(matches!(ada.pay(-1), Err(GameError::InvalidArgument(_))));

        ada.add_balance(200).unwrap();
        assert_eq!(ada.balance(), 200);
        assert!(matches!(
            ada.add_balance(-5),
            Err(GameError::InvalidArgument(_))
        ));
        assert_eq!(ada.balance(), 200);
    }

    #[test]
    fn test_has_sufficient_funds() {
        let ada = player(10);
        assert!(ada.has_sufficient_funds(10));
        assert!(!ada.has_sufficient_funds(11));
        assert!(!ada.has_sufficient_funds(-1));
    }

    #[test]
    fn test_net_worth_unchanged_by_purchase() {
        let (registry, park, rail) = registry();
        let mut ada = player(1500);
        assert_eq!(ada.net_worth(&registry), 1500);

        ada.purchase(registry.get(park).unwrap()).unwrap();
        ada.purchase(registry.get(rail).unwrap()).unwrap();
        assert_eq!(ada.balance(), 950);
        assert_eq!(ada.net_worth(&registry), 1500);
    }

    #[test]
    fn test_release_all() {
        let (registry, park, rail) = registry();
        let mut ada = player(1500);
        ada.purchase(registry.get(rail).unwrap()).unwrap();
        ada.purchase(registry.get(park).unwrap()).unwrap();

        assert_eq!(ada.release_all(), vec![park, rail]);
        assert!(ada.holdings().is_empty());
        assert_eq!(ada.balance(), 950);
    }
}
