//! Asset registry for definition lookup.
//!
//! The `AssetRegistry` stores every purchasable asset of a board. Asset
//! definitions never change after registration; the buildings standing on
//! each property are tracked alongside them as `Improvements`.

use rustc_hash::FxHashMap;

use super::ownable::{AssetId, ColorGroup, Ownable, Property, Railroad, Utility};
use super::upgrade::{Improvements, Upgrade};
use crate::core::{EconomyConfig, GameError, Result};

/// Registry of asset definitions plus per-asset improvements.
///
/// ## Example
///
/// ```
/// use rust_boardgame::economy::{AssetRegistry, ColorGroup};
///
/// let mut registry = AssetRegistry::new();
/// let park = registry.add_property("Park Place", ColorGroup::DarkBlue, 350).unwrap();
///
/// assert_eq!(registry.get(park).unwrap().price(), 350);
/// ```
#[derive(Clone, Debug, Default)]
pub struct AssetRegistry {
    assets: Vec<Ownable>,
    improvements: FxHashMap<AssetId, Improvements>,
}

impl AssetRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> Result<AssetId> {
        u16::try_from(self.assets.len())
            .map(AssetId)
            .map_err(|_| GameError::invalid_argument("too many assets for one registry"))
    }

    fn register(&mut self, asset: Ownable) -> Result<AssetId> {
        asset.validate()?;
        let id = asset.id();
        self.assets.push(asset);
        Ok(id)
    }

    /// Register a property and return its id.
    pub fn add_property(
        &mut self,
        name: impl Into<String>,
        color: ColorGroup,
        price: i64,
    ) -> Result<AssetId> {
        let id = self.next_id()?;
        self.register(Ownable::Property(Property {
            id,
            name: name.into(),
            color,
            price,
        }))
    }

    /// Register a railroad and return its id.
    pub fn add_railroad(&mut self, name: impl Into<String>, price: i64) -> Result<AssetId> {
        let id = self.next_id()?;
        self.register(Ownable::Railroad(Railroad {
            id,
            name: name.into(),
            price,
        }))
    }

    /// Register a utility and return its id.
    pub fn add_utility(&mut self, name: impl Into<String>, price: i64) -> Result<AssetId> {
        let id = self.next_id()?;
        self.register(Ownable::Utility(Utility {
            id,
            name: name.into(),
            price,
        }))
    }

    /// Get an asset definition by id.
    pub fn get(&self, id: AssetId) -> Result<&Ownable> {
        self.assets
            .get(id.index())
            .ok_or_else(|| GameError::no_such_element(format!("{id} is not registered")))
    }

    /// Check if an asset id is registered.
    #[must_use]
    pub fn contains(&self, id: AssetId) -> bool {
        id.index() < self.assets.len()
    }

    /// Buildings standing on an asset (empty for anything never built on).
    #[must_use]
    pub fn improvements(&self, id: AssetId) -> Improvements {
        self.improvements.get(&id).cloned().unwrap_or_default()
    }

    /// Rent currently owed by a visitor of `id`.
    pub fn rent(&self, id: AssetId, config: &EconomyConfig) -> Result<i64> {
        let asset = self.get(id)?;
        let rent = match self.improvements.get(&id) {
            Some(improvements) => asset.rent(improvements, config),
            None => asset.rent(&Improvements::default(), config),
        };
        Ok(rent)
    }

    /// Build `upgrade` on `id`.
    ///
    /// Fails with `UnsupportedOperation` for non-properties or an illegal
    /// next building, `NoSuchElement` for unknown ids.
    pub fn upgrade(&mut self, id: AssetId, upgrade: Upgrade, config: &EconomyConfig) -> Result<()> {
        let asset = self.get(id)?;
        if !asset.is_upgradable() {
            return Err(GameError::unsupported(format!(
                "{} is a {} and cannot be upgraded",
                asset.name(),
                asset.category()
            )));
        }
        self.improvements
            .entry(id)
            .or_default()
            .apply(upgrade, config.houses_before_hotel)
    }

    /// Tear down every building on `id`.
    pub fn demolish(&mut self, id: AssetId) {
        self.improvements.remove(&id);
    }

    /// Get the number of registered assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Iterate over all asset definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Ownable> {
        self.assets.iter()
    }

    /// Find an asset by exact name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Ownable> {
        self.assets.iter().find(|a| a.name() == name)
    }
}
