//! The property economy: assets, owners, upgrades.
//!
//! - `Ownable`: what can be bought, with its price and rent formula
//! - `Owner`: balance and holdings, with solvency-checked debits
//! - `Improvements`: houses and hotel standing on a property
//! - `AssetRegistry`: asset definitions looked up by `AssetId`

pub mod ownable;
pub mod owner;
pub mod registry;
pub mod upgrade;

pub use ownable::{
    percent_of, AssetCategory, AssetId, ColorGroup, Ownable, Property, Railroad, Utility,
};
pub use owner::Owner;
pub use registry::AssetRegistry;
pub use upgrade::{Improvements, Upgrade, UpgradeKind};
