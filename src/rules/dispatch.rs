//! Tile landing resolution for the economic game.
//!
//! [`resolve`] is pure: it inspects the landed tile and reports the
//! [`Effect`] it has on the acting player without touching any state. The
//! economic rule set then applies the effect, asking for confirmation and
//! moving money as needed.

use crate::board::{Board, CornerKind, Tile};
use crate::core::{EconomyConfig, Player, PlayerId, Result};
use crate::economy::{percent_of, AssetId, AssetRegistry, Owner, Upgrade, UpgradeKind};

/// What landing on a tile means for the acting player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    NoOp,
    /// Mandatory debit of `balance * percentage / 100`.
    PayTax(i64),
    /// Unowned asset the player may buy at its price.
    OfferPurchase(AssetId),
    /// Next building on a property the player owns.
    OfferUpgrade {
        asset: AssetId,
        kind: UpgradeKind,
        cost: i64,
    },
    /// Mandatory transfer to the asset's owner.
    PayRent {
        to: PlayerId,
        asset: AssetId,
        amount: i64,
    },
    SendToJail { jail_position: usize },
}

/// Read-only view of the economy needed to resolve a landing.
pub struct LandingContext<'a> {
    pub board: &'a Board,
    pub registry: &'a AssetRegistry,
    pub config: &'a EconomyConfig,
    /// Current owner of an asset, if any.
    pub owner_of: &'a dyn Fn(AssetId) -> Option<PlayerId>,
}

/// Map `tile` to its effect on `acting`.
pub fn resolve(tile: &Tile, acting: &Player, context: &LandingContext<'_>) -> Result<Effect> {
    match *tile {
        Tile::Corner {
            kind: CornerKind::GoToJail,
            ..
        } => Ok(Effect::SendToJail {
            jail_position: context.board.jail_position(),
        }),
        Tile::Corner { .. } => Ok(Effect::NoOp),
        Tile::Tax { percentage } => Ok(Effect::PayTax(percent_of(acting.balance(), percentage))),
        Tile::Ownable(asset) => resolve_asset(asset, acting, context),
    }
}

fn resolve_asset(asset: AssetId, acting: &Player, context: &LandingContext<'_>) -> Result<Effect> {
    let ownable = context.registry.get(asset)?;

    match (context.owner_of)(asset) {
        None => Ok(Effect::OfferPurchase(asset)),
        Some(owner) if owner != acting.id() => Ok(Effect::PayRent {
            to: owner,
            asset,
            amount: context.registry.rent(asset, context.config)?,
        }),
        Some(_) if ownable.is_upgradable() => {
            let next = context
                .registry
                .improvements(asset)
                .next_upgrade(context.config.houses_before_hotel);
            Ok(next.map_or(Effect::NoOp, |kind| Effect::OfferUpgrade {
                asset,
                kind,
                cost: Upgrade::cost(kind, context.config),
            }))
        }
        Some(_) => Ok(Effect::NoOp),
    }
}
