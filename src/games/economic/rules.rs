//! Economic rule set implementation.

use tracing::{debug, info};

use crate::board::{build_board, classic_board, Board, Tile, TileDescriptor};
use crate::core::{EconomyConfig, GameError, Player, PlayerId, Result};
use crate::economy::{AssetId, AssetRegistry, Owner, Upgrade, UpgradeKind};
use crate::game::{GameEvent, Prompt};
use crate::rules::{
    resolve, Effect, LandingContext, LandingOutcome, Movement, RuleSet, TurnContext,
};

/// Property-trading rules on a ring board.
#[derive(Clone, Debug)]
pub struct EconomicRules {
    board: Board,
    assets: AssetRegistry,
    config: EconomyConfig,
}

/// Current owner of `asset` among `players`.
#[must_use]
pub fn owner_of(players: &[Player], asset: AssetId) -> Option<PlayerId> {
    players
        .iter()
        .find(|p| p.is_owner_of(asset))
        .map(Player::id)
}

impl EconomicRules {
    /// Combine a board with the registry its tiles refer to.
    ///
    /// Fails with `InvalidArgument` for a negative config amount and
    /// `NoSuchElement` when a tile names an unregistered asset.
    pub fn new(board: Board, assets: AssetRegistry, config: EconomyConfig) -> Result<Self> {
        config.validate()?;
        for (position, tile) in board.tiles().iter().enumerate() {
            if let Tile::Ownable(id) = tile {
                if !assets.contains(*id) {
                    return Err(GameError::no_such_element(format!(
                        "tile {position} refers to unregistered {id}"
                    )));
                }
            }
        }

        Ok(Self {
            board,
            assets,
            config,
        })
    }

    /// Build the board from factory descriptors.
    pub fn from_descriptors(descriptors: &[TileDescriptor], config: EconomyConfig) -> Result<Self> {
        let (board, assets) = build_board(descriptors)?;
        Self::new(board, assets, config)
    }

    /// The standard 40-tile board with `config`.
    pub fn classic(config: EconomyConfig) -> Result<Self> {
        let (board, assets) = classic_board()?;
        Self::new(board, assets, config)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn assets(&self) -> &AssetRegistry {
        &self.assets
    }

    #[must_use]
    pub fn config(&self) -> &EconomyConfig {
        &self.config
    }

    /// Map the landed tile to its effect.
    pub fn effect_for(&self, players: &[Player], current: PlayerId) -> Result<Effect> {
        let acting = &players[current.index()];
        let tile = self.board.tile_at(acting.position())?;
        let lookup = |asset: AssetId| owner_of(players, asset);
        let context = LandingContext {
            board: &self.board,
            registry: &self.assets,
            config: &self.config,
            owner_of: &lookup,
        };
        resolve(tile, acting, &context)
    }

    /// Apply `effect` to the acting player.
    pub fn apply(&mut self, effect: Effect, ctx: &mut TurnContext<'_>) -> Result<LandingOutcome> {
        match effect {
            Effect::NoOp => Ok(LandingOutcome::Continue),
            Effect::PayTax(amount) => self.pay_tax(amount, ctx),
            Effect::OfferPurchase(asset) => self.offer_purchase(asset, ctx),
            Effect::OfferUpgrade { asset, kind, cost } => self.offer_upgrade(asset, kind, cost, ctx),
            Effect::PayRent { to, asset, amount } => Self::pay_rent(to, asset, amount, ctx),
            Effect::SendToJail { jail_position } => {
                let turns = self.config.jail_sentence;
                let player = ctx.player_mut();
                player.set_position(jail_position);
                player.imprison(turns);
                info!(player = %ctx.current, turns, "sent to jail");
                ctx.announce(GameEvent::SentToJail {
                    player: ctx.current,
                    turns,
                });
                Ok(LandingOutcome::Continue)
            }
        }
    }

    fn pay_tax(&self, amount: i64, ctx: &mut TurnContext<'_>) -> Result<LandingOutcome> {
        match ctx.player_mut().pay(amount) {
            Ok(()) => {
                debug!(player = %ctx.current, amount, "tax paid");
                ctx.announce(GameEvent::TaxPaid {
                    player: ctx.current,
                    amount,
                });
                Ok(LandingOutcome::Continue)
            }
            Err(err) if err.is_insufficient_funds() => Ok(LandingOutcome::Bankrupt),
            Err(err) => Err(err),
        }
    }

    fn pay_rent(
        to: PlayerId,
        asset: AssetId,
        amount: i64,
        ctx: &mut TurnContext<'_>,
    ) -> Result<LandingOutcome> {
        let from = ctx.current;
        match ctx.player_mut().pay(amount) {
            Ok(()) => {}
            Err(err) if err.is_insufficient_funds() => {
                info!(player = %from, creditor = %to, amount, "cannot pay rent");
                return Ok(LandingOutcome::Bankrupt);
            }
            Err(err) => return Err(err),
        }

        ctx.players[to.index()].add_balance(amount)?;
        debug!(%from, %to, amount, "rent paid");
        ctx.announce(GameEvent::RentPaid {
            from,
            to,
            asset,
            amount,
        });
        Ok(LandingOutcome::Continue)
    }

    fn offer_purchase(&mut self, asset: AssetId, ctx: &mut TurnContext<'_>) -> Result<LandingOutcome> {
        let ownable = self.assets.get(asset)?;
        let acting = &ctx.players[ctx.current.index()];
        let prompt = Prompt {
            player: ctx.current,
            player_name: acting.name(),
            balance: acting.balance(),
            asset,
            asset_name: ownable.name(),
            category: ownable.category(),
            price: ownable.price(),
            upgrade: None,
        };
        if !ctx.confirm.confirm(&prompt) {
            debug!(player = %ctx.current, asset = ownable.name(), "purchase declined");
            return Ok(LandingOutcome::Continue);
        }

        match ctx.player_mut().purchase(ownable) {
            Ok(()) => {
                info!(player = %ctx.current, asset = ownable.name(), price = ownable.price(), "purchased");
                ctx.announce(GameEvent::Purchased {
                    player: ctx.current,
                    asset,
                });
            }
            Err(err) if err.is_insufficient_funds() => {
                let text = format!("{} cannot afford {}", ctx.player().name(), ownable.name());
                ctx.announce(GameEvent::output(text));
            }
            Err(err) => return Err(err),
        }
        Ok(LandingOutcome::Continue)
    }

    fn offer_upgrade(
        &mut self,
        asset: AssetId,
        kind: UpgradeKind,
        cost: i64,
        ctx: &mut TurnContext<'_>,
    ) -> Result<LandingOutcome> {
        let ownable = self.assets.get(asset)?;
        let acting = &ctx.players[ctx.current.index()];
        let prompt = Prompt {
            player: ctx.current,
            player_name: acting.name(),
            balance: acting.balance(),
            asset,
            asset_name: ownable.name(),
            category: ownable.category(),
            price: cost,
            upgrade: Some(kind),
        };
        if !ctx.confirm.confirm(&prompt) {
            return Ok(LandingOutcome::Continue);
        }

        if let Err(err) = ctx.player().check_funds(cost) {
            if err.is_insufficient_funds() {
                let text = format!("{} cannot afford a {} on {}", ctx.player().name(), kind, ownable.name());
                ctx.announce(GameEvent::output(text));
                return Ok(LandingOutcome::Continue);
            }
            return Err(err);
        }

        self.assets
            .upgrade(asset, Upgrade::configured(kind, &self.config), &self.config)?;
        ctx.player_mut().pay(cost)?;
        info!(player = %ctx.current, %asset, %kind, cost, "upgrade built");
        ctx.announce(GameEvent::UpgradePurchased {
            player: ctx.current,
            asset,
            kind,
        });
        Ok(LandingOutcome::Continue)
    }
}

impl RuleSet for EconomicRules {
    fn name(&self) -> &'static str {
        "economic"
    }

    fn starting_balance(&self) -> i64 {
        self.config.starting_balance
    }

    fn surface_len(&self) -> usize {
        self.board.len()
    }

    /// Passing start means wrapping to a lower index. A roll of a full lap
    /// that lands back on the same tile earns nothing.
    fn movement(&self, from: usize, steps: usize) -> Result<Movement> {
        let to = self.board.position_after_steps(from, steps)?;
        Ok(Movement {
            to,
            passed_start: to < from,
        })
    }

    fn pass_start(&mut self, ctx: &mut TurnContext<'_>) -> Result<()> {
        let bonus = self.config.pass_start_bonus;
        ctx.player_mut().add_balance(bonus)?;
        debug!(player = %ctx.current, bonus, "passed start");
        ctx.announce(GameEvent::PassedStart {
            player: ctx.current,
            bonus,
        });
        Ok(())
    }

    fn land(&mut self, ctx: &mut TurnContext<'_>) -> Result<LandingOutcome> {
        let effect = self.effect_for(ctx.players, ctx.current)?;
        debug!(player = %ctx.current, ?effect, "tile resolved");
        self.apply(effect, ctx)
    }

    /// Holdings go back to the bank with their buildings torn down.
    fn eliminate(&mut self, player: &mut Player) {
        for asset in player.release_all() {
            self.assets.demolish(asset);
        }
    }

    fn score(&self, player: &Player) -> i64 {
        player.net_worth(&self.assets)
    }

    fn is_over(&self, _players: &[Player], active: &[PlayerId]) -> bool {
        active.len() <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardCorner, CornerKind};
    use crate::core::PlayerProfile;
    use crate::economy::ColorGroup;
    use crate::game::{AutoConfirm, ConfirmationProvider};

    fn seat(balances: &[i64]) -> Vec<Player> {
        balances
            .iter()
            .enumerate()
            .map(|(i, &b)| {
                Player::new(PlayerId(i as u8), PlayerProfile::new(format!("P{i}"), "hat"), b).unwrap()
            })
            .collect()
    }

    /// 8 tiles: start, Park Place, jail, tax 20%, parking, railroad, go-to-jail, utility.
    fn small_rules() -> EconomicRules {
        let descriptors = vec![
            TileDescriptor::corner(CornerKind::Start, BoardCorner::BottomRight),
            TileDescriptor::property("Park Place", ColorGroup::DarkBlue, 350),
            TileDescriptor::corner(CornerKind::Jail, BoardCorner::BottomLeft),
            TileDescriptor::tax(20),
            TileDescriptor::corner(CornerKind::FreeParking, BoardCorner::TopLeft),
            TileDescriptor::railroad("Short Line", 200),
            TileDescriptor::corner(CornerKind::GoToJail, BoardCorner::TopRight),
            TileDescriptor::utility("Water Works", 150),
        ];
        EconomicRules::from_descriptors(&descriptors, EconomyConfig::default()).unwrap()
    }

    fn land_at(
        rules: &mut EconomicRules,
        players: &mut [Player],
        current: PlayerId,
        position: usize,
        confirm: &mut dyn ConfirmationProvider,
    ) -> (LandingOutcome, Vec<GameEvent>) {
        let mut events: Vec<GameEvent> = Vec::new();
        players[current.index()].set_position(position);
        let outcome = {
            let mut ctx = TurnContext {
                players,
                current,
                confirm,
                events: &mut events,
            };
            rules.land(&mut ctx).unwrap()
        };
        (outcome, events)
    }

    #[test]
    fn test_rejects_unregistered_tile() {
        let (board, _) = classic_board().unwrap();
        let err = EconomicRules::new(board, AssetRegistry::new(), EconomyConfig::default());
        assert!(matches!(err, Err(GameError::NoSuchElement(_))));
    }

    #[test]
    fn test_movement_flags_passing_start() {
        let rules = small_rules();
        assert_eq!(
            rules.movement(5, 2).unwrap(),
            Movement {
                to: 7,
                passed_start: false
            }
        );
        assert_eq!(
            rules.movement(6, 4).unwrap(),
            Movement {
                to: 2,
                passed_start: true
            }
        );
        assert!(rules.movement(7, 1).unwrap().passed_start);
    }

    #[test]
    fn test_full_lap_roll_earns_no_bonus() {
        let rules = small_rules();
        assert_eq!(
            rules.movement(3, 8).unwrap(),
            Movement {
                to: 3,
                passed_start: false
            }
        );
        assert!(!rules.movement(0, 8).unwrap().passed_start);
        assert!(rules.movement(5, 12).unwrap().passed_start);
    }

    #[test]
    fn test_accept_purchase() {
        let mut rules = small_rules();
        let mut players = seat(&[1500, 1500]);

        let (outcome, events) =
            land_at(&mut rules, &mut players, PlayerId(0), 1, &mut AutoConfirm::Accept);

        assert_eq!(outcome, LandingOutcome::Continue);
        assert_eq!(players[0].balance(), 1150);
        assert_eq!(owner_of(&players, AssetId(0)), Some(PlayerId(0)));
        assert_eq!(
            events,
            vec![GameEvent::Purchased {
                player: PlayerId(0),
                asset: AssetId(0)
            }]
        );
    }

    #[test]
    fn test_decline_and_unaffordable_purchase() {
        let mut rules = small_rules();
        let mut players = seat(&[1500, 100]);

        let (_, events) =
            land_at(&mut rules, &mut players, PlayerId(0), 1, &mut AutoConfirm::Decline);
        assert!(events.is_empty());
        assert_eq!(players[0].balance(), 1500);

        let (outcome, events) =
            land_at(&mut rules, &mut players, PlayerId(1), 1, &mut AutoConfirm::Accept);
        assert_eq!(outcome, LandingOutcome::Continue);
        assert_eq!(players[1].balance(), 100);
        assert_eq!(owner_of(&players, AssetId(0)), None);
        assert!(matches!(&events[..], [GameEvent::Output { .. }]));
    }

    #[test]
    fn test_rent_transfers_to_owner() {
        let mut rules = small_rules();
        let mut players = seat(&[1500, 1500]);
        land_at(&mut rules, &mut players, PlayerId(0), 1, &mut AutoConfirm::Accept);

        let (outcome, events) =
            land_at(&mut rules, &mut players, PlayerId(1), 1, &mut AutoConfirm::Accept);
        assert_eq!(outcome, LandingOutcome::Continue);
        assert_eq!(players[1].balance(), 1500 - 245);
        assert_eq!(players[0].balance(), 1150 + 245);
        assert!(matches!(
            events[0],
            GameEvent::RentPaid { amount: 245, .. }
        ));
    }

    #[test]
    fn test_unpaid_rent_is_bankruptcy() {
        let mut rules = small_rules();
        let mut players = seat(&[1500, 5]);
        land_at(&mut rules, &mut players, PlayerId(0), 5, &mut AutoConfirm::Accept);
        let creditor_balance = players[0].balance();

        let (outcome, events) =
            land_at(&mut rules, &mut players, PlayerId(1), 5, &mut AutoConfirm::Accept);
        assert_eq!(outcome, LandingOutcome::Bankrupt);
        assert_eq!(players[1].balance(), 5);
        assert_eq!(players[0].balance(), creditor_balance);
        assert!(events.is_empty());
    }

    #[test]
    fn test_upgrade_offer_on_own_property() {
        let mut rules = small_rules();
        let mut players = seat(&[1500]);
        land_at(&mut rules, &mut players, PlayerId(0), 1, &mut AutoConfirm::Accept);

        let (_, events) = land_at(&mut rules, &mut players, PlayerId(0), 1, &mut AutoConfirm::Accept);
        assert_eq!(
            events,
            vec![GameEvent::UpgradePurchased {
                player: PlayerId(0),
                asset: AssetId(0),
                kind: UpgradeKind::House
            }]
        );
        assert_eq!(players[0].balance(), 1150 - 50);
        assert_eq!(rules.assets().improvements(AssetId(0)).houses(), 1);
        assert_eq!(rules.assets().rent(AssetId(0), rules.config()).unwrap(), 306);
    }

    #[test]
    fn test_tax_and_jail() {
        let mut rules = small_rules();
        let mut players = seat(&[50]);

        let (_, events) = land_at(&mut rules, &mut players, PlayerId(0), 3, &mut AutoConfirm::Accept);
        assert_eq!(players[0].balance(), 40);
        assert_eq!(
            events,
            vec![GameEvent::TaxPaid {
                player: PlayerId(0),
                amount: 10
            }]
        );

        let (_, events) = land_at(&mut rules, &mut players, PlayerId(0), 6, &mut AutoConfirm::Accept);
        assert_eq!(players[0].position(), 2);
        assert_eq!(players[0].jail_turns(), 2);
        assert_eq!(
            events,
            vec![GameEvent::SentToJail {
                player: PlayerId(0),
                turns: 2
            }]
        );
    }

    #[test]
    fn test_eliminate_returns_assets_to_bank() {
        let mut rules = small_rules();
        let mut players = seat(&[1500]);
        land_at(&mut rules, &mut players, PlayerId(0), 1, &mut AutoConfirm::Accept);
        land_at(&mut rules, &mut players, PlayerId(0), 1, &mut AutoConfirm::Accept);

        rules.eliminate(&mut players[0]);
        assert_eq!(owner_of(&players, AssetId(0)), None);
        assert_eq!(rules.assets().improvements(AssetId(0)).houses(), 0);
    }

    #[test]
    fn test_score_is_net_worth() {
        let mut rules = small_rules();
        let mut players = seat(&[1500, 1500]);
        land_at(&mut rules, &mut players, PlayerId(0), 5, &mut AutoConfirm::Accept);

        assert_eq!(rules.score(&players[0]), 1500);
        assert!(!rules.is_over(&players, &[PlayerId(0), PlayerId(1)]));
        assert!(rules.is_over(&players, &[PlayerId(1)]));
    }
}
