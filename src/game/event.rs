//! Notifications for the presentation layer.
//!
//! The engine announces every observable state change as a [`GameEvent`]
//! through an [`EventSink`]. Announcing is fire-and-forget; a sink must not
//! reach back into the game from its handler.
//!
//! ## Provided sinks
//!
//! - `Vec<GameEvent>` records everything, handy for tests and replays
//! - any `FnMut(GameEvent)` closure
//! - [`NullSink`] drops everything

use serde::{Deserialize, Serialize};

use crate::core::{DiceRoll, PlayerId};
use crate::economy::{AssetId, UpgradeKind};

/// Something that happened during play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// A figure ended its turn on `position`.
    PlayerMoved { player: PlayerId, position: usize },

    DiceRolled { player: PlayerId, roll: DiceRoll },

    Purchased { player: PlayerId, asset: AssetId },

    UpgradePurchased {
        player: PlayerId,
        asset: AssetId,
        kind: UpgradeKind,
    },

    /// The player went bankrupt and left the turn order.
    PlayerEliminated { player: PlayerId },

    /// Free-text message for the host to show.
    Output { text: String },

    RentPaid {
        from: PlayerId,
        to: PlayerId,
        asset: AssetId,
        amount: i64,
    },

    TaxPaid { player: PlayerId, amount: i64 },

    PassedStart { player: PlayerId, bonus: i64 },

    SentToJail { player: PlayerId, turns: u32 },

    GameEnded { winners: Vec<PlayerId> },
}

impl GameEvent {
    /// Shorthand for an [`GameEvent::Output`] message.
    pub fn output(text: impl Into<String>) -> Self {
        GameEvent::Output { text: text.into() }
    }

    /// The player this event is about, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::PlayerMoved { player, .. }
            | GameEvent::DiceRolled { player, .. }
            | GameEvent::Purchased { player, .. }
            | GameEvent::UpgradePurchased { player, .. }
            | GameEvent::PlayerEliminated { player }
            | GameEvent::TaxPaid { player, .. }
            | GameEvent::PassedStart { player, .. }
            | GameEvent::SentToJail { player, .. } => Some(*player),
            GameEvent::RentPaid { from, .. } => Some(*from),
            GameEvent::Output { .. } | GameEvent::GameEnded { .. } => None,
        }
    }
}

/// Receiver of game notifications.
pub trait EventSink {
    fn announce(&mut self, event: GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn announce(&mut self, event: GameEvent) {
        self.push(event);
    }
}

impl<F: FnMut(GameEvent)> EventSink for F {
    fn announce(&mut self, event: GameEvent) {
        self(event);
    }
}

/// Sink that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn announce(&mut self, _event: GameEvent) {}
}
