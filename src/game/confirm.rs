//! Purchase and upgrade decisions.
//!
//! The engine asks a [`ConfirmationProvider`] synchronously whenever a
//! player may buy an asset or build on one. The answer is final for the
//! current turn.

use crate::core::PlayerId;
use crate::economy::{AssetCategory, AssetId, UpgradeKind};

/// Everything a host needs to render a purchase or upgrade prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prompt<'a> {
    pub player: PlayerId,
    pub player_name: &'a str,
    pub balance: i64,
    pub asset: AssetId,
    pub asset_name: &'a str,
    pub category: AssetCategory,
    /// Amount due on acceptance.
    pub price: i64,
    /// `Some` for an upgrade offer, `None` for buying the asset itself.
    pub upgrade: Option<UpgradeKind>,
}

impl Prompt<'_> {
    #[must_use]
    pub fn is_upgrade(&self) -> bool {
        self.upgrade.is_some()
    }
}

impl std::fmt::Display for Prompt<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.upgrade {
            Some(kind) => write!(
                f,
                "{}: build a {} on {} for ${}?",
                self.player_name, kind, self.asset_name, self.price
            ),
            None => write!(
                f,
                "{}: buy {} ({}) for ${}?",
                self.player_name, self.asset_name, self.category, self.price
            ),
        }
    }
}

/// Answers purchase and upgrade prompts.
pub trait ConfirmationProvider {
    fn confirm(&mut self, prompt: &Prompt<'_>) -> bool;
}

impl<F: FnMut(&Prompt<'_>) -> bool> ConfirmationProvider for F {
    fn confirm(&mut self, prompt: &Prompt<'_>) -> bool {
        self(prompt)
    }
}

/// Gives the same answer to every prompt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AutoConfirm {
    #[default]
    Accept,
    Decline,
}

impl ConfirmationProvider for AutoConfirm {
    fn confirm(&mut self, _prompt: &Prompt<'_>) -> bool {
        matches!(self, AutoConfirm::Accept)
    }
}
