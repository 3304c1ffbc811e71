//! Player identification and per-player state.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 1-255 players. Ids are issued in
//! seating order by [`Player::from_profiles`] and double as indexes into the
//! game's player list, so they stay valid after a player is eliminated.
//!
//! ## Player
//!
//! Identity, display data, board position, and jail sentence. The economic
//! side of a player (balance and owned assets) is manipulated through the
//! [`Owner`](crate::economy::Owner) trait so that balances can only change
//! through solvency-checked operations.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use crate::economy::AssetId;

/// Seat number, starting at `PlayerId(0)` for the first seated player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Index into the game's player list.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Seats `0..player_count` in order, at most 256 of them.
    ///
    /// ```
    /// use rust_boardgame::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats.last(), Some(&PlayerId::new(2)));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..=u8::MAX).take(player_count).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// What the player data provider hands the engine before a game starts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Display name.
    pub name: String,
    /// Chosen figure/token.
    pub figure: String,
}

impl PlayerProfile {
    /// Create a profile.
    pub fn new(name: impl Into<String>, figure: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            figure: figure.into(),
        }
    }
}

/// A seated player.
#[derive(Clone, Debug)]
pub struct Player {
    id: PlayerId,
    name: String,
    figure: String,
    position: usize,
    jail_turns: u32,
    pub(crate) balance: i64,
    pub(crate) holdings: FxHashSet<AssetId>,
}

impl Player {
    /// Create a player at position 0.
    ///
    /// Fails with `InvalidArgument` for an empty name or a negative balance.
    pub fn new(id: PlayerId, profile: PlayerProfile, starting_balance: i64) -> Result<Self> {
        if profile.name.trim().is_empty() {
            return Err(GameError::invalid_argument("player name must not be empty"));
        }
        if starting_balance < 0 {
            return Err(GameError::invalid_argument(format!(
                "starting balance must be non-negative, got {starting_balance}"
            )));
        }

        Ok(Self {
            id,
            name: profile.name,
            figure: profile.figure,
            position: 0,
            jail_turns: 0,
            balance: starting_balance,
            holdings: FxHashSet::default(),
        })
    }

    /// Seat players from provider profiles, issuing ids in order.
    ///
    /// Fails with `InvalidArgument` when the list is empty or too long.
    pub fn from_profiles(profiles: Vec<PlayerProfile>, starting_balance: i64) -> Result<Vec<Self>> {
        if profiles.is_empty() {
            return Err(GameError::invalid_argument("a game needs at least 1 player"));
        }
        if profiles.len() > u8::MAX as usize {
            return Err(GameError::invalid_argument(format!(
                "at most {} players supported, got {}",
                u8::MAX,
                profiles.len()
            )));
        }

        profiles
            .into_iter()
            .enumerate()
            .map(|(i, profile)| Self::new(PlayerId::new(i as u8), profile, starting_balance))
            .collect()
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn figure(&self) -> &str {
        &self.figure
    }

    /// Current board position.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Move the player's figure. Bounds are the board's concern.
    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    /// Remaining turns to sit out in jail.
    #[must_use]
    pub fn jail_turns(&self) -> u32 {
        self.jail_turns
    }

    /// Whether the player is serving a jail sentence.
    #[must_use]
    pub fn in_jail(&self) -> bool {
        self.jail_turns > 0
    }

    /// Start a jail sentence of `turns` turns.
    pub fn imprison(&mut self, turns: u32) {
        self.jail_turns = turns;
    }

    /// Serve one turn of the sentence. Returns the turns still left.
    pub fn serve_jail_turn(&mut self) -> u32 {
        self.jail_turns = self.jail_turns.saturating_sub(1);
        self.jail_turns
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) @{} ${}",
            self.name, self.figure, self.position, self.balance
        )
    }
}
