//! Turn order over the still-active players.
//!
//! `TurnManager` is a plain index into a `Vec<PlayerId>`. Removing a player
//! repairs the index explicitly so that the cursor always names an active
//! player and nobody is skipped or visited twice within a round.
//!
//! ```
//! use rust_boardgame::core::{PlayerId, TurnManager};
//!
//! let mut turns = TurnManager::new(PlayerId::all(3)).unwrap();
//! assert_eq!(turns.current().unwrap(), PlayerId::new(0));
//!
//! turns.advance().unwrap();
//! turns.advance().unwrap();
//! assert_eq!(turns.round(), 1);
//!
//! // Wrapping back to the first seat starts round 2
//! assert_eq!(turns.advance().unwrap(), PlayerId::new(0));
//! assert_eq!(turns.round(), 2);
//! ```

use super::error::{GameError, Result};
use super::player::PlayerId;

/// Cyclic turn order with round counting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnManager {
    order: Vec<PlayerId>,
    cursor: usize,
    round: u32,
    /// The player under the cursor was removed and the cursor already
    /// names their successor, so the next `advance` must not move it.
    successor_pending: bool,
}

impl TurnManager {
    /// Start round 1 with the first player in `players` to act.
    ///
    /// Fails with `InvalidArgument` on an empty list or duplicate ids.
    pub fn new(players: impl IntoIterator<Item = PlayerId>) -> Result<Self> {
        let order: Vec<PlayerId> = players.into_iter().collect();
        if order.is_empty() {
            return Err(GameError::invalid_argument("turn order needs at least 1 player"));
        }
        for (i, player) in order.iter().enumerate() {
            if order[..i].contains(player) {
                return Err(GameError::invalid_argument(format!(
                    "{player} appears twice in turn order"
                )));
            }
        }

        Ok(Self {
            order,
            cursor: 0,
            round: 1,
            successor_pending: false,
        })
    }

    /// Current round, starting at 1.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Players still in the game, in seating order.
    #[must_use]
    pub fn active(&self) -> &[PlayerId] {
        &self.order
    }

    /// Number of active players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether every player has been removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether `player` is still active.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        self.order.contains(&player)
    }

    /// The player whose turn it is.
    pub fn current(&self) -> Result<PlayerId> {
        self.order
            .get(self.cursor)
            .copied()
            .ok_or_else(|| GameError::no_such_element("turn order is empty"))
    }

    /// Pass the turn to the next active player and return them.
    ///
    /// Wrapping from the last seat to the first increments the round.
    pub fn advance(&mut self) -> Result<PlayerId> {
        if self.order.is_empty() {
            return Err(GameError::no_such_element("turn order is empty"));
        }

        if self.successor_pending {
            self.successor_pending = false;
        } else {
            self.cursor += 1;
            if self.cursor == self.order.len() {
                self.cursor = 0;
                self.round += 1;
            }
        }

        self.current()
    }

    /// Remove an eliminated player.
    ///
    /// If they hold the turn, the cursor moves to the next remaining player,
    /// who will act after the following `advance`.
    pub fn remove(&mut self, player: PlayerId) -> Result<()> {
        if self.order.is_empty() {
            return Err(GameError::no_such_element("turn order is empty"));
        }
        let index = self
            .order
            .iter()
            .position(|&p| p == player)
            .ok_or_else(|| GameError::no_such_element(format!("{player} is not active")))?;

        self.order.remove(index);

        if self.order.is_empty() {
            self.cursor = 0;
            self.successor_pending = false;
            return Ok(());
        }

        if index < self.cursor {
            self.cursor -= 1;
        } else if index == self.cursor {
            self.successor_pending = true;
            if self.cursor == self.order.len() {
                // The last seat of the round left; its successor opens the next round.
                self.cursor = 0;
                self.round += 1;
            }
        }

        Ok(())
    }
}
