//! Rule-set trait for game variants.
//!
//! The shared orchestrator drives the turn: it rolls, moves, and manages
//! turn order and elimination. Rule sets implement `RuleSet` to define:
//! - How far a roll moves a figure, and whether it passed the start
//! - What landing on a cell does
//! - When the game is over and how players are scored

use crate::core::{Player, PlayerId, Result};
use crate::game::{ConfirmationProvider, EventSink, GameEvent};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Tied top score.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// `None` when nobody is left to win.
    #[must_use]
    pub fn from_winners(mut winners: Vec<PlayerId>) -> Option<Self> {
        match winners.len() {
            0 => None,
            1 => winners.pop().map(GameResult::Winner),
            _ => Some(GameResult::Winners(winners)),
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }
}

/// Where a roll takes a figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Movement {
    pub to: usize,
    /// The move crossed or reached the start cell.
    pub passed_start: bool,
}

/// What happened after resolving the landed cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LandingOutcome {
    Continue,
    /// The player could not pay a mandatory debit.
    Bankrupt,
    /// The player reached the goal and the game is over.
    Finished,
}

/// Mutable view of a turn in progress, handed to the rule set.
pub struct TurnContext<'a> {
    pub players: &'a mut [Player],
    pub current: PlayerId,
    pub confirm: &'a mut dyn ConfirmationProvider,
    pub events: &'a mut dyn EventSink,
}

impl TurnContext<'_> {
    /// The acting player.
    ///
    /// # Panics
    ///
    /// If `current` was not issued for this game.
    #[must_use]
    pub fn player(&self) -> &Player {
        &self.players[self.current.index()]
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.players[self.current.index()]
    }

    pub fn announce(&mut self, event: GameEvent) {
        self.events.announce(event);
    }
}

/// Rule-set trait.
///
/// ## Implementation Notes
///
/// - `movement` must not mutate anything; the orchestrator repositions
/// - `land` sees the player already on the new cell
/// - `is_over` is checked after every turn
pub trait RuleSet {
    /// Human-readable variant name, used in logs.
    fn name(&self) -> &'static str;

    /// Balance every seated player starts with.
    fn starting_balance(&self) -> i64 {
        0
    }

    /// Number of cells a figure can stand on.
    fn surface_len(&self) -> usize;

    /// Compute the destination of a roll of `steps` from `from`.
    fn movement(&self, from: usize, steps: usize) -> Result<Movement>;

    /// Called when a move passed the start cell.
    fn pass_start(&mut self, _ctx: &mut TurnContext<'_>) -> Result<()> {
        Ok(())
    }

    /// Apply the effect of the cell the acting player landed on.
    fn land(&mut self, ctx: &mut TurnContext<'_>) -> Result<LandingOutcome>;

    /// Clean up after a bankrupt player leaves the game.
    fn eliminate(&mut self, _player: &mut Player) {}

    /// Score used to rank players when the game ends. Higher is better.
    fn score(&self, player: &Player) -> i64;

    /// Check if the game is over given the still-active players.
    fn is_over(&self, players: &[Player], active: &[PlayerId]) -> bool;

    /// The highest-scoring group among `active`, in seating order.
    fn winners(&self, players: &[Player], active: &[PlayerId]) -> Vec<PlayerId> {
        let scored: Vec<(PlayerId, i64)> = active
            .iter()
            .map(|&id| (id, self.score(&players[id.index()])))
            .collect();

        let Some(best) = scored.iter().map(|&(_, score)| score).max() else {
            return Vec::new();
        };
        scored
            .into_iter()
            .filter(|&(_, score)| score == best)
            .map(|(id, _)| id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerProfile;
    use crate::economy::Owner;

    struct BalanceScore;

    impl RuleSet for BalanceScore {
        fn name(&self) -> &'static str {
            "balance"
        }

        fn surface_len(&self) -> usize {
            1
        }

        fn movement(&self, from: usize, _steps: usize) -> Result<Movement> {
            Ok(Movement {
                to: from,
                passed_start: false,
            })
        }

        fn land(&mut self, _ctx: &mut TurnContext<'_>) -> Result<LandingOutcome> {
            Ok(LandingOutcome::Continue)
        }

        fn score(&self, player: &Player) -> i64 {
            player.balance()
        }

        fn is_over(&self, _players: &[Player], active: &[PlayerId]) -> bool {
            active.len() <= 1
        }
    }

    fn players(balances: &[i64]) -> Vec<Player> {
        balances
            .iter()
            .enumerate()
            .map(|(i, &b)| {
                Player::new(PlayerId(i as u8), PlayerProfile::new("P", "hat"), b).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::new(1));
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));

        let tie = GameResult::Winners(vec![PlayerId::new(0), PlayerId::new(2)]);
        assert!(tie.is_winner(PlayerId::new(0)));
        assert!(!tie.is_winner(PlayerId::new(1)));
        assert!(tie.is_winner(PlayerId::new(2)));
    }

    #[test]
    fn test_from_winners() {
        assert_eq!(GameResult::from_winners(vec![]), None);
        assert_eq!(
            GameResult::from_winners(vec![PlayerId(3)]),
            Some(GameResult::Winner(PlayerId(3)))
        );
        assert_eq!(
            GameResult::from_winners(vec![PlayerId(0), PlayerId(1)]),
            Some(GameResult::Winners(vec![PlayerId(0), PlayerId(1)]))
        );
    }

    #[test]
    fn test_winners_groups_top_score() {
        let players = players(&[300, 500, 500, 100]);
        let all: Vec<_> = PlayerId::all(4).collect();

        assert_eq!(
            BalanceScore.winners(&players, &all),
            vec![PlayerId(1), PlayerId(2)]
        );

        // Only active players are ranked
        assert_eq!(
            BalanceScore.winners(&players, &[PlayerId(0), PlayerId(3)]),
            vec![PlayerId(0)]
        );
        assert!(BalanceScore.winners(&players, &[]).is_empty());
    }
}
