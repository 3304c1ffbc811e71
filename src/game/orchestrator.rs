//! The shared turn loop.
//!
//! One call to [`Game::next_turn`] runs a full turn for the current player:
//!
//! 1. a jailed player sits the turn out
//! 2. roll the dice
//! 3. move, crediting the start bonus when the move passes the start
//! 4. resolve the landed cell through the rule set
//! 5. eliminate the player on bankruptcy
//! 6. announce the move and the roll
//! 7. end the game or pass the turn on
//!
//! Once the game has ended `next_turn` does nothing.

use tracing::{debug, info};

use super::confirm::{AutoConfirm, ConfirmationProvider};
use super::event::{EventSink, GameEvent};
use crate::core::{
    Dice, GameConfig, GameError, GameRng, Player, PlayerId, PlayerProfile, RandomSource, Result,
    TurnManager,
};
use crate::rules::{GameResult, LandingOutcome, RuleSet, TurnContext};

/// A game in progress.
///
/// `S` receives notifications and `C` answers purchase prompts. A fresh
/// game records events in a `Vec` and accepts every offer; swap them with
/// [`Game::with_sink`] and [`Game::with_confirmation`].
pub struct Game<R, S = Vec<GameEvent>, C = AutoConfirm> {
    rules: R,
    config: GameConfig,
    players: Vec<Player>,
    turns: TurnManager,
    dice: Box<dyn RandomSource>,
    sink: S,
    confirm: C,
    ended: bool,
}

impl<R: RuleSet> Game<R> {
    /// Seat `profiles` in order and start round 1.
    ///
    /// Fails with `InvalidArgument` for an invalid config or player list.
    /// Dice come from a fresh entropy-seeded [`GameRng`] until replaced
    /// with [`Game::with_dice`].
    pub fn new(rules: R, profiles: Vec<PlayerProfile>, config: GameConfig) -> Result<Self> {
        config.validate()?;
        let players = Player::from_profiles(profiles, rules.starting_balance())?;
        let turns = TurnManager::new(players.iter().map(Player::id))?;

        info!(
            rules = rules.name(),
            players = players.len(),
            cells = rules.surface_len(),
            "game created"
        );

        Ok(Self {
            rules,
            config,
            players,
            turns,
            dice: Box::new(GameRng::from_entropy()),
            sink: Vec::new(),
            confirm: AutoConfirm::default(),
            ended: false,
        })
    }
}

impl<R: RuleSet, S: EventSink, C: ConfirmationProvider> Game<R, S, C> {
    /// Replace the notification sink.
    pub fn with_sink<T: EventSink>(self, sink: T) -> Game<R, T, C> {
        Game {
            rules: self.rules,
            config: self.config,
            players: self.players,
            turns: self.turns,
            dice: self.dice,
            sink,
            confirm: self.confirm,
            ended: self.ended,
        }
    }

    /// Replace the confirmation provider.
    pub fn with_confirmation<T: ConfirmationProvider>(self, confirm: T) -> Game<R, S, T> {
        Game {
            rules: self.rules,
            config: self.config,
            players: self.players,
            turns: self.turns,
            dice: self.dice,
            sink: self.sink,
            confirm,
            ended: self.ended,
        }
    }

    /// Replace the dice source.
    #[must_use]
    pub fn with_dice(mut self, dice: impl RandomSource + 'static) -> Self {
        self.dice = Box::new(dice);
        self
    }

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Every seated player, eliminated ones included, indexed by `PlayerId`.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Get a player by id.
    pub fn player(&self, id: PlayerId) -> Result<&Player> {
        self.players
            .get(id.index())
            .ok_or_else(|| GameError::no_such_element(format!("{id} is not seated")))
    }

    /// Mutable access for setting up positions or balances before play.
    pub fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player> {
        self.players
            .get_mut(id.index())
            .ok_or_else(|| GameError::no_such_element(format!("{id} is not seated")))
    }

    #[must_use]
    pub fn turns(&self) -> &TurnManager {
        &self.turns
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> Result<PlayerId> {
        self.turns.current()
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Play one turn of the current player. Does nothing once ended.
    ///
    /// Errors other than a failed mandatory debit abort the turn and are
    /// returned unchanged; the game state is then unspecified.
    pub fn next_turn(&mut self) -> Result<()> {
        if self.ended {
            return Ok(());
        }

        let current = self.turns.current()?;
        let index = current.index();

        if self.players[index].in_jail() {
            let left = self.players[index].serve_jail_turn();
            debug!(player = %current, left, "serving jail turn");
            let text = format!("{} sits in jail ({left} turns left)", self.players[index].name());
            self.sink.announce(GameEvent::output(text));
            self.finish_turn();
            return Ok(());
        }

        let roll = Dice::roll(self.config.dice_count, &mut self.dice)?;
        let from = self.players[index].position();
        let movement = self.rules.movement(from, roll.total())?;
        self.players[index].set_position(movement.to);
        debug!(player = %current, from, to = movement.to, total = roll.total(), "moved");

        let outcome = {
            let mut ctx = TurnContext {
                players: &mut self.players,
                current,
                confirm: &mut self.confirm,
                events: &mut self.sink,
            };
            if movement.passed_start {
                self.rules.pass_start(&mut ctx)?;
            }
            self.rules.land(&mut ctx)?
        };

        if outcome == LandingOutcome::Bankrupt {
            self.rules.eliminate(&mut self.players[index]);
            self.turns.remove(current)?;
            info!(player = %current, "eliminated");
            self.sink
                .announce(GameEvent::PlayerEliminated { player: current });
        }

        self.sink.announce(GameEvent::PlayerMoved {
            player: current,
            position: self.players[index].position(),
        });
        self.sink
            .announce(GameEvent::DiceRolled { player: current, roll });

        if outcome == LandingOutcome::Finished {
            self.end();
        } else {
            self.finish_turn();
        }
        Ok(())
    }

    /// Play turns until the game ends or `max_turns` turns have run.
    /// Returns the number of turns played.
    pub fn run(&mut self, max_turns: usize) -> Result<usize> {
        let mut played = 0;
        while !self.ended && played < max_turns {
            self.next_turn()?;
            played += 1;
        }
        Ok(played)
    }

    /// End the game now, or pass the turn and end it on the round limit.
    fn finish_turn(&mut self) {
        if self.rules.is_over(&self.players, self.turns.active()) {
            self.end();
            return;
        }

        // Not over, so at least one player is still active.
        if self.turns.advance().is_err() {
            self.end();
            return;
        }
        if let Some(limit) = self.config.max_rounds {
            if self.turns.round() > limit {
                debug!(limit, "round limit reached");
                self.end();
            }
        }
    }

    fn end(&mut self) {
        self.ended = true;
        let winners = self.winners();
        info!(rules = self.rules.name(), ?winners, "game ended");
        self.sink.announce(GameEvent::GameEnded { winners });
    }

    /// The top-scoring group among the players still in the game.
    #[must_use]
    pub fn winners(&self) -> Vec<PlayerId> {
        self.rules.winners(&self.players, self.turns.active())
    }

    /// Final result, once the game has ended.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if self.ended {
            GameResult::from_winners(self.winners())
        } else {
            None
        }
    }
}

impl<R: std::fmt::Debug, S, C> std::fmt::Debug for Game<R, S, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("rules", &self.rules)
            .field("config", &self.config)
            .field("players", &self.players)
            .field("turns", &self.turns)
            .field("ended", &self.ended)
            .finish_non_exhaustive()
    }
}
