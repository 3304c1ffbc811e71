//! Race rule set implementation.

use tracing::debug;

use crate::board::{Jump, Track};
use crate::core::{Player, PlayerId, Result};
use crate::game::GameEvent;
use crate::rules::{LandingOutcome, Movement, RuleSet, TurnContext};

/// Snakes-and-ladders rules on a straight track.
#[derive(Clone, Debug)]
pub struct RaceRules {
    track: Track,
}

impl RaceRules {
    #[must_use]
    pub fn new(track: Track) -> Self {
        Self { track }
    }

    /// A track of `len` cells without snakes or ladders.
    pub fn plain(len: usize) -> Result<Self> {
        Ok(Self::new(Track::plain(len)?))
    }

    /// A track of `len` cells with the given snakes and ladders.
    pub fn with_jumps(len: usize, jumps: impl IntoIterator<Item = Jump>) -> Result<Self> {
        Ok(Self::new(Track::new(len, jumps)?))
    }

    #[must_use]
    pub fn track(&self) -> &Track {
        &self.track
    }
}

impl RuleSet for RaceRules {
    fn name(&self) -> &'static str {
        "race"
    }

    fn surface_len(&self) -> usize {
        self.track.len()
    }

    fn movement(&self, from: usize, steps: usize) -> Result<Movement> {
        Ok(Movement {
            to: self.track.advance(from, steps)?,
            passed_start: false,
        })
    }

    fn land(&mut self, ctx: &mut TurnContext<'_>) -> Result<LandingOutcome> {
        let position = ctx.player().position();

        if let Some(jump) = self.track.jump_at(position) {
            let to = jump.end();
            ctx.player_mut().set_position(to);
            let verb = match jump {
                Jump::Snake { .. } => "slid down a snake",
                Jump::Ladder { .. } => "climbed a ladder",
            };
            debug!(player = %ctx.current, from = position, to, "jump");
            let text = format!("{} {verb} from {position} to {to}", ctx.player().name());
            ctx.announce(GameEvent::output(text));
        }

        if ctx.player().position() == self.track.last_cell() {
            Ok(LandingOutcome::Finished)
        } else {
            Ok(LandingOutcome::Continue)
        }
    }

    fn score(&self, player: &Player) -> i64 {
        i64::try_from(player.position()).unwrap_or(i64::MAX)
    }

    fn is_over(&self, players: &[Player], _active: &[PlayerId]) -> bool {
        let goal = self.track.last_cell();
        players.iter().any(|p| p.position() == goal)
    }
}
