//! Rules: the rule-set seam and economic tile dispatch.

pub mod dispatch;
pub mod engine;

pub use dispatch::{resolve, Effect, LandingContext};
pub use engine::{GameResult, LandingOutcome, Movement, RuleSet, TurnContext};
