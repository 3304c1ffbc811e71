//! The game orchestrator and its external interfaces.
//!
//! - `Game`: runs turns against any `RuleSet`
//! - `EventSink`/`GameEvent`: notifications out to the presentation layer
//! - `ConfirmationProvider`/`Prompt`: purchase and upgrade decisions in

pub mod confirm;
pub mod event;
pub mod orchestrator;

pub use confirm::{AutoConfirm, ConfirmationProvider, Prompt};
pub use event::{EventSink, GameEvent, NullSink};
pub use orchestrator::Game;
