//! Snakes-and-ladders race.
//!
//! Players roll one die and move up a straight track. Landing on a ladder
//! foot climbs, landing on a snake head slides down. A roll that overshoots
//! the final cell is forfeited; the first player to land exactly on it wins.

mod rules;

pub use rules::RaceRules;
