//! Rule-set implementations.

pub mod economic;
pub mod race;

pub use economic::EconomicRules;
pub use race::RaceRules;
