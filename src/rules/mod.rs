//! Game rules: the turn state machine and the tally it updates.

pub mod engine;
pub mod tally;

pub use engine::{GameEngine, Phase, TouchOutcome};
pub use tally::{Highlight, Tally};
