//! Core engine types: RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod rng;

pub use config::BoardConfig;
pub use error::{EngineError, Result};
pub use rng::GameRng;
