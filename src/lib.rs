//! # memory-match
//!
//! A single-player memory matching card game engine.
//!
//! Cards are dealt face-down in pairs. The player reveals two at a time;
//! matching pairs are counted as a success and cleared from the board,
//! mismatches are counted as a failure and turned back over.
//!
//! ## Design Principles
//!
//! 1. **UI-Agnostic**: The engine owns all game state and never draws.
//!    A UI feeds it touches and restarts and reads back render state.
//!
//! 2. **Configurable Board**: Card count and face pool come from
//!    `BoardConfig`; the classic layout is six cards over three faces.
//!
//! 3. **Deterministic Deals**: Deals use a seeded ChaCha8 RNG, so a seed
//!    or a fixed layout reproduces a game exactly.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Face values and card state
//! - `board`: Card storage and the paired deal
//! - `rules`: The turn state machine and tally
//! - `view`: Per-card render instructions and the render target table

pub mod core;
pub mod cards;
pub mod board;
pub mod rules;
pub mod view;

// Re-export commonly used types
pub use crate::core::{BoardConfig, EngineError, GameRng, Result};

pub use crate::cards::{Card, FaceId};

pub use crate::board::{deal_pairs, Board};

pub use crate::rules::{GameEngine, Highlight, Phase, Tally, TouchOutcome};

pub use crate::view::{CardView, RenderTable};
