//! Index-addressed render targets.
//!
//! A UI builds one `RenderTable` at startup, holding whatever it draws a
//! card into (a widget handle, a sprite, a cell of a text grid). Card `i`
//! always maps to target `i`; nothing is looked up by name at runtime.

use super::CardView;
use crate::core::error::{EngineError, Result};
use crate::rules::GameEngine;

/// Fixed arena of per-card render targets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderTable<T> {
    targets: Vec<T>,
}

impl<T> RenderTable<T> {
    /// Build `len` targets, one per card index.
    pub fn from_fn(len: usize, f: impl FnMut(usize) -> T) -> Self {
        Self {
            targets: (0..len).map(f).collect(),
        }
    }

    /// Number of targets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// True if the table holds no targets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Target for card `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.targets.get(index)
    }

    /// Mutable target for card `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.targets.get_mut(index)
    }

    /// Iterate targets in card order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.targets.iter()
    }

    /// Push the engine's current render state into every target.
    ///
    /// Fails without touching any target if the table and board sizes differ.
    pub fn sync(
        &mut self,
        engine: &GameEngine,
        mut apply: impl FnMut(&mut T, CardView),
    ) -> Result<()> {
        if self.targets.len() != engine.len() {
            return Err(EngineError::TableSizeMismatch {
                table: self.targets.len(),
                board: engine.len(),
            });
        }

        for (target, view) in self.targets.iter_mut().zip(engine.render_state()) {
            apply(target, view);
        }
        Ok(())
    }
}
