//! Engine error types.

use thiserror::Error;

/// Result type alias using `EngineError`.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors surfaced by the game engine.
///
/// Touching a card that is already face-up or already cleared is a normal
/// outcome (`TouchOutcome::Ignored`), not an error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The board configuration or fixed layout cannot form a paired board.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// A card index outside `0..len`.
    #[error("card index {index} out of range for board of {len} cards")]
    IndexOutOfRange { index: usize, len: usize },

    /// A render table whose size differs from the board it is synced with.
    #[error("render table has {table} targets but board has {board} cards")]
    TableSizeMismatch { table: usize, board: usize },
}

impl EngineError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration { reason: reason.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = EngineError::invalid("card count 5 is odd");
        assert_eq!(err.to_string(), "invalid configuration: card count 5 is odd");

        let err = EngineError::IndexOutOfRange { index: 9, len: 6 };
        assert_eq!(err.to_string(), "card index 9 out of range for board of 6 cards");
    }
}
