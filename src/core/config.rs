//! Board configuration.
//!
//! A game is configured by the number of cards on the board and the pool of
//! face values the deal may draw from. The classic layout is six cards over
//! three faces.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};
use crate::cards::FaceId;

/// Card count and face pool for a board.
///
/// The pool may hold more faces than the board needs; the deal then draws
/// `card_count / 2` of them. Duplicate faces in the pool are collapsed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of cards on the board. Must be even and at least 2.
    pub card_count: usize,

    /// Candidate face values.
    pub faces: Vec<FaceId>,
}

impl BoardConfig {
    /// Create a configuration with an empty face pool.
    #[must_use]
    pub fn new(card_count: usize) -> Self {
        Self {
            card_count,
            faces: Vec::new(),
        }
    }

    /// Six cards over faces 0, 1 and 2.
    #[must_use]
    pub fn classic() -> Self {
        Self::new(6).with_faces((0..3).map(FaceId::new))
    }

    /// Add a face to the pool.
    #[must_use]
    pub fn with_face(mut self, face: FaceId) -> Self {
        self.faces.push(face);
        self
    }

    /// Add several faces to the pool.
    #[must_use]
    pub fn with_faces(mut self, faces: impl IntoIterator<Item = FaceId>) -> Self {
        self.faces.extend(faces);
        self
    }

    /// Number of pairs on a full board.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.card_count / 2
    }

    /// Check the configuration and return it with duplicate faces removed.
    ///
    /// Face order is preserved (first occurrence wins) so a given seed always
    /// deals the same board.
    pub fn validate(&self) -> Result<Self> {
        if self.card_count < 2 {
            return Err(EngineError::invalid(format!(
                "card count {} is below the minimum of 2",
                self.card_count
            )));
        }
        if self.card_count % 2 != 0 {
            return Err(EngineError::invalid(format!(
                "card count {} is odd",
                self.card_count
            )));
        }

        let mut seen = FxHashSet::default();
        let faces: Vec<FaceId> = self.faces.iter().copied().filter(|f| seen.insert(*f)).collect();

        if faces.len() < self.pair_count() {
            return Err(EngineError::invalid(format!(
                "{} cards need {} distinct faces, got {}",
                self.card_count,
                self.pair_count(),
                faces.len()
            )));
        }

        Ok(Self {
            card_count: self.card_count,
            faces,
        })
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faces(ids: &[u16]) -> Vec<FaceId> {
        ids.iter().copied().map(FaceId::new).collect()
    }

    #[test]
    fn test_classic() {
        let config = BoardConfig::classic();
        assert_eq!(config.card_count, 6);
        assert_eq!(config.faces, faces(&[0, 1, 2]));
        assert_eq!(config.pair_count(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = BoardConfig::new(4)
            .with_face(FaceId::new(7))
            .with_faces(faces(&[8, 9]));

        assert_eq!(config.card_count, 4);
        assert_eq!(config.faces, faces(&[7, 8, 9]));
    }

    #[test]
    fn test_odd_card_count_rejected() {
        let config = BoardConfig::new(5).with_faces(faces(&[0, 1, 2]));
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_too_few_cards_rejected() {
        let config = BoardConfig::new(0).with_faces(faces(&[0]));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_too_few_faces_rejected() {
        let config = BoardConfig::new(6).with_faces(faces(&[0, 1]));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_duplicate_faces_collapse() {
        let config = BoardConfig::new(6).with_faces(faces(&[2, 0, 2, 1, 0]));
        let normalized = config.validate().unwrap();
        assert_eq!(normalized.faces, faces(&[2, 0, 1]));

        // Duplicates don't count towards the distinct minimum
        let config = BoardConfig::new(6).with_faces(faces(&[0, 0, 1, 1]));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = BoardConfig::classic();
        let json = serde_json::to_string(&config).unwrap();
        let back: BoardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
