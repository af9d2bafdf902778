//! The board: an ordered row of cards addressed by index.
//!
//! ## Key Types
//!
//! - `Board`: Card storage plus the flip/removal primitives the rules use
//! - `deal_pairs`: Random paired layout for a configuration

pub mod deal;

pub use deal::{deal_pairs, distinct_faces, face_counts, validate_layout, COPIES_PER_FACE};

use smallvec::SmallVec;

use crate::cards::{Card, FaceId};
use crate::core::error::{EngineError, Result};

/// Ordered collection of cards.
///
/// Indices are stable for the lifetime of a deal; removed cards keep their
/// slot and are only marked out of play.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// Build a face-down board from a layout.
    #[must_use]
    pub fn from_layout(layout: &[FaceId]) -> Self {
        Self {
            cards: layout.iter().copied().map(Card::new).collect(),
        }
    }

    /// Number of slots, including removed cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True for a board with no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get a card by index.
    pub fn card(&self, index: usize) -> Result<&Card> {
        self.cards.get(index).ok_or(EngineError::IndexOutOfRange {
            index,
            len: self.cards.len(),
        })
    }

    /// All cards in index order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards still on the board.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        self.cards.iter().filter(|c| c.in_play).count()
    }

    /// Indices of face-up cards still on the board.
    #[must_use]
    pub fn revealed(&self) -> SmallVec<[usize; 2]> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_revealed())
            .map(|(i, _)| i)
            .collect()
    }

    /// Turn a card face-up. Index must be in range.
    pub(crate) fn flip(&mut self, index: usize) {
        self.cards[index].flipped = true;
    }

    /// Face-down every card except `keep`, removed cards included.
    pub(crate) fn face_down_except(&mut self, keep: usize) {
        for (i, card) in self.cards.iter_mut().enumerate() {
            if i != keep {
                card.flipped = false;
            }
        }
    }

    /// Take a card out of play. Index must be in range.
    pub(crate) fn remove(&mut self, index: usize) {
        self.cards[index].in_play = false;
    }

    /// Do two cards carry the same face?
    pub(crate) fn faces_match(&self, a: usize, b: usize) -> bool {
        self.cards[a].face == self.cards[b].face
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(ids: &[u16]) -> Board {
        let layout: Vec<_> = ids.iter().copied().map(FaceId::new).collect();
        Board::from_layout(&layout)
    }

    #[test]
    fn test_from_layout() {
        let board = board(&[0, 1, 0, 1]);
        assert_eq!(board.len(), 4);
        assert!(!board.is_empty());
        assert_eq!(board.cards_in_play(), 4);
        assert!(board.revealed().is_empty());
        assert!(board.cards().iter().all(|c| !c.flipped && c.in_play));
    }

    #[test]
    fn test_card_out_of_range() {
        let board = board(&[0, 0]);
        assert!(board.card(1).is_ok());
        assert_eq!(
            board.card(2),
            Err(EngineError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_flip_and_face_down() {
        let mut board = board(&[0, 1, 0, 1]);
        board.flip(0);
        board.flip(2);
        assert_eq!(board.revealed().as_slice(), &[0, 2]);

        board.face_down_except(2);
        assert_eq!(board.revealed().as_slice(), &[2]);
    }

    #[test]
    fn test_removed_cards_not_revealed() {
        let mut board = board(&[0, 1, 0, 1]);
        board.flip(0);
        board.flip(2);
        assert!(board.faces_match(0, 2));
        assert!(!board.faces_match(0, 1));

        board.remove(0);
        board.remove(2);
        assert!(board.revealed().is_empty());
        assert_eq!(board.cards_in_play(), 2);
    }
}
