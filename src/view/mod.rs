//! Render-side output of the engine.
//!
//! The engine never draws anything. It hands the UI one `CardView` per card
//! (counters come straight from `Tally`); `RenderTable` maps card indices to
//! whatever widgets the UI owns.

pub mod table;

pub use table::RenderTable;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, FaceId};

/// How a single card should be drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardView {
    /// Face-up: show this face.
    Face(FaceId),
    /// Face-down: show the card back.
    Back,
    /// Removed from play: draw nothing.
    Hidden,
}

impl CardView {
    /// View for a card's current state.
    #[must_use]
    pub fn of(card: &Card) -> Self {
        match (card.in_play, card.flipped) {
            (false, _) => CardView::Hidden,
            (true, true) => CardView::Face(card.face),
            (true, false) => CardView::Back,
        }
    }

    /// Is the card drawn at all?
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !matches!(self, CardView::Hidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_view() {
        let mut card = Card::new(FaceId::new(3));
        assert_eq!(CardView::of(&card), CardView::Back);

        card.flipped = true;
        assert_eq!(CardView::of(&card), CardView::Face(FaceId::new(3)));

        card.in_play = false;
        assert_eq!(CardView::of(&card), CardView::Hidden);
        assert!(!CardView::of(&card).is_visible());

        card.flipped = false;
        assert_eq!(CardView::of(&card), CardView::Hidden);
    }

    #[test]
    fn test_card_view_serde() {
        let view = CardView::Face(FaceId::new(1));
        let json = serde_json::to_string(&view).unwrap();
        let back: CardView = serde_json::from_str(&json).unwrap();
        assert_eq!(view, back);
    }
}
