//! Runtime card state.

use serde::{Deserialize, Serialize};

use super::face::FaceId;

/// A single board slot.
///
/// Cards start face-down and in play. A matched card leaves play and is
/// never rendered again until the next deal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Face value dealt to this slot.
    pub face: FaceId,

    /// Is the face currently shown?
    pub flipped: bool,

    /// Is the card still on the board?
    pub in_play: bool,
}

impl Card {
    /// A face-down, in-play card.
    #[must_use]
    pub const fn new(face: FaceId) -> Self {
        Self {
            face,
            flipped: false,
            in_play: true,
        }
    }

    /// Face-up and still on the board.
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.flipped && self.in_play
    }

    /// Can a touch on this card be accepted?
    #[must_use]
    pub const fn is_selectable(&self) -> bool {
        self.in_play && !self.flipped
    }
}
