//! The game engine: board, turn state and tally.
//!
//! Play is a three-phase cycle driven by card touches:
//!
//! - `AwaitingFirst`: the next touch reveals the first card of a pair
//! - `AwaitingSecond`: the next touch reveals the second card and scores it
//! - `PendingResolve`: both cards are still face-up; the next touch first
//!   removes them if they matched, turns everything else face-down, then
//!   reveals the touched card as a new first pick
//!
//! A matched pair therefore stays on screen until the following touch.
//!
//! ```
//! use memory_match::cards::FaceId;
//! use memory_match::rules::{GameEngine, Phase};
//!
//! let layout: Vec<_> = [0, 1, 0, 1].into_iter().map(FaceId::new).collect();
//! let mut engine = GameEngine::with_layout(&layout, 42).unwrap();
//!
//! engine.touch_card(0).unwrap();
//! engine.touch_card(2).unwrap();
//! assert_eq!(engine.tally_state().success, 1);
//! assert_eq!(engine.phase(), Phase::PendingResolve { first: 0, second: 2 });
//! ```

use serde::{Deserialize, Serialize};

use super::tally::Tally;
use crate::board::deal::deal_validated;
use crate::board::{distinct_faces, validate_layout, Board};
use crate::cards::{Card, FaceId};
use crate::core::config::BoardConfig;
use crate::core::error::Result;
use crate::core::rng::GameRng;
use crate::view::CardView;

/// Turn state, carrying the indices of the face-up cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No card face-up.
    #[default]
    AwaitingFirst,
    /// One card face-up.
    AwaitingSecond { first: usize },
    /// Two cards face-up, scored but not yet cleared.
    PendingResolve { first: usize, second: usize },
}

impl Phase {
    /// Number of face-up, in-play cards in this phase.
    #[must_use]
    pub const fn flipped_count(self) -> usize {
        match self {
            Phase::AwaitingFirst => 0,
            Phase::AwaitingSecond { .. } => 1,
            Phase::PendingResolve { .. } => 2,
        }
    }
}

/// What a touch did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TouchOutcome {
    /// The card was already face-up or already cleared. Nothing changed.
    Ignored,
    /// First pick of a pair. `cleared` is the matched pair removed from the
    /// previous round, if any.
    Revealed {
        index: usize,
        cleared: Option<(usize, usize)>,
    },
    /// Second pick matched the first.
    Matched { first: usize, second: usize },
    /// Second pick differed from the first.
    Mismatched { first: usize, second: usize },
}

/// Owns the board, turn state and tally for one game session.
///
/// Both entry points take `&mut self` and run to completion, so a UI holds
/// one engine and calls into it from its event loop.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: BoardConfig,
    board: Board,
    phase: Phase,
    tally: Tally,
    rng: GameRng,
}

impl GameEngine {
    /// Validate `config` and deal a fresh board with a seeded RNG.
    pub fn new(config: BoardConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Validate `config` and deal a fresh board seeded from entropy.
    pub fn from_entropy(config: BoardConfig) -> Result<Self> {
        Self::with_rng(config, GameRng::from_entropy())
    }

    fn with_rng(config: BoardConfig, mut rng: GameRng) -> Result<Self> {
        let config = config.validate()?;
        let board = Board::from_layout(&deal_validated(&config, &mut rng));
        log::debug!(
            "New game: {} cards, {} faces, seed {}",
            config.card_count,
            config.faces.len(),
            rng.seed()
        );

        Ok(Self {
            config,
            board,
            phase: Phase::AwaitingFirst,
            tally: Tally::new(),
            rng,
        })
    }

    /// Start from a fixed layout instead of a random deal.
    ///
    /// Every face must appear exactly twice. Restarts deal randomly over the
    /// layout's faces using `seed`.
    pub fn with_layout(layout: &[FaceId], seed: u64) -> Result<Self> {
        validate_layout(layout)?;
        let config = BoardConfig::new(layout.len()).with_faces(distinct_faces(layout));
        log::debug!(
            "New game from fixed layout: {} cards, {} faces, seed {}",
            config.card_count,
            config.faces.len(),
            seed
        );

        Ok(Self {
            config,
            board: Board::from_layout(layout),
            phase: Phase::AwaitingFirst,
            tally: Tally::new(),
            rng: GameRng::new(seed),
        })
    }

    // === Entry points ===

    /// Handle a touch on card `index`.
    ///
    /// Touching a face-up or cleared card is a no-op. An index outside the
    /// board is an error and leaves the state untouched.
    pub fn touch_card(&mut self, index: usize) -> Result<TouchOutcome> {
        if !self.board.card(index)?.is_selectable() {
            log::trace!("Ignored touch on card {}", index);
            return Ok(TouchOutcome::Ignored);
        }

        let outcome = match self.phase {
            Phase::AwaitingFirst => self.begin_pair(index, None),
            Phase::PendingResolve { first, second } => {
                let cleared = self.resolve(first, second);
                self.begin_pair(index, cleared)
            }
            Phase::AwaitingSecond { first } => self.complete_pair(first, index),
        };

        debug_assert_eq!(self.phase.flipped_count(), self.board.revealed().len());
        log::trace!("Touch on card {}: {:?}", index, outcome);
        Ok(outcome)
    }

    /// Redeal the board. The tally is kept.
    pub fn restart(&mut self) {
        self.board = Board::from_layout(&deal_validated(&self.config, &mut self.rng));
        self.phase = Phase::AwaitingFirst;
        log::debug!("Restarted with tally {}/{}", self.tally.success, self.tally.fail);
    }

    // === Queries ===

    /// One draw instruction per card, in index order.
    #[must_use]
    pub fn render_state(&self) -> Vec<CardView> {
        self.board.cards().iter().map(CardView::of).collect()
    }

    /// Draw instruction for a single card.
    pub fn card_view(&self, index: usize) -> Result<CardView> {
        self.board.card(index).map(CardView::of)
    }

    /// Counters and the highlight of the most recent step.
    #[must_use]
    pub fn tally_state(&self) -> Tally {
        self.tally
    }

    /// Face-up, in-play card count (0, 1 or 2).
    #[must_use]
    pub fn flipped_count(&self) -> usize {
        self.phase.flipped_count()
    }

    /// Current turn phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of cards on the board, removed ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.board.len()
    }

    /// Always false for a validated engine.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.board.is_empty()
    }

    /// Get a card by index.
    pub fn card(&self, index: usize) -> Result<&Card> {
        self.board.card(index)
    }

    /// All cards in index order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.board.cards()
    }

    /// Number of cards not yet cleared.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        self.board.cards_in_play()
    }

    /// The normalised configuration restarts deal from.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    // === Turn steps ===

    /// Clear the previous pair if it matched.
    fn resolve(&mut self, first: usize, second: usize) -> Option<(usize, usize)> {
        if !self.board.faces_match(first, second) {
            return None;
        }
        self.board.remove(first);
        self.board.remove(second);
        log::debug!("Cleared pair ({}, {})", first, second);
        Some((first, second))
    }

    fn begin_pair(&mut self, index: usize, cleared: Option<(usize, usize)>) -> TouchOutcome {
        self.board.face_down_except(index);
        self.board.flip(index);
        self.phase = Phase::AwaitingSecond { first: index };
        self.tally.clear_highlight();
        TouchOutcome::Revealed { index, cleared }
    }

    fn complete_pair(&mut self, first: usize, second: usize) -> TouchOutcome {
        self.board.flip(second);
        self.phase = Phase::PendingResolve { first, second };

        if self.board.faces_match(first, second) {
            self.tally.record_success();
            TouchOutcome::Matched { first, second }
        } else {
            self.tally.record_fail();
            TouchOutcome::Mismatched { first, second }
        }
    }
}
