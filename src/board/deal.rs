//! Random pairing of faces to board slots.
//!
//! The deal picks a random face for each slot in turn, rejecting any face
//! already used twice. Rejection only hits exhausted faces, so at least one
//! face is always available and the loop terminates.
//!
//! When the pool is larger than the number of pairs, the faces in use are
//! drawn first (without replacement). Running the rejection deal over the
//! whole pool could otherwise leave a face with a single copy.

use rustc_hash::FxHashMap;

use crate::cards::FaceId;
use crate::core::config::BoardConfig;
use crate::core::error::{EngineError, Result};
use crate::core::rng::GameRng;

/// Copies of each face a valid deal holds.
pub const COPIES_PER_FACE: usize = 2;

/// Deal a perfectly paired layout.
///
/// Fails with `InvalidConfiguration` for an odd or too small card count, or
/// a pool with fewer distinct faces than pairs.
pub fn deal_pairs(config: &BoardConfig, rng: &mut GameRng) -> Result<Vec<FaceId>> {
    let config = config.validate()?;
    Ok(deal_validated(&config, rng))
}

/// Deal over a configuration already normalised by `BoardConfig::validate`.
pub(crate) fn deal_validated(config: &BoardConfig, rng: &mut GameRng) -> Vec<FaceId> {
    let mut pool = config.faces.clone();
    if pool.len() > config.pair_count() {
        rng.shuffle(&mut pool);
        pool.truncate(config.pair_count());
    }

    let mut used = vec![0usize; pool.len()];
    let mut layout = Vec::with_capacity(config.card_count);

    for _ in 0..config.card_count {
        let mut pick = rng.gen_index(pool.len());
        while used[pick] == COPIES_PER_FACE {
            pick = rng.gen_index(pool.len());
        }
        used[pick] += 1;
        layout.push(pool[pick]);
    }

    log::debug!("Dealt {} cards over {} faces", layout.len(), pool.len());
    layout
}

/// Count how many times each face appears in a layout.
#[must_use]
pub fn face_counts(layout: &[FaceId]) -> FxHashMap<FaceId, usize> {
    let mut counts = FxHashMap::default();
    for face in layout {
        *counts.entry(*face).or_insert(0) += 1;
    }
    counts
}

/// Check that a fixed layout is a complete paired board.
pub fn validate_layout(layout: &[FaceId]) -> Result<()> {
    if layout.is_empty() {
        return Err(EngineError::invalid("layout is empty"));
    }
    if layout.len() % 2 != 0 {
        return Err(EngineError::invalid(format!(
            "layout has an odd number of cards ({})",
            layout.len()
        )));
    }

    let counts = face_counts(layout);
    let mut unpaired: Vec<_> = counts
        .iter()
        .filter(|(_, n)| **n != COPIES_PER_FACE)
        .collect();
    if !unpaired.is_empty() {
        unpaired.sort();
        let (face, n) = unpaired[0];
        return Err(EngineError::invalid(format!(
            "{} appears {} times, expected {}",
            face, n, COPIES_PER_FACE
        )));
    }

    Ok(())
}

/// Distinct faces of a layout in first-seen order.
#[must_use]
pub fn distinct_faces(layout: &[FaceId]) -> Vec<FaceId> {
    let mut faces = Vec::new();
    for face in layout {
        if !faces.contains(face) {
            faces.push(*face);
        }
    }
    faces
}
