//! Face values.

use serde::{Deserialize, Serialize};

/// The identity printed on a card's front.
///
/// Opaque to the engine: faces are only compared for equality. The UI maps
/// each face to whatever image or glyph it shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FaceId(pub u16);

impl FaceId {
    /// Create a new face ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for FaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Face({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_id() {
        let face = FaceId::new(4);
        assert_eq!(face.raw(), 4);
        assert_eq!(format!("{}", face), "Face(4)");
    }
}
