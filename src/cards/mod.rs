//! Card types.
//!
//! - `FaceId`: Opaque face value, each appearing exactly twice per deal
//! - `Card`: One board slot with its flip and in-play state

pub mod card;
pub mod face;

pub use card::Card;
pub use face::FaceId;
