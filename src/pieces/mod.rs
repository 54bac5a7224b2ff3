//! Piece state: identity, location, and the store that owns both.
//!
//! ## Key Types
//!
//! - `PieceIndex`: Piece identifier within one color
//! - `PieceLocation`: Home / on the track / inner path / finished
//! - `PieceStore`: All locations, keyed by color; the only mutation path
//!   is crate-internal

pub mod piece;
pub mod store;

pub use piece::{PieceIndex, PieceLocation};
pub use store::PieceStore;
