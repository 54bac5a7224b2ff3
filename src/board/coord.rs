//! Grid coordinates for renderers.

use serde::{Deserialize, Serialize};

/// A cell position on the square board grid, row-major from the top-left.
///
/// The engine itself moves pieces by track index; coordinates exist so a
/// renderer can place cells on screen without knowing the track layout.
///
/// ```
/// use ludo_engine::board::Coord;
///
/// let c = Coord::new(11, 5);
/// assert_eq!(c.row, 11);
/// assert_eq!(format!("{c}"), "(11, 5)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
