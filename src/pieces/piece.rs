//! Piece identity and location.

use serde::{Deserialize, Serialize};

/// Piece identifier within one color, 0-based.
///
/// ```
/// use ludo_engine::pieces::PieceIndex;
///
/// let pieces: Vec<_> = PieceIndex::all(2).collect();
/// assert_eq!(pieces, vec![PieceIndex::new(0), PieceIndex::new(1)]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceIndex(pub u8);

impl PieceIndex {
    /// Create a new piece index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the raw index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all piece indices for a color with `count` pieces.
    pub fn all(count: u8) -> impl Iterator<Item = PieceIndex> {
        (0..count).map(PieceIndex)
    }
}

impl std::fmt::Display for PieceIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece {}", self.0)
    }
}

/// Where a piece currently is.
///
/// The lifecycle only moves forward - Home to the track to the inner path
/// to Finished - with one exception: a captured piece goes from the track
/// back to Home. Inner-path and Finished pieces cannot be captured, and
/// Finished is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceLocation {
    /// In the home yard, not yet in play.
    Home,
    /// On the shared track at an absolute cell index.
    OnTrack { cell: u8 },
    /// On the color's private inner path.
    InnerPath { index: u8 },
    /// Reached the goal. Terminal.
    Finished,
}

impl PieceLocation {
    /// Whether the piece is still in its home yard.
    #[must_use]
    pub const fn is_home(self) -> bool {
        matches!(self, PieceLocation::Home)
    }

    /// Whether the piece has reached the goal.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, PieceLocation::Finished)
    }

    /// The track cell, if the piece is on the shared track.
    #[must_use]
    pub const fn track_cell(self) -> Option<u8> {
        match self {
            PieceLocation::OnTrack { cell } => Some(cell),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_index_basics() {
        let p = PieceIndex::new(1);
        assert_eq!(p.index(), 1);
        assert_eq!(format!("{p}"), "Piece 1");
    }

    #[test]
    fn test_piece_index_all() {
        let pieces: Vec<_> = PieceIndex::all(4).collect();
        assert_eq!(pieces.len(), 4);
        assert_eq!(pieces[0], PieceIndex::new(0));
        assert_eq!(pieces[3], PieceIndex::new(3));
    }

    #[test]
    fn test_location_predicates() {
        assert!(PieceLocation::Home.is_home());
        assert!(!PieceLocation::Finished.is_home());
        assert!(PieceLocation::Finished.is_finished());
        assert!(!PieceLocation::OnTrack { cell: 3 }.is_finished());
    }

    #[test]
    fn test_track_cell() {
        assert_eq!(PieceLocation::OnTrack { cell: 7 }.track_cell(), Some(7));
        assert_eq!(PieceLocation::Home.track_cell(), None);
        assert_eq!(PieceLocation::InnerPath { index: 2 }.track_cell(), None);
        assert_eq!(PieceLocation::Finished.track_cell(), None);
    }

    #[test]
    fn test_location_serde() {
        let loc = PieceLocation::InnerPath { index: 4 };
        let json = serde_json::to_string(&loc).unwrap();
        let restored: PieceLocation = serde_json::from_str(&json).unwrap();
        assert_eq!(loc, restored);
    }
}
