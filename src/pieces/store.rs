//! Piece location storage, keyed by color.
//!
//! ## Ownership
//!
//! `PieceStore` is the single place piece locations live. Reads are public;
//! writes are crate-internal so only the movement and capture paths can
//! relocate a piece. Renderers and other consumers work from snapshots or
//! shared borrows and can never mutate game state.

use crate::core::{Color, ColorMap};
use crate::pieces::{PieceIndex, PieceLocation};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Locations of every piece in a game, keyed by color and piece index.
///
/// Active colors are the ordered subset configured for the game; inactive
/// colors hold no pieces. All pieces start at `Home`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceStore {
    active: SmallVec<[Color; 4]>,
    locations: ColorMap<Vec<PieceLocation>>,
}

impl PieceStore {
    /// Create a store for the given colors with `pieces_per_color` pieces
    /// each, all at `Home`.
    #[must_use]
    pub fn new(colors: &[Color], pieces_per_color: u8) -> Self {
        let active: SmallVec<[Color; 4]> = colors.iter().copied().collect();
        let locations = ColorMap::new(|color| {
            if active.contains(&color) {
                vec![PieceLocation::Home; pieces_per_color as usize]
            } else {
                Vec::new()
            }
        });
        Self { active, locations }
    }

    /// The active colors, in configured turn order.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.active
    }

    /// Whether a color takes part in this game.
    #[must_use]
    pub fn is_active(&self, color: Color) -> bool {
        self.active.contains(&color)
    }

    /// Number of pieces a color plays with (0 for inactive colors).
    #[must_use]
    pub fn piece_count(&self, color: Color) -> u8 {
        self.locations[color].len() as u8
    }

    /// All piece locations for a color, indexed by piece.
    #[must_use]
    pub fn locations(&self, color: Color) -> &[PieceLocation] {
        &self.locations[color]
    }

    /// Location of one piece, or `None` if the piece does not exist.
    #[must_use]
    pub fn location(&self, color: Color, piece: PieceIndex) -> Option<PieceLocation> {
        self.locations[color].get(piece.index()).copied()
    }

    /// Iterate over a color's pieces as (index, location) pairs.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (PieceIndex, PieceLocation)> + '_ {
        self.locations[color]
            .iter()
            .enumerate()
            .map(|(i, &loc)| (PieceIndex::new(i as u8), loc))
    }

    /// Every piece of any active color standing on a track cell, in
    /// configured color order then ascending piece index.
    #[must_use]
    pub fn track_occupants(&self, cell: u8) -> SmallVec<[(Color, PieceIndex); 4]> {
        let mut occupants = SmallVec::new();
        for &color in &self.active {
            for (piece, location) in self.pieces(color) {
                if location.track_cell() == Some(cell) {
                    occupants.push((color, piece));
                }
            }
        }
        occupants
    }

    /// Number of a color's pieces that have reached the goal.
    #[must_use]
    pub fn finished_count(&self, color: Color) -> u8 {
        self.locations[color]
            .iter()
            .filter(|loc| loc.is_finished())
            .count() as u8
    }

    /// Whether every piece of a color has reached the goal.
    ///
    /// Inactive colors have no pieces and report `false`.
    #[must_use]
    pub fn all_finished(&self, color: Color) -> bool {
        let pieces = &self.locations[color];
        !pieces.is_empty() && pieces.iter().all(|loc| loc.is_finished())
    }

    /// Relocate a piece.
    ///
    /// Panics if the piece does not exist; callers resolve indices through
    /// the eligibility path first.
    pub(crate) fn set_location(&mut self, color: Color, piece: PieceIndex, location: PieceLocation) {
        self.locations[color][piece.index()] = location;
    }

    /// Return a captured piece to its home yard.
    pub(crate) fn send_home(&mut self, color: Color, piece: PieceIndex) {
        self.set_location(color, piece, PieceLocation::Home);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_all_home() {
        let store = PieceStore::new(&[Color::Red, Color::Yellow], 2);

        assert_eq!(store.colors(), &[Color::Red, Color::Yellow]);
        assert_eq!(store.piece_count(Color::Red), 2);
        assert_eq!(store.piece_count(Color::Blue), 0);
        assert!(store.is_active(Color::Yellow));
        assert!(!store.is_active(Color::Green));

        for color in [Color::Red, Color::Yellow] {
            for (_, loc) in store.pieces(color) {
                assert_eq!(loc, PieceLocation::Home);
            }
        }
    }

    #[test]
    fn test_location_lookup() {
        let mut store = PieceStore::new(&[Color::Red, Color::Yellow], 2);
        store.set_location(Color::Red, PieceIndex::new(1), PieceLocation::OnTrack { cell: 5 });

        assert_eq!(
            store.location(Color::Red, PieceIndex::new(1)),
            Some(PieceLocation::OnTrack { cell: 5 })
        );
        assert_eq!(
            store.location(Color::Red, PieceIndex::new(0)),
            Some(PieceLocation::Home)
        );
        assert_eq!(store.location(Color::Red, PieceIndex::new(2)), None);
    }

    #[test]
    fn test_track_occupants_order() {
        let mut store = PieceStore::new(&[Color::Red, Color::Yellow, Color::Green], 2);
        store.set_location(Color::Green, PieceIndex::new(0), PieceLocation::OnTrack { cell: 9 });
        store.set_location(Color::Red, PieceIndex::new(1), PieceLocation::OnTrack { cell: 9 });
        store.set_location(Color::Yellow, PieceIndex::new(0), PieceLocation::OnTrack { cell: 4 });

        let occupants = store.track_occupants(9);
        assert_eq!(
            occupants.as_slice(),
            &[
                (Color::Red, PieceIndex::new(1)),
                (Color::Green, PieceIndex::new(0))
            ]
        );
    }

    #[test]
    fn test_track_occupants_ignores_inner_path() {
        let mut store = PieceStore::new(&[Color::Red, Color::Yellow], 2);
        store.set_location(Color::Red, PieceIndex::new(0), PieceLocation::InnerPath { index: 2 });

        assert!(store.track_occupants(2).is_empty());
    }

    #[test]
    fn test_finished_counting() {
        let mut store = PieceStore::new(&[Color::Red, Color::Yellow], 2);
        assert_eq!(store.finished_count(Color::Red), 0);
        assert!(!store.all_finished(Color::Red));

        store.set_location(Color::Red, PieceIndex::new(0), PieceLocation::Finished);
        assert_eq!(store.finished_count(Color::Red), 1);
        assert!(!store.all_finished(Color::Red));

        store.set_location(Color::Red, PieceIndex::new(1), PieceLocation::Finished);
        assert!(store.all_finished(Color::Red));
    }

    #[test]
    fn test_inactive_color_never_finished() {
        let store = PieceStore::new(&[Color::Red, Color::Yellow], 2);
        assert!(!store.all_finished(Color::Blue));
    }

    #[test]
    fn test_send_home() {
        let mut store = PieceStore::new(&[Color::Red, Color::Yellow], 2);
        store.set_location(Color::Yellow, PieceIndex::new(1), PieceLocation::OnTrack { cell: 30 });
        store.send_home(Color::Yellow, PieceIndex::new(1));

        assert_eq!(
            store.location(Color::Yellow, PieceIndex::new(1)),
            Some(PieceLocation::Home)
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let mut store = PieceStore::new(&[Color::Red, Color::Yellow], 2);
        store.set_location(Color::Red, PieceIndex::new(0), PieceLocation::InnerPath { index: 3 });

        let json = serde_json::to_string(&store).unwrap();
        let restored: PieceStore = serde_json::from_str(&json).unwrap();
        assert_eq!(store, restored);
    }
}
