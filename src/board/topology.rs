//! Board topology: the shared circuit, per-color lanes, and safe cells.
//!
//! ## Model
//!
//! All colors share one circular **track** of cells, addressed by absolute
//! index 0..track_len. Each color has a **lane**: its start cell on the
//! track, the forward distance it must cover before turning off (the entry
//! threshold), and a private **inner path** whose last cell is the goal.
//! A set of **safe cells** on the track is immune to captures.
//!
//! Topology is configuration data: games select a board at setup time and
//! never mutate it. `BoardTopology::standard()` is the classic 13x13 board;
//! custom boards go through `BoardTopology::new`, which validates enough to
//! make overshoot from the track impossible by construction.

use crate::board::Coord;
use crate::core::{Color, ColorMap, DICE_FACES};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Grid side length of the standard board.
const STANDARD_GRID: u8 = 13;

/// One arm of the standard circuit, walked in movement order starting at
/// the red start cell. The other three arms are this one rotated 90
/// degrees clockwise, one turn per color.
const STANDARD_ARM: [(u8, u8); 11] = [
    (11, 5),
    (10, 5),
    (9, 5),
    (8, 5),
    (7, 4),
    (7, 3),
    (7, 2),
    (7, 1),
    (7, 0),
    (6, 0),
    (5, 0),
];

/// Red's inner path, ending on the shared center goal cell.
const STANDARD_INNER: [(u8, u8); 6] = [(11, 6), (10, 6), (9, 6), (8, 6), (7, 6), (6, 6)];

/// Red's home-yard anchor (renderer data).
const STANDARD_HOME: (u8, u8) = (9, 1);

/// Offset of each arm's safe star cell from the arm's start cell.
const STANDARD_SAFE_OFFSET: usize = 6;

/// Invalid board description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    #[error("track must have at least one cell")]
    EmptyTrack,
    #[error("track has {len} cells, more than the supported 255")]
    TrackTooLong { len: usize },
    #[error("{color} start cell {cell} is outside the track")]
    StartCellOutOfRange { color: Color, cell: u8 },
    #[error("{color} entry threshold {threshold} must be between 1 and track length - 1")]
    EntryThresholdOutOfRange { color: Color, threshold: u8 },
    #[error("{color} inner path has {len} cells, fewer than the {} a full roll needs", DICE_FACES)]
    InnerPathTooShort { color: Color, len: usize },
    #[error("{color} inner path has {len} cells, more than the supported 255")]
    InnerPathTooLong { color: Color, len: usize },
    #[error("safe cell {cell} is outside the track")]
    SafeCellOutOfRange { cell: u8 },
}

/// One color's relationship to the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorLane {
    /// Track cell a piece lands on when it leaves Home.
    pub start_cell: u8,
    /// Forward distance from `start_cell` after which the next step leaves
    /// the track onto the inner path.
    pub entry_threshold: u8,
    /// Private cells walked after leaving the track; the last one is the
    /// goal.
    pub inner_path: Vec<Coord>,
    /// Where the color's home yard sits on the grid (renderer data).
    pub home_anchor: Coord,
}

impl ColorLane {
    /// Create a lane.
    #[must_use]
    pub fn new(
        start_cell: u8,
        entry_threshold: u8,
        inner_path: Vec<Coord>,
        home_anchor: Coord,
    ) -> Self {
        Self {
            start_cell,
            entry_threshold,
            inner_path,
            home_anchor,
        }
    }
}

/// A validated board description shared by every game on it.
///
/// ## Example
///
/// ```
/// use ludo_engine::board::BoardTopology;
/// use ludo_engine::core::Color;
///
/// let board = BoardTopology::standard();
/// assert_eq!(board.track_len(), 44);
/// assert_eq!(board.start_cell(Color::Red), 0);
/// assert_eq!(board.entry_cell(Color::Yellow), 20);
/// assert!(board.is_safe_cell(6));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardTopology {
    grid_size: u8,
    track: Vec<Coord>,
    safe_cells: FxHashSet<u8>,
    lanes: ColorMap<ColorLane>,
}

impl BoardTopology {
    /// Create a validated topology.
    ///
    /// Lanes exist for all four colors even if a game activates fewer.
    pub fn new(
        grid_size: u8,
        track: Vec<Coord>,
        safe_cells: impl IntoIterator<Item = u8>,
        lanes: ColorMap<ColorLane>,
    ) -> Result<Self, TopologyError> {
        let topology = Self {
            grid_size,
            track,
            safe_cells: safe_cells.into_iter().collect(),
            lanes,
        };
        topology.validate()?;
        Ok(topology)
    }

    /// Check the board description.
    ///
    /// `new` runs this; call it again on topologies that arrived through
    /// deserialization. The checks guarantee that a piece on the track can
    /// always take a full roll of steps: inner paths are at least
    /// `DICE_FACES` cells, so overshoot is only possible (and checked at
    /// eligibility time) on the inner path itself.
    pub fn validate(&self) -> Result<(), TopologyError> {
        if self.track.is_empty() {
            return Err(TopologyError::EmptyTrack);
        }
        if self.track.len() > u8::MAX as usize {
            return Err(TopologyError::TrackTooLong {
                len: self.track.len(),
            });
        }
        let len = self.track.len() as u8;

        for (color, lane) in self.lanes.iter() {
            if lane.start_cell >= len {
                return Err(TopologyError::StartCellOutOfRange {
                    color,
                    cell: lane.start_cell,
                });
            }
            if lane.entry_threshold == 0 || lane.entry_threshold >= len {
                return Err(TopologyError::EntryThresholdOutOfRange {
                    color,
                    threshold: lane.entry_threshold,
                });
            }
            if lane.inner_path.len() < DICE_FACES as usize {
                return Err(TopologyError::InnerPathTooShort {
                    color,
                    len: lane.inner_path.len(),
                });
            }
            if lane.inner_path.len() > u8::MAX as usize {
                return Err(TopologyError::InnerPathTooLong {
                    color,
                    len: lane.inner_path.len(),
                });
            }
        }

        if let Some(&cell) = self.safe_cells.iter().find(|&&c| c >= len) {
            return Err(TopologyError::SafeCellOutOfRange { cell });
        }

        Ok(())
    }

    /// The classic 13x13 board.
    ///
    /// A 44-cell circuit built from one arm rotated 90 degrees per color,
    /// so starts sit at track cells 0 / 11 / 22 / 33 in board order. Every
    /// color covers 42 cells (track length minus 2) before turning onto a
    /// six-cell inner path that ends on the shared center cell. Each arm
    /// carries one safe star cell six cells past its start.
    #[must_use]
    pub fn standard() -> Self {
        let arm_len = STANDARD_ARM.len();

        let mut track = Vec::with_capacity(arm_len * Color::COUNT);
        for arm in 0..Color::COUNT {
            for &(row, col) in &STANDARD_ARM {
                track.push(rotate(Coord::new(row, col), arm));
            }
        }

        let entry_threshold = (track.len() - 2) as u8;
        let lanes = ColorMap::new(|color| {
            let arm = color.index();
            ColorLane::new(
                (arm * arm_len) as u8,
                entry_threshold,
                STANDARD_INNER
                    .iter()
                    .map(|&(row, col)| rotate(Coord::new(row, col), arm))
                    .collect(),
                rotate(Coord::new(STANDARD_HOME.0, STANDARD_HOME.1), arm),
            )
        });

        let safe_cells =
            (0..Color::COUNT).map(|arm| (arm * arm_len + STANDARD_SAFE_OFFSET) as u8);

        Self::new(STANDARD_GRID, track, safe_cells, lanes)
            .expect("standard board is a valid topology")
    }

    /// Side length of the square grid the track is laid out on.
    #[must_use]
    pub fn grid_size(&self) -> u8 {
        self.grid_size
    }

    /// Number of cells on the shared track.
    #[must_use]
    pub fn track_len(&self) -> u8 {
        self.track.len() as u8
    }

    /// The full lane for a color.
    #[must_use]
    pub fn lane(&self, color: Color) -> &ColorLane {
        &self.lanes[color]
    }

    /// Track cell a color's pieces enter play on.
    #[must_use]
    pub fn start_cell(&self, color: Color) -> u8 {
        self.lanes[color].start_cell
    }

    /// Forward distance a color covers before leaving the track.
    #[must_use]
    pub fn entry_threshold(&self, color: Color) -> u8 {
        self.lanes[color].entry_threshold
    }

    /// Absolute track cell from which a color's next step turns onto its
    /// inner path.
    #[must_use]
    pub fn entry_cell(&self, color: Color) -> u8 {
        let len = u16::from(self.track_len());
        let start = u16::from(self.lanes[color].start_cell);
        let threshold = u16::from(self.lanes[color].entry_threshold);
        ((start + threshold) % len) as u8
    }

    /// A color's inner path, in walking order; the last cell is the goal.
    #[must_use]
    pub fn inner_path(&self, color: Color) -> &[Coord] {
        &self.lanes[color].inner_path
    }

    /// Number of cells on a color's inner path.
    #[must_use]
    pub fn inner_len(&self, color: Color) -> u8 {
        self.lanes[color].inner_path.len() as u8
    }

    /// Whether captures are forbidden on a track cell.
    #[must_use]
    pub fn is_safe_cell(&self, cell: u8) -> bool {
        self.safe_cells.contains(&cell)
    }

    /// Grid coordinate of a track cell.
    ///
    /// Panics if `cell` is outside the track.
    #[must_use]
    pub fn track_coord(&self, cell: u8) -> Coord {
        self.track[cell as usize]
    }

    /// Grid coordinate of a cell on a color's inner path.
    ///
    /// Panics if `index` is outside the path.
    #[must_use]
    pub fn inner_coord(&self, color: Color, index: u8) -> Coord {
        self.lanes[color].inner_path[index as usize]
    }

    /// Where a color's home yard sits on the grid (renderer data).
    #[must_use]
    pub fn home_anchor(&self, color: Color) -> Coord {
        self.lanes[color].home_anchor
    }
}

/// Rotate a grid coordinate 90 degrees clockwise `times` turns.
fn rotate(coord: Coord, times: usize) -> Coord {
    let mut c = coord;
    for _ in 0..times {
        c = Coord::new(c.col, STANDARD_GRID - 1 - c.row);
    }
    c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chebyshev(a: Coord, b: Coord) -> u8 {
        let dr = a.row.abs_diff(b.row);
        let dc = a.col.abs_diff(b.col);
        dr.max(dc)
    }

    #[test]
    fn test_standard_dimensions() {
        let board = BoardTopology::standard();
        assert_eq!(board.grid_size(), 13);
        assert_eq!(board.track_len(), 44);
        for color in Color::ALL {
            assert_eq!(board.inner_len(color), 6);
            assert_eq!(board.entry_threshold(color), 42);
        }
    }

    #[test]
    fn test_standard_start_cells() {
        let board = BoardTopology::standard();
        assert_eq!(board.start_cell(Color::Red), 0);
        assert_eq!(board.start_cell(Color::Blue), 11);
        assert_eq!(board.start_cell(Color::Yellow), 22);
        assert_eq!(board.start_cell(Color::Green), 33);

        assert_eq!(board.track_coord(0), Coord::new(11, 5));
        assert_eq!(board.track_coord(11), Coord::new(5, 1));
        assert_eq!(board.track_coord(22), Coord::new(1, 7));
        assert_eq!(board.track_coord(33), Coord::new(7, 11));
    }

    #[test]
    fn test_standard_entry_cells() {
        let board = BoardTopology::standard();
        assert_eq!(board.entry_cell(Color::Red), 42);
        assert_eq!(board.entry_cell(Color::Blue), 9);
        assert_eq!(board.entry_cell(Color::Yellow), 20);
        assert_eq!(board.entry_cell(Color::Green), 31);

        // Yellow's entry sits at the top tip of the cross.
        assert_eq!(board.track_coord(20), Coord::new(0, 6));
    }

    #[test]
    fn test_standard_safe_cells() {
        let board = BoardTopology::standard();
        let stars = [
            (6, Coord::new(7, 2)),
            (17, Coord::new(2, 5)),
            (28, Coord::new(5, 10)),
            (39, Coord::new(10, 7)),
        ];
        for (cell, coord) in stars {
            assert!(board.is_safe_cell(cell), "cell {cell} should be safe");
            assert_eq!(board.track_coord(cell), coord);
        }
        assert!(!board.is_safe_cell(0));
        assert!(!board.is_safe_cell(43));
    }

    #[test]
    fn test_standard_track_is_a_connected_circuit() {
        let board = BoardTopology::standard();
        let len = board.track_len();
        for cell in 0..len {
            let next = (cell + 1) % len;
            let step = chebyshev(board.track_coord(cell), board.track_coord(next));
            assert_eq!(step, 1, "cells {cell} and {next} are not adjacent");
        }
    }

    #[test]
    fn test_standard_track_has_no_duplicate_cells() {
        let board = BoardTopology::standard();
        let mut seen = FxHashSet::default();
        for cell in 0..board.track_len() {
            assert!(seen.insert(board.track_coord(cell)));
        }
    }

    #[test]
    fn test_standard_inner_paths_reach_center() {
        let board = BoardTopology::standard();
        let center = Coord::new(6, 6);
        for color in Color::ALL {
            let last = board.inner_len(color) - 1;
            assert_eq!(board.inner_coord(color, last), center);
            assert_eq!(board.inner_path(color).last(), Some(&center));

            // First inner cell adjoins the entry cell.
            let entry = board.track_coord(board.entry_cell(color));
            assert_eq!(chebyshev(entry, board.inner_coord(color, 0)), 1);
        }
    }

    #[test]
    fn test_standard_home_anchors() {
        let board = BoardTopology::standard();
        assert_eq!(board.home_anchor(Color::Red), Coord::new(9, 1));
        assert_eq!(board.home_anchor(Color::Blue), Coord::new(1, 3));
        assert_eq!(board.home_anchor(Color::Yellow), Coord::new(3, 11));
        assert_eq!(board.home_anchor(Color::Green), Coord::new(11, 9));
    }

    #[test]
    fn test_entry_cell_wraps() {
        let board = BoardTopology::standard();
        // Start 33 + threshold 42 wraps past cell 43.
        assert_eq!(board.entry_cell(Color::Green), 31);
    }

    #[test]
    fn test_rejects_empty_track() {
        let lanes = ColorMap::new(|_| ColorLane::new(0, 1, vec![Coord::new(0, 0); 6], Coord::new(0, 0)));
        let err = BoardTopology::new(1, vec![], [], lanes).unwrap_err();
        assert_eq!(err, TopologyError::EmptyTrack);
    }

    #[test]
    fn test_rejects_start_cell_out_of_range() {
        let track = vec![Coord::new(0, 0); 10];
        let lanes = ColorMap::new(|c| {
            let start = if c == Color::Yellow { 10 } else { 0 };
            ColorLane::new(start, 5, vec![Coord::new(0, 0); 6], Coord::new(0, 0))
        });
        let err = BoardTopology::new(1, track, [], lanes).unwrap_err();
        assert_eq!(
            err,
            TopologyError::StartCellOutOfRange {
                color: Color::Yellow,
                cell: 10
            }
        );
    }

    #[test]
    fn test_rejects_zero_threshold() {
        let track = vec![Coord::new(0, 0); 10];
        let lanes =
            ColorMap::new(|_| ColorLane::new(0, 0, vec![Coord::new(0, 0); 6], Coord::new(0, 0)));
        let err = BoardTopology::new(1, track, [], lanes).unwrap_err();
        assert!(matches!(err, TopologyError::EntryThresholdOutOfRange { .. }));
    }

    #[test]
    fn test_rejects_short_inner_path() {
        let track = vec![Coord::new(0, 0); 10];
        let lanes =
            ColorMap::new(|_| ColorLane::new(0, 5, vec![Coord::new(0, 0); 3], Coord::new(0, 0)));
        let err = BoardTopology::new(1, track, [], lanes).unwrap_err();
        assert_eq!(
            err,
            TopologyError::InnerPathTooShort {
                color: Color::Red,
                len: 3
            }
        );
    }

    #[test]
    fn test_rejects_safe_cell_out_of_range() {
        let track = vec![Coord::new(0, 0); 10];
        let lanes =
            ColorMap::new(|_| ColorLane::new(0, 5, vec![Coord::new(0, 0); 6], Coord::new(0, 0)));
        let err = BoardTopology::new(1, track, [42], lanes).unwrap_err();
        assert_eq!(err, TopologyError::SafeCellOutOfRange { cell: 42 });
    }

    #[test]
    fn test_serde_round_trip() {
        let board = BoardTopology::standard();
        let json = serde_json::to_string(&board).unwrap();
        let restored: BoardTopology = serde_json::from_str(&json).unwrap();
        assert_eq!(board, restored);
    }
}
