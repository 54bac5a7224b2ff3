//! Piece advancement along the track and inner path.
//!
//! Movement comes in two equivalent forms: `step_location` advances one
//! cell (the unit a UI animates), and `advance` computes the same result
//! in closed form for any step count. Both are pure; neither touches the
//! store or checks collisions - only the final destination of a move is
//! ever evaluated, by the capture rules.

use crate::board::BoardTopology;
use crate::core::Color;
use crate::pieces::PieceLocation;

/// Number of steps a roll moves a piece from `from`.
///
/// Entering from Home consumes the entire roll: the piece takes exactly
/// one step onto its start cell and the rest of the roll is spent. Every
/// other location moves the full dice value.
#[must_use]
pub fn steps_for_roll(dice: u8, from: PieceLocation) -> u8 {
    match from {
        PieceLocation::Home => 1,
        _ => dice,
    }
}

/// Advance a piece exactly one cell.
///
/// From Home the piece lands on its start cell. On the track the piece
/// follows the circuit modulo the track length, except from its entry
/// cell, where the step turns onto the inner path. Callers guarantee the
/// step stays inside the inner path; eligibility makes overshoot
/// impossible.
#[must_use]
pub fn step_location(board: &BoardTopology, color: Color, location: PieceLocation) -> PieceLocation {
    match location {
        PieceLocation::Home => PieceLocation::OnTrack {
            cell: board.start_cell(color),
        },
        PieceLocation::OnTrack { cell } if cell == board.entry_cell(color) => {
            PieceLocation::InnerPath { index: 0 }
        }
        PieceLocation::OnTrack { cell } => PieceLocation::OnTrack {
            cell: (cell + 1) % board.track_len(),
        },
        PieceLocation::InnerPath { index } => {
            debug_assert!(index + 1 < board.inner_len(color), "stepped past the goal");
            PieceLocation::InnerPath { index: index + 1 }
        }
        PieceLocation::Finished => {
            debug_assert!(false, "stepped a finished piece");
            PieceLocation::Finished
        }
    }
}

/// Advance a piece by `steps` cells in one call.
///
/// Equivalent to applying [`step_location`] `steps` times; the stepwise
/// form exists for animation, this one for everything else.
#[must_use]
pub fn advance(
    board: &BoardTopology,
    color: Color,
    location: PieceLocation,
    steps: u8,
) -> PieceLocation {
    if steps == 0 {
        return location;
    }
    match location {
        PieceLocation::Home => {
            let entered = PieceLocation::OnTrack {
                cell: board.start_cell(color),
            };
            advance(board, color, entered, steps - 1)
        }
        PieceLocation::OnTrack { cell } => {
            let len = u16::from(board.track_len());
            let entry = u16::from(board.entry_cell(color));
            let here = u16::from(cell);
            let steps = u16::from(steps);
            // Forward distance to the entry cell; 0 when already on it.
            let to_entry = (entry + len - here) % len;
            if steps <= to_entry {
                PieceLocation::OnTrack {
                    cell: ((here + steps) % len) as u8,
                }
            } else {
                let index = steps - to_entry - 1;
                debug_assert!(index < u16::from(board.inner_len(color)), "stepped past the goal");
                PieceLocation::InnerPath {
                    index: index as u8,
                }
            }
        }
        PieceLocation::InnerPath { index } => {
            let target = u16::from(index) + u16::from(steps);
            debug_assert!(target < u16::from(board.inner_len(color)), "stepped past the goal");
            PieceLocation::InnerPath {
                index: target as u8,
            }
        }
        PieceLocation::Finished => {
            debug_assert!(false, "stepped a finished piece");
            PieceLocation::Finished
        }
    }
}
