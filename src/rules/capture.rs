//! Captures and the win condition.
//!
//! Both rules look only at a finished move: captures at the final
//! destination cell, the win check over the mover's whole set. Nothing
//! here runs mid-move.

use crate::board::BoardTopology;
use crate::core::Color;
use crate::pieces::{PieceIndex, PieceLocation, PieceStore};
use smallvec::SmallVec;

/// Capture every opponent piece standing on the destination cell.
///
/// Applies only when the destination is a non-safe track cell; inner-path
/// and finished destinations never capture, and pieces off the track are
/// immune. All co-located opponents are captured together - there is no
/// blocking rule. Captured pieces return to their home yard. Returns the
/// captured pieces in configured color order then ascending piece index.
pub fn resolve_captures(
    store: &mut PieceStore,
    board: &BoardTopology,
    mover: Color,
    destination: PieceLocation,
) -> SmallVec<[(Color, PieceIndex); 4]> {
    let Some(cell) = destination.track_cell() else {
        return SmallVec::new();
    };
    if board.is_safe_cell(cell) {
        return SmallVec::new();
    }

    let captured: SmallVec<[(Color, PieceIndex); 4]> = store
        .track_occupants(cell)
        .into_iter()
        .filter(|&(color, _)| color != mover)
        .collect();
    for &(color, piece) in &captured {
        store.send_home(color, piece);
    }
    captured
}

/// Whether `color` has brought every piece to the goal.
#[must_use]
pub fn is_win(store: &PieceStore, color: Color) -> bool {
    store.all_finished(color)
}
