//! Which pieces may move for a given roll.
//!
//! Eligibility is decided once, when the dice land. A piece that cannot
//! legally use the whole roll is simply not offered; partial moves do not
//! exist anywhere in the engine.

use crate::board::BoardTopology;
use crate::core::{Color, DICE_FACES};
use crate::pieces::{PieceIndex, PieceLocation, PieceStore};
use smallvec::SmallVec;

/// Pieces of `color` that may move with `dice`, ascending piece index.
///
/// - `Home` pieces need the highest face to enter play.
/// - Track pieces can always move: topology validation guarantees an
///   inner path long enough for any roll taken from the track.
/// - Inner-path pieces must land on or before the goal cell; an
///   overshooting roll leaves them out of the set.
/// - Finished pieces never move again.
#[must_use]
pub fn eligible_pieces(
    store: &PieceStore,
    board: &BoardTopology,
    color: Color,
    dice: u8,
) -> SmallVec<[PieceIndex; 4]> {
    let mut eligible = SmallVec::new();
    for (piece, location) in store.pieces(color) {
        let can_move = match location {
            PieceLocation::Home => dice == DICE_FACES,
            PieceLocation::OnTrack { .. } => true,
            PieceLocation::InnerPath { index } => {
                let remaining = (board.inner_len(color) - 1) - index;
                dice <= remaining
            }
            PieceLocation::Finished => false,
        };
        if can_move {
            eligible.push(piece);
        }
    }
    eligible
}
