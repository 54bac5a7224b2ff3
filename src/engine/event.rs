//! Events the engine emits for consumers.
//!
//! Events are informational, not control flow: the engine never waits on
//! a consumer, and dropping them changes nothing about the game. A UI
//! typically drains the queue after each action and plays sounds or
//! alerts from it.

use crate::core::Color;
use crate::pieces::PieceIndex;
use serde::{Deserialize, Serialize};

/// Something a consumer may want to react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// An opponent piece was standing on the destination cell and went
    /// back to its home yard.
    PieceCaptured {
        victim: Color,
        piece: PieceIndex,
        by: Color,
        cell: u8,
    },
    /// A piece reached the goal cell.
    PieceFinished { color: Color, piece: PieceIndex },
    /// A color brought its last piece to the goal. The game is over.
    ColorWon { color: Color },
}
