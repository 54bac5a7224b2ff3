//! Turn state: whose turn it is, where in the roll-move cycle the game
//! stands, and the record of what already happened.
//!
//! ## Phases
//!
//! The roll-move cycle is a small state machine. Its phases are mutually
//! exclusive by construction - one enum replaces the cluster of booleans
//! (`pending choice`, `resolving`, `game over`) a UI would otherwise have
//! to keep consistent:
//!
//! ```text
//! AwaitingRoll --roll--> AwaitingChoice --choose--> Resolving
//!      ^    \________________(single eligible)________^  |
//!      |_________________________________________________|
//!                    (steps exhausted, no win)
//! ```
//!
//! `GameOver` is terminal; nothing leaves it.

use crate::core::Color;
use crate::pieces::{PieceIndex, PieceLocation};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A move being driven one cell at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveInFlight {
    /// Color moving.
    pub color: Color,
    /// Piece moving.
    pub piece: PieceIndex,
    /// The roll that produced the move.
    pub dice: u8,
    /// Where the piece stood when the move began.
    pub from: PieceLocation,
    /// Where the piece stands right now.
    pub location: PieceLocation,
    /// Steps not yet taken.
    pub steps_remaining: u8,
}

/// Phase of the roll-move cycle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for the current color to roll.
    AwaitingRoll,
    /// The roll offered more than one piece; waiting for a selection.
    AwaitingChoice {
        dice: u8,
        eligible: SmallVec<[PieceIndex; 4]>,
    },
    /// A move is in flight.
    Resolving(MoveInFlight),
    /// A color won. Terminal.
    GameOver { winner: Color },
}

/// Whose turn it is and where the cycle stands.
///
/// Owned and mutated exclusively by the engine; consumers read it through
/// borrows or snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// Color whose turn it is.
    pub current: Color,
    /// The most recent roll, if any.
    pub last_dice: Option<u8>,
    /// Completed roll cycles so far plus one; starts at 1.
    pub turn_number: u32,
    /// Where the cycle stands.
    pub phase: TurnPhase,
}

impl TurnState {
    pub(crate) fn new(first: Color) -> Self {
        Self {
            current: first,
            last_dice: None,
            turn_number: 1,
            phase: TurnPhase::AwaitingRoll,
        }
    }

    /// The winning color, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        match self.phase {
            TurnPhase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// The pending roll and its eligible pieces, while a selection is
    /// awaited.
    #[must_use]
    pub fn pending_choice(&self) -> Option<(u8, &[PieceIndex])> {
        match &self.phase {
            TurnPhase::AwaitingChoice { dice, eligible } => Some((*dice, eligible.as_slice())),
            _ => None,
        }
    }

    /// Whether a move is currently in flight.
    #[must_use]
    pub fn is_resolving(&self) -> bool {
        matches!(self.phase, TurnPhase::Resolving(_))
    }
}

/// What one roll produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnAction {
    /// No piece could use the roll.
    NoEligibleMoves,
    /// A piece left the home yard onto its start cell.
    EnteredPlay { piece: PieceIndex },
    /// A piece advanced to `to`.
    Moved { piece: PieceIndex, to: PieceLocation },
}

/// One completed roll cycle, as kept in the game history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number at the time of the roll.
    pub turn: u32,
    /// Color that rolled.
    pub color: Color,
    /// The roll.
    pub dice: u8,
    /// What it produced.
    pub action: TurnAction,
}
