//! # ludo-engine
//!
//! A parameterized Ludo turn and movement engine for 2-4 players.
//!
//! ## Design Principles
//!
//! 1. **Variant-Agnostic**: No hardcoded player count, board, or house
//!    rules. One engine serves every variant through `GameConfig`.
//!
//! 2. **Rules as Pure Functions**: Eligibility, movement, and captures
//!    are free functions over the store and board; only the controller
//!    holds state.
//!
//! 3. **UI at Arm's Length**: Renderers read snapshots, drive animation
//!    through the step API, and listen to events. They never mutate game
//!    state - the store's write surface is crate-internal.
//!
//! ## Architecture
//!
//! - **One Phase Machine**: The roll-move cycle is a single `TurnPhase`
//!   enum; invalid actions are silently rejected with a typed reason and
//!   leave state untouched.
//!
//! - **Deterministic Dice**: Seeded ChaCha8 rolls, replayable run for
//!   run; `DiceRoller` is the seam for scripted dice.
//!
//! - **Cheap Snapshots**: History rides in a persistent `im` vector, so
//!   cloning a full game view is O(1) on the history.
//!
//! ## Modules
//!
//! - `core`: Colors, dice, configuration
//! - `board`: Track topology, lanes, safe cells, grid coordinates
//! - `pieces`: Piece locations and the store that owns them
//! - `rules`: Eligibility, movement, captures, the win condition
//! - `engine`: The turn controller, events, history, snapshots

pub mod board;
pub mod core;
pub mod engine;
pub mod pieces;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Color, ColorMap, ConfigError, DiceRng, DiceRoller, GameConfig, DICE_FACES};

pub use crate::board::{BoardTopology, ColorLane, Coord, TopologyError};

pub use crate::pieces::{PieceIndex, PieceLocation, PieceStore};

pub use crate::rules::{advance, eligible_pieces, is_win, resolve_captures, step_location, steps_for_roll};

pub use crate::engine::{
    ActionRejected, GameEvent, GameSnapshot, LudoEngine, LudoGameBuilder, MoveInFlight,
    MoveProgress, MoveSummary, RollOutcome, TurnAction, TurnPhase, TurnRecord, TurnState,
};
