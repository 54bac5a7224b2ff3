//! The turn controller and everything it reports.
//!
//! `LudoEngine` owns the game: dice, eligibility, moves, captures, the
//! win check, turn succession, history, and the event queue. The other
//! modules here are its vocabulary:
//!
//! - `turn`: the phase state machine, in-flight moves, history records
//! - `event`: the informational event stream
//! - `controller`: `LudoEngine` itself plus `LudoGameBuilder`

pub mod controller;
pub mod event;
pub mod turn;

pub use controller::{
    ActionRejected, GameSnapshot, LudoEngine, LudoGameBuilder, MoveProgress, MoveSummary,
    RollOutcome,
};
pub use event::GameEvent;
pub use turn::{MoveInFlight, TurnAction, TurnPhase, TurnRecord, TurnState};
