//! Game rules as pure functions over the store and board.
//!
//! The turn controller owns sequencing; these modules own the rules
//! themselves:
//!
//! - `eligibility`: which pieces a roll may move
//! - `movement`: stepwise and closed-form advancement
//! - `capture`: destination captures and the win condition
//!
//! Nothing here holds state or decides turn order, so every rule is
//! directly testable in isolation.

pub mod capture;
pub mod eligibility;
pub mod movement;

pub use capture::{is_win, resolve_captures};
pub use eligibility::eligible_pieces;
pub use movement::{advance, step_location, steps_for_roll};
