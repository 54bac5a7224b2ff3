//! Board description: track cells, per-color lanes, coordinates.
//!
//! Boards are **game-configured**, not hardcoded. A game selects its
//! `BoardTopology` at setup time; `BoardTopology::standard()` is the
//! classic 13x13 cross.
//!
//! ## Key Types
//!
//! - `Coord`: Grid position, consumed by renderers
//! - `ColorLane`: One color's start cell, entry threshold, and inner path
//! - `BoardTopology`: Validated board shared by every game on it
//! - `TopologyError`: Why a board description was rejected

pub mod coord;
pub mod topology;

pub use coord::Coord;
pub use topology::{BoardTopology, ColorLane, TopologyError};
