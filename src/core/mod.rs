//! Core engine types: colors, dice, configuration.
//!
//! This module contains the fundamental building blocks shared by every
//! game variant. Variants configure these via `GameConfig` rather than
//! modifying the engine.

pub mod color;
pub mod config;
pub mod rng;

pub use color::{Color, ColorMap};
pub use config::{ConfigError, GameConfig};
pub use rng::{DiceRng, DiceRoller, DICE_FACES};
