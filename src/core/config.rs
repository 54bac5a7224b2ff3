//! Game configuration.
//!
//! One engine serves every variant; games configure it at setup with:
//! - which colors play, in turn order
//! - how many pieces each color fields
//! - whether rolling the highest face keeps the turn
//! - the board topology
//!
//! `two_player_classic()` and `four_player()` are ready-made presets.

use crate::board::{BoardTopology, TopologyError};
use crate::core::Color;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

/// Invalid game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a game needs at least two colors, got {count}")]
    TooFewColors { count: usize },
    #[error("{0} appears more than once in the turn order")]
    DuplicateColor(Color),
    #[error("every color needs at least one piece")]
    NoPieces,
    #[error(transparent)]
    Topology(#[from] TopologyError),
}

/// Everything that varies between game variants.
///
/// ## Example
///
/// ```
/// use ludo_engine::core::{Color, GameConfig};
///
/// let config = GameConfig::new(&[Color::Red, Color::Blue, Color::Green])
///     .with_pieces_per_color(2)
///     .retain_turn_on_six();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Active colors, in turn order.
    pub colors: SmallVec<[Color; 4]>,

    /// Pieces each color fields.
    pub pieces_per_color: u8,

    /// Whether rolling the highest face keeps the turn, whether or not
    /// the roll produced a move.
    pub retain_turn_on_six: bool,

    /// The board this game is played on.
    pub topology: BoardTopology,
}

impl GameConfig {
    /// Create a configuration with the given turn order and defaults:
    /// four pieces per color, no turn retention, the standard board.
    #[must_use]
    pub fn new(colors: &[Color]) -> Self {
        Self {
            colors: colors.iter().copied().collect(),
            pieces_per_color: 4,
            retain_turn_on_six: false,
            topology: BoardTopology::standard(),
        }
    }

    /// Set how many pieces each color fields.
    #[must_use]
    pub fn with_pieces_per_color(mut self, count: u8) -> Self {
        self.pieces_per_color = count;
        self
    }

    /// Keep the turn after rolling the highest face.
    #[must_use]
    pub fn retain_turn_on_six(mut self) -> Self {
        self.retain_turn_on_six = true;
        self
    }

    /// Play on a custom board.
    #[must_use]
    pub fn with_topology(mut self, topology: BoardTopology) -> Self {
        self.topology = topology;
        self
    }

    /// The classic two-player duel: red and yellow, two pieces each,
    /// turns always alternate.
    #[must_use]
    pub fn two_player_classic() -> Self {
        Self::new(&[Color::Red, Color::Yellow]).with_pieces_per_color(2)
    }

    /// Classic four-player rules: all colors, four pieces each, a six
    /// rolls again.
    #[must_use]
    pub fn four_player() -> Self {
        Self::new(&Color::ALL).retain_turn_on_six()
    }

    /// Check the configuration, including the board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.colors.len() < 2 {
            return Err(ConfigError::TooFewColors {
                count: self.colors.len(),
            });
        }
        for (i, &color) in self.colors.iter().enumerate() {
            if self.colors[..i].contains(&color) {
                return Err(ConfigError::DuplicateColor(color));
            }
        }
        if self.pieces_per_color == 0 {
            return Err(ConfigError::NoPieces);
        }
        self.topology.validate()?;
        Ok(())
    }

    /// The color whose turn follows `color`, cyclically.
    ///
    /// Panics if `color` is not in the turn order.
    #[must_use]
    pub fn next_color(&self, color: Color) -> Color {
        let pos = self
            .colors
            .iter()
            .position(|&c| c == color)
            .expect("color takes part in this game");
        self.colors[(pos + 1) % self.colors.len()]
    }
}
