//! Piece colors and per-color data storage.
//!
//! ## Color
//!
//! The four board colors in clockwise board order. A game activates an
//! ordered subset of 2-4 of them (see `GameConfig`).
//!
//! ## ColorMap
//!
//! Per-color data storage backed by a fixed four-slot array for O(1)
//! access. Slots exist for all four colors even when a game activates
//! fewer; inactive slots simply hold the factory value.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A piece color, in clockwise board order.
///
/// The discriminant doubles as the board-arm index: arm `k` of the
/// standard board belongs to `Color::from_index(k)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    Red = 0,
    Blue = 1,
    Yellow = 2,
    Green = 3,
}

impl Color {
    /// Number of colors on the board.
    pub const COUNT: usize = 4;

    /// All colors in clockwise board order.
    ///
    /// ```
    /// use ludo_engine::core::Color;
    ///
    /// assert_eq!(Color::ALL[0], Color::Red);
    /// assert_eq!(Color::ALL[3], Color::Green);
    /// ```
    pub const ALL: [Color; Color::COUNT] = [Color::Red, Color::Blue, Color::Yellow, Color::Green];

    /// Get the board-arm index of this color (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a color by board-arm index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Color> {
        Color::ALL.get(index).copied()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Yellow => "Yellow",
            Color::Green => "Green",
        };
        write!(f, "{name}")
    }
}

/// Per-color data storage with O(1) access.
///
/// Backed by one slot per color. Use `ColorMap::new()` to create with a
/// factory function, or `ColorMap::with_value()` to initialize all slots
/// to the same value.
///
/// ## Example
///
/// ```
/// use ludo_engine::core::{Color, ColorMap};
///
/// // Create with factory
/// let mut scores: ColorMap<i32> = ColorMap::new(|_| 0);
///
/// // Access by color
/// assert_eq!(scores[Color::Red], 0);
///
/// // Modify
/// scores[Color::Yellow] = 7;
/// assert_eq!(scores[Color::Yellow], 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; Color::COUNT],
}

impl<T> ColorMap<T> {
    /// Create a new ColorMap with values from a factory function.
    ///
    /// The factory receives the `Color` for each slot.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            data: std::array::from_fn(|i| factory(Color::ALL[i])),
        }
    }

    /// Create a new ColorMap with all slots set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new ColorMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a color's data.
    #[must_use]
    pub fn get(&self, color: Color) -> &T {
        &self.data[color.index()]
    }

    /// Get a mutable reference to a color's data.
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        &mut self.data[color.index()]
    }

    /// Iterate over (Color, &T) pairs in board order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (Color::ALL[i], v))
    }

    /// Iterate over (Color, &mut T) pairs in board order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Color, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (Color::ALL[i], v))
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        self.get_mut(color)
    }
}
