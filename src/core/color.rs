//! Piece colors.
//!
//! There are exactly seven colors, identified by indices `0..=6`. The
//! numbering is part of the rules (layouts are supplied as indices) so the
//! discriminants are fixed.

use serde::{Deserialize, Serialize};

use super::config::COLOR_COUNT;
use super::error::{EntropyError, Result};

/// One of the seven piece colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    Red = 0,
    Blue = 1,
    Yellow = 2,
    Green = 3,
    White = 4,
    Magenta = 5,
    Cyan = 6,
}

impl Color {
    /// All colors in index order.
    pub const ALL: [Color; COLOR_COUNT] = [
        Color::Red,
        Color::Blue,
        Color::Yellow,
        Color::Green,
        Color::White,
        Color::Magenta,
        Color::Cyan,
    ];

    /// Look up a color by its index.
    ///
    /// ```
    /// use entropy_engine::core::Color;
    ///
    /// assert_eq!(Color::from_index(2).unwrap(), Color::Yellow);
    /// assert!(Color::from_index(7).is_err());
    /// ```
    pub fn from_index(index: u8) -> Result<Self> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(EntropyError::InvalidColor(index))
    }

    /// The color's index in `0..=6`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::White => "white",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
