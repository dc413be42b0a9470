//! Board cells and coordinates.
//!
//! ## Cell
//!
//! A cell holds at most one piece. Equality is by color value, so two empty
//! cells compare equal.
//!
//! ## Coord
//!
//! A coordinate as handed over by a collaborator. It is signed and
//! unchecked; the board validates it on use.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// A single board position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    color: Option<Color>,
}

impl Cell {
    /// An empty cell.
    #[must_use]
    pub const fn empty() -> Self {
        Self { color: None }
    }

    /// A cell holding a piece of `color`.
    #[must_use]
    pub const fn with_color(color: Color) -> Self {
        Self { color: Some(color) }
    }

    /// The piece color, if any.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        self.color
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.color.is_none()
    }

    /// Put a piece in this cell, overwriting whatever was there.
    pub fn drop_piece(&mut self, color: Color) {
        self.color = Some(color);
    }

    /// Remove and return the piece, leaving the cell empty.
    pub fn take_piece(&mut self) -> Option<Color> {
        self.color.take()
    }
}

/// Row/column coordinate, possibly off the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}
