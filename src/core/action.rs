//! Committed moves.
//!
//! Every half-move that changes the board is recorded as a `MoveRecord`.
//! Rejected attempts are never recorded.

use serde::{Deserialize, Serialize};

use super::cell::Coord;
use super::color::Color;

/// A committed half-move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveRecord {
    /// Chaos put a drawn piece on an empty cell.
    Placement { round: u32, color: Color, at: Coord },
    /// Order slid a piece along a row or column. `from == to` is a pass.
    Relocation { round: u32, from: Coord, to: Coord },
}

impl MoveRecord {
    /// Round in which the move was made (1-based).
    #[must_use]
    pub fn round(&self) -> u32 {
        match *self {
            MoveRecord::Placement { round, .. } | MoveRecord::Relocation { round, .. } => round,
        }
    }

    /// Whether this is an Order pass.
    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, MoveRecord::Relocation { from, to, .. } if from == to)
    }
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveRecord::Placement { round, color, at } => {
                write!(f, "round {round}: Chaos placed {color} at {at}")
            }
            MoveRecord::Relocation { round, from, to } if from == to => {
                write!(f, "round {round}: Order passed")
            }
            MoveRecord::Relocation { round, from, to } => {
                write!(f, "round {round}: Order moved {from} to {to}")
            }
        }
    }
}
