//! Error taxonomy for the rules engine.
//!
//! Per-move violations (`OutOfBounds`, `CellOccupied`, `CellEmpty`,
//! `NotAdmissible`) are recoverable: the turn loop asks the collaborator
//! again. Everything else is a contract violation and surfaces immediately.

use super::cell::Coord;
use super::color::Color;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EntropyError>;

/// Everything that can go wrong while building or playing a game.
#[derive(Debug, thiserror::Error)]
pub enum EntropyError {
    #[error("coordinates ({row}, {col}) are outside the 7x7 board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("cell ({row}, {col}) is occupied")]
    CellOccupied { row: i32, col: i32 },

    #[error("cell ({row}, {col}) is empty")]
    CellEmpty { row: i32, col: i32 },

    #[error("move from {from} to {to} is not admissible")]
    NotAdmissible { from: Coord, to: Coord },

    #[error("the bag is empty")]
    EmptyBag,

    #[error("board layout must be 7x7, got {rows}x{cols}")]
    InvalidBoardSize { rows: usize, cols: usize },

    #[error("color index {0} is not in 0..=6")]
    InvalidColor(u8),

    #[error("expected phase {expected}, but the game is in {actual}")]
    WrongPhase {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Chaos has not drawn a piece yet")]
    NothingDrawn,

    #[error("Chaos drew {drawn} but tried to place {requested}")]
    PieceMismatch { drawn: Color, requested: Color },

    #[error("no empty cell left for Chaos")]
    BoardFull,

    #[error("the game is over")]
    GameOver,

    #[error("input ended before the game finished")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl EntropyError {
    /// Whether the turn loop should re-request input instead of aborting.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            EntropyError::OutOfBounds { .. }
                | EntropyError::CellOccupied { .. }
                | EntropyError::CellEmpty { .. }
                | EntropyError::NotAdmissible { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_split() {
        assert!(EntropyError::OutOfBounds { row: 7, col: 0 }.is_recoverable());
        assert!(EntropyError::CellOccupied { row: 0, col: 0 }.is_recoverable());
        assert!(EntropyError::CellEmpty { row: 0, col: 0 }.is_recoverable());
        assert!(EntropyError::NotAdmissible {
            from: Coord::new(0, 0),
            to: Coord::new(1, 1),
        }
        .is_recoverable());

        assert!(!EntropyError::EmptyBag.is_recoverable());
        assert!(!EntropyError::InvalidBoardSize { rows: 6, cols: 7 }.is_recoverable());
        assert!(!EntropyError::GameOver.is_recoverable());
        assert!(!EntropyError::InputClosed.is_recoverable());
    }

    #[test]
    fn test_messages() {
        let err = EntropyError::InvalidBoardSize { rows: 6, cols: 7 };
        assert_eq!(err.to_string(), "board layout must be 7x7, got 6x7");

        let err = EntropyError::NotAdmissible {
            from: Coord::new(0, 0),
            to: Coord::new(2, 3),
        };
        assert_eq!(err.to_string(), "move from (0, 0) to (2, 3) is not admissible");
    }
}
