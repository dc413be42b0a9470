//! Scoring.
//!
//! The score is the sum of the lengths of every symmetric run in every row
//! and every column. Runs overlap: a row `R R R` scores its three-cell run
//! and both two-cell runs, for 3 + 2 + 2 = 7. Single cells never score.
//!
//! Columns are scored by transposing the board, scoring its rows, and
//! transposing back.

pub mod symmetry;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::board::Board;
use crate::core::BOARD_SIZE;

pub use symmetry::is_symmetric;

/// Score split by row and column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub rows: [u32; BOARD_SIZE],
    pub columns: [u32; BOARD_SIZE],
}

impl ScoreBreakdown {
    #[must_use]
    pub fn row_total(&self) -> u32 {
        self.rows.iter().sum()
    }

    #[must_use]
    pub fn column_total(&self) -> u32 {
        self.columns.iter().sum()
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.row_total() + self.column_total()
    }
}

fn row_scores(board: &Board) -> [u32; BOARD_SIZE] {
    let mut scores = [0; BOARD_SIZE];
    for run in board.all_row_runs() {
        if run.is_symmetric() {
            scores[run.row()] += run.len() as u32;
        }
    }
    scores
}

/// Per-row and per-column scores.
#[must_use]
pub fn breakdown(board: &Board) -> ScoreBreakdown {
    let rows = row_scores(board);

    let mut turned = *board;
    turned.transpose();
    let columns = row_scores(&turned);
    turned.transpose();

    let result = ScoreBreakdown { rows, columns };
    trace!(rows = result.row_total(), columns = result.column_total(), "scored board");
    result
}

/// Score contributed by rows only.
#[must_use]
pub fn score_rows(board: &Board) -> u32 {
    row_scores(board).iter().sum()
}

/// Score contributed by columns only.
#[must_use]
pub fn score_columns(board: &Board) -> u32 {
    score_rows(&board.transposed())
}

/// Total score of the board.
///
/// ```
/// use entropy_engine::board::Board;
/// use entropy_engine::core::Color;
/// use entropy_engine::scoring::score;
///
/// let mut board = Board::new();
/// assert_eq!(score(&board), 0);
///
/// board.drop_piece(Color::Red, 0, 0).unwrap();
/// board.drop_piece(Color::Red, 0, 1).unwrap();
/// assert_eq!(score(&board), 2);
/// ```
#[must_use]
pub fn score(board: &Board) -> u32 {
    breakdown(board).total()
}
