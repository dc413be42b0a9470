//! Contiguous runs of pieces within a row.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Color, BOARD_SIZE};
use crate::scoring::is_symmetric;

/// A contiguous sequence of two or more non-empty cells in one row.
///
/// Runs never hold more than a full row, so the colors live inline.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Run {
    row: usize,
    start: usize,
    colors: SmallVec<[Color; BOARD_SIZE]>,
}

impl Run {
    pub(crate) fn new(row: usize, start: usize, colors: SmallVec<[Color; BOARD_SIZE]>) -> Self {
        Self { row, start, colors }
    }

    /// Row the run was taken from.
    #[must_use]
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column of the first cell.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Whether the colors read the same forwards and backwards.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        is_symmetric(&self.colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_run_accessors() {
        let run = Run::new(2, 3, smallvec![Color::Red, Color::Blue, Color::Red]);
        assert_eq!(run.row(), 2);
        assert_eq!(run.start(), 3);
        assert_eq!(run.len(), 3);
        assert!(!run.is_empty());
        assert!(run.is_symmetric());
    }

    #[test]
    fn test_asymmetric_run() {
        let run = Run::new(0, 0, smallvec![Color::Red, Color::Blue]);
        assert!(!run.is_symmetric());
    }
}
