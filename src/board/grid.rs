//! The 7x7 grid.
//!
//! `Board` stores no rules. It checks bounds and nothing else: dropping on an
//! occupied cell or moving through other pieces is the caller's business.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::run::Run;
use crate::core::{Cell, Color, Coord, EntropyError, Result, BOARD_SIZE, COLOR_COUNT};

/// Fixed-size grid of cells addressed by `(row, col)`.
///
/// ```
/// use entropy_engine::board::Board;
/// use entropy_engine::core::Color;
///
/// let mut board = Board::new();
/// board.drop_piece(Color::Red, 3, 4).unwrap();
/// assert!(!board.is_empty(3, 4).unwrap());
/// assert!(board.drop_piece(Color::Red, 7, 0).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from a 7x7 grid of optional color indices.
    pub fn from_layout(layout: &[Vec<Option<u8>>]) -> Result<Self> {
        if layout.len() != BOARD_SIZE {
            let cols = layout.first().map_or(0, Vec::len);
            return Err(EntropyError::InvalidBoardSize {
                rows: layout.len(),
                cols,
            });
        }
        if let Some(bad) = layout.iter().find(|r| r.len() != BOARD_SIZE) {
            return Err(EntropyError::InvalidBoardSize {
                rows: layout.len(),
                cols: bad.len(),
            });
        }

        let mut board = Self::new();
        for (r, row) in layout.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                if let Some(index) = *value {
                    board.cells[r][c].drop_piece(Color::from_index(index)?);
                }
            }
        }
        Ok(board)
    }

    /// Whether `(row, col)` lies on the board.
    #[must_use]
    pub fn is_inside(row: i32, col: i32) -> bool {
        let max = BOARD_SIZE as i32 - 1;
        (0..=max).contains(&row) && (0..=max).contains(&col)
    }

    fn index(row: i32, col: i32) -> Result<(usize, usize)> {
        if Self::is_inside(row, col) {
            Ok((row as usize, col as usize))
        } else {
            Err(EntropyError::OutOfBounds { row, col })
        }
    }

    /// The cell at `(row, col)`.
    pub fn get(&self, row: i32, col: i32) -> Result<Cell> {
        let (r, c) = Self::index(row, col)?;
        Ok(self.cells[r][c])
    }

    pub fn is_empty(&self, row: i32, col: i32) -> Result<bool> {
        Ok(self.get(row, col)?.is_empty())
    }

    /// Put `color` at `(row, col)`, overwriting any piece already there.
    pub fn drop_piece(&mut self, color: Color, row: i32, col: i32) -> Result<()> {
        let (r, c) = Self::index(row, col)?;
        self.cells[r][c].drop_piece(color);
        Ok(())
    }

    /// Remove and return the piece at `(row, col)`.
    pub fn take_piece(&mut self, row: i32, col: i32) -> Result<Option<Color>> {
        let (r, c) = Self::index(row, col)?;
        Ok(self.cells[r][c].take_piece())
    }

    /// Move the contents of one cell to another.
    ///
    /// Both endpoints are bounds-checked before anything changes. The
    /// destination is overwritten; an empty source empties the destination.
    pub fn move_piece(&mut self, row1: i32, col1: i32, row2: i32, col2: i32) -> Result<()> {
        let (r1, c1) = Self::index(row1, col1)?;
        let (r2, c2) = Self::index(row2, col2)?;

        let piece = self.cells[r1][c1].take_piece();
        let target = &mut self.cells[r2][c2];
        match piece {
            Some(color) => target.drop_piece(color),
            None => {
                target.take_piece();
            }
        }
        Ok(())
    }

    /// Swap rows and columns in place.
    pub fn transpose(&mut self) {
        for r in 0..BOARD_SIZE {
            for c in (r + 1)..BOARD_SIZE {
                let upper = self.cells[r][c];
                self.cells[r][c] = self.cells[c][r];
                self.cells[c][r] = upper;
            }
        }
    }

    /// A transposed copy.
    #[must_use]
    pub fn transposed(&self) -> Self {
        let mut copy = *self;
        copy.transpose();
        copy
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_SIZE]> {
        self.cells.iter()
    }

    /// One row of cells.
    pub fn row(&self, row: usize) -> Result<&[Cell; BOARD_SIZE]> {
        self.cells.get(row).ok_or(EntropyError::OutOfBounds {
            row: i32::try_from(row).unwrap_or(i32::MAX),
            col: 0,
        })
    }

    /// Every contiguous run of two or more non-empty cells in `row`.
    ///
    /// Overlapping runs are all returned: a row of four pieces yields three
    /// runs of length 2, two of length 3 and one of length 4.
    pub fn row_runs(&self, row: usize) -> Result<Vec<Run>> {
        let cells = self.row(row)?;
        let mut runs = Vec::new();

        for start in 0..BOARD_SIZE - 1 {
            for end in (start + 2)..=BOARD_SIZE {
                let slice = &cells[start..end];
                let colors: Option<SmallVec<[Color; BOARD_SIZE]>> =
                    slice.iter().map(|cell| cell.color()).collect();
                if let Some(colors) = colors {
                    runs.push(Run::new(row, start, colors));
                }
            }
        }

        Ok(runs)
    }

    /// Runs of every row, top to bottom.
    #[must_use]
    pub fn all_row_runs(&self) -> Vec<Run> {
        (0..BOARD_SIZE)
            .flat_map(|row| self.row_runs(row).unwrap_or_default())
            .collect()
    }

    /// Number of pieces on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Pieces on the board per color, indexed by `Color::index`.
    #[must_use]
    pub fn color_counts(&self) -> [usize; COLOR_COUNT] {
        let mut counts = [0; COLOR_COUNT];
        for color in self.cells.iter().flatten().filter_map(|cell| cell.color()) {
            counts[color.index()] += 1;
        }
        counts
    }

    /// Coordinates of all empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        Self::coords().filter(move |c| self.cells[c.row as usize][c.col as usize].is_empty())
    }

    /// Coordinates of all occupied cells in row-major order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        Self::coords().filter(move |c| !self.cells[c.row as usize][c.col as usize].is_empty())
    }

    fn coords() -> impl Iterator<Item = Coord> {
        let size = BOARD_SIZE as i32;
        (0..size).flat_map(move |row| (0..size).map(move |col| Coord::new(row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_layout() -> Vec<Vec<Option<u8>>> {
        vec![
            vec![Some(0), Some(0), Some(1), None, Some(2), Some(3), Some(4)],
            vec![Some(0), Some(0), Some(5), None, Some(2), Some(3), None],
            vec![None, None, Some(1), None, Some(2), None, Some(4)],
            vec![Some(0), None, Some(5), None, None, Some(3), Some(4)],
            vec![None, None, Some(3), None, Some(1), None, Some(4)],
            vec![Some(0), None, Some(4), None, Some(6), Some(3), None],
            vec![Some(0), None, None, None, Some(6), Some(2), Some(1)],
        ]
    }

    #[test]
    fn test_bounds() {
        assert!(Board::is_inside(0, 0));
        assert!(Board::is_inside(6, 6));
        assert!(!Board::is_inside(7, 0));
        assert!(!Board::is_inside(0, 7));
        assert!(!Board::is_inside(-1, 3));
    }

    #[test]
    fn test_out_of_bounds_operations() {
        let mut board = Board::new();
        assert!(matches!(
            board.drop_piece(Color::Red, 7, 0),
            Err(EntropyError::OutOfBounds { row: 7, col: 0 })
        ));
        assert!(board.is_empty(0, -1).is_err());
        assert!(board.move_piece(0, 0, 0, 7).is_err());
        assert!(board.row_runs(7).is_err());
    }

    #[test]
    fn test_from_layout() {
        let board = Board::from_layout(&sample_layout()).unwrap();

        assert!(board.is_empty(0, 3).unwrap());
        assert!(board.is_empty(1, 3).unwrap());
        assert!(!board.is_empty(0, 0).unwrap());
        assert_eq!(board.get(5, 4).unwrap().color(), Some(Color::Cyan));
        assert_eq!(board.piece_count(), 29);
    }

    #[test]
    fn test_from_layout_wrong_size() {
        let mut layout = sample_layout();
        layout.pop();
        assert!(matches!(
            Board::from_layout(&layout),
            Err(EntropyError::InvalidBoardSize { rows: 6, cols: 7 })
        ));

        let mut layout = sample_layout();
        layout[2].push(None);
        assert!(matches!(
            Board::from_layout(&layout),
            Err(EntropyError::InvalidBoardSize { rows: 7, cols: 8 })
        ));
    }

    #[test]
    fn test_from_layout_bad_color() {
        let mut layout = sample_layout();
        layout[0][3] = Some(9);
        assert!(matches!(Board::from_layout(&layout), Err(EntropyError::InvalidColor(9))));
    }

    #[test]
    fn test_drop_and_move() {
        let mut board = Board::from_layout(&sample_layout()).unwrap();

        board.drop_piece(Color::Blue, 0, 3).unwrap();
        assert!(!board.is_empty(0, 3).unwrap());
        assert_eq!(board.get(0, 3).unwrap().color(), Some(Color::Blue));

        board.move_piece(0, 3, 1, 3).unwrap();
        assert!(board.is_empty(0, 3).unwrap());
        assert_eq!(board.get(1, 3).unwrap().color(), Some(Color::Blue));
    }

    #[test]
    fn test_move_to_same_cell_keeps_piece() {
        let mut board = Board::new();
        board.drop_piece(Color::Green, 2, 2).unwrap();
        board.move_piece(2, 2, 2, 2).unwrap();
        assert_eq!(board.get(2, 2).unwrap().color(), Some(Color::Green));
    }

    #[test]
    fn test_transpose() {
        let mut board = Board::from_layout(&sample_layout()).unwrap();
        let original = board;

        board.transpose();
        assert_eq!(board.get(0, 1).unwrap(), original.get(1, 0).unwrap());
        assert_eq!(board.get(6, 5).unwrap(), original.get(5, 6).unwrap());

        board.transpose();
        assert_eq!(board, original);
        assert_eq!(original.transposed().transposed(), original);
    }

    #[test]
    fn test_row_runs_exhaustive() {
        let mut board = Board::new();
        for col in 0..4 {
            board.drop_piece(Color::Red, 0, col).unwrap();
        }

        let runs = board.row_runs(0).unwrap();
        let lengths: Vec<_> = runs.iter().map(Run::len).collect();
        assert_eq!(lengths, vec![2, 3, 4, 2, 3, 2]);
        assert!(runs.iter().all(|run| run.row() == 0));
    }

    #[test]
    fn test_row_runs_skip_gaps() {
        let board = Board::from_layout(&sample_layout()).unwrap();

        // [0, 0, 1, _, 2, 3, 4]
        let runs = board.row_runs(0).unwrap();
        assert_eq!(runs.len(), 3 + 3);
        assert!(runs.iter().all(|run| run.start() + run.len() <= 3 || run.start() >= 4));

        // [_, _, 1, _, 2, _, 4]
        assert!(board.row_runs(2).unwrap().is_empty());
    }

    #[test]
    fn test_counts() {
        let board = Board::from_layout(&sample_layout()).unwrap();
        let counts = board.color_counts();
        assert_eq!(counts.iter().sum::<usize>(), board.piece_count());
        assert_eq!(counts[Color::Red.index()], 7);
        assert_eq!(board.empty_cells().count() + board.occupied_cells().count(), 49);
    }

    #[test]
    fn test_row_out_of_range_reports_row() {
        let board = Board::new();
        assert!(matches!(
            board.row(BOARD_SIZE),
            Err(EntropyError::OutOfBounds { row: 7, col: 0 })
        ));
        assert!(matches!(
            board.row(usize::MAX),
            Err(EntropyError::OutOfBounds { row: i32::MAX, col: 0 })
        ));
        assert!(matches!(
            board.row_runs(1 << 40),
            Err(EntropyError::OutOfBounds { row: i32::MAX, .. })
        ));
    }
}
