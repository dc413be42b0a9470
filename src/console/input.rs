//! Line-based coordinate input.

use std::io::{BufRead, Write};

use tracing::trace;

use crate::board::Board;
use crate::core::{Color, Coord, EntropyError, Result};
use crate::rules::Player;

/// A human at a terminal playing both roles.
///
/// Every coordinate is asked for on its own line. Lines that do not parse
/// as an integer are rejected and asked again; end of input is fatal.
pub struct ConsolePlayer<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
        }
    }

    /// Prompt until the user enters an integer.
    pub fn read_integer(&mut self, prompt: &str) -> Result<i32> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                return Err(EntropyError::InputClosed);
            }
            match self.line.trim().parse::<i32>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    trace!(input = self.line.trim(), "rejected non-integer input");
                    writeln!(self.output, "Input must be an integer!")?;
                }
            }
        }
    }

    fn read_coord(&mut self, row_prompt: &str, col_prompt: &str) -> Result<Coord> {
        let row = self.read_integer(row_prompt)?;
        let col = self.read_integer(col_prompt)?;
        Ok(Coord::new(row, col))
    }
}

impl<R: BufRead, W: Write> Player for ConsolePlayer<R, W> {
    fn choose_placement(&mut self, _board: &Board, _piece: Color) -> Result<Coord> {
        self.read_coord(
            "In which row would you like to place the piece? ",
            "In which column would you like to place the piece? ",
        )
    }

    fn choose_relocation(&mut self, _board: &Board) -> Result<(Coord, Coord)> {
        let from = self.read_coord(
            "Row of the piece you want to move: ",
            "Column of the piece you want to move: ",
        )?;
        let to = self.read_coord("Row of the destination: ", "Column of the destination: ")?;
        Ok((from, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_retries_until_integer() {
        let input = Cursor::new("abc\n\n 4 \n");
        let mut out = Vec::new();
        let mut player = ConsolePlayer::new(input, &mut out);

        assert_eq!(player.read_integer("n? ").unwrap(), 4);
        drop(player);

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Input must be an integer!").count(), 2);
        assert_eq!(text.matches("n? ").count(), 3);
    }

    #[test]
    fn test_negative_numbers_parse() {
        let mut player = ConsolePlayer::new(Cursor::new("-1\n"), Vec::new());
        assert_eq!(player.read_integer("").unwrap(), -1);
    }

    #[test]
    fn test_end_of_input() {
        let mut player = ConsolePlayer::new(Cursor::new("x\n"), Vec::new());
        assert!(matches!(player.read_integer(""), Err(EntropyError::InputClosed)));
    }

    #[test]
    fn test_relocation_reads_four_numbers() {
        let mut player = ConsolePlayer::new(Cursor::new("1\n2\n1\n5\n"), Vec::new());
        let (from, to) = player.choose_relocation(&Board::new()).unwrap();
        assert_eq!(from, Coord::new(1, 2));
        assert_eq!(to, Coord::new(1, 5));
    }
}
