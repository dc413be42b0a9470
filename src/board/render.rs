//! Text rendering of the board.
//!
//! Column indices across the top, row index at the start of each line, `X`
//! for an empty cell. Pieces are a colored block (terminal background via
//! `crossterm`) or the color's initial in plain mode.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color as TermColor, Print, ResetColor, SetBackgroundColor};

use super::grid::Board;
use crate::core::{Color, BOARD_SIZE};

fn background(color: Color) -> TermColor {
    match color {
        Color::Red => TermColor::DarkRed,
        Color::Blue => TermColor::DarkBlue,
        Color::Yellow => TermColor::DarkYellow,
        Color::Green => TermColor::DarkGreen,
        Color::White => TermColor::White,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
    }
}

fn initial(color: Color) -> char {
    match color {
        Color::Red => 'R',
        Color::Blue => 'B',
        Color::Yellow => 'Y',
        Color::Green => 'G',
        Color::White => 'W',
        Color::Magenta => 'M',
        Color::Cyan => 'C',
    }
}

/// Write a single piece swatch.
pub fn write_piece<W: Write>(out: &mut W, color: Color, colored: bool) -> io::Result<()> {
    if colored {
        queue!(out, SetBackgroundColor(background(color)), Print(' '), ResetColor)
    } else {
        write!(out, "{}", initial(color))
    }
}

impl Board {
    /// Draw the board to `out`.
    pub fn render<W: Write>(&self, out: &mut W, colored: bool) -> io::Result<()> {
        write!(out, " ")?;
        for col in 0..BOARD_SIZE {
            write!(out, "{col}")?;
        }
        writeln!(out)?;

        for (row, cells) in self.rows().enumerate() {
            write!(out, "{row}")?;
            for cell in cells {
                match cell.color() {
                    Some(color) => write_piece(out, color, colored)?,
                    None => write!(out, "X")?,
                }
            }
            writeln!(out)?;
        }
        Ok(())
    }
}
