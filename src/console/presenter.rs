//! Terminal output for a game in progress.

use std::io::Write;

use crate::board::{write_piece, Board};
use crate::core::{Color, EntropyError, Result, Role};
use crate::rules::Presenter;

/// Prints the board and scores to a writer.
pub struct ConsolePresenter<W> {
    output: W,
    colored: bool,
}

impl<W: Write> ConsolePresenter<W> {
    /// `colored` selects colored blocks over letter initials.
    pub fn new(output: W, colored: bool) -> Self {
        Self { output, colored }
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}

fn rejection_message(error: &EntropyError) -> String {
    match error {
        EntropyError::OutOfBounds { .. } => "Given coordinates are outside the board! Try again!".into(),
        EntropyError::CellOccupied { .. } => "This field is occupied! Try again!".into(),
        EntropyError::CellEmpty { .. } => "This field is empty! Try again!".into(),
        EntropyError::NotAdmissible { .. } => "This move is not admissible! Try again!".into(),
        other => format!("{other}! Try again!"),
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn show_board(&mut self, board: &Board) -> Result<()> {
        board.render(&mut self.output, self.colored)?;
        Ok(())
    }

    fn show_drawn(&mut self, piece: Color) -> Result<()> {
        write!(self.output, "You picked: ")?;
        write_piece(&mut self.output, piece, self.colored)?;
        writeln!(self.output, " ({piece})")?;
        Ok(())
    }

    fn show_score(&mut self, score: u32) -> Result<()> {
        writeln!(self.output, "Current score: {score}")?;
        Ok(())
    }

    fn show_rejection(&mut self, _role: Role, error: &EntropyError) -> Result<()> {
        writeln!(self.output, "{}", rejection_message(error))?;
        Ok(())
    }

    fn show_final_score(&mut self, score: u32) -> Result<()> {
        writeln!(self.output, "Final score: {score}")?;
        self.output.flush()?;
        Ok(())
    }
}
