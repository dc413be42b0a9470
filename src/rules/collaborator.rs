//! Collaborator traits.
//!
//! The engine never reads input or prints anything itself. A `Player`
//! supplies coordinates for both roles and a `Presenter` shows what
//! happened. Both may fail (I/O), and those failures end the game.

use crate::board::Board;
use crate::core::{Color, Coord, EntropyError, Result, Role};

/// Source of moves for both roles.
pub trait Player {
    /// Where Chaos should put `piece`.
    fn choose_placement(&mut self, board: &Board, piece: Color) -> Result<Coord>;

    /// Which piece Order should move and where to. Returning the same
    /// coordinate twice is a pass.
    fn choose_relocation(&mut self, board: &Board) -> Result<(Coord, Coord)>;
}

/// Receiver of game events. All methods default to doing nothing.
pub trait Presenter {
    fn show_board(&mut self, _board: &Board) -> Result<()> {
        Ok(())
    }

    /// The piece Chaos just drew.
    fn show_drawn(&mut self, _piece: Color) -> Result<()> {
        Ok(())
    }

    /// Running score after a half-move.
    fn show_score(&mut self, _score: u32) -> Result<()> {
        Ok(())
    }

    /// A rejected attempt; the same role will be asked again.
    fn show_rejection(&mut self, _role: Role, _error: &EntropyError) -> Result<()> {
        Ok(())
    }

    fn show_final_score(&mut self, _score: u32) -> Result<()> {
        Ok(())
    }
}

/// Presenter that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentPresenter;

impl Presenter for SilentPresenter {}
