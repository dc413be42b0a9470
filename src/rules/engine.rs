//! The turn state machine.
//!
//! A game is 49 rounds. Each round Chaos draws a piece and places it on an
//! empty cell, then Order slides one piece along its row or column through
//! empty cells (or passes). The engine validates every half-move, records
//! the committed ones, and scores on demand.
//!
//! ## Driving the engine
//!
//! Either call the half-move methods directly:
//!
//! ```
//! use entropy_engine::core::GameConfig;
//! use entropy_engine::rules::RulesEngine;
//!
//! let mut engine = RulesEngine::new(GameConfig::new(42)).unwrap();
//! let piece = engine.draw_for_chaos().unwrap();
//! engine.place_by_chaos(piece, 3, 3).unwrap();
//! engine.move_by_order(3, 3, 3, 0).unwrap();
//! engine.finish_round().unwrap();
//! assert_eq!(engine.round(), Some(2));
//! ```
//!
//! or hand a [`Player`] and a [`Presenter`] to [`RulesEngine::play_game`],
//! which retries rejected attempts until each half-move commits.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::collaborator::{Player, Presenter};
use crate::bag::PieceBag;
use crate::board::Board;
use crate::core::{
    Color, Coord, EntropyError, GameConfig, GameState, MoveRecord, Phase, Result, Role,
};
use crate::scoring::{self, ScoreBreakdown};

const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub final_score: u32,
    pub breakdown: ScoreBreakdown,
    pub seed: u64,
    pub history: Vector<MoveRecord>,
}

/// Rules engine owning the board, the bag and the RNG of one game.
#[derive(Clone, Debug)]
pub struct RulesEngine {
    config: GameConfig,
    state: GameState,
}

impl RulesEngine {
    /// Set up a game.
    ///
    /// Fails with `InvalidBoardSize` or `InvalidColor` if the configured
    /// layout is malformed.
    pub fn new(config: GameConfig) -> Result<Self> {
        let state = GameState::new(&config)?;
        info!(seed = config.seed, pieces = state.board.piece_count(), "new game");
        Ok(Self { config, state })
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    #[must_use]
    pub fn bag(&self) -> &PieceBag {
        &self.state.bag
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Current round (1-based), `None` once finished.
    #[must_use]
    pub fn round(&self) -> Option<u32> {
        self.state.phase.round()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state.phase == Phase::Finished
    }

    /// The piece Chaos has drawn but not yet placed.
    #[must_use]
    pub fn held_piece(&self) -> Option<Color> {
        self.state.held_piece()
    }

    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.state.history
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        scoring::score(&self.state.board)
    }

    #[must_use]
    pub fn score_breakdown(&self) -> ScoreBreakdown {
        scoring::breakdown(&self.state.board)
    }

    fn wrong_phase(&self, expected: &'static str) -> EntropyError {
        match self.state.phase {
            Phase::Finished => EntropyError::GameOver,
            actual => EntropyError::WrongPhase {
                expected,
                actual: actual.name(),
            },
        }
    }

    // === Chaos ===

    /// Draw the piece Chaos must place this round.
    ///
    /// Calling again before placing returns the same piece; a drawn piece
    /// never goes back into the bag.
    pub fn draw_for_chaos(&mut self) -> Result<Color> {
        let Phase::AwaitingChaosPlacement { round, drawn } = self.state.phase else {
            return Err(self.wrong_phase("AwaitingChaosPlacement"));
        };
        if let Some(piece) = drawn {
            return Ok(piece);
        }
        if self.state.board.empty_cells().next().is_none() {
            return Err(EntropyError::BoardFull);
        }

        let piece = self.state.bag.draw(&mut self.state.rng)?;
        self.state.phase = Phase::AwaitingChaosPlacement {
            round,
            drawn: Some(piece),
        };
        debug!(round, %piece, left = self.state.bag.len(), "Chaos drew");
        Ok(piece)
    }

    /// Check that Chaos may place on `(row, col)`.
    pub fn check_placement(&self, row: i32, col: i32) -> Result<()> {
        if !Board::is_inside(row, col) {
            return Err(EntropyError::OutOfBounds { row, col });
        }
        if !self.state.board.is_empty(row, col)? {
            return Err(EntropyError::CellOccupied { row, col });
        }
        Ok(())
    }

    /// Place the drawn piece on an empty cell.
    ///
    /// `color` must be the piece returned by [`draw_for_chaos`](Self::draw_for_chaos).
    /// A rejected placement leaves the piece in Chaos's hand.
    pub fn place_by_chaos(&mut self, color: Color, row: i32, col: i32) -> Result<()> {
        let Phase::AwaitingChaosPlacement { round, drawn } = self.state.phase else {
            return Err(self.wrong_phase("AwaitingChaosPlacement"));
        };
        let drawn = drawn.ok_or(EntropyError::NothingDrawn)?;
        if drawn != color {
            return Err(EntropyError::PieceMismatch {
                drawn,
                requested: color,
            });
        }
        self.check_placement(row, col)?;

        self.state.board.drop_piece(color, row, col)?;
        self.state.record(MoveRecord::Placement {
            round,
            color,
            at: Coord::new(row, col),
        });
        self.state.phase = Phase::AwaitingOrderMove { round };
        debug!(round, %color, row, col, "Chaos placed");
        Ok(())
    }

    /// Every empty cell.
    #[must_use]
    pub fn legal_placements(&self) -> Vec<Coord> {
        self.state.board.empty_cells().collect()
    }

    // === Order ===

    /// Whether a piece may slide from `(row1, col1)` to `(row2, col2)`.
    ///
    /// The move must stay in one row or one column, and every cell after
    /// the source up to and including the destination must be empty. A
    /// zero-length move is a pass and is admissible when passing is allowed,
    /// or when Order has no other move (a forced pass from an occupied cell).
    #[must_use]
    pub fn is_move_admissible(&self, row1: i32, col1: i32, row2: i32, col2: i32) -> bool {
        if !Board::is_inside(row1, col1) || !Board::is_inside(row2, col2) {
            return false;
        }
        if row1 != row2 && col1 != col2 {
            return false;
        }
        let board = &self.state.board;
        if row1 == row2 && col1 == col2 {
            return self.config.allow_pass
                || (!board.is_empty(row1, col1).unwrap_or(true) && !self.can_slide());
        }

        let clear = |row: i32, col: i32| board.is_empty(row, col).unwrap_or(false);

        if row1 < row2 {
            ((row1 + 1)..=row2).all(|row| clear(row, col1))
        } else if row1 > row2 {
            (row2..row1).all(|row| clear(row, col1))
        } else if col1 < col2 {
            ((col1 + 1)..=col2).all(|col| clear(row1, col))
        } else {
            (col2..col1).all(|col| clear(row1, col))
        }
    }

    /// Slide a piece for Order.
    ///
    /// Fails with `OutOfBounds` for either endpoint off the board,
    /// `CellEmpty` if there is no piece at the source, and `NotAdmissible`
    /// if the path is not a clear straight line.
    pub fn move_by_order(&mut self, row1: i32, col1: i32, row2: i32, col2: i32) -> Result<()> {
        let Phase::AwaitingOrderMove { round } = self.state.phase else {
            return Err(self.wrong_phase("AwaitingOrderMove"));
        };
        if !Board::is_inside(row1, col1) {
            return Err(EntropyError::OutOfBounds { row: row1, col: col1 });
        }
        if !Board::is_inside(row2, col2) {
            return Err(EntropyError::OutOfBounds { row: row2, col: col2 });
        }
        if self.state.board.is_empty(row1, col1)? {
            return Err(EntropyError::CellEmpty { row: row1, col: col1 });
        }
        let from = Coord::new(row1, col1);
        let to = Coord::new(row2, col2);
        if !self.is_move_admissible(row1, col1, row2, col2) {
            return Err(EntropyError::NotAdmissible { from, to });
        }

        self.state.board.move_piece(row1, col1, row2, col2)?;
        self.state.record(MoveRecord::Relocation { round, from, to });
        self.state.phase = Phase::RoundComplete { round };
        debug!(round, %from, %to, "Order moved");
        Ok(())
    }

    /// Every admissible Order move, passes included when allowed.
    ///
    /// Never empty while a piece is on the board: with passing disabled and
    /// every piece boxed in, each occupied cell offers a forced pass.
    #[must_use]
    pub fn legal_relocations(&self) -> Vec<(Coord, Coord)> {
        let board = &self.state.board;
        let slides = self.slides();
        if self.config.allow_pass || slides.is_empty() {
            let mut moves: Vec<_> = board.occupied_cells().map(|at| (at, at)).collect();
            moves.extend(slides);
            moves
        } else {
            slides
        }
    }

    /// Every non-zero straight move through empty cells.
    fn slides(&self) -> Vec<(Coord, Coord)> {
        let board = &self.state.board;
        let mut moves = Vec::new();
        for from in board.occupied_cells() {
            for (dr, dc) in DIRECTIONS {
                let mut to = Coord::new(from.row + dr, from.col + dc);
                while board.is_empty(to.row, to.col).unwrap_or(false) {
                    moves.push((from, to));
                    to = Coord::new(to.row + dr, to.col + dc);
                }
            }
        }
        moves
    }

    /// Whether any piece has an empty orthogonal neighbour.
    fn can_slide(&self) -> bool {
        let board = &self.state.board;
        board.occupied_cells().any(|from| {
            DIRECTIONS
                .iter()
                .any(|(dr, dc)| board.is_empty(from.row + dr, from.col + dc).unwrap_or(false))
        })
    }

    /// Close a completed round and advance to the next one, or finish.
    pub fn finish_round(&mut self) -> Result<()> {
        let Phase::RoundComplete { round } = self.state.phase else {
            return Err(self.wrong_phase("RoundComplete"));
        };
        self.state.phase = Phase::after_round(round);
        Ok(())
    }

    // === Driving ===

    /// Play the rest of the current round.
    ///
    /// Rejected attempts are reported to the presenter and asked again;
    /// any other error ends the round.
    pub fn play_round<P, V>(&mut self, player: &mut P, presenter: &mut V) -> Result<()>
    where
        P: Player + ?Sized,
        V: Presenter + ?Sized,
    {
        if let Phase::AwaitingChaosPlacement { .. } = self.state.phase {
            self.play_chaos(player, presenter)?;
            presenter.show_board(&self.state.board)?;
            presenter.show_score(self.score())?;
        }
        if let Phase::AwaitingOrderMove { .. } = self.state.phase {
            self.play_order(player, presenter)?;
            presenter.show_board(&self.state.board)?;
            presenter.show_score(self.score())?;
        }
        match self.state.phase {
            Phase::RoundComplete { .. } => self.finish_round(),
            Phase::Finished => Err(EntropyError::GameOver),
            _ => Ok(()),
        }
    }

    fn play_chaos<P, V>(&mut self, player: &mut P, presenter: &mut V) -> Result<()>
    where
        P: Player + ?Sized,
        V: Presenter + ?Sized,
    {
        let piece = self.draw_for_chaos()?;
        presenter.show_drawn(piece)?;
        loop {
            let at = player.choose_placement(&self.state.board, piece)?;
            match self.place_by_chaos(piece, at.row, at.col) {
                Ok(()) => return Ok(()),
                Err(e) if e.is_recoverable() => {
                    debug!(error = %e, "Chaos placement rejected");
                    presenter.show_rejection(Role::Chaos, &e)?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn play_order<P, V>(&mut self, player: &mut P, presenter: &mut V) -> Result<()>
    where
        P: Player + ?Sized,
        V: Presenter + ?Sized,
    {
        loop {
            let (from, to) = player.choose_relocation(&self.state.board)?;
            match self.move_by_order(from.row, from.col, to.row, to.col) {
                Ok(()) => return Ok(()),
                Err(e) if e.is_recoverable() => {
                    debug!(error = %e, "Order move rejected");
                    presenter.show_rejection(Role::Order, &e)?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Play every remaining round and report the final score.
    pub fn play_game<P, V>(&mut self, player: &mut P, presenter: &mut V) -> Result<GameOutcome>
    where
        P: Player + ?Sized,
        V: Presenter + ?Sized,
    {
        presenter.show_board(&self.state.board)?;
        presenter.show_score(self.score())?;

        while !self.is_finished() {
            self.play_round(player, presenter)?;
        }

        let breakdown = self.score_breakdown();
        let final_score = breakdown.total();
        presenter.show_final_score(final_score)?;
        info!(final_score, "game finished");

        Ok(GameOutcome {
            final_score,
            breakdown,
            seed: self.config.seed,
            history: self.state.history.clone(),
        })
    }
}
