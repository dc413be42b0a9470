//! Game state: board, bag, RNG, turn phase, and move history.
//!
//! ## Phase
//!
//! Each round walks `AwaitingChaosPlacement -> AwaitingOrderMove ->
//! RoundComplete`. The piece Chaos has drawn but not yet placed is held in
//! the `AwaitingChaosPlacement` phase; it has left the bag for good.
//!
//! ## GameState
//!
//! Owned by exactly one [`RulesEngine`](crate::rules::RulesEngine). The
//! history uses an `im` vector so snapshots of a running game clone in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::MoveRecord;
use super::color::Color;
use super::config::{GameConfig, ROUNDS};
use super::error::Result;
use super::rng::GameRng;
use crate::bag::PieceBag;
use crate::board::Board;

/// Sub-state of the turn machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Chaos must draw (if `drawn` is `None`) and then place.
    AwaitingChaosPlacement { round: u32, drawn: Option<Color> },
    /// Order must relocate a piece or pass.
    AwaitingOrderMove { round: u32 },
    /// Both half-moves of the round are committed.
    RoundComplete { round: u32 },
    /// All rounds played.
    Finished,
}

impl Phase {
    /// The phase a new game starts in.
    #[must_use]
    pub const fn initial() -> Self {
        Phase::AwaitingChaosPlacement {
            round: 1,
            drawn: None,
        }
    }

    /// Current round, or `None` once the game is finished.
    #[must_use]
    pub fn round(self) -> Option<u32> {
        match self {
            Phase::AwaitingChaosPlacement { round, .. }
            | Phase::AwaitingOrderMove { round }
            | Phase::RoundComplete { round } => Some(round),
            Phase::Finished => None,
        }
    }

    /// Phase that follows a completed round.
    #[must_use]
    pub fn after_round(round: u32) -> Self {
        if round >= ROUNDS {
            Phase::Finished
        } else {
            Phase::AwaitingChaosPlacement {
                round: round + 1,
                drawn: None,
            }
        }
    }

    /// Short name used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Phase::AwaitingChaosPlacement { .. } => "AwaitingChaosPlacement",
            Phase::AwaitingOrderMove { .. } => "AwaitingOrderMove",
            Phase::RoundComplete { .. } => "RoundComplete",
            Phase::Finished => "Finished",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.round() {
            Some(round) => write!(f, "Round{}.{}", round, self.name()),
            None => f.write_str(self.name()),
        }
    }
}

/// Complete game state.
#[derive(Clone, Debug)]
pub struct GameState {
    pub board: Board,
    pub bag: PieceBag,
    pub rng: GameRng,
    pub phase: Phase,
    pub history: Vector<MoveRecord>,
    /// Pieces that were on the board before the first draw.
    initial_pieces: usize,
}

impl GameState {
    /// Build the starting state for a configuration.
    ///
    /// Fails with `InvalidBoardSize` or `InvalidColor` if the layout is bad.
    pub fn new(config: &GameConfig) -> Result<Self> {
        let board = match &config.initial_layout {
            Some(layout) => Board::from_layout(layout)?,
            None => Board::new(),
        };
        let initial_pieces = board.piece_count();

        Ok(Self {
            board,
            bag: PieceBag::new(),
            rng: GameRng::new(config.seed),
            phase: Phase::initial(),
            history: Vector::new(),
            initial_pieces,
        })
    }

    /// The piece Chaos is holding, if any.
    #[must_use]
    pub fn held_piece(&self) -> Option<Color> {
        match self.phase {
            Phase::AwaitingChaosPlacement { drawn, .. } => drawn,
            _ => None,
        }
    }

    /// Pieces on the board, in the bag, and in Chaos's hand.
    #[must_use]
    pub fn pieces_accounted(&self) -> usize {
        self.board.piece_count() + self.bag.len() + usize::from(self.held_piece().is_some())
    }

    /// Pieces supplied by the starting layout.
    #[must_use]
    pub fn initial_pieces(&self) -> usize {
        self.initial_pieces
    }

    /// Record a committed move.
    pub fn record(&mut self, record: MoveRecord) {
        self.history.push_back(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{BOARD_SIZE, TOTAL_PIECES};
    use crate::core::EntropyError;

    #[test]
    fn test_new_state() {
        let state = GameState::new(&GameConfig::new(1)).unwrap();
        assert_eq!(state.phase, Phase::initial());
        assert_eq!(state.bag.len(), TOTAL_PIECES);
        assert_eq!(state.board.piece_count(), 0);
        assert_eq!(state.pieces_accounted(), TOTAL_PIECES);
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_state_from_layout() {
        let mut layout = vec![vec![None; BOARD_SIZE]; BOARD_SIZE];
        layout[0][0] = Some(3);
        layout[6][6] = Some(0);

        let state = GameState::new(&GameConfig::new(1).with_layout(layout)).unwrap();
        assert_eq!(state.initial_pieces(), 2);
        assert_eq!(state.pieces_accounted(), TOTAL_PIECES + 2);
    }

    #[test]
    fn test_bad_layout_rejected() {
        let layout = vec![vec![None; BOARD_SIZE]; BOARD_SIZE - 1];
        let err = GameState::new(&GameConfig::new(1).with_layout(layout)).unwrap_err();
        assert!(matches!(err, EntropyError::InvalidBoardSize { rows: 6, cols: 7 }));
    }

    #[test]
    fn test_phase_progression() {
        assert_eq!(
            Phase::after_round(1),
            Phase::AwaitingChaosPlacement { round: 2, drawn: None }
        );
        assert_eq!(Phase::after_round(ROUNDS), Phase::Finished);
        assert_eq!(Phase::Finished.round(), None);
        assert_eq!(
            Phase::AwaitingOrderMove { round: 5 }.to_string(),
            "Round5.AwaitingOrderMove"
        );
    }
}
