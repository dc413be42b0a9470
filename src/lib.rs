//! # entropy-engine
//!
//! Rules engine for Entropy, a two-role game on a 7x7 board with seven
//! piece colors.
//!
//! ## Rules
//!
//! 1. **Chaos** draws a random piece from a shared bag of 49 (seven of each
//!    color) and places it on any empty cell.
//!
//! 2. **Order** slides one placed piece any distance along its row or
//!    column through empty cells, or passes.
//!
//! 3. After 49 rounds the board is full. Every symmetric run of two or more
//!    adjacent pieces in a row or column scores its length; overlapping
//!    runs all count.
//!
//! ## Modules
//!
//! - `core`: Colors, cells, roles, configuration, errors, RNG, game state
//! - `board`: The 7x7 grid, run extraction, rendering
//! - `bag`: The piece bag
//! - `scoring`: Symmetric-run scoring
//! - `rules`: The turn state machine and collaborator traits
//! - `console`: Terminal player and presenter

pub mod bag;
pub mod board;
pub mod console;
pub mod core;
pub mod rules;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    Cell, Color, Coord, EntropyError, GameConfig, GameRng, GameState, MoveRecord, Phase, Result,
    Role,
};

pub use crate::bag::PieceBag;
pub use crate::board::{Board, Run};
pub use crate::rules::{GameOutcome, Player, Presenter, RulesEngine, SilentPresenter};
pub use crate::scoring::{score, ScoreBreakdown};
