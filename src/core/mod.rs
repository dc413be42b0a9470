//! Core types: colors, cells, roles, configuration, errors, RNG, state.
//!
//! Everything here is independent of the turn rules; the board, bag,
//! scoring and rules modules build on these.

pub mod action;
pub mod cell;
pub mod color;
pub mod config;
pub mod error;
pub mod rng;
pub mod role;
pub mod state;

pub use action::MoveRecord;
pub use cell::{Cell, Coord};
pub use color::Color;
pub use config::{
    GameConfig, Layout, BOARD_SIZE, COLOR_COUNT, PIECES_PER_COLOR, ROUNDS, TOTAL_PIECES,
};
pub use error::{EntropyError, Result};
pub use rng::{GameRng, GameRngState};
pub use role::Role;
pub use state::{GameState, Phase};
