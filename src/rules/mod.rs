//! Rules engine and the collaborator traits it drives.
//!
//! `RulesEngine` owns one game's board, bag and RNG and enforces:
//! - Chaos places only the piece it drew, and only on an empty cell
//! - Order moves in a straight line through empty cells (or passes)
//! - Rounds alternate Chaos then Order, 49 times
//!
//! Input and output live behind `Player` and `Presenter`.

pub mod collaborator;
pub mod engine;

pub use collaborator::{Player, Presenter, SilentPresenter};
pub use engine::{GameOutcome, RulesEngine};
