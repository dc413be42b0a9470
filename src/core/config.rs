//! Game configuration and fixed dimensions.
//!
//! The board size, color count and round count are rules, not options. The
//! only tunables are the seed, an optional starting layout, and whether
//! Order may pass by "moving" a piece onto its own cell.

use serde::{Deserialize, Serialize};

/// Width and height of the board.
pub const BOARD_SIZE: usize = 7;

/// Number of distinct piece colors.
pub const COLOR_COUNT: usize = 7;

/// Copies of each color in a fresh bag.
pub const PIECES_PER_COLOR: usize = 7;

/// Pieces in a fresh bag.
pub const TOTAL_PIECES: usize = COLOR_COUNT * PIECES_PER_COLOR;

/// Rounds in a game. Each round consumes one piece from the bag.
pub const ROUNDS: u32 = TOTAL_PIECES as u32;

/// Starting grid of optional color indices, row-major.
pub type Layout = Vec<Vec<Option<u8>>>;

/// Complete game configuration.
///
/// ```
/// use entropy_engine::core::GameConfig;
///
/// let config = GameConfig::new(42).without_pass();
/// assert_eq!(config.seed, 42);
/// assert!(!config.allow_pass);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the bag draws.
    pub seed: u64,

    /// Starting board. `None` starts empty.
    pub initial_layout: Option<Layout>,

    /// Whether a zero-length Order move counts as a legal pass.
    pub allow_pass: bool,
}

impl GameConfig {
    /// Create a configuration with an empty board and passing allowed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            initial_layout: None,
            allow_pass: true,
        }
    }

    /// Start from the given layout instead of an empty board.
    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.initial_layout = Some(layout);
        self
    }

    /// Reject zero-length Order moves.
    #[must_use]
    pub fn without_pass(mut self) -> Self {
        self.allow_pass = false;
        self
    }
}
