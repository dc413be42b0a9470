//! The bag of undrawn pieces.
//!
//! Starts with seven pieces of each color and only ever shrinks. Draws pick
//! a piece instance uniformly, so a color with more copies left is
//! proportionally more likely.

use serde::{Deserialize, Serialize};

use crate::core::{Color, EntropyError, GameRng, Result, COLOR_COUNT, PIECES_PER_COLOR, TOTAL_PIECES};

/// Multiset of undrawn pieces.
///
/// ```
/// use entropy_engine::bag::PieceBag;
/// use entropy_engine::core::GameRng;
///
/// let mut bag = PieceBag::new();
/// let mut rng = GameRng::new(42);
/// let color = bag.draw(&mut rng).unwrap();
/// assert_eq!(bag.len(), 48);
/// assert_eq!(bag.count(color), 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceBag {
    pieces: Vec<Color>,
}

impl PieceBag {
    /// A full bag.
    #[must_use]
    pub fn new() -> Self {
        let mut pieces = Vec::with_capacity(TOTAL_PIECES);
        for color in Color::ALL {
            pieces.extend(std::iter::repeat(color).take(PIECES_PER_COLOR));
        }
        Self { pieces }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Copies of `color` still in the bag.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.pieces.iter().filter(|&&c| c == color).count()
    }

    /// Remaining copies per color, indexed by `Color::index`.
    #[must_use]
    pub fn remaining(&self) -> [usize; COLOR_COUNT] {
        let mut counts = [0; COLOR_COUNT];
        for color in &self.pieces {
            counts[color.index()] += 1;
        }
        counts
    }

    /// Remove one piece chosen uniformly at random.
    pub fn draw(&mut self, rng: &mut GameRng) -> Result<Color> {
        if self.pieces.is_empty() {
            return Err(EntropyError::EmptyBag);
        }
        let idx = rng.gen_range_usize(0..self.pieces.len());
        Ok(self.pieces.swap_remove(idx))
    }
}

impl Default for PieceBag {
    fn default() -> Self {
        Self::new()
    }
}
