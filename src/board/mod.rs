//! Board representation.
//!
//! A fixed 7x7 grid with bounds-checked access, transposition, run
//! extraction and text rendering.

pub mod grid;
pub mod render;
pub mod run;

pub use grid::Board;
pub use render::write_piece;
pub use run::Run;
