//! Terminal collaborators for the `entropy` binary.
//!
//! Thin wrappers around stdin/stdout; all rule checking stays in the engine.

pub mod input;
pub mod presenter;

pub use input::ConsolePlayer;
pub use presenter::ConsolePresenter;
