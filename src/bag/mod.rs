//! The shared bag Chaos draws from.

pub mod piece_bag;

pub use piece_bag::PieceBag;
