//! Board model: grid state, mine placement, move validation and application.
//!
//! The board knows nothing about lives, turns or winning. It answers "where
//! is the player", "is this square on the board" and "what was under the
//! player after this move"; the game loop decides what that means.

pub mod cell;
pub mod grid;

pub use cell::{Cell, Direction, Position};
pub use grid::Board;
