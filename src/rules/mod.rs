//! Game rules that vary between the game modes.
//!
//! The session loop is written once. What differs between single-player,
//! multiplayer and scorable games is captured by two traits:
//! - `TurnPolicy`: who is on move and how they are addressed
//! - `ScoringPolicy`: what reaching the far side is worth

pub mod scoring;
pub mod status;
pub mod turn;

pub use scoring::{MovesRemaining, ScoringPolicy, Unscored};
pub use status::GameStatus;
pub use turn::{Alternating, SinglePlayer, TurnPolicy, MOVE_PROMPT};
