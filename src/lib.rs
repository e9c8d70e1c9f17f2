//! # mine-crossing
//!
//! A turn-based, text-rendered board game: move a token from the top-left
//! corner of an N×N grid to the bottom row without running out of lives on
//! randomly placed mines.
//!
//! ## Design Principles
//!
//! 1. **One Loop**: Single-player, multiplayer and scorable games share one
//!    `GameSession` state machine, parameterized by a `TurnPolicy` and a
//!    `ScoringPolicy`.
//!
//! 2. **Reproducible Layouts**: Mines are placed from an injected, seeded
//!    `GameRng`, so any game can be replayed from its seed.
//!
//! 3. **Errors Are Values**: Moves off the board come back as `MoveError`
//!    and leave the game untouched.
//!
//! ## Modules
//!
//! - `core`: Player IDs, RNG, configuration, errors
//! - `board`: Cells, positions, directions and the board itself
//! - `rules`: Turn and scoring policies, game status
//! - `game`: Commands, the session state machine, the console runner

pub mod board;
pub mod core;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{CommandError, ConfigError, GameConfig, GameRng, MoveError, PlayerId};

pub use crate::board::{Board, Cell, Direction, Position};

pub use crate::rules::{
    Alternating, GameStatus, MovesRemaining, ScoringPolicy, SinglePlayer, TurnPolicy, Unscored,
};

pub use crate::game::{
    multiplayer, scorable, single_player, Command, ConsoleRunner, GameSession, MultiplayerGame,
    ScorableGame, SinglePlayerGame, TurnOutcome,
};
