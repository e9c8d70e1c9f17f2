//! Error types.
//!
//! Every failure in the game is recoverable: the loop reports the error and
//! asks for the next command. Nothing here is fatal.

use derive_more::{Display, Error};

/// A move could not be applied to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// No cell on the board holds the player.
    #[display("Player not found on the board.")]
    PlayerNotFound,

    /// The destination lies outside the board.
    #[display("Invalid move.")]
    OutOfBounds {
        /// Destination row.
        row: i32,
        /// Destination column.
        col: i32,
    },

    /// The session has already finished.
    #[display("The game is already over.")]
    GameOver,
}

/// A line of input was not a recognised command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CommandError {
    /// The token is not one of up, down, left, right or quit.
    #[display("Invalid move. Please enter up, down, left, right, or quit.")]
    Unrecognized(#[error(not(source))] String),
}

/// Game configuration is unusable.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// The board cannot hold the player plus one mine per row.
    #[display("Board size must be at least 2 (got {})", _0)]
    BoardTooSmall(#[error(not(source))] usize),

    /// The game would be lost before it starts.
    #[display("Lives must be at least 1")]
    NoLives,

    /// Turn alternation needs someone to alternate with.
    #[display("Multiplayer needs at least 2 players (got {})", _0)]
    TooFewPlayers(#[error(not(source))] u8),
}
