//! Core types: players, RNG, configuration, errors.
//!
//! These are the building blocks shared by the board and the game loop.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, DEFAULT_BOARD_SIZE, DEFAULT_LIVES, DEFAULT_PLAYERS};
pub use error::{CommandError, ConfigError, MoveError};
pub use player::PlayerId;
pub use rng::GameRng;
