//! Game configuration.
//!
//! A `GameConfig` describes one run of the program: board size, starting
//! lives, how many players share a multiplayer board, and optionally the
//! seed used to lay out mines.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default board edge length.
pub const DEFAULT_BOARD_SIZE: usize = 5;

/// Default number of lives.
pub const DEFAULT_LIVES: u32 = 3;

/// Default number of players in a multiplayer game.
pub const DEFAULT_PLAYERS: u8 = 2;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Edge length N of the N×N board. One mine is placed per row.
    pub board_size: usize,

    /// Lives at the start of each game.
    pub lives: u32,

    /// Players taking turns in multiplayer mode.
    pub players: u8,

    /// Mine layout seed. `None` draws a fresh seed.
    pub seed: Option<u64>,

    /// Clear the terminal before each render.
    pub clear_screen: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            lives: DEFAULT_LIVES,
            players: DEFAULT_PLAYERS,
            seed: None,
            clear_screen: true,
        }
    }
}

impl GameConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board size.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Set the starting lives.
    #[must_use]
    pub fn with_lives(mut self, lives: u32) -> Self {
        self.lives = lives;
        self
    }

    /// Set the multiplayer player count.
    #[must_use]
    pub fn with_players(mut self, players: u8) -> Self {
        self.players = players;
        self
    }

    /// Fix the mine layout seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable clearing the terminal between turns.
    #[must_use]
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    /// Check that a game can be built from this configuration.
    ///
    /// A board of size 1 has no room for a mine next to the player.
    /// `players` is not checked here; see [`GameConfig::validate_multiplayer`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < 2 {
            return Err(ConfigError::BoardTooSmall(self.board_size));
        }
        if self.lives == 0 {
            return Err(ConfigError::NoLives);
        }
        Ok(())
    }

    /// Like [`GameConfig::validate`], and also require at least two players.
    pub fn validate_multiplayer(&self) -> Result<(), ConfigError> {
        self.validate()?;
        if self.players < 2 {
            return Err(ConfigError::TooFewPlayers(self.players));
        }
        Ok(())
    }
}
