//! Game status.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Where a game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Accepting moves.
    Playing,
    /// A player typed quit.
    Quit,
    /// Lives ran out; the player who stepped on the last mine.
    Lost(PlayerId),
    /// The player who reached the last row.
    Won(PlayerId),
}

impl GameStatus {
    /// Check if the game has ended.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_terminal() {
        assert!(!GameStatus::Playing.is_terminal());
        assert!(GameStatus::Quit.is_terminal());
        assert!(GameStatus::Lost(PlayerId::FIRST).is_terminal());
        assert!(GameStatus::Won(PlayerId::FIRST).is_terminal());
    }
}
