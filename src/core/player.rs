//! Player identification.
//!
//! Players are numbered from 1, matching how they are announced on the
//! console ("Player 1", "Player 2", ...).

use serde::{Deserialize, Serialize};

/// Player identifier.
///
/// Player numbers are 1-based: the first player is `PlayerId(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The player who moves first.
    pub const FIRST: PlayerId = PlayerId(1);

    /// Create a new player ID.
    #[must_use]
    pub const fn new(number: u8) -> Self {
        Self(number)
    }

    /// Get the 1-based player number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// The player who moves after this one in a game of `player_count` players.
    ///
    /// ```
    /// use mine_crossing::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(1).next(2), PlayerId::new(2));
    /// assert_eq!(PlayerId::new(2).next(2), PlayerId::new(1));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `player_count` is 0.
    #[must_use]
    pub fn next(self, player_count: u8) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        Self(self.0 % player_count + 1)
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::FIRST
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p1 = PlayerId::new(1);
        assert_eq!(p1.number(), 1);
        assert_eq!(p1, PlayerId::FIRST);
        assert_eq!(PlayerId::default(), PlayerId::FIRST);
        assert_eq!(format!("{}", p1), "Player 1");
    }

    #[test]
    fn test_next_wraps() {
        let p = PlayerId::FIRST;
        assert_eq!(p.next(1), PlayerId::new(1));
        assert_eq!(p.next(3), PlayerId::new(2));
        assert_eq!(PlayerId::new(3).next(3), PlayerId::new(1));
    }

    #[test]
    fn test_player_id_serialization() {
        let json = serde_json::to_string(&PlayerId::new(2)).unwrap();
        let back: PlayerId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PlayerId::new(2));
    }
}
