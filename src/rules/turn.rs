//! Turn policies: who moves next and how they are addressed.

use crate::core::PlayerId;

/// Prompt shown when no player needs naming.
pub const MOVE_PROMPT: &str = "Enter your move (up, down, left, right, or quit): ";

/// Decides which player is on move and how console text names them.
///
/// ## Implementation Notes
///
/// - `advance` is called only after a move that was applied and did not end the game
/// - Message methods receive the player who made the deciding move
pub trait TurnPolicy {
    /// Player whose move is expected next.
    fn current(&self) -> PlayerId;

    /// Hand the turn to the next player.
    fn advance(&mut self);

    /// Text printed before reading a move.
    fn prompt(&self) -> String {
        MOVE_PROMPT.to_string()
    }

    /// Text placed in front of the lives/moves status.
    fn status_prefix(&self) -> String {
        String::new()
    }

    /// Announcement when `player` runs out of lives.
    fn loss_message(&self, _player: PlayerId) -> String {
        "Game over! You hit a mine.".to_string()
    }

    /// Announcement when `player` reaches the last row.
    fn win_message(&self, _player: PlayerId) -> String {
        "Congratulations! You reached the other side.".to_string()
    }
}

/// One player, never changes hands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SinglePlayer;

impl TurnPolicy for SinglePlayer {
    fn current(&self) -> PlayerId {
        PlayerId::FIRST
    }

    fn advance(&mut self) {}
}

/// Players 1..=N take turns moving the same token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alternating {
    current: PlayerId,
    player_count: u8,
}

impl Alternating {
    /// Rotation over `player_count` players, starting with player 1.
    ///
    /// A count of 0 is treated as 1.
    pub fn new(player_count: u8) -> Self {
        Self {
            current: PlayerId::FIRST,
            player_count: player_count.max(1),
        }
    }
}

impl Default for Alternating {
    fn default() -> Self {
        Self::new(crate::core::DEFAULT_PLAYERS)
    }
}

impl TurnPolicy for Alternating {
    fn current(&self) -> PlayerId {
        self.current
    }

    fn advance(&mut self) {
        self.current = self.current.next(self.player_count);
    }

    fn prompt(&self) -> String {
        format!("{}, enter your move (up, down, left, right, or quit): ", self.current)
    }

    fn status_prefix(&self) -> String {
        format!("{} - ", self.current)
    }

    fn loss_message(&self, player: PlayerId) -> String {
        format!("{player} hit a mine. {player} loses.")
    }

    fn win_message(&self, player: PlayerId) -> String {
        format!("{player} reached the other side and wins!")
    }
}
