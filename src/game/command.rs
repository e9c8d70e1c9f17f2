//! Player commands read from the console.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::Direction;
use crate::core::CommandError;

/// One turn's worth of input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Step one cell in a direction.
    Move(Direction),
    /// End the game.
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    /// Parse `up`, `down`, `left`, `right` or `quit`, ignoring case and
    /// surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("quit") {
            return Ok(Command::Quit);
        }
        Direction::ALL
            .into_iter()
            .find(|d| token.eq_ignore_ascii_case(d.name()))
            .map(Command::Move)
            .ok_or_else(|| CommandError::Unrecognized(token.to_string()))
    }
}
