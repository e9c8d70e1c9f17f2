//! Game loop: commands, the session state machine, and the console runner.

pub mod command;
pub mod console;
pub mod session;

pub use command::Command;
pub use console::ConsoleRunner;
pub use session::{
    multiplayer, scorable, single_player, GameSession, MultiplayerGame, ScorableGame, SinglePlayerGame,
    TurnOutcome,
};
