//! The game session: one board, one state machine, any mode.
//!
//! A session owns its board for its whole life. Each call to `apply` is one
//! turn: the command is translated into a board move, the cell the player
//! left behind and the cell they landed on decide whether the game goes on.
//!
//! ## Turn Rules
//!
//! - Quit ends the game immediately
//! - A rejected move changes nothing: no move counted, turn not passed
//! - Landing on a mine costs a life; the last life lost ends the game
//! - Otherwise landing on the last row wins
//! - A game that continues passes the turn

use tracing::{debug, info, instrument};

use super::command::Command;
use crate::board::{Board, Cell, Position};
use crate::core::{GameRng, MoveError, PlayerId};
use crate::rules::{
    Alternating, GameStatus, MovesRemaining, ScoringPolicy, SinglePlayer, TurnPolicy, Unscored,
};

/// Single-player session.
pub type SinglePlayerGame = GameSession<SinglePlayer, Unscored>;

/// Shared-board session with players taking turns.
pub type MultiplayerGame = GameSession<Alternating, Unscored>;

/// Single-player session with a score on winning.
pub type ScorableGame = GameSession<SinglePlayer, MovesRemaining>;

/// What a successfully applied command did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The player moved and the game goes on.
    Moved {
        /// Player who made the move.
        player: PlayerId,
        /// Cell the token now occupies.
        to: Position,
        /// A mine was under the destination.
        hit_mine: bool,
    },
    /// The game ended with this status.
    Finished(GameStatus),
}

/// One game from mine placement to a terminal status.
#[derive(Clone, Debug)]
pub struct GameSession<T: TurnPolicy, S: ScoringPolicy> {
    board: Board,
    lives: u32,
    moves: u32,
    score: i64,
    status: GameStatus,
    turns: T,
    scoring: S,
}

impl<T: TurnPolicy, S: ScoringPolicy> GameSession<T, S> {
    /// Create a session over `board` with `lives` lives.
    pub fn new(board: Board, lives: u32, turns: T, scoring: S) -> Self {
        Self {
            board,
            lives,
            moves: 0,
            score: 0,
            status: GameStatus::Playing,
            turns,
            scoring,
        }
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access, for laying out hand-built positions.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Lives left.
    #[must_use]
    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Moves successfully applied.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Score so far. Zero until a scored game is won.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Player on move.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.turns.current()
    }

    /// The turn policy, for console text.
    pub fn turns(&self) -> &T {
        &self.turns
    }

    /// Lay out this game's mines. Returns the number placed.
    pub fn place_mines(&mut self, rng: &mut GameRng) -> usize {
        self.board.place_mines(rng)
    }

    /// Status line shown under the board.
    #[must_use]
    pub fn status_line(&self) -> String {
        format!(
            "{}Lives: {}, Moves: {}{}",
            self.turns.status_prefix(),
            self.lives,
            self.moves,
            self.scoring.status_suffix(self.score)
        )
    }

    /// Play one command.
    ///
    /// Board errors are returned unchanged and leave the session untouched.
    #[instrument(skip(self), fields(player = %self.turns.current()))]
    pub fn apply(&mut self, command: Command) -> Result<TurnOutcome, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let direction = match command {
            Command::Quit => return Ok(self.finish(GameStatus::Quit)),
            Command::Move(direction) => direction,
        };

        let from = self.board.find_player_position().ok_or(MoveError::PlayerNotFound)?;
        let to = from + direction;
        let previous = self.board.move_player(to.row, to.col)?;

        let player = self.turns.current();
        self.moves += 1;
        let hit_mine = previous == Cell::Mine;

        if hit_mine {
            self.lives = self.lives.saturating_sub(1);
            debug!(lives = self.lives, %to, "mine hit");
            if self.lives == 0 {
                return Ok(self.finish(GameStatus::Lost(player)));
            }
        } else if to.row == self.last_row() {
            if let Some(score) = self.scoring.score_on_win(self.board.size(), self.moves) {
                self.score = score;
            }
            return Ok(self.finish(GameStatus::Won(player)));
        }

        self.turns.advance();
        Ok(TurnOutcome::Moved { player, to, hit_mine })
    }

    fn last_row(&self) -> i32 {
        self.board.size() as i32 - 1
    }

    fn finish(&mut self, status: GameStatus) -> TurnOutcome {
        self.status = status;
        info!(?status, moves = self.moves, lives = self.lives, score = self.score, "game over");
        TurnOutcome::Finished(status)
    }
}

/// Single-player game: reach the far side before the lives run out.
pub fn single_player(board: Board, lives: u32) -> SinglePlayerGame {
    GameSession::new(board, lives, SinglePlayer, Unscored)
}

/// `players` players share one token and one pool of lives, alternating moves.
///
/// A count of 0 plays as a single player in the rotation.
pub fn multiplayer(board: Board, lives: u32, players: u8) -> MultiplayerGame {
    GameSession::new(board, lives, Alternating::new(players), Unscored)
}

/// Single-player game scored as `size² - moves` on a win.
pub fn scorable(board: Board, lives: u32) -> ScorableGame {
    GameSession::new(board, lives, SinglePlayer, MovesRemaining)
}
