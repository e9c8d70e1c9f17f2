//! Console front end: render the board, read a move, report the result.

use std::io::{self, BufRead, Write};

use tracing::{debug, instrument, warn};

use super::command::Command;
use super::session::{GameSession, TurnOutcome};
use crate::core::{CommandError, GameRng};
use crate::rules::{GameStatus, ScoringPolicy, TurnPolicy};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Drives a `GameSession` from line-oriented input.
///
/// Input and output are generic so games can be scripted in tests:
///
/// ```
/// use mine_crossing::board::Board;
/// use mine_crossing::game::{single_player, ConsoleRunner};
/// use mine_crossing::rules::GameStatus;
///
/// let mut output = Vec::new();
/// let mut runner = ConsoleRunner::new("quit\n".as_bytes(), &mut output);
/// let status = runner.run(&mut single_player(Board::new(5), 3)).unwrap();
///
/// assert_eq!(status, GameStatus::Quit);
/// ```
pub struct ConsoleRunner<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> ConsoleRunner<R, W> {
    /// Runner reading from `input` and writing to `output`. Does not clear the screen.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_screen: false,
        }
    }

    /// Clear the terminal before each render.
    #[must_use]
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    /// Lay out mines with `rng`, then play the session to the end.
    pub fn play<T, S>(&mut self, session: &mut GameSession<T, S>, rng: &mut GameRng) -> io::Result<GameStatus>
    where
        T: TurnPolicy,
        S: ScoringPolicy,
    {
        session.place_mines(rng);
        self.run(session)
    }

    /// Play the session to the end on its current board.
    ///
    /// End of input counts as quitting.
    #[instrument(skip_all)]
    pub fn run<T, S>(&mut self, session: &mut GameSession<T, S>) -> io::Result<GameStatus>
    where
        T: TurnPolicy,
        S: ScoringPolicy,
    {
        while !session.status().is_terminal() {
            self.render(session)?;
            write!(self.output, "{}", session.turns().prompt())?;
            self.output.flush()?;

            let command = match self.read_command()? {
                Some(Ok(command)) => command,
                Some(Err(err)) => {
                    debug!(%err, "unrecognised command");
                    writeln!(self.output, "{err}")?;
                    continue;
                }
                None => {
                    debug!("input closed");
                    Command::Quit
                }
            };

            match session.apply(command) {
                Ok(TurnOutcome::Finished(status)) => self.announce(session, status)?,
                Ok(TurnOutcome::Moved { .. }) => {}
                Err(err) => {
                    debug!(%err, "move rejected");
                    writeln!(self.output, "{err}")?;
                }
            }
        }

        Ok(session.status())
    }

    /// Write a line of text that is not part of a turn.
    pub fn message(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    fn render<T, S>(&mut self, session: &GameSession<T, S>) -> io::Result<()>
    where
        T: TurnPolicy,
        S: ScoringPolicy,
    {
        if self.clear_screen {
            write!(self.output, "{CLEAR_SCREEN}")?;
        }
        write!(self.output, "{}", session.board())?;
        writeln!(self.output, "{}", session.status_line())
    }

    /// `None` at end of input. Bytes that are not UTF-8 parse as an
    /// unrecognised command.
    fn read_command(&mut self) -> io::Result<Option<Result<Command, CommandError>>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).parse()))
    }

    fn announce<T, S>(&mut self, session: &GameSession<T, S>, status: GameStatus) -> io::Result<()>
    where
        T: TurnPolicy,
        S: ScoringPolicy,
    {
        let text = match status {
            GameStatus::Quit => "Game over! You quit.".to_string(),
            GameStatus::Lost(player) => session.turns().loss_message(player),
            GameStatus::Won(player) => session.turns().win_message(player),
            GameStatus::Playing => {
                warn!("announce called on a running game");
                return Ok(());
            }
        };
        writeln!(self.output, "{text}")
    }
}
