//! Cells, positions and directions.

use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Contents of one grid position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing here.
    #[default]
    Empty,
    /// The player's token.
    Player,
    /// A mine.
    Mine,
}

impl Cell {
    /// Character used when rendering the board.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Player => 'P',
            Cell::Mine => 'X',
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A (row, column) coordinate.
///
/// Signed so that a step off the top or left edge is representable and can
/// be rejected by bounds checking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// The top-left corner, where the player starts.
    pub const ORIGIN: Position = Position::new(0, 0);

    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl Add<Direction> for Position {
    type Output = Position;

    fn add(self, rhs: Direction) -> Self::Output {
        let (d_row, d_col) = rhs.delta();
        Position::new(self.row + d_row, self.col + d_col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four single-step moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// (row, column) delta of one step in this direction.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Lowercase name, as typed by the player.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
