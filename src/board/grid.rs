//! The square game board.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use super::cell::{Cell, Position};
use crate::core::{GameRng, MoveError};

/// N×N grid holding the player, mines and empty cells.
///
/// Invariant: exactly one cell holds `Cell::Player`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an initialized board with the player at the origin.
    #[must_use]
    pub fn new(size: usize) -> Self {
        let mut board = Self {
            size,
            cells: Vec::new(),
        };
        board.initialize();
        board
    }

    /// Edge length N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Reset every cell to empty and put the player at (0, 0).
    pub fn initialize(&mut self) {
        self.cells = vec![Cell::Empty; self.size * self.size];
        if let Some(origin) = self.cells.first_mut() {
            *origin = Cell::Player;
        }
    }

    /// Empty every cell, including the player's.
    #[cfg(test)]
    pub(crate) fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    fn pos_to_index(&self, pos: Position) -> Option<usize> {
        match (usize::try_from(pos.row), usize::try_from(pos.col)) {
            (Ok(row), Ok(col)) if row < self.size && col < self.size => Some(row * self.size + col),
            _ => None,
        }
    }

    /// Peek at a cell. `None` if the position is off the board.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.pos_to_index(pos).map(|i| self.cells[i])
    }

    /// True iff `0 <= row < N` and `0 <= col < N`.
    ///
    /// Does not look at what the cell holds: stepping onto a mine is a valid move.
    #[must_use]
    pub fn is_valid_move(&self, row: i32, col: i32) -> bool {
        self.pos_to_index(Position::new(row, col)).is_some()
    }

    /// Row-major scan for the player's cell.
    #[must_use]
    pub fn find_player_position(&self) -> Option<Position> {
        self.enumerate()
            .find(|(_, cell)| *cell == Cell::Player)
            .map(|(pos, _)| pos)
    }

    /// Put a mine at `pos` if it is on the board and empty.
    ///
    /// Returns whether a mine was placed.
    pub fn place_mine_at(&mut self, pos: Position) -> bool {
        match self.pos_to_index(pos) {
            Some(i) if self.cells[i] == Cell::Empty => {
                self.cells[i] = Cell::Mine;
                true
            }
            _ => false,
        }
    }

    /// Scatter N mines uniformly over empty cells.
    ///
    /// Never places more mines than there are empty cells, so the loop always
    /// terminates. Returns the number of mines placed by this call.
    #[instrument(skip(self, rng), fields(size = self.size, seed = rng.seed()))]
    pub fn place_mines(&mut self, rng: &mut GameRng) -> usize {
        let free = self.cells.iter().filter(|c| **c == Cell::Empty).count();
        let target = self.size.min(free);

        let mut placed = 0;
        let mut attempts = 0u64;
        while placed < target {
            attempts += 1;
            let row = rng.gen_index(self.size) as i32;
            let col = rng.gen_index(self.size) as i32;
            if self.place_mine_at(Position::new(row, col)) {
                trace!(row, col, "mine placed");
                placed += 1;
            }
        }

        debug!(placed, attempts, "mines placed");
        placed
    }

    /// Move the player to `(row, col)`.
    ///
    /// Returns what the destination held before the player arrived. A mine
    /// stepped on is replaced by the player, so this is the only place the
    /// hit can be observed.
    #[instrument(skip(self), level = "debug")]
    pub fn move_player(&mut self, row: i32, col: i32) -> Result<Cell, MoveError> {
        let from = self.find_player_position().ok_or(MoveError::PlayerNotFound)?;
        let to = self
            .pos_to_index(Position::new(row, col))
            .ok_or(MoveError::OutOfBounds { row, col })?;

        let previous = self.cells[to];
        if let Some(i) = self.pos_to_index(from) {
            self.cells[i] = Cell::Empty;
        }
        self.cells[to] = Cell::Player;

        debug!(%from, row, col, ?previous, "player moved");
        Ok(previous)
    }

    /// Number of mine cells.
    #[must_use]
    pub fn mine_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Mine).count()
    }

    /// Iterate over cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Iterate over (position, cell) pairs in row-major order.
    pub fn enumerate(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        let size = self.size;
        self.cells.iter().enumerate().map(move |(i, cell)| {
            let pos = Position::new((i / size) as i32, (i % size) as i32);
            (pos, *cell)
        })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.size.max(1)) {
            for cell in row {
                write!(f, "{} ", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize() {
        let board = Board::new(5);
        assert_eq!(board.cell(Position::ORIGIN), Some(Cell::Player));
        assert_eq!(board.cells().filter(|c| *c == Cell::Empty).count(), 24);
        assert_eq!(board.mine_count(), 0);
    }

    #[test]
    fn test_initialize_resets() {
        let mut board = Board::new(4);
        board.place_mines(&mut GameRng::new(1));
        board.move_player(1, 0).unwrap();

        board.initialize();

        assert_eq!(board, Board::new(4));
    }

    #[test]
    fn test_place_mines_count() {
        let mut board = Board::new(5);
        let placed = board.place_mines(&mut GameRng::new(42));

        assert_eq!(placed, 5);
        assert_eq!(board.mine_count(), 5);
        assert_eq!(board.cell(Position::ORIGIN), Some(Cell::Player));
    }

    #[test]
    fn test_place_mines_deterministic() {
        let mut a = Board::new(6);
        let mut b = Board::new(6);
        a.place_mines(&mut GameRng::new(9));
        b.place_mines(&mut GameRng::new(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_place_mines_fills_small_board() {
        // 2x2 board: 3 free cells, wants 2 mines.
        let mut board = Board::new(2);
        assert_eq!(board.place_mines(&mut GameRng::new(3)), 2);

        // Only one free cell left.
        assert_eq!(board.place_mines(&mut GameRng::new(3)), 1);
        assert_eq!(board.mine_count(), 3);

        // Nothing left at all.
        assert_eq!(board.place_mines(&mut GameRng::new(3)), 0);
    }

    #[test]
    fn test_place_mine_at() {
        let mut board = Board::new(3);
        assert!(board.place_mine_at(Position::new(1, 1)));
        assert!(!board.place_mine_at(Position::new(1, 1)));
        assert!(!board.place_mine_at(Position::ORIGIN));
        assert!(!board.place_mine_at(Position::new(3, 0)));
        assert_eq!(board.mine_count(), 1);
    }

    #[test]
    fn test_is_valid_move() {
        let board = Board::new(5);
        assert!(board.is_valid_move(1, 1));
        assert!(board.is_valid_move(4, 4));
        assert!(!board.is_valid_move(-1, -1));
        assert!(!board.is_valid_move(5, 0));
        assert!(!board.is_valid_move(0, 5));
    }

    #[test]
    fn test_find_player_position() {
        let board = Board::new(5);
        assert_eq!(board.find_player_position(), Some(Position::ORIGIN));
    }

    #[test]
    fn test_find_player_missing() {
        let mut board = Board::new(3);
        board.clear();
        assert_eq!(board.find_player_position(), None);
    }

    #[test]
    fn test_move_player() {
        let mut board = Board::new(5);
        assert_eq!(board.move_player(1, 1), Ok(Cell::Empty));
        assert_eq!(board.find_player_position(), Some(Position::new(1, 1)));
        assert_eq!(board.cell(Position::ORIGIN), Some(Cell::Empty));
    }

    #[test]
    fn test_move_player_out_of_bounds() {
        let mut board = Board::new(5);
        let before = board.clone();

        assert_eq!(
            board.move_player(-1, -1),
            Err(MoveError::OutOfBounds { row: -1, col: -1 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_player_without_player() {
        let mut board = Board::new(3);
        board.clear();
        assert_eq!(board.move_player(1, 0), Err(MoveError::PlayerNotFound));
    }

    #[test]
    fn test_move_onto_mine_reports_mine() {
        let mut board = Board::new(3);
        board.place_mine_at(Position::new(1, 0));

        assert_eq!(board.move_player(1, 0), Ok(Cell::Mine));
        assert_eq!(board.cell(Position::new(1, 0)), Some(Cell::Player));
        assert_eq!(board.mine_count(), 0);
    }

    #[test]
    fn test_render() {
        let mut board = Board::new(3);
        board.place_mine_at(Position::new(2, 1));
        assert_eq!(board.to_string(), "P     \n      \n  X   \n");
    }

    #[test]
    fn test_board_serde() {
        let mut board = Board::new(3);
        board.place_mine_at(Position::new(1, 2));
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, back);
    }
}
