//! Board property tests.
//!
//! These check the board contract across sizes, seeds and coordinates
//! rather than at a single hand-picked point.

use mine_crossing::{Board, Cell, GameRng, MoveError, Position};
use proptest::prelude::*;

proptest! {
    /// A fresh board holds only the player, at the origin.
    #[test]
    fn prop_initialize_player_at_origin(size in 1usize..16) {
        let board = Board::new(size);

        for (pos, cell) in board.enumerate() {
            if pos == Position::ORIGIN {
                prop_assert_eq!(cell, Cell::Player);
            } else {
                prop_assert_eq!(cell, Cell::Empty);
            }
        }
        prop_assert_eq!(board.find_player_position(), Some(Position::ORIGIN));
    }

    /// Mine placement puts exactly N mines on N×N, never under the player.
    #[test]
    fn prop_place_mines_exactly_n(size in 2usize..16, seed in any::<u64>()) {
        let mut board = Board::new(size);
        let placed = board.place_mines(&mut GameRng::new(seed));

        prop_assert_eq!(placed, size);
        prop_assert_eq!(board.mine_count(), size);
        prop_assert_eq!(board.cell(Position::ORIGIN), Some(Cell::Player));
        prop_assert_eq!(board.cells().filter(|c| *c == Cell::Player).count(), 1);
    }

    /// Bounds checking matches 0 <= r < N and 0 <= c < N, negatives included.
    #[test]
    fn prop_is_valid_move_matches_bounds(size in 1usize..16, row in -20i32..20, col in -20i32..20) {
        let board = Board::new(size);
        let n = size as i32;
        let expected = (0..n).contains(&row) && (0..n).contains(&col);

        prop_assert_eq!(board.is_valid_move(row, col), expected);
    }

    /// Rejected moves leave the board exactly as it was.
    #[test]
    fn prop_invalid_move_leaves_board(size in 2usize..10, seed in any::<u64>(), row in -5i32..0, col in -5i32..15) {
        let mut board = Board::new(size);
        board.place_mines(&mut GameRng::new(seed));
        let before = board.clone();

        prop_assert_eq!(board.move_player(row, col), Err(MoveError::OutOfBounds { row, col }));
        prop_assert_eq!(board, before);
    }

    /// A valid move keeps exactly one player and reports the old contents.
    #[test]
    fn prop_move_keeps_single_player(
        (size, row, col) in (2usize..10).prop_flat_map(|s| (Just(s), 0..s as i32, 0..s as i32)),
        seed in any::<u64>()
    ) {
        let mut board = Board::new(size);
        board.place_mines(&mut GameRng::new(seed));
        let target = Position::new(row, col);
        let expected = board.cell(target);

        let previous = board.move_player(row, col);

        prop_assert_eq!(previous.ok(), expected);
        prop_assert_eq!(board.find_player_position(), Some(target));
        prop_assert_eq!(board.cells().filter(|c| *c == Cell::Player).count(), 1);
    }
}

#[test]
fn test_move_player_diagonal_from_origin() {
    let mut board = Board::new(5);
    board.initialize();

    board.move_player(1, 1).unwrap();

    assert_eq!(board.find_player_position(), Some(Position::new(1, 1)));
    assert_eq!(board.cell(Position::ORIGIN), Some(Cell::Empty));
}

#[test]
fn test_move_player_off_board_errors() {
    let mut board = Board::new(5);
    board.initialize();
    let before = board.clone();

    assert!(matches!(
        board.move_player(-1, -1),
        Err(MoveError::OutOfBounds { .. })
    ));
    assert_eq!(board, before);
}

#[test]
fn test_same_seed_same_layout() {
    let layout = |seed| {
        let mut board = Board::new(8);
        board.place_mines(&mut GameRng::new(seed));
        board
    };

    assert_eq!(layout(2024), layout(2024));
}
