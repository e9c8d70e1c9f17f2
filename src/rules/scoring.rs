//! Scoring policies.

/// Decides what a win is worth and whether the score is shown.
pub trait ScoringPolicy {
    /// Score awarded for reaching the far side after `moves` moves.
    ///
    /// `None` means the game is not scored.
    fn score_on_win(&self, board_size: usize, moves: u32) -> Option<i64>;

    /// Text appended to the lives/moves status.
    fn status_suffix(&self, _score: i64) -> String {
        String::new()
    }
}

/// No score is kept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Unscored;

impl ScoringPolicy for Unscored {
    fn score_on_win(&self, _board_size: usize, _moves: u32) -> Option<i64> {
        None
    }
}

/// A win scores `size² - moves`: fewer moves, higher score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MovesRemaining;

impl ScoringPolicy for MovesRemaining {
    fn score_on_win(&self, board_size: usize, moves: u32) -> Option<i64> {
        let cells = (board_size * board_size) as i64;
        Some(cells - i64::from(moves))
    }

    fn status_suffix(&self, score: i64) -> String {
        format!(", Score: {score}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unscored() {
        assert_eq!(Unscored.score_on_win(5, 4), None);
        assert_eq!(Unscored.status_suffix(10), "");
    }

    #[test]
    fn test_moves_remaining() {
        assert_eq!(MovesRemaining.score_on_win(5, 4), Some(21));
        assert_eq!(MovesRemaining.score_on_win(3, 2), Some(7));
        assert_eq!(MovesRemaining.status_suffix(21), ", Score: 21");
    }

    #[test]
    fn test_moves_remaining_can_go_negative() {
        assert_eq!(MovesRemaining.score_on_win(2, 10), Some(-6));
    }
}
