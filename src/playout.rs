//! Random games for exercising the board rules.
//!
//! Moves alternate between Black and White, starting with Black. Each side
//! picks uniformly among its legal moves, never filling a point whose
//! neighbors are all its own stones. A side without such a move passes; the
//! game stops when both sides pass in a row or the placement limit is reached.
//!
//! The two-pass stop only ends this loop. The board itself has no notion of
//! passing or of a finished game.

use fastrand::Rng;

use crate::coord::Position;
use crate::goban::Board;
use crate::stone::Color;

/// Outcome of a random game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayoutSummary {
    /// Stones placed
    pub placements: usize,
    /// Turns where the side to move passed
    pub passes: usize,
    /// Black stones removed by captures
    pub black_captured: usize,
    /// White stones removed by captures
    pub white_captured: usize,
}

impl PlayoutSummary {
    pub fn total_captured(&self) -> usize {
        self.black_captured + self.white_captured
    }
}

/// Play a random game on `board`, calling `on_move` after every turn with the
/// position played, or `None` for a pass.
pub fn random_game(
    board: &mut Board,
    rng: &mut Rng,
    max_placements: usize,
    mut on_move: impl FnMut(&Board, Color, Option<Position>),
) -> PlayoutSummary {
    let mut summary = PlayoutSummary::default();
    let mut color = Color::Black;
    let mut consecutive_passes = 0;

    while consecutive_passes < 2 && summary.placements < max_placements {
        match choose_random_move(board, color, rng) {
            Some(index) => {
                let before = board.stone_count();
                if board.place_at(color, index).is_ok() {
                    // One stone was added; anything else missing was captured
                    let removed = before + 1 - board.stone_count();
                    match color {
                        Color::Black => summary.white_captured += removed,
                        Color::White => summary.black_captured += removed,
                    }
                    summary.placements += 1;
                    consecutive_passes = 0;
                    on_move(board, color, Some(board.position_of(index)));
                }
            }
            None => {
                summary.passes += 1;
                consecutive_passes += 1;
                on_move(board, color, None);
            }
        }
        color = color.opposite();
    }
    summary
}

/// Choose a random legal move for `color` that does not fill its own eye.
///
/// Scanning starts at a random cell and wraps around, then candidates are
/// tried in shuffled order.
fn choose_random_move(board: &Board, color: Color, rng: &mut Rng) -> Option<usize> {
    let cells = board.size() * board.size();
    let start = rng.usize(..cells);
    let mut candidates: Vec<usize> = (start..cells)
        .chain(0..start)
        .filter(|&index| board.stone_at(index).is_none() && !is_own_eye(board, color, index))
        .collect();
    rng.shuffle(&mut candidates);
    candidates
        .into_iter()
        .find(|&index| board.is_legal(color, index))
}

/// True if every neighbor of `index` is a stone of `color`.
fn is_own_eye(board: &Board, color: Color, index: usize) -> bool {
    board
        .neighbors(index)
        .all(|n| board.color_at(n) == Some(color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_game_respects_limit() {
        let mut board = Board::new(9).unwrap();
        let mut rng = Rng::with_seed(7);
        let mut turns = 0;
        let summary = random_game(&mut board, &mut rng, 30, |_, _, _| turns += 1);
        assert_eq!(summary.placements, 30);
        assert_eq!(turns, summary.placements + summary.passes);
        assert_eq!(
            board.stone_count(),
            summary.placements - summary.total_captured()
        );
    }

    #[test]
    fn test_random_game_is_reproducible() {
        let play = |seed| {
            let mut board = Board::new(7).unwrap();
            let mut rng = Rng::with_seed(seed);
            random_game(&mut board, &mut rng, 60, |_, _, _| {});
            board.to_string()
        };
        assert_eq!(play(42), play(42));
    }

    #[test]
    fn test_one_by_one_board_only_passes() {
        let mut board = Board::new(1).unwrap();
        let mut rng = Rng::with_seed(1);
        let summary = random_game(&mut board, &mut rng, 10, |_, _, _| {});
        assert_eq!(summary.placements, 0);
        assert_eq!(summary.passes, 2);
    }

    #[test]
    fn test_own_eye_detection() {
        let mut board = Board::new(5).unwrap();
        for p in ["10", "01"] {
            board.place(Color::Black, p.parse().unwrap()).unwrap();
        }
        assert!(is_own_eye(&board, Color::Black, 0));
        assert!(!is_own_eye(&board, Color::White, 0));
        assert!(!is_own_eye(&board, Color::Black, 6));
    }
}
