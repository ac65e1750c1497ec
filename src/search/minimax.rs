//! Exhaustive minimax evaluation

use crate::{
    tictactoe::{Board, Player},
    types::{DRAW_VALUE, LOSS_VALUE, Score, WIN_VALUE},
};

/// Evaluate a position with `to_move` to play.
///
/// The computer maximizes, the human minimizes. A position the computer is
/// guaranteed to win evaluates to [`WIN_VALUE`], a guaranteed human win to
/// [`LOSS_VALUE`], and a drawn position to [`DRAW_VALUE`].
///
/// The evaluation is exhaustive: every leaf of the game tree below `board`
/// is visited exactly once. There is no pruning and no memoization: the
/// full tree is small enough (at most 9! positions) that a decision
/// completes immediately, and results are never reused across decisions.
///
/// The board is taken by value internally (`Board` is `Copy`), so the
/// caller's position is never mutated mid-search.
///
/// # Examples
///
/// ```
/// use oxo::{evaluate, Board, Player, DRAW_VALUE};
///
/// // Perfect play from the empty board is a forced draw.
/// assert_eq!(evaluate(&Board::new(), Player::Computer), DRAW_VALUE);
/// ```
pub fn evaluate(board: &Board, to_move: Player) -> Score {
    if let Some(winner) = board.winner() {
        return match winner {
            Player::Computer => WIN_VALUE,
            Player::Human => LOSS_VALUE,
        };
    }
    if board.is_full() {
        return DRAW_VALUE;
    }

    let mut best = if to_move.is_maximizing() {
        Score::MIN
    } else {
        Score::MAX
    };

    for square in board.available_moves() {
        let next = board
            .with_mark(square, to_move)
            .expect("move enumeration only yields empty squares");
        let value = evaluate(&next, to_move.opponent());
        best = if to_move.is_maximizing() {
            best.max(value)
        } else {
            best.min(value)
        };
    }

    best
}
