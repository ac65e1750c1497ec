//! Move selection over a built search tree

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    search::{
        analysis::analyze_terminal,
        config::SearchConfig,
        tree::SearchTree,
    },
    tictactoe::{Board, Square},
    types::{LOSS_VALUE, Score, WIN_VALUE},
};

/// Human-readable reading of a decision's backed-up score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interpretation {
    /// The computer wins no matter what the human replies
    GuaranteedWin,
    /// Every available move loses against perfect human play
    InevitableLoss,
    /// Perfect play from both sides ends level
    DrawAtBest,
}

impl Interpretation {
    /// Interpretation of a backed-up score
    pub fn from_score(score: Score) -> Self {
        match score {
            WIN_VALUE => Interpretation::GuaranteedWin,
            LOSS_VALUE => Interpretation::InevitableLoss,
            _ => Interpretation::DrawAtBest,
        }
    }
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interpretation::GuaranteedWin => write!(f, "guaranteed win"),
            Interpretation::InevitableLoss => write!(f, "inevitable loss"),
            Interpretation::DrawAtBest => write!(f, "best achievable result is a draw"),
        }
    }
}

/// The chosen move, its backed-up score, and what the score means
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionResult {
    pub square: Square,
    pub score: Score,
    pub interpretation: Interpretation,
}

/// Decide the computer's move from `board` with the default configuration.
///
/// Builds a fresh search tree (see [`SearchTree::build`]), runs the terminal
/// analyzer over it, and selects the child with the greatest backed-up score,
/// scanning in row-major move order and keeping the first maximum; later
/// equal scores never replace an earlier choice.
///
/// The returned tree is the one the decision was made from, already
/// analyzed; it is yours to render or discard.
///
/// # Errors
///
/// Returns [`crate::Error::GameOver`] if the position already has a winner
/// or a full board.
///
/// # Examples
///
/// ```
/// use oxo::{decide, Board, DRAW_VALUE};
///
/// let (decision, tree) = decide(&Board::new()).unwrap();
/// // Perfect play from the empty board is a forced draw.
/// assert_eq!(decision.score, DRAW_VALUE);
/// assert_eq!(tree.root().children.len(), 9);
/// ```
pub fn decide(board: &Board) -> Result<(DecisionResult, SearchTree), crate::Error> {
    decide_with_config(board, &SearchConfig::default())
}

/// Decide the computer's move with an explicit configuration.
///
/// See [`decide`] for the selection rule and error conditions.
pub fn decide_with_config(
    board: &Board,
    config: &SearchConfig,
) -> Result<(DecisionResult, SearchTree), crate::Error> {
    let mut tree = SearchTree::build(board, config)?;
    analyze_terminal(&mut tree);

    let mut best: Option<(Square, Score)> = None;
    for child in tree.children(tree.root_id()) {
        let square = child
            .square
            .expect("non-root nodes record the move that produced them");
        match best {
            Some((_, score)) if child.value <= score => {}
            _ => best = Some((square, child.value)),
        }
    }

    let (square, score) = best.expect("build rejects positions with no moves");
    let result = DecisionResult {
        square,
        score,
        interpretation: Interpretation::from_score(score),
    };
    Ok((result, tree))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DRAW_VALUE;

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_empty_board_decides_a_draw() {
        let (decision, _) = decide(&Board::new()).unwrap();
        assert_eq!(decision.score, DRAW_VALUE);
        assert_eq!(decision.interpretation, Interpretation::DrawAtBest);
    }

    #[test]
    fn test_takes_the_immediate_win() {
        // O O . / X X . / . . . with the computer to move: (0, 2) wins outright.
        let board = Board::from_string("OO.XX....").unwrap();
        let (decision, _) = decide(&board).unwrap();
        assert_eq!(decision.square, sq(0, 2));
        assert_eq!(decision.score, WIN_VALUE);
        assert_eq!(decision.interpretation, Interpretation::GuaranteedWin);
    }

    #[test]
    fn test_reports_the_inevitable_loss() {
        // The human forks the top row and left column; no reply saves the
        // computer.
        let board = Board::from_string("XX.XO...O").unwrap();
        let (decision, _) = decide(&board).unwrap();
        assert_eq!(decision.score, LOSS_VALUE);
        assert_eq!(decision.interpretation, Interpretation::InevitableLoss);
    }

    #[test]
    fn test_first_maximum_wins_ties() {
        let (decision, tree) = decide(&Board::new()).unwrap();

        // All nine opening replies score the same, so the policy must keep
        // the first enumerated move.
        let values: Vec<Score> = tree.children(tree.root_id()).map(|c| c.value).collect();
        assert!(values.iter().all(|&v| v == values[0]));
        assert_eq!(decision.square, sq(0, 0));
    }

    #[test]
    fn test_decision_on_finished_game_is_an_error() {
        let board = Board::from_string("XOXXOOOXX").unwrap();
        assert!(matches!(decide(&board), Err(crate::Error::GameOver)));
    }

    #[test]
    fn test_interpretation_labels() {
        assert_eq!(
            Interpretation::from_score(WIN_VALUE).to_string(),
            "guaranteed win"
        );
        assert_eq!(
            Interpretation::from_score(LOSS_VALUE).to_string(),
            "inevitable loss"
        );
        assert_eq!(
            Interpretation::from_score(DRAW_VALUE).to_string(),
            "best achievable result is a draw"
        );
    }
}
