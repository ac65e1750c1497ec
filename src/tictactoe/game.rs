//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{Board, Player, Square};

/// A move that has been played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayedMove {
    pub square: Square,
    pub player: Player,
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A game in progress between the human and the computer.
///
/// The human moves first. `Game` owns turn alternation and outcome
/// detection; it holds no search state. The caller asks the engine for the
/// computer's move and plays it through [`Game::play`] like any other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    moves: Vec<PlayedMove>,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Start a new game with the human to move
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            to_move: Player::Human,
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Current board position
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose turn it is
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Moves played so far, in order
    pub fn moves(&self) -> &[PlayedMove] {
        &self.moves
    }

    /// Outcome, if the game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// True once a winner exists or the board is full
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Play a move for the player whose turn it is.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] if the game has already ended, or
    /// [`crate::Error::SquareOccupied`] if the square is taken.
    pub fn play(&mut self, square: Square) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let next = self.board.with_mark(square, self.to_move)?;
        self.moves.push(PlayedMove {
            square,
            player: self.to_move,
        });
        self.board = next;

        if let Some(winner) = next.winner() {
            self.outcome = Some(GameOutcome::Win(winner));
        } else if next.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.to_move = self.to_move.opponent();
        Ok(())
    }

    /// Throw the position away and start over with the human to move
    pub fn reset(&mut self) {
        *self = Game::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_turns_alternate_starting_with_human() {
        let mut game = Game::new();
        assert_eq!(game.to_move(), Player::Human);
        game.play(sq(0, 0)).unwrap();
        assert_eq!(game.to_move(), Player::Computer);
        game.play(sq(1, 1)).unwrap();
        assert_eq!(game.to_move(), Player::Human);
        assert_eq!(game.moves().len(), 2);
    }

    #[test]
    fn test_win_ends_the_game() {
        let mut game = Game::new();
        game.play(sq(0, 0)).unwrap(); // human
        game.play(sq(1, 0)).unwrap(); // computer
        game.play(sq(0, 1)).unwrap(); // human
        game.play(sq(1, 1)).unwrap(); // computer
        game.play(sq(0, 2)).unwrap(); // human completes the top row

        assert_eq!(game.outcome(), Some(GameOutcome::Win(Player::Human)));
        assert!(game.play(sq(2, 2)).is_err());
    }

    #[test]
    fn test_draw_detection() {
        let mut game = Game::new();
        // X O X / X O O / O X X, filled in alternation
        for (row, col) in [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ] {
            game.play(sq(row, col)).unwrap();
        }
        assert_eq!(game.outcome(), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_occupied_square_rejected_without_consuming_the_turn() {
        let mut game = Game::new();
        game.play(sq(0, 0)).unwrap();
        assert!(game.play(sq(0, 0)).is_err());
        assert_eq!(game.to_move(), Player::Computer);
        assert_eq!(game.moves().len(), 1);
    }

    #[test]
    fn test_reset() {
        let mut game = Game::new();
        game.play(sq(0, 0)).unwrap();
        game.reset();
        assert_eq!(game.to_move(), Player::Human);
        assert!(game.moves().is_empty());
        assert_eq!(game.board().occupied_count(), 0);
    }
}
