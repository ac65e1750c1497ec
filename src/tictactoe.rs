//! Tic-tac-toe game implementation

pub mod board;
pub mod game;
pub mod lines;

pub use board::{Board, Cell, Player, Square};
pub use game::{Game, GameOutcome, PlayedMove};
pub use lines::{LineAnalyzer, WINNING_LINES};
