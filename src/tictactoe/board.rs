//! Board state representation and pure position queries

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Human,
    Computer,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Human => 'X',
            Cell::Computer => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Human),
            'O' | 'o' | '0' => Some(Cell::Computer),
            _ => None,
        }
    }

    /// Convert an occupied cell to the player who owns it
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::Human => Some(Player::Human),
            Cell::Computer => Some(Player::Computer),
            Cell::Empty => None,
        }
    }
}

/// A player in the game.
///
/// The computer is the maximizer in the search, the human the minimizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// Convert player to the cell mark it places
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Human => Cell::Human,
            Player::Computer => Cell::Computer,
        }
    }

    /// True if this player picks the greatest backed-up value among children
    pub fn is_maximizing(self) -> bool {
        matches!(self, Player::Computer)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Human => write!(f, "human"),
            Player::Computer => write!(f, "computer"),
        }
    }
}

/// A (row, col) coordinate on the 3x3 board.
///
/// Squares are ordered row-major: (0,0), (0,1), ... (2,2). This ordering is
/// load-bearing: it fixes move enumeration order, sibling order in the
/// search tree, and decision tie-breaking.
///
/// # Examples
///
/// ```
/// use oxo::Square;
///
/// let sq = Square::new(1, 2).unwrap();
/// assert_eq!(sq.index(), 5);
/// assert!(Square::new(3, 0).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Square {
    row: usize,
    col: usize,
}

impl Square {
    /// Create a square, validating it lies on the board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::SquareOutOfBounds`] if either coordinate is >= 3.
    pub fn new(row: usize, col: usize) -> Result<Self, crate::Error> {
        if row < Board::SIDE && col < Board::SIDE {
            Ok(Square { row, col })
        } else {
            Err(crate::Error::SquareOutOfBounds { row, col })
        }
    }

    /// Create a square from its row-major index.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::SquareOutOfBounds`] if the index is >= 9.
    pub fn from_index(index: usize) -> Result<Self, crate::Error> {
        Self::new(index / Board::SIDE, index % Board::SIDE)
    }

    /// Square known to be on the board by construction
    pub(crate) const fn unchecked(row: usize, col: usize) -> Self {
        Square { row, col }
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index into the cell array
    pub fn index(self) -> usize {
        self.row * Board::SIDE + self.col
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Count of each mark on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MarkCount {
    human: usize,
    computer: usize,
    empty: usize,
}

/// An immutable 3x3 board value.
///
/// This type implements `Copy` (it is 9 bytes), so the search passes boards
/// by value and never needs an undo step: placing a mark produces a new
/// board, and the caller's copy is untouched.
///
/// `Board` carries no turn information and does not enforce alternation; it
/// evaluates whatever position it is given. [`Board::from_string`] does
/// validate mark counts, because parsed positions come from users rather
/// than from the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Side length of the board
    pub const SIDE: usize = 3;

    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Helper: count marks on the board.
    fn count_marks(cells: &[Cell; 9]) -> MarkCount {
        let mut count = MarkCount {
            human: 0,
            computer: 0,
            empty: 0,
        };
        for cell in cells {
            match cell {
                Cell::Human => count.human += 1,
                Cell::Computer => count.computer += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Create a board from a string of nine cell characters.
    ///
    /// Whitespace is filtered out; '.' is an empty cell, 'X' a human mark,
    /// 'O' a computer mark. Mark counts are validated against alternation
    /// with the human moving first.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Fewer than 9 non-whitespace characters are present
    /// - Any character is not a valid cell representation
    /// - The mark counts are impossible under alternating play
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let cleaned: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if cleaned.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: cleaned.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in cleaned.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let count = Self::count_marks(&cells);
        if count.human != count.computer && count.human != count.computer + 1 {
            return Err(crate::Error::InvalidMarkCounts {
                human: count.human,
                computer: count.computer,
            });
        }

        Ok(Board { cells })
    }

    /// Get a canonical nine-character string representation
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }

    /// Get cell at a square
    pub fn get(&self, square: Square) -> Cell {
        self.cells[square.index()]
    }

    /// Check if a square is empty
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square) == Cell::Empty
    }

    /// Count the number of occupied squares
    pub fn occupied_count(&self) -> usize {
        let count = Self::count_marks(&self.cells);
        count.human + count.computer
    }

    /// Place a player's mark and return the new board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::SquareOccupied`] if the square is not empty.
    #[must_use = "with_mark returns a new board; the original is unchanged"]
    pub fn with_mark(&self, square: Square, player: Player) -> Result<Board, crate::Error> {
        if !self.is_empty(square) {
            return Err(crate::Error::SquareOccupied {
                row: square.row(),
                col: square.col(),
            });
        }

        let mut next = *self;
        next.cells[square.index()] = player.to_cell();
        Ok(next)
    }

    /// Swap the two players' marks, leaving empty cells alone.
    ///
    /// Useful for evaluating a position from the opposite perspective; the
    /// game is zero-sum under this relabeling.
    #[must_use = "swap_marks returns a new board; the original is unchanged"]
    pub fn swap_marks(&self) -> Board {
        let mut swapped = *self;
        for cell in &mut swapped.cells {
            *cell = match cell {
                Cell::Human => Cell::Computer,
                Cell::Computer => Cell::Human,
                Cell::Empty => Cell::Empty,
            };
        }
        swapped
    }

    /// Get the winner, if any.
    ///
    /// Lines are scanned rows first, then columns, then diagonals, and the
    /// owner of the first complete line is reported. A board with two
    /// winning lines is unreachable under alternating play and is not
    /// detected; callers own input validation.
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::first_complete_line(&self.cells).map(|(player, _)| player)
    }

    /// Check whether a specific player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// True iff no cell is empty
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Check if the position admits no further play (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// All empty squares in row-major order.
    ///
    /// The enumeration order is deterministic and load-bearing: it fixes the
    /// left-to-right order of siblings in the search tree and the
    /// tie-breaking order of the decision policy.
    pub fn available_moves(&self) -> Vec<Square> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Square::unchecked(i / Board::SIDE, i % Board::SIDE))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..Board::SIDE {
            for col in 0..Board::SIDE {
                write!(f, "{}", self.cells[row * Board::SIDE + col].to_char())?;
            }
            if row < Board::SIDE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(board.available_moves().len(), 9);
        assert!(!board.is_terminal());
    }

    #[test]
    fn test_with_mark() {
        let board = Board::new();
        let board = board.with_mark(sq(1, 1), Player::Human).unwrap();
        assert_eq!(board.get(sq(1, 1)), Cell::Human);

        let result = board.with_mark(sq(1, 1), Player::Computer);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("occupied"));
    }

    #[test]
    fn test_winner_row() {
        let board = Board::from_string("OOOXX.X..").unwrap();
        assert_eq!(board.winner(), Some(Player::Computer));
        assert!(board.has_won(Player::Computer));
        assert!(!board.has_won(Player::Human));
    }

    #[test]
    fn test_winner_column() {
        let board = Board::from_string("XO.XO.X..").unwrap();
        assert_eq!(board.winner(), Some(Player::Human));
    }

    #[test]
    fn test_winner_diagonals() {
        let board = Board::from_string("XO..XO..X").unwrap();
        assert_eq!(board.winner(), Some(Player::Human));

        let board = Board::from_string("XXO.OXO..").unwrap();
        assert_eq!(board.winner(), Some(Player::Computer));
    }

    #[test]
    fn test_no_winner() {
        assert_eq!(Board::new().winner(), None);
        let drawn = Board::from_string("XOXXOOOXX").unwrap();
        assert_eq!(drawn.winner(), None);
        assert!(drawn.is_full());
        assert!(drawn.is_terminal());
    }

    #[test]
    fn test_available_moves_row_major_order() {
        let board = Board::from_string("X...O....").unwrap();
        let moves = board.available_moves();
        let expected = [(0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)];
        assert_eq!(moves.len(), expected.len());
        for (square, (row, col)) in moves.iter().zip(expected) {
            assert_eq!((square.row(), square.col()), (row, col));
        }
    }

    #[test]
    fn test_enumeration_is_deterministic() {
        let board = Board::from_string("X.O.X.O..").unwrap();
        assert_eq!(board.available_moves(), board.available_moves());
    }

    #[test]
    fn test_moves_and_occupied_partition_the_board() {
        let board = Board::from_string("XOX.O..X.").unwrap();
        let moves = board.available_moves();
        assert_eq!(moves.len() + board.occupied_count(), 9);
        for square in &moves {
            assert!(board.is_empty(*square));
        }
    }

    #[test]
    fn test_from_string_rejects_bad_input() {
        assert!(Board::from_string("XO").is_err());
        assert!(Board::from_string("XOZ......").is_err());
        // Two human marks, zero computer marks: impossible under alternation.
        assert!(Board::from_string("XX.......").is_err());
        // Computer cannot be ahead.
        assert!(Board::from_string("O........").is_err());
    }

    #[test]
    fn test_encode_roundtrip() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        assert_eq!(board.encode(), "XOX.O.X..");
        assert_eq!(Board::from_string(&board.encode()).unwrap(), board);
    }

    #[test]
    fn test_from_string_filters_whitespace() {
        let board = Board::from_string("XOX\n.O.\nX..").unwrap();
        assert_eq!(board.encode(), "XOX.O.X..");
    }

    #[test]
    fn test_swap_marks() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        let swapped = board.swap_marks();
        assert_eq!(swapped.encode(), "OXO.X.O..");
        assert_eq!(swapped.swap_marks(), board);
    }

    #[test]
    fn test_display() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        assert_eq!(format!("{board}"), "XOX\n.O.\nX..");
    }

    #[test]
    fn test_square_bounds() {
        assert!(Square::new(2, 2).is_ok());
        assert!(Square::new(3, 0).is_err());
        assert!(Square::new(0, 3).is_err());
        assert!(Square::from_index(8).is_ok());
        assert!(Square::from_index(9).is_err());
    }

    #[test]
    fn test_square_index_roundtrip() {
        for index in 0..9 {
            let square = Square::from_index(index).unwrap();
            assert_eq!(square.index(), index);
        }
    }
}
