//! Winning line analysis for the 3x3 board

use super::{Cell, Player};

/// Winning line indices on the 3x3 board, in the order they are scanned:
/// rows first, then columns, then the two diagonals.
///
/// The scan order matters: [`Board::winner`] reports the owner of the first
/// complete line in this order, and makes no attempt to detect boards with
/// more than one winning line (unreachable under alternating play).
///
/// [`Board::winner`]: super::Board::winner
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has three in a row anywhere on the board
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// Find the first complete line in scan order and its owner
    pub fn first_complete_line(cells: &[Cell; 9]) -> Option<(Player, [usize; 3])> {
        WINNING_LINES.iter().find_map(|&line| {
            let owner = cells[line[0]].to_player()?;
            if line.iter().all(|&idx| cells[idx] == owner.to_cell()) {
                Some((owner, line))
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells_from(s: &str) -> [Cell; 9] {
        let mut cells = [Cell::Empty; 9];
        for (i, c) in s.chars().enumerate() {
            cells[i] = Cell::from_char(c).unwrap();
        }
        cells
    }

    #[test]
    fn test_has_won_rows_columns_diagonals() {
        assert!(LineAnalyzer::has_won(&cells_from("XXX......"), Player::Human));
        assert!(LineAnalyzer::has_won(&cells_from("O..O..O.."), Player::Computer));
        assert!(LineAnalyzer::has_won(&cells_from("X...X...X"), Player::Human));
        assert!(!LineAnalyzer::has_won(&cells_from("XX......."), Player::Human));
    }

    #[test]
    fn test_first_complete_line_scan_order() {
        // Both the top row and the left column are complete; the row is
        // scanned first.
        let cells = cells_from("XXXX..X..");
        let (owner, line) = LineAnalyzer::first_complete_line(&cells).unwrap();
        assert_eq!(owner, Player::Human);
        assert_eq!(line, [0, 1, 2]);
    }

    #[test]
    fn test_no_complete_line() {
        assert!(LineAnalyzer::first_complete_line(&cells_from("XOXOXO...")).is_none());
    }
}
