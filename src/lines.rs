//! Winning line analysis for the 3x3 board

use crate::board::{Board, Cell, Player};

/// Winning line indices on the 3x3 board.
///
/// The order is fixed: rows, then columns, then diagonals. Classification
/// scans the lines in exactly this order.
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

/// Check if a player occupies all three cells of some line
pub fn has_won(board: &Board, player: Player) -> bool {
    let target = player.to_cell();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| board.get(idx) == target))
}

/// Find all positions that would immediately win for the player
pub fn winning_positions(board: &Board, player: Player) -> Vec<usize> {
    let mut moves: Vec<usize> = WINNING_LINES
        .iter()
        .filter_map(|line| winning_move_in_line(board, player, line))
        .collect();
    moves.sort_unstable();
    moves.dedup();
    moves
}

/// Find the winning move position in a specific line, if one exists
/// (two of the player's marks plus one empty cell)
fn winning_move_in_line(board: &Board, player: Player, line: &[usize; 3]) -> Option<usize> {
    let target = player.to_cell();
    let mut count = 0;
    let mut empty_pos = None;

    for &idx in line {
        match board.get(idx) {
            Cell::Empty => {
                if empty_pos.is_some() {
                    return None;
                }
                empty_pos = Some(idx);
            }
            c if c == target => count += 1,
            _ => return None,
        }
    }

    if count == 2 { empty_pos } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_won_horizontal() {
        let board = Board::from_string("XXX......").unwrap();
        assert!(has_won(&board, Player::X));
        assert!(!has_won(&board, Player::O));
    }

    #[test]
    fn test_has_won_vertical() {
        let board = Board::from_string("O..O..O..").unwrap();
        assert!(has_won(&board, Player::O));
        assert!(!has_won(&board, Player::X));
    }

    #[test]
    fn test_has_won_diagonal() {
        let board = Board::from_string("X...X...X").unwrap();
        assert!(has_won(&board, Player::X));
        assert!(!has_won(&board, Player::O));
    }

    #[test]
    fn test_winning_positions_single() {
        // X.X top row, gap at 1
        let board = Board::from_string("X.X......").unwrap();
        assert_eq!(winning_positions(&board, Player::X), vec![1]);
    }

    #[test]
    fn test_winning_positions_multiple() {
        // XX. / X.. -- completes top row at 2 or left column at 6
        let board = Board::from_string("XX.X.....").unwrap();
        assert_eq!(winning_positions(&board, Player::X), vec![2, 6]);
    }

    #[test]
    fn test_no_winning_position_when_blocked() {
        let board = Board::from_string("XXO......").unwrap();
        assert!(winning_positions(&board, Player::X).is_empty());
    }
}
