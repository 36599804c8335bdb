//! Board classification: win, draw, or ongoing

use serde::{Deserialize, Serialize};

use crate::{
    board::{Board, Player},
    lines::WINNING_LINES,
};

/// Result of classifying a board position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Winner(Player),
    Draw,
    Ongoing,
}

impl Outcome {
    /// Check if the position ends the game
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

/// Classify a board as won, drawn, or still in play.
///
/// Scans the 8 winning lines in fixed order (rows, columns, diagonals)
/// and returns on the first line fully occupied by one player. Under
/// legal alternating play at most one player can hold a completed line,
/// so the scan order never changes the winner; it is fixed anyway so
/// that classification is deterministic. A full board with no completed
/// line is a draw; anything else is ongoing.
pub fn classify(board: &Board) -> Outcome {
    for line in &WINNING_LINES {
        let first = board.get(line[0]);
        if line.iter().all(|&idx| board.get(idx) == first) {
            match first {
                crate::board::Cell::X => return Outcome::Winner(Player::X),
                crate::board::Cell::O => return Outcome::Winner(Player::O),
                crate::board::Cell::Empty => {}
            }
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
