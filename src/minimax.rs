//! Exhaustive minimax search with depth-biased scoring

use crate::{
    board::{Board, Player},
    outcome::{Outcome, classify},
};

/// Result of a minimax evaluation: the chosen move (None at terminal
/// positions) and the position's value from the searching player's
/// perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub best_move: Option<usize>,
    pub value: i32,
}

/// Evaluate a position by exhaustive game-tree search.
///
/// `this` is the side the score is computed for; `maximizing` says whose
/// turn it is at this level (`true` places `this`'s mark, `false` places
/// `opponent`'s). Terminal scores are depth-biased: a win for `this` is
/// worth `10 - depth`, a loss `depth - 10`, a draw `0`, so among equally
/// winning lines the quickest is preferred and among losing ones the
/// slowest. The bias only affects move ranking, never whether a position
/// is winning, drawn, or lost.
///
/// Candidate moves are tried in ascending index order and only a strict
/// improvement replaces the running best, so the lowest index among tied
/// moves always wins. The search is deterministic and explores the full
/// tree; at 3x3 scale that is at most 9! leaf paths and needs no pruning
/// or transposition table.
pub fn minimax(
    board: &Board,
    this: Player,
    opponent: Player,
    maximizing: bool,
    depth: i32,
) -> Evaluation {
    match classify(board) {
        Outcome::Winner(winner) if winner == this => {
            return Evaluation {
                best_move: None,
                value: 10 - depth,
            };
        }
        Outcome::Winner(_) => {
            return Evaluation {
                best_move: None,
                value: depth - 10,
            };
        }
        Outcome::Draw => {
            return Evaluation {
                best_move: None,
                value: 0,
            };
        }
        Outcome::Ongoing => {}
    }

    let mut best_value = if maximizing { i32::MIN } else { i32::MAX };
    let mut best_move = None;

    for pos in board.empty_positions() {
        let mark = if maximizing { this } else { opponent };
        // empty_positions() only yields legal placements
        let child = board
            .with_move(pos, mark)
            .expect("empty position must accept a move");

        let result = minimax(&child, this, opponent, !maximizing, depth + 1);

        let improves = if maximizing {
            result.value > best_value
        } else {
            result.value < best_value
        };
        if improves {
            best_value = result.value;
            best_move = Some(pos);
        }
    }

    Evaluation {
        best_move,
        value: best_value,
    }
}
