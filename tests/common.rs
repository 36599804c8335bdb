//! Shared helpers for integration tests

use oxo::{Board, Outcome, Player, classify};

/// Enumerate every (board, player to move) state reachable from an empty
/// board by legal alternating play with `first` opening. Terminal states
/// are included; nothing is explored past them.
pub fn reachable_states(first: Player) -> Vec<(Board, Player)> {
    let mut seen = std::collections::HashSet::new();
    let mut states = Vec::new();
    walk(&Board::new(), first, &mut seen, &mut states);
    states
}

fn walk(
    board: &Board,
    to_move: Player,
    seen: &mut std::collections::HashSet<(String, Player)>,
    states: &mut Vec<(Board, Player)>,
) {
    if !seen.insert((board.encode(), to_move)) {
        return;
    }
    states.push((*board, to_move));

    if classify(board) != Outcome::Ongoing {
        return;
    }

    for pos in board.empty_positions() {
        let next = board.with_move(pos, to_move).expect("legal move");
        walk(&next, to_move.opponent(), seen, states);
    }
}
