//! Move selection policies: random, one-ply heuristic, and minimax-optimal

use clap::ValueEnum;
use rand::{Rng, prelude::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::{
    board::{Board, Player},
    lines::winning_positions,
    minimax::minimax,
};

/// A move selection strategy, from weakest to unbeatable.
///
/// These map onto the usual difficulty tiers: `Random` is "easy",
/// `Heuristic` is "intermediate", `Optimal` is "impossible".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Uniform random choice over the empty cells
    #[value(alias = "easy")]
    Random,
    /// Take an immediate win, else block an immediate loss, else random.
    ///
    /// One ply only: this tier is blind to forks and multi-move traps on
    /// purpose, which is what makes it beatable.
    #[value(alias = "intermediate")]
    Heuristic,
    /// Exhaustive minimax; never loses
    #[value(alias = "impossible")]
    Optimal,
}

/// Select a move for `this` player under the given policy.
///
/// The board must have at least one empty cell and, for `Heuristic` and
/// `Optimal`, must still be in play; callers are responsible for not
/// invoking a policy on a finished game. A full board yields
/// [`Error::NoValidMoves`](crate::Error::NoValidMoves) rather than a
/// move that cannot be applied.
///
/// Only `Random` (and the heuristic's random fallback) draws from `rng`;
/// `Optimal` is a pure function of the board and players.
pub fn select_move<R: Rng>(
    board: &Board,
    this: Player,
    opponent: Player,
    policy: Policy,
    rng: &mut R,
) -> Result<usize, crate::Error> {
    match policy {
        Policy::Random => random_move(board, rng),
        Policy::Heuristic => heuristic_move(board, this, opponent, rng),
        Policy::Optimal => minimax(board, this, opponent, true, 0)
            .best_move
            .ok_or(crate::Error::NoValidMoves),
    }
}

fn random_move<R: Rng>(board: &Board, rng: &mut R) -> Result<usize, crate::Error> {
    board
        .empty_positions()
        .choose(rng)
        .copied()
        .ok_or(crate::Error::NoValidMoves)
}

/// One-ply lookahead: win now if possible, otherwise block the opponent
/// winning next, otherwise play randomly. `winning_positions` returns
/// ascending indices, so the first element is the lowest winning or
/// blocking cell.
fn heuristic_move<R: Rng>(
    board: &Board,
    this: Player,
    opponent: Player,
    rng: &mut R,
) -> Result<usize, crate::Error> {
    if let Some(&pos) = winning_positions(board, this).first() {
        return Ok(pos);
    }
    if let Some(&pos) = winning_positions(board, opponent).first() {
        return Ok(pos);
    }
    random_move(board, rng)
}
