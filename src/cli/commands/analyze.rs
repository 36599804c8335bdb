//! Exhaustive verification of the optimal policy

use anyhow::Result;
use clap::Args;

use crate::{
    board::{Board, Player},
    cli::output,
    minimax::minimax,
    outcome::{Outcome, classify},
};

#[derive(Args, Debug)]
pub struct AnalyzeArgs {}

/// Statistics from an exhaustive sweep of the agent's game tree
#[derive(Debug, Clone, Copy, Default)]
pub struct SweepStats {
    pub terminals: u64,
    pub losses: u64,
}

/// Walk every line of play where `agent` follows the optimal policy and
/// the opponent tries every legal reply, tallying terminal outcomes.
///
/// `to_move` alternates as the walk descends; only opponent turns
/// branch, since the agent's move is forced by the policy.
pub fn sweep_optimal(board: &Board, agent: Player, to_move: Player, stats: &mut SweepStats) {
    match classify(board) {
        Outcome::Winner(winner) => {
            stats.terminals += 1;
            if winner != agent {
                stats.losses += 1;
            }
            return;
        }
        Outcome::Draw => {
            stats.terminals += 1;
            return;
        }
        Outcome::Ongoing => {}
    }

    if to_move == agent {
        let eval = minimax(board, agent, agent.opponent(), true, 0);
        let pos = eval.best_move.expect("ongoing position must have a move");
        let next = board
            .with_move(pos, agent)
            .expect("minimax move must be legal");
        sweep_optimal(&next, agent, to_move.opponent(), stats);
    } else {
        for pos in board.empty_positions() {
            let next = board
                .with_move(pos, to_move)
                .expect("empty position must accept a move");
            sweep_optimal(&next, agent, to_move.opponent(), stats);
        }
    }
}

pub fn execute(_args: AnalyzeArgs) -> Result<()> {
    output::print_section("Optimal policy sweep");

    for (agent, first) in [
        (Player::X, Player::X),
        (Player::O, Player::X),
        (Player::X, Player::O),
        (Player::O, Player::O),
    ] {
        let spinner = output::create_spinner(&format!(
            "sweeping agent {agent} with {first} moving first..."
        ));
        let mut stats = SweepStats::default();
        sweep_optimal(&Board::new(), agent, first, &mut stats);
        spinner.finish_and_clear();

        output::print_kv(
            &format!("Agent {agent}, {first} first"),
            &format!("{} terminal lines, {} losses", stats.terminals, stats.losses),
        );
        if stats.losses > 0 {
            anyhow::bail!("optimal policy lost {} lines as {agent}", stats.losses);
        }
    }

    println!("\nOptimal policy never loses.");
    Ok(())
}
