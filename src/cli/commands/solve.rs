//! Solve a single position: classification, minimax value, best move

use anyhow::Result;
use clap::Args;

use crate::{
    board::{Board, Player},
    cli::{config::parse_player, output},
    minimax::minimax,
    outcome::{Outcome, classify},
};

#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Board as 9 characters in row-major order, '.' for empty
    /// (e.g. "XX.OO....")
    #[arg(long)]
    pub board: String,

    /// Player to find a move for
    #[arg(long, default_value = "X", value_parser = parse_player)]
    pub player: Player,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;
    let player = args.player;

    output::print_section("Position");
    println!("{board}");

    match classify(&board) {
        Outcome::Winner(winner) => {
            output::print_kv("Status", &format!("won by {winner}"));
        }
        Outcome::Draw => {
            output::print_kv("Status", "draw");
        }
        Outcome::Ongoing => {
            let eval = minimax(&board, player, player.opponent(), true, 0);
            output::print_kv("Status", "ongoing");
            output::print_kv("To move", &player.to_string());
            output::print_kv("Value", &eval.value.to_string());
            match eval.best_move {
                Some(pos) => output::print_kv("Best move", &pos.to_string()),
                None => output::print_kv("Best move", "none"),
            }
        }
    }

    Ok(())
}
