//! Headless policy-vs-policy matches

use anyhow::Result;
use clap::Args;
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Serialize;

use crate::{
    board::Player,
    cli::output,
    game::{Game, GameOutcome},
    policy::{Policy, select_move},
};

#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Policy for the X player
    #[arg(long, value_enum, default_value_t = Policy::Optimal)]
    pub x: Policy,

    /// Policy for the O player
    #[arg(long, value_enum, default_value_t = Policy::Random)]
    pub o: Policy,

    /// Number of games to play
    #[arg(long, default_value_t = 1000)]
    pub games: u64,

    /// RNG seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Tallies from a policy-vs-policy match
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub x_policy: Policy,
    pub o_policy: Policy,
    pub games: u64,
    pub x_wins: u64,
    pub o_wins: u64,
    pub draws: u64,
}

/// Play one game to completion, each side moving under its policy
pub fn play_game<R: Rng>(x_policy: Policy, o_policy: Policy, rng: &mut R) -> Result<GameOutcome> {
    let mut game = Game::new();

    while !game.is_over() {
        let this = game.to_move();
        let policy = match this {
            Player::X => x_policy,
            Player::O => o_policy,
        };
        let pos = select_move(game.board(), this, this.opponent(), policy, rng)?;
        game.play(pos)?;
    }

    game.outcome()
        .ok_or_else(|| anyhow::anyhow!("finished game has no outcome"))
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    let pb = output::create_match_progress(args.games);
    let mut report = MatchReport {
        x_policy: args.x,
        o_policy: args.o,
        games: args.games,
        x_wins: 0,
        o_wins: 0,
        draws: 0,
    };

    for _ in 0..args.games {
        match play_game(args.x, args.o, &mut rng)? {
            GameOutcome::Win(Player::X) => report.x_wins += 1,
            GameOutcome::Win(Player::O) => report.o_wins += 1,
            GameOutcome::Draw => report.draws += 1,
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output::print_section("Match results");
        output::print_kv("X policy", &format!("{:?}", report.x_policy));
        output::print_kv("O policy", &format!("{:?}", report.o_policy));
        output::print_kv("Seed", &seed.to_string());
        output::print_kv("Games", &report.games.to_string());
        output::print_kv("X wins", &report.x_wins.to_string());
        output::print_kv("O wins", &report.o_wins.to_string());
        output::print_kv("Draws", &report.draws.to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_game_completes() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            // Random vs random always reaches a win or a draw
            play_game(Policy::Random, Policy::Random, &mut rng).unwrap();
        }
    }

    #[test]
    fn test_optimal_vs_optimal_draws() {
        let mut rng = StdRng::seed_from_u64(42);
        let outcome = play_game(Policy::Optimal, Policy::Optimal, &mut rng).unwrap();
        assert_eq!(outcome, GameOutcome::Draw);
    }

    #[test]
    fn test_optimal_never_loses_to_random() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let outcome = play_game(Policy::Optimal, Policy::Random, &mut rng).unwrap();
            assert_ne!(outcome, GameOutcome::Win(Player::O));
        }
    }
}
