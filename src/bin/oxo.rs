//! oxo CLI - tic-tac-toe decision engine toolkit
//!
//! This CLI provides:
//! - Solving individual positions (classification + minimax evaluation)
//! - Headless policy-vs-policy matches with seeded RNG
//! - Exhaustive verification that the optimal policy never loses

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Tic-tac-toe decision engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a position and report the minimax move and value
    Solve(oxo::cli::commands::solve::SolveArgs),

    /// Run policy-vs-policy matches and report win/draw tallies
    Play(oxo::cli::commands::play::PlayArgs),

    /// Exhaustively verify the optimal policy never loses
    Analyze(oxo::cli::commands::analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve(args) => oxo::cli::commands::solve::execute(args),
        Commands::Play(args) => oxo::cli::commands::play::execute(args),
        Commands::Analyze(args) => oxo::cli::commands::analyze::execute(args),
    }
}
