//! Decision engine for 3x3 tic-tac-toe
//!
//! This crate provides:
//! - Board representation with copy-on-write hypothetical moves
//! - Outcome classification (win / draw / ongoing) over the 8 winning lines
//! - Three move policies: uniform random, one-ply heuristic (win, then
//!   block, then random), and exhaustive depth-biased minimax
//! - A caller-side game driver and a CLI for solving positions and
//!   running policy-vs-policy matches
//!
//! The engine is stateless: every call receives the full board and which
//! marks are "self" and "opponent", and returns a pure result. State
//! (the authoritative board, the turn) lives in [`game::Game`] or
//! whatever else drives the engine.

pub mod board;
pub mod cli;
pub mod error;
pub mod game;
pub mod lines;
pub mod minimax;
pub mod outcome;
pub mod policy;

pub use board::{Board, Cell, Player};
pub use error::{Error, Result};
pub use game::{Game, GameOutcome, Move};
pub use lines::WINNING_LINES;
pub use minimax::{Evaluation, minimax};
pub use outcome::{Outcome, classify};
pub use policy::{Policy, select_move};
