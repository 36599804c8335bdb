//! CLI infrastructure for the oxo engine
//!
//! Subcommands for solving positions, running policy-vs-policy matches,
//! and exhaustively checking the optimal policy.

pub mod commands;
pub mod config;
pub mod output;
