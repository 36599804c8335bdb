//! Shared argument parsing helpers

use crate::board::Player;

/// Parse a player argument ("X" or "O", case-insensitive)
pub fn parse_player(s: &str) -> Result<Player, String> {
    match s {
        "X" | "x" => Ok(Player::X),
        "O" | "o" => Ok(Player::O),
        _ => Err(format!("invalid player '{s}' (expected 'X' or 'O')")),
    }
}
