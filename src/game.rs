//! Caller-side game driver
//!
//! The engine itself is stateless; this module is the authoritative
//! state holder that feeds it: it owns the board and the turn, applies
//! the indices the policies return, and records when the game ends.

use serde::{Deserialize, Serialize};

use crate::{
    board::{Board, Player},
    outcome::{Outcome, classify},
};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A game in progress: the authoritative board, whose turn it is, and
/// the move history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    moves: Vec<Move>,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Start a new game with X to move
    pub fn new() -> Self {
        Self::new_with_first_player(Player::X)
    }

    /// Start a new game with a chosen first player
    pub fn new_with_first_player(first: Player) -> Self {
        Game {
            board: Board::new(),
            to_move: first,
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// The current board position
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// The moves played so far
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The final outcome, once the game has ended
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Whether the game has ended
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Play the current player's mark at a position.
    ///
    /// Applies the move, alternates the turn, and records the outcome if
    /// the position became terminal.
    ///
    /// # Errors
    ///
    /// Returns `GameOver` if the game has already ended, or a move error
    /// if the position is occupied or out of bounds.
    pub fn play(&mut self, position: usize) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let next = self.board.with_move(position, self.to_move)?;
        self.moves.push(Move {
            position,
            player: self.to_move,
        });
        self.board = next;
        self.to_move = self.to_move.opponent();

        match classify(&self.board) {
            Outcome::Winner(winner) => self.outcome = Some(GameOutcome::Win(winner)),
            Outcome::Draw => self.outcome = Some(GameOutcome::Draw),
            Outcome::Ongoing => {}
        }

        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_alternation() {
        let mut game = Game::new();
        assert_eq!(game.to_move(), Player::X);

        game.play(0).unwrap();
        assert_eq!(game.to_move(), Player::O);

        game.play(1).unwrap();
        assert_eq!(game.to_move(), Player::X);
    }

    #[test]
    fn test_win_is_recorded() {
        let mut game = Game::new();
        for pos in [0, 3, 1, 4, 2] {
            game.play(pos).unwrap(); // X takes the top row
        }
        assert_eq!(game.outcome(), Some(GameOutcome::Win(Player::X)));
        assert!(game.is_over());
    }

    #[test]
    fn test_draw_is_recorded() {
        let mut game = Game::new();
        for pos in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            game.play(pos).unwrap();
        }
        assert_eq!(game.outcome(), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_rejects_play_after_game_over() {
        let mut game = Game::new();
        for pos in [0, 3, 1, 4, 2] {
            game.play(pos).unwrap();
        }
        let result = game.play(5);
        assert!(matches!(result, Err(crate::Error::GameOver)));
    }

    #[test]
    fn test_rejects_occupied_cell() {
        let mut game = Game::new();
        game.play(4).unwrap();
        assert!(game.play(4).is_err());
        // Turn is unchanged after a rejected move
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_history_matches_play() {
        let mut game = Game::new();
        game.play(4).unwrap();
        game.play(0).unwrap();
        assert_eq!(
            game.moves(),
            &[
                Move {
                    position: 4,
                    player: Player::X
                },
                Move {
                    position: 0,
                    player: Player::O
                },
            ]
        );
    }
}
