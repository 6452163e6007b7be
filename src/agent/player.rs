//! Player abstraction used by the game driver.
//!
//! A player is anything that can answer "what do you play here?" for a
//! [`GameState`]: the search engine, a person typing coordinate moves, a
//! scripted line in a test. The driver owns the [`Game`](crate::game_repr::Game)
//! and only ever passes snapshots out, so no player can touch the live
//! position.

use crate::error::Result;
use crate::game_repr::{Color, GameState, GameStatus, Move, Ply};

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    Draw,
    Stalemate,
}

impl GameResult {
    pub fn from_winner(winner: Color) -> Self {
        match winner {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    /// Outcome of a state whose status is terminal, `None` while play goes on
    pub fn from_state(state: &GameState) -> Option<Self> {
        match state.status {
            GameStatus::Stalemate => Some(GameResult::Stalemate),
            GameStatus::Checkmate | GameStatus::Draw => Some(
                state
                    .winner()
                    .map(GameResult::from_winner)
                    .unwrap_or(GameResult::Draw),
            ),
            GameStatus::Active | GameStatus::Check => None,
        }
    }
}

/// Something that picks moves.
///
/// Only `choose_move` is required; the notifications default to doing
/// nothing.
pub trait Player {
    /// Pick a ply for the side to move in `state`.
    ///
    /// `Ok(None)` means the player resigns. Legality is checked by the
    /// caller, which may ask again after an illegal answer.
    fn choose_move(&mut self, state: &GameState) -> Result<Option<Ply>>;

    /// The opponent's move has been played
    fn opponent_moved(&mut self, _mv: &Move) {}

    fn game_ended(&mut self, _result: GameResult) {}

    fn name(&self) -> &str {
        "Player"
    }
}
