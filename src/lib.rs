//! Chess rules engine with a minimax computer opponent.
//!
//! [`game_repr`] owns the rules: board, move generation, check and game-end
//! detection, notation and FEN. [`agent`] holds the players, including the
//! alpha-beta search behind [`agent::AiPlayer`] and the background
//! [`agent::SearchWorker`].

pub mod agent;
pub mod config;
pub mod error;
pub mod game_repr;
