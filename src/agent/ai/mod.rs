// AI opponent: minimax with alpha-beta pruning
//
// - Fixed depth per difficulty, no iterative deepening or time limit
// - Evaluation from the AI's side: material, piece-square tables, mobility,
//   king safety and centre control
// - Captures, checks and mates are searched first
// - Easy and Medium sometimes play the second or third best root move
// - SearchWorker runs the search off the caller's thread

mod ai_player;
pub mod evaluation;
pub mod minimax;
pub mod move_ordering;
mod piece_square_tables;
mod search;
mod worker;

#[cfg(test)]
mod tests;

pub use ai_player::AiPlayer;
pub use search::{get_best_move, get_best_move_cancellable, SearchResult};
pub use worker::{SearchHandle, SearchWorker};
