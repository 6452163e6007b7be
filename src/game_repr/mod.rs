mod attacks;
mod board;
mod game;
mod legality;
mod moves;
mod notation;
mod piece;
mod square;
pub mod piece_moves;
pub mod tables;

#[cfg(test)]
mod tests;

pub use board::*;
pub use game::*;
pub use legality::*;
pub use moves::*;
pub use notation::to_san;
pub use piece::*;
pub use piece_moves::MoveList;
pub use square::*;
