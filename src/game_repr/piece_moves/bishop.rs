use crate::game_repr::tables::DIAGONAL;
use crate::game_repr::{Board, Color, Square};

use super::MoveList;

impl Board {
    /// Generate bishop moves into a provided buffer
    pub fn bishop_moves_into(&self, from: Square, color: Color, moves: &mut MoveList) {
        self.slide_moves_into(from, color, &DIAGONAL, moves);
    }
}
