use crate::game_repr::tables::ORTHOGONAL;
use crate::game_repr::{Board, Color, Square};

use super::MoveList;

impl Board {
    /// Generate rook moves into a provided buffer
    pub fn rook_moves_into(&self, from: Square, color: Color, moves: &mut MoveList) {
        self.slide_moves_into(from, color, &ORTHOGONAL, moves);
    }
}
