use crate::game_repr::{Board, Color, Square};

use super::MoveList;

impl Board {
    /// Union of the bishop and rook rays
    pub fn queen_moves_into(&self, from: Square, color: Color, moves: &mut MoveList) {
        self.bishop_moves_into(from, color, moves);
        self.rook_moves_into(from, color, moves);
    }
}
