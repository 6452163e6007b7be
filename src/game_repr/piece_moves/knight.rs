use crate::game_repr::tables::KNIGHT_TARGETS;
use crate::game_repr::{Board, Color, Square, ValidMove};

use super::MoveList;

impl Board {
    pub fn knight_moves_into(&self, from: Square, color: Color, moves: &mut MoveList) {
        for &target in KNIGHT_TARGETS[from.index()].iter() {
            match self.get(target) {
                None => moves.push(ValidMove::quiet(target)),
                Some(p) if p.color != color => moves.push(ValidMove::capture(target)),
                Some(_) => {}
            }
        }
    }

    pub fn knight_attacks_into(&self, from: Square, targets: &mut Vec<Square>) {
        targets.extend(KNIGHT_TARGETS[from.index()].iter().copied());
    }
}
