use crate::game_repr::{Board, Color, Square, ValidMove};

use super::MoveList;

impl Board {
    pub fn pawn_moves_into(&self, from: Square, color: Color, moves: &mut MoveList) {
        let initial_len = moves.len();
        let dir = color.forward();

        // Forward steps
        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty(one) {
                moves.push(ValidMove::quiet(one));

                if from.row() == color.pawn_start_rank() {
                    if let Some(two) = from.offset(2 * dir, 0) {
                        if self.is_empty(two) {
                            moves.push(ValidMove::quiet(two));
                        }
                    }
                }
            }
        }

        // Diagonal captures
        for dc in [-1, 1] {
            if let Some(target) = from.offset(dir, dc) {
                if matches!(self.get(target), Some(p) if p.color != color) {
                    moves.push(ValidMove::capture(target));
                }
            }
        }

        // En passant: the enemy pawn that just made a double step sits beside
        // us on the same rank, and we land on the square behind it.
        if let Some(passed) = self.en_passant {
            let beside = passed.row() == from.row()
                && (passed.col() as i32 - from.col() as i32).abs() == 1;
            let is_enemy_pawn = matches!(
                self.get(passed),
                Some(p) if p.color != color && p.piece_type == crate::game_repr::PieceType::Pawn
            );
            if beside && is_enemy_pawn {
                if let Some(target) = passed.offset(dir, 0) {
                    if self.is_empty(target) {
                        moves.push(ValidMove {
                            is_en_passant: true,
                            ..ValidMove::capture(target)
                        });
                    }
                }
            }
        }

        for mv in moves[initial_len..].iter_mut() {
            if mv.to.row() == color.promotion_rank() {
                mv.is_promotion = true;
            }
        }
    }

    /// Both forward diagonals, occupied or not
    pub fn pawn_attacks_into(&self, from: Square, color: Color, targets: &mut Vec<Square>) {
        for dc in [-1, 1] {
            if let Some(target) = from.offset(color.forward(), dc) {
                targets.push(target);
            }
        }
    }
}
