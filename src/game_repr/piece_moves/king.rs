use crate::game_repr::tables::KING_TARGETS;
use crate::game_repr::{Board, Color, PieceType, Square, ValidMove};

use super::MoveList;

impl Board {
    pub fn king_moves_into(&self, from: Square, color: Color, moves: &mut MoveList) {
        let opponent = color.opposite();

        for &target in KING_TARGETS[from.index()].iter() {
            let move_kind = match self.get(target) {
                None => ValidMove::quiet(target),
                Some(p) if p.color != color => ValidMove::capture(target),
                Some(_) => continue,
            };
            if !self.is_square_attacked(target, opponent) {
                moves.push(move_kind);
            }
        }

        let king = match self.get(from) {
            Some(king) => king,
            None => return,
        };
        if king.has_moved || from != Square::at(color.back_rank(), 4) {
            return;
        }

        // Can't castle out of check
        if self.is_square_attacked(from, opponent) {
            return;
        }

        // (rook file, files strictly between, files the king walks over)
        let sides: [(u8, &[u8], [u8; 2]); 2] = [
            (7, &[5, 6], [5, 6]),
            (0, &[1, 2, 3], [3, 2]),
        ];
        let row = color.back_rank();

        for (rook_col, between, walk) in sides {
            let rook_ready = matches!(
                self.get(Square::at(row, rook_col)),
                Some(p) if p.piece_type == PieceType::Rook && p.color == color && !p.has_moved
            );
            if !rook_ready {
                continue;
            }

            let path_clear = between.iter().all(|&col| self.is_empty(Square::at(row, col)));
            let king_safe = walk
                .iter()
                .all(|&col| !self.is_square_attacked(Square::at(row, col), opponent));

            if path_clear && king_safe {
                moves.push(ValidMove {
                    is_castling: true,
                    ..ValidMove::quiet(Square::at(row, walk[1]))
                });
            }
        }
    }

    /// All eight neighbours, with no check for attacked squares
    pub fn king_attacks_into(&self, from: Square, targets: &mut Vec<Square>) {
        targets.extend(KING_TARGETS[from.index()].iter().copied());
    }
}
