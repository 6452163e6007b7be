pub mod pawn;
pub mod knight;
pub mod bishop;
pub mod rook;
pub mod queen;
pub mod king;

use smallvec::SmallVec;

use super::{Board, Color, PieceType, Square, ValidMove};

/// Buffer type for move generation
pub type MoveList = SmallVec<[ValidMove; 32]>;

impl Board {
    /// Pseudo-legal destinations of the piece on `from`: legal by movement
    /// rules, without regard to the mover's own king.
    pub fn pseudo_legal_moves_into(&self, from: Square, moves: &mut MoveList) {
        let piece = match self.get(from) {
            Some(piece) => piece,
            None => return,
        };
        match piece.piece_type {
            PieceType::Pawn => self.pawn_moves_into(from, piece.color, moves),
            PieceType::Knight => self.knight_moves_into(from, piece.color, moves),
            PieceType::Bishop => self.bishop_moves_into(from, piece.color, moves),
            PieceType::Rook => self.rook_moves_into(from, piece.color, moves),
            PieceType::Queen => self.queen_moves_into(from, piece.color, moves),
            PieceType::King => self.king_moves_into(from, piece.color, moves),
        }
    }

    pub fn pseudo_legal_moves(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        self.pseudo_legal_moves_into(from, &mut moves);
        moves
    }

    /// Squares the piece on `from` attacks or defends, regardless of what
    /// stands there. Pawns only hit their forward diagonals and kings skip
    /// the attacked-square exclusion, so this never recurses.
    pub fn raw_attacks_into(&self, from: Square, targets: &mut Vec<Square>) {
        let piece = match self.get(from) {
            Some(piece) => piece,
            None => return,
        };
        match piece.piece_type {
            PieceType::Pawn => self.pawn_attacks_into(from, piece.color, targets),
            PieceType::Knight => self.knight_attacks_into(from, targets),
            PieceType::Bishop => self.slide_targets_into(from, &super::tables::DIAGONAL, targets),
            PieceType::Rook => self.slide_targets_into(from, &super::tables::ORTHOGONAL, targets),
            PieceType::Queen => {
                self.slide_targets_into(from, &super::tables::DIAGONAL, targets);
                self.slide_targets_into(from, &super::tables::ORTHOGONAL, targets);
            }
            PieceType::King => self.king_attacks_into(from, targets),
        }
    }

    /// Walk each direction until the first occupied square. An enemy blocker
    /// is a capture, a friendly one ends the ray without a move.
    pub(crate) fn slide_moves_into(
        &self,
        from: Square,
        color: Color,
        directions: &[(i32, i32)],
        moves: &mut MoveList,
    ) {
        for &(dr, dc) in directions {
            let mut current = from;
            while let Some(next) = current.offset(dr, dc) {
                match self.get(next) {
                    None => moves.push(ValidMove::quiet(next)),
                    Some(p) if p.color != color => {
                        moves.push(ValidMove::capture(next));
                        break;
                    }
                    Some(_) => break,
                }
                current = next;
            }
        }
    }

    /// Like `slide_moves_into`, but the first blocker is always included
    pub(crate) fn slide_targets_into(
        &self,
        from: Square,
        directions: &[(i32, i32)],
        targets: &mut Vec<Square>,
    ) {
        for &(dr, dc) in directions {
            let mut current = from;
            while let Some(next) = current.offset(dr, dc) {
                targets.push(next);
                if !self.is_empty(next) {
                    break;
                }
                current = next;
            }
        }
    }
}
