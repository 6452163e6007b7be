use smallvec::SmallVec;

use super::piece_moves::MoveList;
use super::{Board, Color, Ply, SpecialMove, Square, ValidMove, PROMOTION_PIECES};
use crate::error::ChessError;

/// Outcome of [`Board::validate_move`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveValidation {
    pub legal: bool,
    pub reason: Option<ChessError>,
    pub special_move: Option<SpecialMove>,
}

impl MoveValidation {
    fn rejected(reason: ChessError) -> Self {
        Self {
            legal: false,
            reason: Some(reason),
            special_move: None,
        }
    }
}

impl Board {
    /// Does playing `to` from `from` keep the mover's king safe?
    ///
    /// The move is tried on a copy of the board; `self` is never touched.
    pub fn is_move_legal(&self, from: Square, to: Square) -> bool {
        let color = match self.get(from) {
            Some(piece) => piece.color,
            None => return false,
        };
        !self.after(Ply::new(from, to)).is_in_check(color)
    }

    /// Generate legal moves for a piece into a provided buffer.
    /// The buffer is NOT cleared before adding moves.
    pub fn legal_moves_into(&self, from: Square, moves: &mut MoveList) {
        let initial_len = moves.len();
        self.pseudo_legal_moves_into(from, moves);

        // Filter out moves that would leave the king in check
        let mut i = moves.len();
        while i > initial_len {
            i -= 1;
            if !self.is_move_legal(from, moves[i].to) {
                moves.remove(i);
            }
        }
    }

    pub fn legal_moves(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        self.legal_moves_into(from, &mut moves);
        moves
    }

    /// Every legal ply for `color`, one entry per promotion choice
    pub fn all_legal_plies(&self, color: Color) -> SmallVec<[Ply; 64]> {
        let mut plies = SmallVec::new();
        let mut moves = MoveList::new();
        for piece in self.pieces_of(color) {
            moves.clear();
            self.legal_moves_into(piece.position, &mut moves);
            for mv in &moves {
                if mv.is_promotion {
                    for &promotion in PROMOTION_PIECES.iter() {
                        plies.push(Ply::with_promotion(piece.position, mv.to, promotion));
                    }
                } else {
                    plies.push(Ply::new(piece.position, mv.to));
                }
            }
        }
        plies
    }

    pub fn has_legal_moves(&self, color: Color) -> bool {
        let mut moves = MoveList::new();
        self.pieces_of(color).any(|piece| {
            moves.clear();
            self.legal_moves_into(piece.position, &mut moves);
            !moves.is_empty()
        })
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_moves(color)
    }

    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_moves(color)
    }

    /// Check a proposed move against the rules and say why it fails.
    ///
    /// A destination outside the piece's movement set is `IllegalMove`; one
    /// inside it that leaves the king attacked is `KingExposed`.
    pub fn validate_move(&self, from: Square, to: Square) -> MoveValidation {
        if self.is_empty(from) {
            return MoveValidation::rejected(ChessError::EmptySquare(from));
        }

        let candidate: Option<ValidMove> = self
            .pseudo_legal_moves(from)
            .into_iter()
            .find(|mv| mv.to == to);

        match candidate {
            None => MoveValidation::rejected(ChessError::IllegalMove { from, to }),
            Some(_) if !self.is_move_legal(from, to) => {
                MoveValidation::rejected(ChessError::KingExposed { from, to })
            }
            Some(mv) => MoveValidation {
                legal: true,
                reason: None,
                special_move: mv.special(),
            },
        }
    }
}
