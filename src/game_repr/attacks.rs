use super::tables::{DIAGONAL, KING_TARGETS, KNIGHT_TARGETS, ORTHOGONAL};
use super::{Board, Color, PieceType, Square};

impl Board {
    /// Checks if a square is under attack by any piece of the given color.
    ///
    /// Works backwards from the target square: a knight of `by_color` a jump
    /// away, a pawn on the right diagonal, a king next door, or a slider at the
    /// end of an unobstructed ray. Only raw reachability matters, so this
    /// never consults the legality filter.
    pub fn is_square_attacked(&self, square: Square, by_color: Color) -> bool {
        let is_attacker = |sq: Square, types: &[PieceType]| {
            matches!(self.get(sq), Some(p) if p.color == by_color && types.contains(&p.piece_type))
        };

        // A pawn of by_color attacks us if it stands one row "behind" us from
        // its own point of view, on an adjacent file
        for dc in [-1, 1] {
            if let Some(sq) = square.offset(-by_color.forward(), dc) {
                if is_attacker(sq, &[PieceType::Pawn]) {
                    return true;
                }
            }
        }

        if KNIGHT_TARGETS[square.index()]
            .iter()
            .any(|&sq| is_attacker(sq, &[PieceType::Knight]))
        {
            return true;
        }

        if KING_TARGETS[square.index()]
            .iter()
            .any(|&sq| is_attacker(sq, &[PieceType::King]))
        {
            return true;
        }

        let rays: [(&[(i32, i32)], [PieceType; 2]); 2] = [
            (&DIAGONAL, [PieceType::Bishop, PieceType::Queen]),
            (&ORTHOGONAL, [PieceType::Rook, PieceType::Queen]),
        ];
        for (directions, sliders) in rays {
            for &(dr, dc) in directions {
                let mut current = square;
                while let Some(next) = current.offset(dr, dc) {
                    if !self.is_empty(next) {
                        if is_attacker(next, &sliders) {
                            return true;
                        }
                        break;
                    }
                    current = next;
                }
            }
        }

        false
    }

    /// Checks if the king of the given color is currently attacked
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(sq) => self.is_square_attacked(sq, color.opposite()),
            None => false,
        }
    }

    /// How many pieces of `color` hit each square (indexed by `Square::index`)
    pub fn attack_map(&self, color: Color) -> [u8; 64] {
        let mut map = [0u8; 64];
        let mut targets = Vec::with_capacity(32);
        for piece in self.pieces_of(color) {
            targets.clear();
            self.raw_attacks_into(piece.position, &mut targets);
            for sq in &targets {
                map[sq.index()] = map[sq.index()].saturating_add(1);
            }
        }
        map
    }
}
