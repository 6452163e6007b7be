use std::fmt;
use std::str::FromStr;
use std::time::SystemTime;

use super::{Piece, PieceType, Square, PROMOTION_PIECES};
use crate::error::{ChessError, Result};

/// Special rules a move invokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialMove {
    Castling,
    EnPassant,
    Promotion,
}

/// A destination a piece may go to, as produced by move generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidMove {
    pub to: Square,
    pub is_capture: bool,
    /// Destination is the far rank; see [`ValidMove::promotion_options`]
    pub is_promotion: bool,
    pub is_castling: bool,
    pub is_en_passant: bool,
}

impl ValidMove {
    pub fn quiet(to: Square) -> Self {
        Self {
            to,
            is_capture: false,
            is_promotion: false,
            is_castling: false,
            is_en_passant: false,
        }
    }

    pub fn capture(to: Square) -> Self {
        Self {
            is_capture: true,
            ..Self::quiet(to)
        }
    }

    pub fn promotion_options(&self) -> &'static [PieceType] {
        if self.is_promotion {
            &PROMOTION_PIECES
        } else {
            &[]
        }
    }

    pub fn special(&self) -> Option<SpecialMove> {
        if self.is_castling {
            Some(SpecialMove::Castling)
        } else if self.is_en_passant {
            Some(SpecialMove::EnPassant)
        } else if self.is_promotion {
            Some(SpecialMove::Promotion)
        } else {
            None
        }
    }
}

/// Compact move: origin, destination and promotion choice.
///
/// This is what search passes around and what coordinate notation
/// (`e2e4`, `e7e8q`) parses into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ply {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceType>,
}

impl Ply {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to, promotion: None }
    }

    pub fn with_promotion(from: Square, to: Square, promotion: PieceType) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
        }
    }
}

impl fmt::Display for Ply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(letter) = self.promotion.and_then(PieceType::letter) {
            write!(f, "{}", letter.to_ascii_lowercase())?;
        }
        Ok(())
    }
}

impl FromStr for Ply {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return Err(ChessError::InvalidNotation(s.to_string()));
        }
        let from = Square::from_algebraic(&s[0..2])?;
        let to = Square::from_algebraic(&s[2..4])?;
        let promotion = match s[4..].chars().next() {
            None => None,
            Some(c) => match PieceType::from_letter(c) {
                Some(t) if t.is_promotion_target() => Some(t),
                _ => return Err(ChessError::InvalidNotation(s.to_string())),
            },
        };
        Ok(Self { from, to, promotion })
    }
}

/// Record of one applied ply. Never changed after it enters the history.
#[derive(Debug, Clone, PartialEq)]
pub struct Move {
    /// 1-based position in the game's move list
    pub id: usize,
    /// The moving piece as it was before the move
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
    pub notation: String,
    pub timestamp: SystemTime,
    pub is_check: bool,
    pub is_checkmate: bool,
    pub is_en_passant: bool,
    pub is_castling: bool,
    pub promotion: Option<PieceType>,
}

impl Move {
    pub fn ply(&self) -> Ply {
        Ply {
            from: self.from,
            to: self.to,
            promotion: self.promotion,
        }
    }
}
