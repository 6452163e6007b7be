use super::{Color, Piece, PieceType, Ply, Square};
use crate::error::{ChessError, Result};

/*
 * BOARD: the 8x8 grid and nothing more.
 * Every hypothetical position (legality checks, search nodes) is a copy of
 * this struct, so no caller ever mutates a board it does not own.
 */

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
    /// Pawn that advanced two squares on the immediately preceding ply
    pub(crate) en_passant: Option<Square>,
}

/// Side effects of applying a ply to a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    pub moved: Piece,
    pub captured: Option<Piece>,
    pub is_castling: bool,
    pub is_en_passant: bool,
    pub promotion: Option<PieceType>,
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
            en_passant: None,
        }
    }

    /// The usual 32-piece starting layout. White ids are 0..16, Black 16..32.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        let mut id = 0u8;
        for color in [Color::White, Color::Black] {
            for (col, piece_type) in BACK_RANK.iter().enumerate() {
                let sq = Square::at(color.back_rank(), col as u8);
                board.put(Piece::new(id, *piece_type, color, sq));
                id += 1;
            }
            for col in 0..8 {
                let sq = Square::at(color.pawn_start_rank(), col);
                board.put(Piece::new(id, PieceType::Pawn, color, sq));
                id += 1;
            }
        }
        board
    }

    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row() as usize][sq.col() as usize]
    }

    /// Lookup by raw coordinates, for callers that have not validated them
    pub fn piece_at(&self, row: i32, col: i32) -> Result<Option<Piece>> {
        Ok(self.get(Square::new(row, col)?))
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// Place a piece on the square recorded in `piece.position`
    pub fn put(&mut self, piece: Piece) {
        let sq = piece.position;
        self.squares[sq.row() as usize][sq.col() as usize] = Some(piece);
    }

    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.row() as usize][sq.col() as usize].take()
    }

    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.squares.iter().flatten().flatten().copied()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |p| p.color == color)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|p| p.piece_type == PieceType::King)
            .map(|p| p.position)
    }

    pub fn en_passant_pawn(&self) -> Option<Square> {
        self.en_passant
    }

    /// Apply a ply without any legality checks and report what happened.
    ///
    /// Castling is recognised by a king moving two files; en passant by a
    /// pawn moving diagonally onto an empty square.
    pub(crate) fn apply(&mut self, ply: Ply) -> Option<Applied> {
        let mut piece = self.remove(ply.from)?;
        let before = piece;
        let mut captured = self.remove(ply.to);
        let mut is_castling = false;
        let mut is_en_passant = false;
        let mut promotion = None;

        match piece.piece_type {
            PieceType::King if (ply.to.col() as i32 - ply.from.col() as i32).abs() == 2 => {
                let (rook_from, rook_to) = if ply.to.col() > ply.from.col() {
                    (7, 5)
                } else {
                    (0, 3)
                };
                let row = ply.from.row();
                if let Some(mut rook) = self.remove(Square::at(row, rook_from)) {
                    rook.position = Square::at(row, rook_to);
                    rook.has_moved = true;
                    self.put(rook);
                }
                is_castling = true;
            }
            PieceType::Pawn => {
                if ply.from.col() != ply.to.col() && captured.is_none() {
                    captured = self.remove(Square::at(ply.from.row(), ply.to.col()));
                    is_en_passant = captured.is_some();
                }
                if ply.to.row() == piece.color.promotion_rank() {
                    let target = ply.promotion.unwrap_or(PieceType::Queen);
                    piece.piece_type = target;
                    promotion = Some(target);
                }
            }
            _ => {}
        }

        self.en_passant = None;
        if before.piece_type == PieceType::Pawn
            && (ply.to.row() as i32 - ply.from.row() as i32).abs() == 2
        {
            self.en_passant = Some(ply.to);
        }

        piece.position = ply.to;
        piece.has_moved = true;
        self.put(piece);

        Some(Applied {
            moved: before,
            captured,
            is_castling,
            is_en_passant,
            promotion,
        })
    }

    /// Copy of the board with the ply applied. Like `apply`, this trusts
    /// the ply to be legal here.
    pub(crate) fn after(&self, ply: Ply) -> Board {
        let mut next = *self;
        next.apply(ply);
        next
    }

    /// Build a board from the first four FEN fields and return it together
    /// with the side to move.
    pub fn from_fen(fen: &str) -> Result<(Board, Color)> {
        let bad = || ChessError::InvalidFen(fen.to_string());
        let parts: Vec<&str> = fen.split_whitespace().collect();
        let placement = parts.first().ok_or_else(bad)?;

        let mut board = Board::empty();
        let mut id = 0u8;
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(bad());
        }
        for (i, rank) in ranks.iter().enumerate() {
            let row = 7 - i as i32;
            let mut col = 0i32;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as i32;
                    continue;
                }
                let piece_type = PieceType::from_letter(c).ok_or_else(bad)?;
                let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
                let sq = Square::new(row, col).map_err(|_| bad())?;
                let mut piece = Piece::new(id, piece_type, color, sq);
                // Pawns off their start rank have obviously moved; castling
                // pieces get their flag from the rights field below.
                piece.has_moved = match piece_type {
                    PieceType::Pawn => sq.row() != color.pawn_start_rank(),
                    PieceType::King | PieceType::Rook => true,
                    _ => false,
                };
                board.put(piece);
                id = id.checked_add(1).ok_or_else(bad)?;
                col += 1;
            }
            if col != 8 {
                return Err(bad());
            }
        }

        let side = match parts.get(1).copied().unwrap_or("w") {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(bad()),
        };

        let rights = parts.get(2).copied().unwrap_or("-");
        for c in rights.chars() {
            let (color, rook_col) = match c {
                'K' => (Color::White, 7),
                'Q' => (Color::White, 0),
                'k' => (Color::Black, 7),
                'q' => (Color::Black, 0),
                '-' => continue,
                _ => return Err(bad()),
            };
            let row = color.back_rank();
            board.mark_unmoved(Square::at(row, 4), PieceType::King, color);
            board.mark_unmoved(Square::at(row, rook_col), PieceType::Rook, color);
        }

        if let Some(ep) = parts.get(3).filter(|s| **s != "-") {
            let target = Square::from_algebraic(ep).map_err(|_| bad())?;
            // FEN names the square passed over; we track the pawn itself
            let pawn_row = match side {
                Color::White => target.row() as i32 - 1,
                Color::Black => target.row() as i32 + 1,
            };
            board.en_passant = Some(Square::new(pawn_row, target.col() as i32).map_err(|_| bad())?);
        }

        for color in [Color::White, Color::Black] {
            if board.pieces_of(color).filter(|p| p.piece_type == PieceType::King).count() != 1 {
                return Err(bad());
            }
        }

        Ok((board, side))
    }

    fn mark_unmoved(&mut self, sq: Square, piece_type: PieceType, color: Color) {
        if let Some(mut piece) = self.get(sq) {
            if piece.piece_type == piece_type && piece.color == color {
                piece.has_moved = false;
                self.put(piece);
            }
        }
    }

    fn castle_right(&self, color: Color, rook_col: u8) -> bool {
        let row = color.back_rank();
        let unmoved = |sq: Square, piece_type: PieceType| {
            matches!(self.get(sq), Some(p) if p.piece_type == piece_type && p.color == color && !p.has_moved)
        };
        unmoved(Square::at(row, 4), PieceType::King) && unmoved(Square::at(row, rook_col), PieceType::Rook)
    }

    /// FEN of the board with `side` to move. Clocks are always `0 1`.
    pub fn to_fen(&self, side: Color) -> String {
        let mut fen = String::new();

        for row in (0..8).rev() {
            let mut empty_count = 0;
            for col in 0..8 {
                match self.get(Square::at(row, col)) {
                    None => empty_count += 1,
                    Some(piece) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(piece.to_char());
                    }
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if row > 0 {
                fen.push('/');
            }
        }

        fen.push_str(match side {
            Color::White => " w ",
            Color::Black => " b ",
        });

        let mut castling = String::new();
        for (color, rook_col, c) in [
            (Color::White, 7, 'K'),
            (Color::White, 0, 'Q'),
            (Color::Black, 7, 'k'),
            (Color::Black, 0, 'q'),
        ] {
            if self.castle_right(color, rook_col) {
                castling.push(c);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }
        fen.push_str(&castling);

        match self.en_passant {
            Some(pawn) => {
                let behind = match pawn.row() {
                    3 => 2,
                    _ => 5,
                };
                fen.push(' ');
                fen.push_str(&Square::at(behind, pawn.col()).to_string());
            }
            None => fen.push_str(" -"),
        }

        fen.push_str(" 0 1");
        fen
    }
}
