// Piece-square tables for the positional term of the evaluation.
// Values are centipawns, laid out the way a diagram reads: the first row is
// rank 8, the last row rank 1, files a..h left to right, from White's side.
// Black looks the same square up in the vertically mirrored table.

use crate::game_repr::{Color, PieceType, Square};

// Pawns: the closer to promotion the better, central pawns early
#[rustfmt::skip]
const PAWN: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    60, 60, 60, 60, 60, 60, 60, 60,
    15, 20, 25, 35, 35, 25, 20, 15,
    10, 10, 15, 30, 30, 15, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     5,  0, -5,  5,  5, -5,  0,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

// Knights: centralisation, rim penalty
#[rustfmt::skip]
const KNIGHT: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  5, 20, 25, 25, 20,  5,-30,
    -30,  0, 20, 25, 25, 20,  0,-30,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

// Bishops: centre and long diagonals
#[rustfmt::skip]
const BISHOP: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  5,  5, 15, 15,  5,  5,-10,
    -10,  0, 10, 15, 15, 10,  0,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

// Rooks: mostly neutral; files are handled by the open-file bonus
#[rustfmt::skip]
const ROOK: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

// Queen: mild centralisation
#[rustfmt::skip]
const QUEEN: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5,  5,  5,  5,  0,-10,
     -5,  0,  5, 10, 10,  5,  0, -5,
     -5,  0,  5, 10, 10,  5,  0, -5,
    -10,  0,  5,  5,  5,  5,  0,-10,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

// King before the endgame: stay home behind the pawns
#[rustfmt::skip]
const KING_SAFETY: [i32; 64] = [
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -10,-20,-20,-20,-20,-20,-20,-10,
     20, 20,  0,  0,  0,  0, 20, 20,
     20, 30, 10,  0,  0, 10, 30, 20,
];

// King in the endgame: walk to the centre
#[rustfmt::skip]
const KING_ENDGAME: [i32; 64] = [
    -50,-40,-30,-20,-20,-30,-40,-50,
    -30,-20,-10,  0,  0,-10,-20,-30,
    -30,-10, 20, 30, 30, 20,-10,-30,
    -30,-10, 30, 40, 40, 30,-10,-30,
    -30,-10, 30, 40, 40, 30,-10,-30,
    -30,-10, 20, 30, 30, 20,-10,-30,
    -30,-30,  0,  0,  0,  0,-30,-30,
    -50,-30,-30,-30,-30,-30,-30,-50,
];

fn table_index(square: Square, color: Color) -> usize {
    let rank_from_top = match color {
        Color::White => 7 - square.row(),
        Color::Black => square.row(),
    };
    rank_from_top as usize * 8 + square.col() as usize
}

/// Table value of `piece_type` standing on `square` for `color`
pub fn pst_value(piece_type: PieceType, square: Square, color: Color, endgame: bool) -> i32 {
    let idx = table_index(square, color);
    match piece_type {
        PieceType::Pawn => PAWN[idx],
        PieceType::Knight => KNIGHT[idx],
        PieceType::Bishop => BISHOP[idx],
        PieceType::Rook => ROOK[idx],
        PieceType::Queen => QUEEN[idx],
        PieceType::King if endgame => KING_ENDGAME[idx],
        PieceType::King => KING_SAFETY[idx],
    }
}
