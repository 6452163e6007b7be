//! Standard algebraic notation for move records.

use super::board::Applied;
use super::{Board, PieceType, Square};

/// Render a ply in SAN.
///
/// `before` is the board the move was played on; it is only needed to tell
/// apart two pieces of the same type that could both reach `to`.
pub fn to_san(
    before: &Board,
    applied: &Applied,
    from: Square,
    to: Square,
    is_check: bool,
    is_checkmate: bool,
) -> String {
    let mut san = String::with_capacity(8);

    if applied.is_castling {
        san.push_str(if to.col() > from.col() { "O-O" } else { "O-O-O" });
    } else {
        let piece = applied.moved;
        match piece.piece_type.letter() {
            Some(letter) => {
                san.push(letter);
                san.push_str(&disambiguation(before, piece.piece_type, from, to));
                if applied.captured.is_some() {
                    san.push('x');
                }
            }
            None => {
                if applied.captured.is_some() {
                    san.push(from.file_char());
                    san.push('x');
                }
            }
        }
        san.push_str(&to.to_string());
        if let Some(letter) = applied.promotion.and_then(PieceType::letter) {
            san.push('=');
            san.push(letter);
        }
    }

    if is_checkmate {
        san.push('#');
    } else if is_check {
        san.push('+');
    }
    san
}

fn disambiguation(before: &Board, piece_type: PieceType, from: Square, to: Square) -> String {
    if piece_type == PieceType::King {
        return String::new();
    }
    let color = match before.get(from) {
        Some(p) => p.color,
        None => return String::new(),
    };

    let rivals: Vec<Square> = before
        .pieces_of(color)
        .filter(|p| p.piece_type == piece_type && p.position != from)
        .map(|p| p.position)
        .filter(|&sq| before.legal_moves(sq).iter().any(|mv| mv.to == to))
        .collect();

    if rivals.is_empty() {
        String::new()
    } else if rivals.iter().all(|sq| sq.col() != from.col()) {
        from.file_char().to_string()
    } else if rivals.iter().all(|sq| sq.row() != from.row()) {
        from.rank_char().to_string()
    } else {
        from.to_string()
    }
}
