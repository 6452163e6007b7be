// Move ordering: try the most forcing moves first so alpha-beta cuts early

use smallvec::SmallVec;

use crate::game_repr::{Board, Color, PieceType, Ply};

/// Ordered plies for one node
pub type OrderedPlies = SmallVec<[Ply; 64]>;

const CAPTURE_MULTIPLIER: i32 = 10;
const CHECK_BONUS: i32 = 50;
const CHECKMATE_BONUS: i32 = 1000;

/// Heuristic worth of a ply for `side`; higher is searched first.
///
/// Captures score the victim's value times ten, promotions the new piece's
/// value the same way, a check adds 50 and a mate another 1000. Moves toward
/// the centre break the remaining ties.
pub fn score_move(board: &Board, side: Color, ply: Ply) -> i32 {
    let mut score = 0;

    let moving = board.get(ply.from).map(|p| p.piece_type);
    let victim = match board.get(ply.to) {
        Some(p) => Some(p.piece_type),
        // A pawn stepping diagonally onto an empty square takes en passant
        None if moving == Some(PieceType::Pawn) && ply.from.col() != ply.to.col() => {
            Some(PieceType::Pawn)
        }
        None => None,
    };
    if let Some(victim) = victim {
        score += victim.value() * CAPTURE_MULTIPLIER;
    }

    if moving == Some(PieceType::Pawn) && ply.to.row() == side.promotion_rank() {
        let target = ply.promotion.unwrap_or(PieceType::Queen);
        score += target.value() * CAPTURE_MULTIPLIER;
    }

    let opponent = side.opposite();
    let next = board.after(ply);
    if next.is_in_check(opponent) {
        score += CHECK_BONUS;
        if !next.has_legal_moves(opponent) {
            score += CHECKMATE_BONUS;
        }
    }

    score - ply.to.center_distance() as i32
}

/// Sort `plies` best-first. Equal scores keep their generation order, so the
/// result is deterministic.
pub fn order_moves<I>(board: &Board, side: Color, plies: I) -> OrderedPlies
where
    I: IntoIterator<Item = Ply>,
{
    let mut scored: SmallVec<[(i32, Ply); 64]> = plies
        .into_iter()
        .map(|ply| (score_move(board, side, ply), ply))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, ply)| ply).collect()
}

/// All legal plies of `side`, best-first
pub fn ordered_legal_moves(board: &Board, side: Color) -> OrderedPlies {
    order_moves(board, side, board.all_legal_plies(side))
}
