// Static position evaluation.
// Scores are centipawns from the point of view of the color passed in:
// positive is good for that side.

use crate::game_repr::{Board, Color, PieceType, Square};

use super::piece_square_tables::pst_value;

// Term weights
const MATERIAL_WEIGHT: f64 = 1.0;
const POSITION_WEIGHT: f64 = 0.3;
const MOBILITY_WEIGHT: f64 = 0.2;
const SAFETY_WEIGHT: f64 = 0.4;
const CONTROL_WEIGHT: f64 = 0.1;

/// One pawn, the unit of `PieceType::value`
pub const PAWN_CENTIPAWNS: i32 = 100;

/// Worth of one extra legal move
const MOBILITY_UNIT: i32 = 10;

const ROOK_OPEN_FILE: i32 = 25;
const ROOK_SEMI_OPEN_FILE: i32 = 10;

const CHECK_PENALTY: i32 = 50;
const EXPOSED_KING_SQUARE: i32 = 10;

const CENTER_OCCUPIED: i32 = 20;
const CENTER_ATTACKED: i32 = 10;

/// Each side's pieces other than king and pawns are worth at most this
/// (in pawns) once the endgame has started: a rook and a minor piece
const ENDGAME_MATERIAL: i32 = 8;

/// The individual evaluation terms, each already a difference between
/// `color` and its opponent. Kept apart for tests and debug output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvalBreakdown {
    pub material: i32,
    pub position: i32,
    pub mobility: i32,
    pub king_safety: i32,
    pub center_control: i32,
}

impl EvalBreakdown {
    /// Weighted sum of the terms, rounded to whole centipawns
    pub fn total(&self) -> i32 {
        let sum = MATERIAL_WEIGHT * self.material as f64
            + POSITION_WEIGHT * self.position as f64
            + MOBILITY_WEIGHT * self.mobility as f64
            + SAFETY_WEIGHT * self.king_safety as f64
            + CONTROL_WEIGHT * self.center_control as f64;
        sum.round() as i32
    }
}

/// Evaluate `board` for `color`
pub fn evaluate(board: &Board, color: Color) -> i32 {
    evaluate_breakdown(board, color).total()
}

pub fn evaluate_breakdown(board: &Board, color: Color) -> EvalBreakdown {
    let opponent = color.opposite();
    let endgame = is_endgame(board);
    let own_attacks = board.attack_map(color);
    let their_attacks = board.attack_map(opponent);

    EvalBreakdown {
        material: material(board, color) - material(board, opponent),
        position: position(board, color, endgame) - position(board, opponent, endgame),
        mobility: MOBILITY_UNIT * (mobility(board, color) - mobility(board, opponent)),
        king_safety: king_safety(board, color, &own_attacks)
            - king_safety(board, opponent, &their_attacks),
        center_control: center_control(board, color, &own_attacks)
            - center_control(board, opponent, &their_attacks),
    }
}

/// Material of `color` in centipawns
pub fn material(board: &Board, color: Color) -> i32 {
    board
        .pieces_of(color)
        .map(|p| p.piece_type.value() * PAWN_CENTIPAWNS)
        .sum()
}

/// Non-pawn, non-king material of `color`, in pawns
fn piece_material(board: &Board, color: Color) -> i32 {
    board
        .pieces_of(color)
        .filter(|p| p.piece_type != PieceType::Pawn)
        .map(|p| p.piece_type.value())
        .sum()
}

/// Endgame once neither side has more than a rook and a minor piece left
/// besides pawns
pub fn is_endgame(board: &Board) -> bool {
    piece_material(board, Color::White) <= ENDGAME_MATERIAL
        && piece_material(board, Color::Black) <= ENDGAME_MATERIAL
}

fn pawns_on_file(board: &Board, col: u8, color: Option<Color>) -> bool {
    (0..8).any(|row| {
        matches!(
            board.get(Square::at(row, col)),
            Some(p) if p.piece_type == PieceType::Pawn && color.map_or(true, |c| p.color == c)
        )
    })
}

/// No pawn of either color on the file
pub fn is_open_file(board: &Board, col: u8) -> bool {
    !pawns_on_file(board, col, None)
}

/// None of `color`'s own pawns on the file, but some of the opponent's
pub fn is_semi_open_file(board: &Board, col: u8, color: Color) -> bool {
    !pawns_on_file(board, col, Some(color)) && pawns_on_file(board, col, Some(color.opposite()))
}

fn position(board: &Board, color: Color, endgame: bool) -> i32 {
    board
        .pieces_of(color)
        .map(|p| {
            let mut score = pst_value(p.piece_type, p.position, color, endgame);
            if p.piece_type == PieceType::Rook {
                let col = p.position.col();
                if is_open_file(board, col) {
                    score += ROOK_OPEN_FILE;
                } else if is_semi_open_file(board, col, color) {
                    score += ROOK_SEMI_OPEN_FILE;
                }
            }
            score
        })
        .sum()
}

fn mobility(board: &Board, color: Color) -> i32 {
    board.all_legal_plies(color).len() as i32
}

/// Penalties only, so the best a side can score here is 0
fn king_safety(board: &Board, color: Color, attacks: &[u8; 64]) -> i32 {
    let king = match board.king_square(color) {
        Some(sq) => sq,
        None => return 0,
    };

    let mut score = 0;
    if board.is_in_check(color) {
        score -= CHECK_PENALTY;
    }

    // The king covers all of its own zone, so a square only counts as held
    // when a friendly piece stands on it or a second defender covers it
    for dr in -1..=1 {
        for dc in -1..=1 {
            let Some(sq) = king.offset(dr, dc) else { continue };
            if sq == king {
                continue;
            }
            let occupied = matches!(board.get(sq), Some(p) if p.color == color);
            if !occupied && attacks[sq.index()] < 2 {
                score -= EXPOSED_KING_SQUARE;
            }
        }
    }
    score
}

fn center_control(board: &Board, color: Color, attacks: &[u8; 64]) -> i32 {
    [(3, 3), (3, 4), (4, 3), (4, 4)]
        .into_iter()
        .map(|(row, col)| {
            let sq = Square::at(row, col);
            let mut score = attacks[sq.index()] as i32 * CENTER_ATTACKED;
            if matches!(board.get(sq), Some(p) if p.color == color) {
                score += CENTER_OCCUPIED;
            }
            score
        })
        .sum()
}
