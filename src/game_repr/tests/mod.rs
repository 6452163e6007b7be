use super::*;
use crate::config::GameSettings;
use crate::error::ChessError;

// ==================== HELPER FUNCTIONS ====================

/// Square from algebraic notation
pub fn sq(s: &str) -> Square {
    Square::from_algebraic(s).unwrap()
}

/// Helper function to create an empty board
pub fn empty_board() -> Board {
    Board::empty()
}

/// Helper function to place a piece; ids are handed out in placement order
pub fn place_piece(board: &mut Board, at: &str, piece_type: PieceType, color: Color) {
    let id = board.pieces().count() as u8;
    board.put(Piece::new(id, piece_type, color, sq(at)));
}

/// Helper function to check if a destination exists in the move list
pub fn has_move(moves: &[ValidMove], to: &str) -> bool {
    moves.iter().any(|m| m.to == sq(to))
}

/// Turn a hand-built board into a game with `side` to move
pub fn game_from(board: &Board, side: Color) -> Game {
    Game::from_fen(&board.to_fen(side), GameSettings::default()).unwrap()
}

/// Play a sequence of coordinate-notation moves, panicking on the first illegal one
pub fn play(game: &mut Game, plies: &[&str]) -> Vec<Move> {
    plies
        .iter()
        .map(|p| {
            let ply: Ply = p.parse().unwrap();
            game.make_ply(ply).unwrap_or_else(|e| panic!("{} rejected: {}", p, e))
        })
        .collect()
}

// ==================== TEST MODULES ====================

mod piece_movement;
mod en_passant;
mod notation;
mod perft;
