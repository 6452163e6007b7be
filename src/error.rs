//! Error types for the rules engine and the search opponent

use thiserror::Error;

use crate::game_repr::{Color, PieceType, Square};

/// Everything that can go wrong when talking to the engine.
///
/// None of these are fatal: the caller is expected to pick another piece or
/// destination and try again.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ChessError {
    /// Coordinates outside the 8x8 board
    #[error("invalid position: row {row}, col {col}")]
    InvalidPosition { row: i32, col: i32 },

    /// The destination is not reachable by the piece under movement rules
    #[error("{from}{to} is not a legal move for this piece")]
    IllegalMove { from: Square, to: Square },

    /// The move obeys movement rules but leaves the mover's own king attacked
    #[error("{from}{to} exposes the king to check")]
    KingExposed { from: Square, to: Square },

    /// Search was asked to move for a side that has nothing to play
    #[error("no legal moves available")]
    NoLegalMoves,

    #[error("no piece on {0}")]
    EmptySquare(Square),

    #[error("it is {expected:?}'s turn to move")]
    WrongTurn { expected: Color },

    #[error("the game is already over")]
    GameOver,

    #[error("cannot promote to {0:?}")]
    InvalidPromotion(PieceType),

    #[error("invalid notation: {0}")]
    InvalidNotation(String),

    #[error("invalid FEN string: {0}")]
    InvalidFen(String),

    #[error("search was cancelled")]
    SearchCancelled,

    /// A search result arrived for a position the game has already left
    #[error("search result belongs to a position that is no longer current")]
    StalePosition,

    #[error("search worker went away before delivering a result")]
    WorkerDisconnected,
}

pub type Result<T> = std::result::Result<T, ChessError>;
