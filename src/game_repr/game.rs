use std::time::SystemTime;

use log::{debug, info, trace};

use super::legality::MoveValidation;
use super::notation::to_san;
use super::{Board, Color, Move, Piece, PieceType, Ply, Square, ValidMove};
use crate::config::GameSettings;
use crate::error::{ChessError, Result};

/*
 * GAME: the rules engine as seen by collaborators.
 * Owns one GameState and is the only thing that ever mutates it.
 */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Active,
    Check,
    Checkmate,
    Stalemate,
    /// Only ever set from outside the rules (agreement or resignation)
    Draw,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Checkmate | Self::Stalemate | Self::Draw)
    }
}

/// Pieces taken off the board, grouped by the color of the captured piece
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedPieces {
    white: Vec<Piece>,
    black: Vec<Piece>,
}

impl CapturedPieces {
    /// Pieces of `color` that have been captured
    pub fn of(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    fn record(&mut self, piece: Piece) {
        match piece.color {
            Color::White => self.white.push(piece),
            Color::Black => self.black.push(piece),
        }
    }
}

/// Identifies the exact position a computation was made against.
///
/// `generation` changes on every new game, `ply` on every move, so a key
/// taken earlier no longer matches once anything has happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionKey {
    pub generation: u64,
    pub ply: usize,
}

/// Full snapshot of a game, suitable for rendering and history views
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub current_player: Color,
    pub status: GameStatus,
    pub moves: Vec<Move>,
    pub captured: CapturedPieces,
    pub settings: GameSettings,
    pub generation: u64,
    /// Set when the game ended by resignation
    pub resigned: Option<Color>,
}

impl GameState {
    pub fn new(settings: GameSettings) -> Self {
        Self::with_board(Board::standard(), Color::White, settings)
    }

    fn with_board(board: Board, current_player: Color, settings: GameSettings) -> Self {
        let mut state = Self {
            board,
            current_player,
            status: GameStatus::Active,
            moves: Vec::new(),
            captured: CapturedPieces::default(),
            settings,
            generation: 0,
            resigned: None,
        };
        state.status = state.resolve_status();
        state
    }

    pub fn from_fen(fen: &str, settings: GameSettings) -> Result<Self> {
        let (board, side) = Board::from_fen(fen)?;
        Ok(Self::with_board(board, side, settings))
    }

    pub fn to_fen(&self) -> String {
        self.board.to_fen(self.current_player)
    }

    pub fn position_key(&self) -> PositionKey {
        PositionKey {
            generation: self.generation,
            ply: self.moves.len(),
        }
    }

    /// Status of the side to move, as the rules see it
    fn resolve_status(&self) -> GameStatus {
        let side = self.current_player;
        let in_check = self.board.is_in_check(side);
        let can_move = self.board.has_legal_moves(side);
        match (in_check, can_move) {
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Active,
        }
    }

    pub fn winner(&self) -> Option<Color> {
        match self.status {
            GameStatus::Checkmate => Some(self.current_player.opposite()),
            GameStatus::Draw => self.resigned.map(|c| c.opposite()),
            _ => None,
        }
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.moves.last()
    }
}

/// The rules engine: move queries, move execution and status resolution.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameSettings::default())
    }
}

impl Game {
    pub fn new(settings: GameSettings) -> Self {
        Self {
            state: GameState::new(settings),
        }
    }

    pub fn from_fen(fen: &str, settings: GameSettings) -> Result<Self> {
        Ok(Self {
            state: GameState::from_fen(fen, settings)?,
        })
    }

    /// Throw the current game away and start from the initial position.
    /// Anything computed against the old game becomes stale.
    pub fn new_game(&mut self, settings: GameSettings) {
        let generation = self.state.generation + 1;
        self.state = GameState::new(settings);
        self.state.generation = generation;
        info!("new game #{} ({:?})", generation, settings);
    }

    pub fn game_state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn current_player(&self) -> Color {
        self.state.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn position_key(&self) -> PositionKey {
        self.state.position_key()
    }

    pub fn piece_at(&self, row: i32, col: i32) -> Result<Option<Piece>> {
        self.state.board.piece_at(row, col)
    }

    /// Legal destinations of the piece on `from`. Has no side effects.
    pub fn get_valid_moves(&self, from: Square) -> Result<Vec<ValidMove>> {
        if self.state.board.is_empty(from) {
            return Err(ChessError::EmptySquare(from));
        }
        Ok(self.state.board.legal_moves(from).into_vec())
    }

    pub fn validate_move(&self, from: Square, to: Square) -> MoveValidation {
        self.state.board.validate_move(from, to)
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        self.state.board.is_in_check(color)
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        self.state.board.is_checkmate(color)
    }

    pub fn is_stalemate(&self, color: Color) -> bool {
        self.state.board.is_stalemate(color)
    }

    pub fn legal_plies(&self) -> Vec<Ply> {
        self.state
            .board
            .all_legal_plies(self.state.current_player)
            .into_vec()
    }

    /// Play a move for the side to move and return its record.
    ///
    /// A promoting move without an explicit `promotion` becomes a queen.
    pub fn make_move(&mut self, from: Square, to: Square, promotion: Option<PieceType>) -> Result<Move> {
        if self.state.status.is_terminal() {
            return Err(ChessError::GameOver);
        }
        let piece = self.state.board.get(from).ok_or(ChessError::EmptySquare(from))?;
        if piece.color != self.state.current_player {
            return Err(ChessError::WrongTurn {
                expected: self.state.current_player,
            });
        }

        let validation = self.state.board.validate_move(from, to);
        if !validation.legal {
            return Err(validation.reason.unwrap_or(ChessError::IllegalMove { from, to }));
        }

        let promotes = piece.piece_type == PieceType::Pawn && to.row() == piece.color.promotion_rank();
        if let Some(target) = promotion {
            if !promotes || !target.is_promotion_target() {
                return Err(ChessError::InvalidPromotion(target));
            }
        }

        let before = self.state.board;
        let ply = Ply { from, to, promotion };
        let applied = self
            .state
            .board
            .apply(ply)
            .ok_or(ChessError::EmptySquare(from))?;

        if let Some(captured) = applied.captured {
            self.state.captured.record(captured);
        }

        let opponent = piece.color.opposite();
        self.state.current_player = opponent;
        self.state.status = self.state.resolve_status();

        let is_check = self.state.board.is_in_check(opponent);
        let is_checkmate = self.state.status == GameStatus::Checkmate;
        let record = Move {
            id: self.state.moves.len() + 1,
            piece: applied.moved,
            from,
            to,
            captured: applied.captured,
            notation: to_san(&before, &applied, from, to, is_check, is_checkmate),
            timestamp: SystemTime::now(),
            is_check,
            is_checkmate,
            is_en_passant: applied.is_en_passant,
            is_castling: applied.is_castling,
            promotion: applied.promotion,
        };

        trace!("move {}: {} ({}{})", record.id, record.notation, from, to);
        match self.state.status {
            GameStatus::Checkmate => info!("checkmate, {:?} wins", piece.color),
            GameStatus::Stalemate => info!("stalemate after {}", record.notation),
            _ => {}
        }

        self.state.moves.push(record.clone());
        Ok(record)
    }

    pub fn make_ply(&mut self, ply: Ply) -> Result<Move> {
        self.make_move(ply.from, ply.to, ply.promotion)
    }

    /// Play a ply only if the game is still at the position `key` names.
    ///
    /// Results that arrive after the position moved on (another move, a new
    /// game) are refused with `StalePosition` instead of being applied.
    pub fn make_ply_at(&mut self, key: PositionKey, ply: Ply) -> Result<Move> {
        if key != self.position_key() {
            return Err(ChessError::StalePosition);
        }
        self.make_ply(ply)
    }

    pub fn agree_draw(&mut self) -> Result<()> {
        if self.state.status.is_terminal() {
            return Err(ChessError::GameOver);
        }
        self.state.status = GameStatus::Draw;
        info!("draw agreed");
        Ok(())
    }

    pub fn resign(&mut self, color: Color) -> Result<()> {
        if self.state.status.is_terminal() {
            return Err(ChessError::GameOver);
        }
        self.state.status = GameStatus::Draw;
        self.state.resigned = Some(color);
        info!("{:?} resigns", color);
        Ok(())
    }

    /// Perft (Performance Test) - counts leaf nodes at a given depth.
    /// Used to validate move generation correctness.
    pub fn perft(&self, depth: u32) -> u64 {
        perft(&self.state.board, self.state.current_player, depth)
    }

    /// Perft split by first move (debugging tool)
    pub fn divide(&self, depth: u32) -> Vec<(Ply, u64)> {
        let side = self.state.current_player;
        let board = &self.state.board;
        let split: Vec<(Ply, u64)> = board
            .all_legal_plies(side)
            .into_iter()
            .map(|ply| (ply, perft(&board.after(ply), side.opposite(), depth.saturating_sub(1))))
            .collect();
        for (ply, count) in &split {
            debug!("{}: {}", ply, count);
        }
        split
    }
}

fn perft(board: &Board, side: Color, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let plies = board.all_legal_plies(side);
    if depth == 1 {
        return plies.len() as u64;
    }
    plies
        .into_iter()
        .map(|ply| perft(&board.after(ply), side.opposite(), depth - 1))
        .sum()
}
