// Minimax with alpha-beta pruning
//
// Scores are always from the AI's point of view: the AI's plies are the
// maximizing levels, the opponent's the minimizing ones. Every level works
// on its own copy of the board, so nothing is undone on the way back up.

use std::sync::atomic::{AtomicBool, Ordering};

use smallvec::SmallVec;

use crate::error::{ChessError, Result};
use crate::game_repr::{Board, Color, Ply};

use super::evaluation::evaluate;
use super::move_ordering::order_moves;

/// Score of a checkmate; the remaining depth is added so faster mates win
pub const MATE_SCORE: i32 = 100_000;

/// Bound outside any reachable score
pub const INFINITY: i32 = MATE_SCORE * 2;

/// Principal variation from some node down
pub type Line = SmallVec<[Ply; 8]>;

/// Per-search bookkeeping shared by every node
pub struct SearchContext<'a> {
    pub ai_color: Color,
    pub nodes: u64,
    cancel: Option<&'a AtomicBool>,
}

impl<'a> SearchContext<'a> {
    pub fn new(ai_color: Color) -> Self {
        Self {
            ai_color,
            nodes: 0,
            cancel: None,
        }
    }

    pub fn with_cancel(ai_color: Color, cancel: &'a AtomicBool) -> Self {
        Self {
            ai_color,
            nodes: 0,
            cancel: Some(cancel),
        }
    }

    fn cancelled(&self) -> bool {
        self.cancel.map_or(false, |flag| flag.load(Ordering::Relaxed))
    }

    fn side(&self, maximizing: bool) -> Color {
        if maximizing {
            self.ai_color
        } else {
            self.ai_color.opposite()
        }
    }
}

/// Score of a node where the side to move has no legal moves
fn terminal_score(board: &Board, side: Color, maximizing: bool, depth: u8) -> i32 {
    if !board.is_in_check(side) {
        return 0;
    }
    let mate = MATE_SCORE + depth as i32;
    if maximizing {
        -mate
    } else {
        mate
    }
}

/// Search `board` to `depth` plies with the window `(alpha, beta)`.
///
/// `pv` receives the best line found from this node. Fails with
/// `SearchCancelled` as soon as the context's cancel flag is raised.
pub fn minimax(
    board: &Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    ctx: &mut SearchContext<'_>,
    pv: &mut Line,
) -> Result<i32> {
    if ctx.cancelled() {
        return Err(ChessError::SearchCancelled);
    }
    ctx.nodes += 1;
    pv.clear();

    let side = ctx.side(maximizing);
    let plies = board.all_legal_plies(side);
    if plies.is_empty() {
        return Ok(terminal_score(board, side, maximizing, depth));
    }
    if depth == 0 {
        return Ok(evaluate(board, ctx.ai_color));
    }

    let mut child_pv = Line::new();
    let mut best = if maximizing { -INFINITY } else { INFINITY };

    for ply in order_moves(board, side, plies) {
        let child = board.after(ply);
        let score = minimax(&child, depth - 1, alpha, beta, !maximizing, ctx, &mut child_pv)?;

        let improved = if maximizing { score > best } else { score < best };
        if improved {
            best = score;
            pv.clear();
            pv.push(ply);
            pv.extend(child_pv.iter().copied());
        }

        if maximizing {
            alpha = alpha.max(score);
        } else {
            beta = beta.min(score);
        }
        if beta <= alpha {
            break;
        }
    }

    Ok(best)
}

/// Minimax without pruning or ordering. Visits every node, so only usable
/// at small depths; the pruned search must always agree with it.
pub fn plain_minimax(board: &Board, depth: u8, maximizing: bool, ctx: &mut SearchContext<'_>) -> i32 {
    ctx.nodes += 1;
    let side = ctx.side(maximizing);
    let plies = board.all_legal_plies(side);
    if plies.is_empty() {
        return terminal_score(board, side, maximizing, depth);
    }
    if depth == 0 {
        return evaluate(board, ctx.ai_color);
    }

    let scores = plies
        .into_iter()
        .map(|ply| plain_minimax(&board.after(ply), depth - 1, !maximizing, ctx));
    let best = if maximizing { scores.max() } else { scores.min() };
    best.unwrap_or(0)
}
