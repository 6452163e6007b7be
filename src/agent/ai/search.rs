// Root search: picks the AI's move for a game state.
//
// Strong difficulties play the best move minimax finds. Weaker ones score
// every root move exactly and, with a configured probability, swap the best
// one for one of the next two or three candidates.

use std::sync::atomic::AtomicBool;
use std::time::Instant;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::SearchConfig;
use crate::error::{ChessError, Result};
use crate::game_repr::{Color, Game, GameState, Move, PositionKey, Ply};

use super::minimax::{minimax, Line, SearchContext, INFINITY};
use super::move_ordering::ordered_legal_moves;

/// Outcome of one search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Ply,
    /// Score of `best_move` from the AI's point of view, in centipawns
    pub evaluation: i32,
    /// Depth the root moves were searched to
    pub depth: u8,
    /// Expected line starting with `best_move`
    pub principal_variation: Vec<Ply>,
    pub nodes: u64,
    /// The position this result belongs to
    pub key: PositionKey,
}

/// A root move with its exact score and line
struct Candidate {
    ply: Ply,
    score: i32,
    line: Line,
}

/// Choose a move for `ai_color`, which must be the side to move.
pub fn get_best_move(state: &GameState, ai_color: Color, config: &SearchConfig) -> Result<SearchResult> {
    run_search(state, ai_color, config, None)
}

/// [`get_best_move`] that gives up with `SearchCancelled` once `cancel` is set
pub fn get_best_move_cancellable(
    state: &GameState,
    ai_color: Color,
    config: &SearchConfig,
    cancel: &AtomicBool,
) -> Result<SearchResult> {
    run_search(state, ai_color, config, Some(cancel))
}

fn run_search(
    state: &GameState,
    ai_color: Color,
    config: &SearchConfig,
    cancel: Option<&AtomicBool>,
) -> Result<SearchResult> {
    let board = &state.board;
    let legal = ordered_legal_moves(board, ai_color);
    if legal.is_empty() {
        return Err(ChessError::NoLegalMoves);
    }
    if state.status.is_terminal() {
        return Err(ChessError::GameOver);
    }
    if state.current_player != ai_color {
        return Err(ChessError::WrongTurn {
            expected: state.current_player,
        });
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let depth = config.depth.max(1);
    let mut ctx = match cancel {
        Some(flag) => SearchContext::with_cancel(ai_color, flag),
        None => SearchContext::new(ai_color),
    };
    let started = Instant::now();

    let chosen = if config.blunder_chance > 0.0 {
        let mut ranked = score_all(&legal, state, depth, &mut ctx)?;
        // Stable, so equal scores keep the ordering heuristic's preference
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        let pick = pick_imperfect(&ranked, config.blunder_chance, &mut rng);
        if pick > 0 {
            info!(
                "playing {} (rank {}) instead of {}",
                ranked[pick].ply,
                pick + 1,
                ranked[0].ply
            );
        }
        ranked.into_iter().nth(pick)
    } else {
        best_of(&legal, state, depth, &mut ctx)?
    };

    let chosen = match chosen {
        Some(c) => c,
        None => {
            // Only reachable if the search itself is inconsistent
            let ply = *legal.choose(&mut rng).ok_or(ChessError::NoLegalMoves)?;
            warn!("search produced no move, playing random {}", ply);
            Candidate {
                ply,
                score: 0,
                line: Line::new(),
            }
        }
    };

    let mut principal_variation = Vec::with_capacity(chosen.line.len() + 1);
    principal_variation.push(chosen.ply);
    principal_variation.extend(chosen.line.iter().copied());

    debug!(
        "depth {} | {} nodes in {:?} | score {} | pv {}",
        depth,
        ctx.nodes,
        started.elapsed(),
        chosen.score,
        principal_variation
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );

    Ok(SearchResult {
        best_move: chosen.ply,
        evaluation: chosen.score,
        depth,
        principal_variation,
        nodes: ctx.nodes,
        key: state.position_key(),
    })
}

/// Alpha-beta over the root moves; only the winner's score is exact
fn best_of(
    legal: &[Ply],
    state: &GameState,
    depth: u8,
    ctx: &mut SearchContext<'_>,
) -> Result<Option<Candidate>> {
    let mut alpha = -INFINITY;
    let mut best: Option<Candidate> = None;
    let mut line = Line::new();

    for &ply in legal {
        let child = state.board.after(ply);
        let score = minimax(&child, depth - 1, alpha, INFINITY, false, ctx, &mut line)?;
        if best.as_ref().map_or(true, |b| score > b.score) {
            best = Some(Candidate {
                ply,
                score,
                line: line.clone(),
            });
        }
        alpha = alpha.max(score);
    }
    Ok(best)
}

/// Every root move searched with a full window, in `legal` order
fn score_all(
    legal: &[Ply],
    state: &GameState,
    depth: u8,
    ctx: &mut SearchContext<'_>,
) -> Result<Vec<Candidate>> {
    let mut line = Line::new();
    legal
        .iter()
        .map(|&ply| {
            let child = state.board.after(ply);
            let score = minimax(&child, depth - 1, -INFINITY, INFINITY, false, ctx, &mut line)?;
            Ok(Candidate {
                ply,
                score,
                line: line.clone(),
            })
        })
        .collect()
}

/// Index into the best-first `ranked` list: 0 unless the dice say to blunder,
/// then one of the next two candidates if there are that many
fn pick_imperfect<R: Rng>(ranked: &[Candidate], chance: f64, rng: &mut R) -> usize {
    if ranked.len() < 2 || !rng.gen_bool(chance.clamp(0.0, 1.0)) {
        return 0;
    }
    let pool = rng.gen_range(2..=3).min(ranked.len());
    rng.gen_range(1..pool)
}

impl Game {
    /// Play a search result, provided the game is still at the position it
    /// was computed for.
    pub fn apply_search_result(&mut self, result: &SearchResult) -> Result<Move> {
        if result.key != self.position_key() {
            warn!(
                "discarding stale search result {} (computed at {:?}, now {:?})",
                result.best_move,
                result.key,
                self.position_key()
            );
            return Err(ChessError::StalePosition);
        }
        self.make_ply(result.best_move)
    }
}
