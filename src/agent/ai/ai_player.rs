// Search-backed player

use std::time::{Duration, Instant};

use log::info;

use crate::agent::player::Player;
use crate::config::{Difficulty, SearchConfig};
use crate::error::Result;
use crate::game_repr::{GameState, Ply};

use super::search::{get_best_move, SearchResult};

/// Plays the move the search engine picks for the side to move
pub struct AiPlayer {
    config: SearchConfig,
    name: String,
    /// Pacing only: answers are held back until this much time has passed
    min_think: Duration,
    last_result: Option<SearchResult>,
}

impl AiPlayer {
    pub fn new(config: SearchConfig, name: String) -> Self {
        Self {
            config,
            name,
            min_think: Duration::ZERO,
            last_result: None,
        }
    }

    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self::new(SearchConfig::from(difficulty), format!("AI ({})", difficulty))
    }

    pub fn with_min_think(mut self, min_think: Duration) -> Self {
        self.min_think = min_think;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The full result behind the last move played
    pub fn last_result(&self) -> Option<&SearchResult> {
        self.last_result.as_ref()
    }
}

impl Player for AiPlayer {
    fn choose_move(&mut self, state: &GameState) -> Result<Option<Ply>> {
        let started = Instant::now();
        let result = get_best_move(state, state.current_player, &self.config)?;
        info!(
            "{} plays {} (eval {}, depth {}, {} nodes)",
            self.name, result.best_move, result.evaluation, result.depth, result.nodes
        );

        let elapsed = started.elapsed();
        if elapsed < self.min_think {
            std::thread::sleep(self.min_think - elapsed);
        }

        let ply = result.best_move;
        self.last_result = Some(result);
        Ok(Some(ply))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
