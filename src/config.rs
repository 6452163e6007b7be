//! Game and search configuration.
//!
//! Collaborators (setup forms, the CLI) build a [`GameSettings`] and hand it
//! to [`Game::new_game`](crate::game_repr::Game::new_game); the AI derives a
//! [`SearchConfig`] from the configured difficulty.

use std::fmt;
use std::str::FromStr;

use crate::error::ChessError;
use crate::game_repr::Color;

/// AI difficulty levels that map to search depth and imperfection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Depth 2, plays a near-best move 30% of the time
    Easy,
    /// Depth 3, plays a near-best move 15% of the time
    #[default]
    Medium,
    /// Depth 4, always the best move found
    Hard,
    /// Depth 5, always the best move found
    Expert,
}

impl Difficulty {
    pub fn all() -> &'static [Difficulty] {
        &[
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Expert,
        ]
    }

    /// Search depth in plies
    pub fn depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
            Difficulty::Expert => 5,
        }
    }

    /// Probability of swapping the best move for one of the next-best few
    pub fn blunder_chance(&self) -> f64 {
        match self {
            Difficulty::Easy => 0.30,
            Difficulty::Medium => 0.15,
            Difficulty::Hard | Difficulty::Expert => 0.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::all()
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ChessError::InvalidNotation(format!("unknown difficulty {s}")))
    }
}

/// Settings chosen when a game is set up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub difficulty: Difficulty,
    /// Side the human plays; the AI takes the other one
    pub human_color: Color,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            human_color: Color::White,
        }
    }
}

impl GameSettings {
    /// Create a player-vs-AI configuration.
    pub fn pvai(human_color: Color, difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            human_color,
        }
    }

    pub fn ai_color(&self) -> Color {
        self.human_color.opposite()
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig::from(self.difficulty)
    }
}

/// Parameters for a single search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Plies to look ahead
    pub depth: u8,
    /// Chance in `0.0..=1.0` of picking a near-best root move instead of the best
    pub blunder_chance: f64,
    /// Fixed RNG seed for reproducible games; `None` draws from the OS
    pub seed: Option<u64>,
}

impl SearchConfig {
    /// Always play the best move found at `depth`
    pub fn exact(depth: u8) -> Self {
        Self {
            depth,
            blunder_chance: 0.0,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl From<Difficulty> for SearchConfig {
    fn from(difficulty: Difficulty) -> Self {
        Self {
            depth: difficulty.depth(),
            blunder_chance: difficulty.blunder_chance(),
            seed: None,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::from(Difficulty::default())
    }
}
