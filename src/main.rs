//! Terminal driver: play the engine, watch it play itself, or feed it a
//! position.
//!
//! ```text
//! chess_opponent --white human --black ai --difficulty hard
//! chess_opponent --white ai --black ai --seed 1 --max-plies 80
//! RUST_LOG=debug chess_opponent --fen "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1" --white ai --black ai
//! ```

use std::cell::RefCell;
use std::io::{self, BufWriter, StdinLock};
use std::process::ExitCode;
use std::rc::Rc;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use log::{error, info};

use chess_opponent::agent::{AiPlayer, GameResult, HumanPlayer, Player};
use chess_opponent::config::{Difficulty, GameSettings, SearchConfig};
use chess_opponent::error::Result;
use chess_opponent::game_repr::{Color, Game, STARTING_FEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Side {
    Human,
    Ai,
}

#[derive(Parser)]
#[command(name = "chess_opponent")]
#[command(about = "Chess rules engine with a minimax opponent", long_about = None)]
struct Args {
    /// Who plays White
    #[arg(long, value_enum, default_value = "human")]
    white: Side,

    /// Who plays Black
    #[arg(long, value_enum, default_value = "ai")]
    black: Side,

    /// easy, medium, hard or expert
    #[arg(short, long, default_value = "medium")]
    difficulty: Difficulty,

    /// Start from this position instead of the initial one
    #[arg(short, long)]
    fen: Option<String>,

    /// Seed for the AI's imperfect play, for reproducible games
    #[arg(short, long)]
    seed: Option<u64>,

    /// Minimum time an AI move takes, purely for pacing
    #[arg(long, default_value = "0")]
    min_think_ms: u64,

    /// Stop after this many plies
    #[arg(long, default_value = "300")]
    max_plies: usize,
}

impl Args {
    fn player(&self, side: Side, color: Color, stdin: &Rc<RefCell<StdinLock<'static>>>) -> Box<dyn Player> {
        match side {
            Side::Human => Box::new(HumanPlayer::shared(
                Rc::clone(stdin),
                BufWriter::new(io::stdout()),
                "Human".to_string(),
            )),
            Side::Ai => {
                let mut config = SearchConfig::from(self.difficulty);
                config.seed = self.seed.map(|s| s.wrapping_add(color as u64));
                Box::new(
                    AiPlayer::new(config, format!("AI {:?} ({})", color, self.difficulty))
                        .with_min_think(Duration::from_millis(self.min_think_ms)),
                )
            }
        }
    }
}

fn play(args: &Args) -> Result<Option<GameResult>> {
    let human_color = match (args.white, args.black) {
        (Side::Ai, Side::Human) => Color::Black,
        _ => Color::White,
    };
    let settings = GameSettings::pvai(human_color, args.difficulty);
    let mut game = Game::from_fen(args.fen.as_deref().unwrap_or(STARTING_FEN), settings)?;

    // Stdin's lock isn't reentrant: take it once for both sides
    let stdin = Rc::new(RefCell::new(io::stdin().lock()));
    let mut white = args.player(args.white, Color::White, &stdin);
    let mut black = args.player(args.black, Color::Black, &stdin);

    info!("{} vs {}, {}", white.name(), black.name(), game.game_state().to_fen());

    for _ in 0..args.max_plies {
        if let Some(result) = GameResult::from_state(game.game_state()) {
            white.game_ended(result);
            black.game_ended(result);
            return Ok(Some(result));
        }

        let side = game.current_player();
        let (mover, other) = match side {
            Color::White => (&mut white, &mut black),
            Color::Black => (&mut black, &mut white),
        };

        let state = game.snapshot();
        match mover.choose_move(&state)? {
            Some(ply) => {
                let record = game.make_ply(ply)?;
                println!("{:>3}. {}", record.id, record.notation);
                other.opponent_moved(&record);
            }
            None => {
                info!("{} resigns", mover.name());
                game.resign(side)?;
            }
        }
    }

    info!("stopped after {} plies", args.max_plies);
    Ok(GameResult::from_state(game.game_state()))
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match play(&args) {
        Ok(Some(result)) => {
            println!("result: {:?}", result);
            ExitCode::SUCCESS
        }
        Ok(None) => {
            println!("unfinished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
