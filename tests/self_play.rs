//! The AI playing itself never produces an illegal move and the game record
//! stays consistent

use chess_opponent::agent::{AiPlayer, GameResult, Player};
use chess_opponent::config::{GameSettings, SearchConfig};
use chess_opponent::game_repr::{Color, Game};

fn play_out(game: &mut Game, white: &mut AiPlayer, black: &mut AiPlayer, max_plies: usize) {
    for _ in 0..max_plies {
        if game.status().is_terminal() {
            break;
        }
        let state = game.snapshot();
        let player = match state.current_player {
            Color::White => &mut *white,
            Color::Black => &mut *black,
        };
        let ply = player
            .choose_move(&state)
            .unwrap()
            .expect("the AI never resigns");
        assert!(
            game.legal_plies().contains(&ply),
            "{} is not legal in {}",
            ply,
            state.to_fen()
        );
        game.make_ply(ply).unwrap();
    }
}

#[test]
fn test_seeded_self_play_is_legal() {
    let mut game = Game::default();
    let config = SearchConfig {
        depth: 2,
        blunder_chance: 0.3,
        seed: Some(11),
    };
    let mut white = AiPlayer::new(config, "white".into());
    let mut black = AiPlayer::new(config.with_seed(12), "black".into());

    play_out(&mut game, &mut white, &mut black, 30);

    let state = game.game_state();
    assert!(!state.moves.is_empty());
    for (i, mv) in state.moves.iter().enumerate() {
        assert_eq!(mv.id, i + 1);
        assert!(!mv.notation.is_empty());
    }
    assert!(white.last_result().is_some());
}

#[test]
fn test_ai_delivers_available_mate() {
    // Qg7#
    let mut game = Game::from_fen("7k/8/5K2/8/8/8/8/6Q1 w - - 0 1", GameSettings::default()).unwrap();
    let mut white = AiPlayer::new(SearchConfig::exact(2), "white".into());
    let mut black = AiPlayer::new(SearchConfig::exact(2), "black".into());

    play_out(&mut game, &mut white, &mut black, 1);

    assert_eq!(GameResult::from_state(game.game_state()), Some(GameResult::WhiteWins));
}
