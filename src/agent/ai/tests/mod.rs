use crate::config::GameSettings;
use crate::game_repr::{Board, Color, Game, Ply};


fn board(fen: &str) -> Board {
    Board::from_fen(fen).unwrap().0
}

fn game(fen: &str) -> Game {
    Game::from_fen(fen, GameSettings::default()).unwrap()
}

fn ply(text: &str) -> Ply {
    text.parse().unwrap()
}

const START: &str = crate::game_repr::STARTING_FEN;
const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const BACK_RANK_MATE: &str = "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1";
const ITALIAN: &str = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3";
const HANGING_QUEEN: &str = "rnb1kbnr/pppppppp/8/8/4q3/2N5/PPPPPPPP/R1BQKBNR w KQkq - 0 1";
