use super::*;

const FEN: &str = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";

fn position() -> Game {
    Game::from_fen(FEN, GameSettings::default()).unwrap()
}

#[test]
fn test_perft_promotions_depth_1() {
    assert_eq!(position().perft(1), 6);
}

#[test]
fn test_perft_promotions_depth_2() {
    assert_eq!(position().perft(2), 264);
}

#[test]
fn test_perft_promotions_depth_3() {
    assert_eq!(position().perft(3), 9467);
}

#[test]
#[ignore = "slow without optimisations; run with --release -- --ignored"]
fn test_perft_promotions_depth_4() {
    assert_eq!(position().perft(4), 422333);
}
