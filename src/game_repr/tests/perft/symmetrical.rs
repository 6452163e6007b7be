use super::*;

const FEN: &str = "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10";

fn position() -> Game {
    Game::from_fen(FEN, GameSettings::default()).unwrap()
}

#[test]
fn test_perft_symmetrical_depth_1() {
    assert_eq!(position().perft(1), 46);
}

#[test]
fn test_perft_symmetrical_depth_2() {
    assert_eq!(position().perft(2), 2079);
}

#[test]
fn test_perft_symmetrical_depth_3() {
    assert_eq!(position().perft(3), 89890);
}

#[test]
#[ignore = "slow without optimisations; run with --release -- --ignored"]
fn test_perft_symmetrical_depth_4() {
    assert_eq!(position().perft(4), 3894594);
}
