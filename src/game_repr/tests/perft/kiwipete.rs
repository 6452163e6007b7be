use super::*;

const FEN: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn position() -> Game {
    Game::from_fen(FEN, GameSettings::default()).unwrap()
}

#[test]
fn test_perft_kiwipete_depth_1() {
    assert_eq!(position().perft(1), 48);
}

#[test]
fn test_perft_kiwipete_depth_2() {
    assert_eq!(position().perft(2), 2039);
}

#[test]
fn test_perft_kiwipete_depth_3() {
    assert_eq!(position().perft(3), 97862);
}

#[test]
#[ignore = "slow without optimisations; run with --release -- --ignored"]
fn test_perft_kiwipete_depth_4() {
    assert_eq!(position().perft(4), 4085603);
}
