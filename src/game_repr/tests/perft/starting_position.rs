use super::*;

#[test]
fn test_perft_starting_position_depth_1() {
    let game = Game::default();
    assert_eq!(game.perft(1), 20);
}

#[test]
fn test_perft_starting_position_depth_2() {
    let game = Game::default();
    assert_eq!(game.perft(2), 400);
}

#[test]
fn test_perft_starting_position_depth_3() {
    let game = Game::default();
    assert_eq!(game.perft(3), 8902);
}

#[test]
#[ignore = "slow without optimisations; run with --release -- --ignored"]
fn test_perft_starting_position_depth_4() {
    let game = Game::default();
    assert_eq!(game.perft(4), 197281);
}

#[test]
fn test_divide_sums_to_perft() {
    let game = Game::default();
    let split = game.divide(2);
    assert_eq!(split.len(), 20);
    assert!(split.iter().all(|(_, count)| *count == 20));
    assert_eq!(split.iter().map(|(_, count)| count).sum::<u64>(), game.perft(2));
}
