use super::*;

// ==================== MOVE NOTATION TESTS ====================

fn last_notation(game: &mut Game, plies: &[&str]) -> String {
    play(game, plies).pop().map(|m| m.notation).unwrap_or_default()
}

#[test]
fn test_opening_notation() {
    let mut game = Game::default();
    let records = play(&mut game, &["e2e4", "e7e5", "g1f3", "b8c6", "f1b5"]);
    let san: Vec<&str> = records.iter().map(|m| m.notation.as_str()).collect();
    assert_eq!(san, vec!["e4", "e5", "Nf3", "Nc6", "Bb5"]);
}

#[test]
fn test_pawn_capture_names_file() {
    let mut game = Game::default();
    assert_eq!(last_notation(&mut game, &["e2e4", "d7d5", "e4d5"]), "exd5");
}

#[test]
fn test_piece_capture() {
    let mut game = Game::default();
    assert_eq!(
        last_notation(&mut game, &["e2e4", "d7d5", "g1f3", "d5e4", "f3e5", "d8d2"]),
        "Qxd2+"
    );
}

#[test]
fn test_file_disambiguation() {
    let mut game = Game::from_fen("4k3/8/8/8/8/8/8/1N2KN2 w - - 0 1", GameSettings::default()).unwrap();
    assert_eq!(last_notation(&mut game, &["b1d2"]), "Nbd2");
}

#[test]
fn test_rank_disambiguation() {
    let mut game = Game::from_fen("4k3/8/8/R7/8/8/8/R3K3 w - - 0 1", GameSettings::default()).unwrap();
    assert_eq!(last_notation(&mut game, &["a1a3"]), "R1a3");
}

#[test]
fn test_pinned_rival_needs_no_disambiguation() {
    // The e2 knight is pinned against the king and cannot reach d4
    let mut game = Game::from_fen("4r1k1/8/8/8/8/1N6/4N3/4K3 w - - 0 1", GameSettings::default()).unwrap();
    assert_eq!(last_notation(&mut game, &["b3d4"]), "Nd4");
}

#[test]
fn test_ply_coordinate_notation() {
    let ply = Ply::with_promotion(sq("e7"), sq("e8"), PieceType::Knight);
    assert_eq!(ply.to_string(), "e7e8n");
    assert_eq!("e7e8n".parse::<Ply>().unwrap(), ply);
    assert!("e7e9".parse::<Ply>().is_err());
    assert!("e2".parse::<Ply>().is_err());
}

#[test]
fn test_record_round_trips_to_ply() {
    let mut game = Game::default();
    let record = play(&mut game, &["g1f3"]).pop().unwrap();
    assert_eq!(record.ply(), Ply::new(sq("g1"), sq("f3")));
    assert_eq!(record.id, 1);
}
