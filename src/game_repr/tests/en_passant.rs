use super::*;

// ==================== EN PASSANT TESTS ====================

#[test]
fn test_white_en_passant_available() {
    let mut game = Game::default();
    play(&mut game, &["e2e4", "a7a6", "e4e5", "d7d5"]);

    let moves = game.get_valid_moves(sq("e5")).unwrap();
    let ep = moves.iter().find(|m| m.to == sq("d6")).expect("en passant d6");
    assert!(ep.is_en_passant);
    assert!(ep.is_capture);
    assert_eq!(ep.special(), Some(SpecialMove::EnPassant));
}

#[test]
fn test_en_passant_removes_passed_pawn() {
    let mut game = Game::default();
    play(&mut game, &["e2e4", "a7a6", "e4e5", "d7d5"]);
    let record = game.make_move(sq("e5"), sq("d6"), None).unwrap();

    assert!(record.is_en_passant);
    assert_eq!(record.notation, "exd6");
    let captured = record.captured.expect("a pawn was taken");
    assert_eq!(captured.piece_type, PieceType::Pawn);
    assert_eq!(captured.color, Color::Black);
    assert!(game.board().get(sq("d5")).is_none());
    assert_eq!(game.game_state().captured.of(Color::Black).len(), 1);
}

#[test]
fn test_en_passant_expires_after_one_move() {
    let mut game = Game::default();
    play(&mut game, &["e2e4", "a7a6", "e4e5", "d7d5", "h2h3", "a6a5"]);

    let moves = game.get_valid_moves(sq("e5")).unwrap();
    assert!(!has_move(&moves, "d6"));
}

#[test]
fn test_no_en_passant_after_single_steps() {
    let mut game = Game::default();
    play(&mut game, &["e2e4", "d7d6", "e4e5", "d6d5"]);

    let moves = game.get_valid_moves(sq("e5")).unwrap();
    assert!(!has_move(&moves, "d6"));
}

#[test]
fn test_black_en_passant() {
    let mut game = Game::default();
    play(&mut game, &["a2a3", "d7d5", "a3a4", "d5d4", "e2e4"]);

    let moves = game.get_valid_moves(sq("d4")).unwrap();
    assert!(moves.iter().any(|m| m.to == sq("e3") && m.is_en_passant));

    let record = game.make_move(sq("d4"), sq("e3"), None).unwrap();
    assert!(record.is_en_passant);
    assert!(game.board().get(sq("e4")).is_none());
}

#[test]
fn test_en_passant_cannot_expose_king() {
    // Taking on c6 would clear the fifth rank between the king and the rook
    let game = Game::from_fen("8/8/8/KPp4r/8/8/8/7k w - c6 0 1", GameSettings::default()).unwrap();

    let moves = game.get_valid_moves(sq("b5")).unwrap();
    assert!(!has_move(&moves, "c6"));
    assert!(has_move(&moves, "b6"));

    let validation = game.validate_move(sq("b5"), sq("c6"));
    assert!(!validation.legal);
    assert_eq!(
        validation.reason,
        Some(ChessError::KingExposed { from: sq("b5"), to: sq("c6") })
    );
}
