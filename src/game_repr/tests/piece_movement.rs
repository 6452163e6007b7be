use super::*;

// ==================== KNIGHT / SLIDER MOVEMENT TESTS ====================

/// Kings tucked away where they don't interfere with d4
fn with_kings() -> Board {
    let mut board = empty_board();
    place_piece(&mut board, "h1", PieceType::King, Color::White);
    place_piece(&mut board, "a8", PieceType::King, Color::Black);
    board
}

#[test]
fn test_knight_center() {
    let mut board = with_kings();
    place_piece(&mut board, "d4", PieceType::Knight, Color::White);
    assert_eq!(board.legal_moves(sq("d4")).len(), 8);
}

#[test]
fn test_knight_corner() {
    let mut board = empty_board();
    place_piece(&mut board, "a1", PieceType::Knight, Color::White);
    place_piece(&mut board, "h1", PieceType::King, Color::White);
    place_piece(&mut board, "h8", PieceType::King, Color::Black);

    let moves = board.legal_moves(sq("a1"));
    assert_eq!(moves.len(), 2);
    assert!(has_move(&moves, "b3"));
    assert!(has_move(&moves, "c2"));
}

#[test]
fn test_knight_jumps_over_pieces() {
    let game = Game::default();
    let moves = game.get_valid_moves(sq("g1")).unwrap();
    assert_eq!(moves.len(), 2);
    assert!(has_move(&moves, "f3"));
    assert!(has_move(&moves, "h3"));
}

#[test]
fn test_bishop_center() {
    let mut board = with_kings();
    place_piece(&mut board, "d4", PieceType::Bishop, Color::White);
    assert_eq!(board.legal_moves(sq("d4")).len(), 13);
}

#[test]
fn test_rook_center() {
    let mut board = with_kings();
    place_piece(&mut board, "d4", PieceType::Rook, Color::White);
    assert_eq!(board.legal_moves(sq("d4")).len(), 14);
}

#[test]
fn test_queen_center() {
    let mut board = with_kings();
    place_piece(&mut board, "d4", PieceType::Queen, Color::White);
    assert_eq!(board.legal_moves(sq("d4")).len(), 27);
}

#[test]
fn test_rook_stopped_by_own_piece() {
    let mut board = empty_board();
    place_piece(&mut board, "a1", PieceType::Rook, Color::White);
    place_piece(&mut board, "a3", PieceType::Pawn, Color::White);
    place_piece(&mut board, "h3", PieceType::King, Color::White);
    place_piece(&mut board, "f8", PieceType::King, Color::Black);

    let moves = board.legal_moves(sq("a1"));
    assert_eq!(moves.len(), 8);
    assert!(has_move(&moves, "a2"));
    assert!(!has_move(&moves, "a3"));
}

#[test]
fn test_rook_captures_and_stops() {
    let mut board = empty_board();
    place_piece(&mut board, "a1", PieceType::Rook, Color::White);
    place_piece(&mut board, "a4", PieceType::Pawn, Color::Black);
    place_piece(&mut board, "h3", PieceType::King, Color::White);
    place_piece(&mut board, "f8", PieceType::King, Color::Black);

    let moves = board.legal_moves(sq("a1"));
    assert_eq!(moves.len(), 10);
    assert!(moves.iter().any(|m| m.to == sq("a4") && m.is_capture));
    assert!(!has_move(&moves, "a5"));
}

#[test]
fn test_pinned_knight_cannot_move() {
    let mut board = empty_board();
    place_piece(&mut board, "e1", PieceType::King, Color::White);
    place_piece(&mut board, "e2", PieceType::Knight, Color::White);
    place_piece(&mut board, "e8", PieceType::Rook, Color::Black);
    place_piece(&mut board, "a8", PieceType::King, Color::Black);

    assert!(!board.pseudo_legal_moves(sq("e2")).is_empty());
    assert!(board.legal_moves(sq("e2")).is_empty());
}

#[test]
fn test_pinned_bishop_slides_along_pin() {
    let mut board = empty_board();
    place_piece(&mut board, "e1", PieceType::King, Color::White);
    place_piece(&mut board, "d2", PieceType::Bishop, Color::White);
    place_piece(&mut board, "b4", PieceType::Bishop, Color::Black);
    place_piece(&mut board, "h8", PieceType::King, Color::Black);

    let moves = board.legal_moves(sq("d2"));
    assert_eq!(moves.len(), 2);
    assert!(has_move(&moves, "c3"));
    assert!(has_move(&moves, "b4"));
}

#[test]
fn test_pinned_rook_slides_along_pin() {
    let mut board = empty_board();
    place_piece(&mut board, "e1", PieceType::King, Color::White);
    place_piece(&mut board, "e4", PieceType::Rook, Color::White);
    place_piece(&mut board, "e8", PieceType::Rook, Color::Black);
    place_piece(&mut board, "a8", PieceType::King, Color::Black);

    let moves = board.legal_moves(sq("e4"));
    assert_eq!(moves.len(), 6);
    assert!(moves.iter().all(|m| m.to.col() == 4));
}

#[test]
fn test_legal_query_leaves_board_untouched() {
    let mut board = empty_board();
    place_piece(&mut board, "e1", PieceType::King, Color::White);
    place_piece(&mut board, "e4", PieceType::Rook, Color::White);
    place_piece(&mut board, "e8", PieceType::Rook, Color::Black);
    place_piece(&mut board, "a8", PieceType::King, Color::Black);

    let before = board;
    let _ = board.legal_moves(sq("e4"));
    let _ = board.validate_move(sq("e4"), sq("a4"));
    assert_eq!(board.to_fen(Color::White), before.to_fen(Color::White));
}
