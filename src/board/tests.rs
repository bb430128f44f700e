use super::*;
use crate::error::ConfigurationError;
use crate::rules::Move;

/// Standard board after White has walked a piece from (5,4) to (3,2)
fn board_with_white_advanced() -> Board {
    let mut board = Board::new(8, 3).unwrap();
    let white = *board.get_piece_at(5, 4).unwrap();
    let white = board.apply_move(&white, Pos::new(4, 3)).unwrap().piece;
    board.apply_move(&white, Pos::new(3, 2)).unwrap();
    board
}

#[test]
fn test_side_opponent() {
    assert_eq!(Side::Black.opponent(), Side::White);
    assert_eq!(Side::White.opponent(), Side::Black);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0, 8));
    assert!(Pos::is_valid(7, 7, 8));
    assert!(!Pos::is_valid(-1, 0, 8));
    assert!(!Pos::is_valid(0, -1, 8));
    assert!(!Pos::is_valid(8, 0, 8));
    assert!(!Pos::is_valid(0, 8, 8));
}

#[test]
fn test_pos_ordering_is_row_major() {
    assert!(Pos::new(0, 7) < Pos::new(1, 0));
    assert!(Pos::new(3, 1) < Pos::new(3, 2));
}

#[test]
fn test_pos_diagonal() {
    let pos = Pos::new(3, 2);
    assert!(pos.is_diagonal(Pos::new(2, 1), 1));
    assert!(pos.is_diagonal(Pos::new(5, 4), 2));
    assert!(!pos.is_diagonal(Pos::new(3, 3), 1));
    assert!(!pos.is_diagonal(Pos::new(4, 4), 1));
}

#[test]
fn test_cell_color_pattern() {
    // Row 0 is staggered: odd columns are dark
    assert_eq!(CellColor::at(0, 0), CellColor::Light);
    assert_eq!(CellColor::at(0, 1), CellColor::Dark);
    // The pattern flips on the next row
    assert_eq!(CellColor::at(1, 0), CellColor::Dark);
    assert_eq!(CellColor::at(1, 1), CellColor::Light);

    for row in 0..10 {
        for col in 0..10 {
            assert_eq!(CellColor::at(row, col).is_dark(), (row + col) % 2 == 1);
        }
    }
}

#[test]
fn test_board_config_presets() {
    assert_eq!(BoardConfig::default(), BoardConfig::new(DEFAULT_SIZE, DEFAULT_ROWS_OF_PIECES));
    assert_eq!(BoardConfig::english(), BoardConfig::new(8, 3));
    assert_eq!(BoardConfig::international(), BoardConfig::new(10, 4));
    assert!(BoardConfig::english().validate().is_ok());
    assert!(BoardConfig::international().validate().is_ok());
}

#[test]
fn test_standard_board_setup() {
    let board = Board::new(8, 3).unwrap();
    assert_eq!(board.size(), 8);
    assert_eq!(board.rows_of_pieces(), 3);
    assert_eq!(board.piece_count(Side::Black), 12);
    assert_eq!(board.piece_count(Side::White), 12);
    assert_eq!(board.captured_black(), 0);
    assert_eq!(board.captured_white(), 0);
    assert_eq!(board.positions().count(), 64);
}

#[test]
fn test_pieces_only_on_dark_cells_of_starting_rows() {
    for (size, rows) in [(8, 3), (10, 4), (6, 3), (8, 0), (12, 5)] {
        let board = Board::new(size, rows).unwrap();
        assert_eq!(board.piece_count(Side::Black), rows * (size / 2));
        assert_eq!(board.piece_count(Side::White), rows * (size / 2));

        for piece in board.pieces() {
            let pos = piece.pos();
            assert!(board.position(pos).unwrap().is_dark());
            assert!(board.is_live(piece));
            match piece.side() {
                Side::Black => assert!(pos.row < rows),
                Side::White => assert!(pos.row >= size - rows),
            }
        }
    }
}

#[test]
fn test_too_many_rows_is_rejected() {
    let err = Board::new(8, 5).unwrap_err();
    assert_eq!(err, ConfigurationError::TooManyRows { size: 8, rows_of_pieces: 5 });
    assert!(err.to_string().contains("8x8"));

    assert!(Board::new(5, 3).is_err());
    assert!(Board::new(0, 1).is_err());
    assert!(Board::with_config(BoardConfig::new(10, 6)).is_err());
}

#[test]
fn test_huge_row_count_is_rejected() {
    let rows = usize::MAX / 2 + 1;
    assert_eq!(
        Board::new(8, rows).unwrap_err(),
        ConfigurationError::TooManyRows { size: 8, rows_of_pieces: rows }
    );
    assert!(Board::new(8, usize::MAX).is_err());
    assert!(BoardConfig::new(usize::MAX, usize::MAX / 2).validate().is_ok());
}

#[test]
fn test_odd_board_size() {
    let board = Board::new(7, 3).unwrap();
    assert_eq!(board.config(), BoardConfig::new(7, 3));
    // Rows alternate between 3 and 4 dark cells, starting with 3 on row 0
    assert_eq!(board.piece_count(Side::Black), 10);
    assert_eq!(board.piece_count(Side::White), 10);

    for piece in board.pieces() {
        let pos = piece.pos();
        assert!(board.position(pos).unwrap().is_dark());
        match piece.side() {
            Side::Black => assert!(pos.row < 3),
            Side::White => assert!(pos.row >= 4),
        }
    }
    assert!((0..7).all(|col| !board.piece_at(3, col)));
}

#[test]
fn test_rows_filling_the_board_are_accepted() {
    let board = Board::new(6, 3).unwrap();
    assert_eq!(board.pieces().count(), 18);
    assert!(board.positions().filter(|p| p.is_dark()).all(|p| board.piece_at_pos(p.pos())));
}

#[test]
fn test_lookups_are_total() {
    let board = Board::new(8, 3).unwrap();

    assert!(board.piece_at(0, 1));
    assert!(!board.piece_at(0, 0));
    assert!(!board.piece_at(-1, 1));
    assert!(!board.piece_at(1, -1));
    assert!(!board.piece_at(8, 1));
    assert!(!board.piece_at(1, 8));

    assert!(board.get_piece_at(-3, 2).is_none());
    assert!(board.get_piece_at(99, 99).is_none());
    assert_eq!(board.get_piece_at(7, 0).map(|p| p.side()), Some(Side::White));

    assert!(board.get_position_at(-1, 0).is_none());
    assert!(board.get_position_at(0, 8).is_none());
    let position = board.get_position_at(4, 3).unwrap();
    assert_eq!((position.row(), position.col()), (4, 3));
    assert_eq!(position.color(), CellColor::Dark);

    assert!(board.position(Pos::new(8, 0)).is_none());
    assert!(!board.piece_at_pos(Pos::new(8, 0)));
}

#[test]
fn test_find_jump_position() {
    let board = Board::empty(8);
    // Down-right, down-left, up-right, up-left
    assert_eq!(board.find_jump_position(Pos::new(2, 1), Pos::new(3, 2)), Some(Pos::new(4, 3)));
    assert_eq!(board.find_jump_position(Pos::new(2, 3), Pos::new(3, 2)), Some(Pos::new(4, 1)));
    assert_eq!(board.find_jump_position(Pos::new(4, 1), Pos::new(3, 2)), Some(Pos::new(2, 3)));
    assert_eq!(board.find_jump_position(Pos::new(4, 3), Pos::new(3, 2)), Some(Pos::new(2, 1)));
}

#[test]
fn test_find_jump_position_bounds() {
    let board = Board::empty(8);
    // Off the left and top edges
    assert_eq!(board.find_jump_position(Pos::new(2, 1), Pos::new(1, 0)), None);
    assert_eq!(board.find_jump_position(Pos::new(1, 2), Pos::new(0, 1)), None);
    // Off the right edge
    assert_eq!(board.find_jump_position(Pos::new(2, 6), Pos::new(3, 7)), None);
    // The last row is never a landing row
    assert_eq!(board.find_jump_position(Pos::new(5, 2), Pos::new(6, 3)), None);
    // The row before it is
    assert_eq!(board.find_jump_position(Pos::new(4, 1), Pos::new(5, 2)), Some(Pos::new(6, 3)));
    // Top row and rightmost column are
    assert_eq!(board.find_jump_position(Pos::new(2, 5), Pos::new(1, 6)), Some(Pos::new(0, 7)));
}

#[test]
fn test_find_take_piece() {
    let mut board = Board::empty(8);
    let jumper = board.place(Side::Black, 2, 1);
    let target = board.place(Side::White, 3, 2);

    assert_eq!(board.find_take_piece(&jumper, Pos::new(4, 3)), Some(target));
    // Nothing in the middle
    assert_eq!(board.find_take_piece(&jumper, Pos::new(0, 3)), None);
    // Midpoint off the board
    assert_eq!(board.find_take_piece(&target, Pos::new(5, 9)), None);
}

#[test]
fn test_find_take_piece_ignores_itself() {
    let mut board = Board::empty(8);
    let piece = board.place(Side::Black, 3, 2);
    // Degenerate destination whose computed midpoint is the piece's own cell
    assert_eq!(board.find_take_piece(&piece, Pos::new(2, 1)), None);
}

#[test]
fn test_jump_geometry_round_trip() {
    let mut board = Board::empty(8);
    let jumper = board.place(Side::Black, 3, 4);
    for (row, col) in [(2, 3), (2, 5), (4, 3), (4, 5)] {
        let target = board.place(Side::White, row, col);
        let landing = board.find_jump_position(jumper.pos(), target.pos()).unwrap();
        assert_eq!(board.find_take_piece(&jumper, landing), Some(target));
    }
}

#[test]
fn test_standard_scenario_jump() {
    let mut board = board_with_white_advanced();
    let jumper = *board.get_piece_at(2, 1).unwrap();
    let target = *board.get_piece_at(3, 2).unwrap();
    assert_eq!(target.side(), Side::White);
    assert!(!board.piece_at(4, 3));

    let destinations = board.get_valid_moves(&jumper);
    assert_eq!(destinations, vec![Pos::new(3, 0), Pos::new(4, 3)]);

    let applied = board.apply_move(&jumper, Pos::new(4, 3)).unwrap();
    assert_eq!(applied.kind, Move::Jump);
    assert_eq!(applied.captured, Some(target));

    assert!(!board.piece_at(2, 1));
    assert!(!board.piece_at(3, 2));
    assert_eq!(board.get_piece_at(4, 3).map(|p| p.side()), Some(Side::Black));
    assert_eq!(board.captured_white(), 1);
    assert_eq!(board.captures_by(Side::Black), 1);
    assert_eq!(board.piece_count(Side::White), 11);
    assert_eq!(board.piece_count(Side::Black), 12);
}

#[test]
fn test_get_valid_moves_highlights_destinations() {
    let mut board = board_with_white_advanced();
    let piece = *board.get_piece_at(2, 1).unwrap();

    let destinations = board.get_valid_moves(&piece);
    assert_eq!(board.valid_positions(), destinations.as_slice());
    for position in board.positions() {
        assert_eq!(position.is_highlighted(), destinations.contains(&position.pos()));
    }
}

#[test]
fn test_get_valid_moves_is_idempotent() {
    let mut board = board_with_white_advanced();
    for piece in board.pieces().copied().collect::<Vec<_>>() {
        let first = board.get_valid_moves(&piece);
        let second = board.get_valid_moves(&piece);
        assert_eq!(first, second);
    }
}

#[test]
fn test_blocked_piece_clears_previous_highlights() {
    let mut board = Board::new(8, 3).unwrap();
    let front = *board.get_piece_at(2, 1).unwrap();
    let back = *board.get_piece_at(0, 1).unwrap();

    assert!(!board.get_valid_moves(&front).is_empty());
    assert!(board.positions().any(|p| p.is_highlighted()));

    assert!(board.get_valid_moves(&back).is_empty());
    assert!(board.valid_positions().is_empty());
    assert!(board.positions().all(|p| !p.is_highlighted()));
}

#[test]
fn test_no_destination_is_light() {
    let mut board = board_with_white_advanced();
    for piece in board.pieces().copied().collect::<Vec<_>>() {
        for pos in board.get_valid_moves(&piece) {
            assert!(board.position(pos).unwrap().is_dark());
            assert!(!board.piece_at_pos(pos));
        }
    }
}

#[test]
fn test_full_scan_matches_neighbor_scan() {
    let mut boards = vec![
        Board::new(8, 3).unwrap(),
        Board::new(10, 4).unwrap(),
        board_with_white_advanced(),
    ];

    let mut crowded = Board::empty(8);
    crowded.place(Side::Black, 3, 4);
    crowded.place(Side::White, 2, 3);
    crowded.place(Side::White, 4, 5);
    crowded.place(Side::White, 6, 5);
    crowded.place(Side::Black, 1, 2);
    crowded.place(Side::White, 6, 1);
    crowded.place(Side::Black, 5, 0);
    boards.push(crowded);

    for board in &boards {
        for piece in board.pieces().copied().collect::<Vec<_>>() {
            assert_eq!(board.full_scan_destinations(&piece), board.legal_destinations(&piece));
        }
    }
}

#[test]
fn test_edge_pieces_do_not_panic() {
    let mut board = Board::empty(4);
    let corner = board.place(Side::White, 3, 0);
    let edge = board.place(Side::Black, 0, 3);

    assert_eq!(board.get_valid_moves(&corner), vec![Pos::new(2, 1)]);
    assert_eq!(board.get_valid_moves(&edge), vec![Pos::new(1, 2)]);
}

#[test]
fn test_has_legal_move() {
    let board = Board::new(8, 3).unwrap();
    assert!(board.has_legal_move(Side::Black));
    assert!(board.has_legal_move(Side::White));

    let mut cornered = Board::empty(4);
    cornered.place(Side::Black, 0, 1);
    cornered.place(Side::White, 1, 0);
    cornered.place(Side::White, 1, 2);
    cornered.place(Side::White, 2, 3);
    assert!(!cornered.has_legal_move(Side::Black));
    assert!(cornered.has_legal_move(Side::White));
}

#[test]
fn test_display() {
    let board = Board::new(4, 1).unwrap();
    let text = board.to_string();
    let expected = "\
| |#| |#|
|#| |#| |
| |#| |#|
|#| |#| |

|_|b|_|b|
|_|_|_|_|
|_|_|_|_|
|w|_|w|_|
";
    assert_eq!(text, expected);
}
