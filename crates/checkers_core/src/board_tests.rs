use super::*;

#[test]
fn test_initial_board_counts() {
    let b = Board::initial();
    assert_eq!(b.piece_count(Side::White), 12);
    assert_eq!(b.piece_count(Side::Black), 12);

    // Rows 3 and 4 start empty
    for col in 0..8 {
        assert!(b.get(Square::new(3, col)).is_none());
        assert!(b.get(Square::new(4, col)).is_none());
    }
}

#[test]
fn test_initial_board_only_playable_squares() {
    let b = Board::initial();
    for side in [Side::White, Side::Black] {
        for sq in b.squares_of(side) {
            assert!(sq.is_playable(), "piece on light square {sq}");
        }
    }
    assert_eq!(b.get(Square::new(0, 1)), Some(Piece::man(Side::Black)));
    assert_eq!(b.get(Square::new(5, 0)), Some(Piece::man(Side::White)));
    assert_eq!(b.get(Square::new(7, 6)), Some(Piece::man(Side::White)));
}

#[test]
fn test_copy_is_independent() {
    let a = Board::initial();
    let mut b = a;
    b.clear(Square::new(5, 0));
    assert!(a.get(Square::new(5, 0)).is_some());
    assert!(b.get(Square::new(5, 0)).is_none());
}

#[test]
fn test_off_board_access() {
    let mut b = Board::initial();
    let off = Square::new(-1, 3);
    assert_eq!(b.get(off), None);
    assert!(!b.is_empty(off));
    b.set(off, Some(Piece::king(Side::White)));
    assert_eq!(b, Board::initial());
}

#[test]
fn test_diagram_matches_initial() {
    let b = Board::from_diagram(
        "
        .b.b.b.b
        b.b.b.b.
        .b.b.b.b
        ........
        ........
        w.w.w.w.
        .w.w.w.w
        w.w.w.w.
        ",
    )
    .unwrap();
    assert_eq!(b, Board::initial());
}

#[test]
fn test_display_round_trip() {
    let text = "\
.B......
........
...w....
....b...
........
.....W..
........
........
";
    let b = Board::from_diagram(text).unwrap();
    assert_eq!(b.to_string(), text);
    assert!(is_king(b.get(Square::new(0, 1))));
    assert_eq!(sign(b.get(Square::new(0, 1))), -1);
    assert_eq!(sign(b.get(Square::new(5, 5))), 1);
    assert_eq!(sign(b.get(Square::new(4, 4))), 0);
}

#[test]
fn test_diagram_errors() {
    assert_eq!(
        Board::from_diagram("........\n........"),
        Err(ParseBoardError::RowCount(2))
    );

    let short_row = "........\n.......\n........\n........\n........\n........\n........\n........";
    assert_eq!(
        Board::from_diagram(short_row),
        Err(ParseBoardError::RowLength { row: 1, len: 7 })
    );

    let bad_symbol = "........\n........\n...x....\n........\n........\n........\n........\n........";
    assert_eq!(
        Board::from_diagram(bad_symbol),
        Err(ParseBoardError::UnknownSymbol {
            row: 2,
            col: 3,
            symbol: 'x'
        })
    );
}

#[test]
fn test_integer_codes() {
    let codes = Board::initial().to_codes();
    assert_eq!(codes[0][1], -1);
    assert_eq!(codes[0][0], 0);
    assert_eq!(codes[7][0], 1);

    let mut grid = [[0i8; 8]; 8];
    grid[3][4] = 2;
    grid[2][3] = -2;
    let b = Board::try_from(grid).unwrap();
    assert_eq!(b.get(Square::new(3, 4)), Some(Piece::king(Side::White)));
    assert_eq!(b.get(Square::new(2, 3)), Some(Piece::king(Side::Black)));

    grid[0][0] = 3;
    assert_eq!(
        Board::try_from(grid),
        Err(ParseBoardError::UnknownCode {
            row: 0,
            col: 0,
            code: 3
        })
    );
}
