use super::*;

#[test]
fn test_cell_opponent() {
    assert_eq!(Cell::X.opponent(), Cell::O);
    assert_eq!(Cell::O.opponent(), Cell::X);
    assert_eq!(Cell::Empty.opponent(), Cell::Empty);
}

#[test]
fn test_cell_values() {
    assert_eq!(Cell::X.value(), 1);
    assert_eq!(Cell::O.value(), -1);
    assert_eq!(Cell::Empty.value(), 0);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(1, 1); // Center
    assert_eq!(pos.to_index(), 4);
    assert_eq!(Pos::from_index(4), Pos::CENTER);
    assert_eq!(Pos::from_index(7), Pos::new(2, 1));
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(2, 2));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(3, 0));
    assert!(!Pos::is_valid(0, 3));

    assert_eq!(Pos::try_new(2, 0), Some(Pos::new(2, 0)));
    assert_eq!(Pos::try_new(0, 3), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 3);
    assert_eq!(TOTAL_CELLS, 9);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_empty_cells_row_major() {
    let board = Board::new();
    let cells = board.empty_cells();
    assert_eq!(cells.len(), TOTAL_CELLS);
    for (i, pos) in cells.iter().enumerate() {
        assert_eq!(pos.to_index(), i);
    }
}

#[test]
fn test_place_and_remove() {
    let mut board = Board::new();
    board.place(Pos::new(0, 2), Cell::X);
    board.place(Pos::new(2, 0), Cell::O);

    assert_eq!(board.get(Pos::new(0, 2)), Cell::X);
    assert_eq!(board.get(Pos::new(2, 0)), Cell::O);
    assert_eq!(board.mark_count(), 2);
    assert_eq!(board.empty_count(), 7);
    assert!(!board.empty_cells().contains(&Pos::new(0, 2)));

    board.remove(Pos::new(0, 2));
    assert!(board.is_empty(Pos::new(0, 2)));
    assert_eq!(board.empty_count(), 8);
}

#[test]
fn test_full_board() {
    use Cell::{O, X};
    let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
    assert!(board.is_full());
    assert!(board.empty_cells().is_empty());
    assert!(!board.is_board_empty());
}

#[test]
fn test_board_display() {
    use Cell::{Empty as E, O, X};
    let board = Board::from_rows([[X, O, E], [E, X, E], [E, E, O]]);
    assert_eq!(board.to_string(), "XO.\n.X.\n..O");
}

#[test]
fn test_rows_match_from_rows() {
    use Cell::{Empty as E, O, X};
    let rows = [[X, E, E], [E, O, E], [E, E, X]];
    let board = Board::from_rows(rows);
    assert_eq!(board.rows(), &rows);
    assert_eq!(board.rows()[1][1], board.get(Pos::CENTER));
}
