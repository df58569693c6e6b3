//! Board tests - TDD for Board module

use blockfall::core::{Board, Piece};
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn piece_at(kind: PieceKind, x: i8, y: i8) -> Piece {
    let mut piece = Piece::spawn(kind);
    piece.x = x;
    piece.y = y;
    piece
}

fn occupied(board: &Board) -> usize {
    let mut count = 0;
    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            if board.is_occupied(x, y) {
                count += 1;
            }
        }
    }
    count
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert_eq!(occupied(&board), 0);
    assert_eq!(board.get(0, 0), Some(None));
    assert_eq!(board.get(9, 19), Some(None));
    assert_eq!(board.get(10, 0), None);
    assert_eq!(board.get(0, 20), None);
}

#[test]
fn test_set_and_get_cells() {
    let mut board = Board::new();
    assert!(board.set(3, 7, Some(PieceKind::T)));
    assert_eq!(board.get(3, 7), Some(Some(PieceKind::T)));
    assert!(board.set(3, 7, None));
    assert_eq!(board.get(3, 7), Some(None));
    // Out of bounds writes are refused, not clamped.
    assert!(!board.set(-1, 0, Some(PieceKind::I)));
    assert!(!board.set(0, 20, Some(PieceKind::I)));
}

#[test]
fn test_collision_with_walls_and_floor() {
    let board = Board::new();
    // O fills the top-left 2x2 of its box.
    assert!(board.collides(&piece_at(PieceKind::O, -1, 0)));
    assert!(!board.collides(&piece_at(PieceKind::O, 8, 0)));
    assert!(board.collides(&piece_at(PieceKind::O, 9, 0)));
    assert!(!board.collides(&piece_at(PieceKind::O, 4, 18)));
    assert!(board.collides(&piece_at(PieceKind::O, 4, 19)));
}

#[test]
fn test_collision_with_settled_cells() {
    let mut board = Board::new();
    board.set(4, 10, Some(PieceKind::Z));
    assert!(board.collides(&piece_at(PieceKind::O, 3, 9)));
    assert!(!board.collides(&piece_at(PieceKind::O, 5, 9)));
}

#[test]
fn test_rows_above_the_top_are_free_air() {
    let board = Board::new();
    assert!(!board.collides(&piece_at(PieceKind::O, 4, -1)));
    assert!(!board.collides(&piece_at(PieceKind::O, 4, -2)));
    // The walls still bind up there.
    assert!(board.collides(&piece_at(PieceKind::O, -1, -2)));
}

#[test]
fn test_merge_discards_cells_above_the_top() {
    let mut board = Board::new();
    board.merge(&piece_at(PieceKind::O, 4, -1));
    // The upper half of the square was above row 0.
    assert_eq!(occupied(&board), 2);
    assert_eq!(board.get(4, 0), Some(Some(PieceKind::O)));
    assert_eq!(board.get(5, 0), Some(Some(PieceKind::O)));
}

#[test]
fn test_merged_pieces_complete_and_sweep_a_row() {
    let mut board = Board::new();
    // Three J pieces pave the bottom row except its right column.
    for x in [0, 3, 6] {
        let piece = piece_at(PieceKind::J, x, 18);
        assert!(!board.collides(&piece));
        board.merge(&piece);
    }
    assert!(!board.is_row_full(19));

    // A vertical I fills column 9 and completes the row.
    let bar = piece_at(PieceKind::I, 8, 16);
    assert!(!board.collides(&bar));
    board.merge(&bar);
    assert!(board.is_row_full(19));

    assert_eq!(board.sweep(), 1);
    // Survivors fall one row: the J studs land on the floor and the
    // rest of the bar follows them down.
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::J)));
    assert_eq!(board.get(3, 19), Some(Some(PieceKind::J)));
    assert_eq!(board.get(6, 19), Some(Some(PieceKind::J)));
    assert_eq!(board.get(9, 19), Some(Some(PieceKind::I)));
    assert_eq!(board.get(9, 17), Some(Some(PieceKind::I)));
    assert!(!board.is_occupied(9, 16));
    assert_eq!(occupied(&board), 6);
}

#[test]
fn test_sweep_drops_rows_between_cleared_ones() {
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, 17, Some(PieceKind::S));
        board.set(x, 19, Some(PieceKind::S));
    }
    board.set(2, 16, Some(PieceKind::L));
    board.set(7, 18, Some(PieceKind::J));

    assert_eq!(board.sweep(), 2);
    assert_eq!(board.get(2, 18), Some(Some(PieceKind::L)));
    assert_eq!(board.get(7, 19), Some(Some(PieceKind::J)));
    assert_eq!(occupied(&board), 2);
}

#[test]
fn test_sweep_clears_a_stack_of_four() {
    let mut board = Board::new();
    for y in 16..20 {
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, y, Some(PieceKind::I));
        }
    }
    assert_eq!(board.sweep(), 4);
    assert_eq!(occupied(&board), 0);
}

#[test]
fn test_reset_restores_the_empty_grid() {
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, 19, Some(PieceKind::T));
    }
    board.set(4, 3, Some(PieceKind::I));
    board.reset();
    assert_eq!(occupied(&board), 0);
}

#[test]
fn test_color_grid_exports_stable_ids() {
    let mut board = Board::new();
    board.set(0, 0, Some(PieceKind::I));
    board.set(9, 19, Some(PieceKind::Z));
    let mut grid = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
    board.color_grid_into(&mut grid);
    assert_eq!(grid[0][0], PieceKind::I.color_id());
    assert_eq!(grid[19][9], PieceKind::Z.color_id());
    assert_eq!(grid[5][5], 0);
}
