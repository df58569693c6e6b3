//! Pieces tests - TDD for shapes and SRS rotation

use blockfall::core::{kick_candidates, try_rotate_cw, Board, Piece, ShapeMatrix};
use blockfall::types::{PieceKind, Rotation, ALL_KINDS};

fn solid_cells(matrix: &ShapeMatrix) -> Vec<(u8, u8)> {
    let mut cells = Vec::new();
    for y in 0..matrix.side() {
        for x in 0..matrix.side() {
            if matrix.filled(x, y) {
                cells.push((x, y));
            }
        }
    }
    cells
}

// ============== Shape Tests ==============

#[test]
fn test_every_shape_has_four_cells() {
    for kind in ALL_KINDS {
        let matrix = ShapeMatrix::canonical(kind);
        assert_eq!(solid_cells(&matrix).len(), 4, "{:?}", kind);
    }
}

#[test]
fn test_i_spawns_as_a_vertical_bar() {
    let matrix = ShapeMatrix::canonical(PieceKind::I);
    assert_eq!(matrix.side(), 4);
    assert_eq!(solid_cells(&matrix), [(1, 0), (1, 1), (1, 2), (1, 3)]);
}

#[test]
fn test_o_shape_is_a_two_by_two_square() {
    let matrix = ShapeMatrix::canonical(PieceKind::O);
    assert_eq!(matrix.side(), 2);
    assert_eq!(solid_cells(&matrix), [(0, 0), (1, 0), (0, 1), (1, 1)]);
}

#[test]
fn test_t_rotation_follows_the_clockwise_formula() {
    // .X.        .X.
    // XXX   =>   .XX
    // ...        .X.
    let matrix = ShapeMatrix::canonical(PieceKind::T).rotated_cw();
    assert_eq!(solid_cells(&matrix), [(1, 0), (1, 1), (2, 1), (1, 2)]);
}

#[test]
fn test_four_quarter_turns_are_the_identity() {
    for kind in ALL_KINDS {
        let canonical = ShapeMatrix::canonical(kind);
        let mut matrix = canonical;
        for _ in 0..4 {
            matrix = matrix.rotated_cw();
        }
        assert_eq!(matrix, canonical, "{:?}", kind);
    }
}

#[test]
fn test_spawn_centers_every_kind_on_row_zero() {
    assert_eq!(Piece::spawn(PieceKind::I).x, 3);
    assert_eq!(Piece::spawn(PieceKind::O).x, 4);
    assert_eq!(Piece::spawn(PieceKind::T).x, 3);
    for kind in ALL_KINDS {
        let piece = Piece::spawn(kind);
        assert_eq!(piece.y, 0);
        assert_eq!(piece.rotation, Rotation::North);
    }
}

// ============== SRS Rotation Tests ==============

#[test]
fn test_kick_tables_by_kind() {
    // O never kicks.
    let o_kicks = kick_candidates(PieceKind::O, Rotation::North, Rotation::East);
    assert_eq!(o_kicks, &[(0, 0)]);

    // J, L, S, T and Z share one table; I has its own.
    let jlstz = kick_candidates(PieceKind::J, Rotation::North, Rotation::East);
    for kind in [PieceKind::L, PieceKind::S, PieceKind::T, PieceKind::Z] {
        assert_eq!(kick_candidates(kind, Rotation::North, Rotation::East), jlstz);
    }
    let i_kicks = kick_candidates(PieceKind::I, Rotation::North, Rotation::East);
    assert_ne!(i_kicks, jlstz);
}

#[test]
fn test_free_rotation_keeps_the_position() {
    let board = Board::new();
    let piece = Piece::spawn(PieceKind::T);
    let rotated = try_rotate_cw(&piece, |p| board.collides(p)).unwrap();
    assert_eq!((rotated.x, rotated.y), (piece.x, piece.y));
    assert_eq!(rotated.rotation, Rotation::East);
    assert_eq!(rotated.matrix, piece.matrix.rotated_cw());
}

#[test]
fn test_wall_kick_pulls_an_i_off_the_right_wall() {
    // The vertical bar hugs the right wall; turning it flat would poke
    // through, so the second candidate shifts it two columns left.
    let board = Board::new();
    let mut piece = Piece::spawn(PieceKind::I);
    piece.x = 7;
    piece.y = 5;
    let rotated = try_rotate_cw(&piece, |p| board.collides(p)).unwrap();
    assert_eq!((rotated.x, rotated.y), (5, 5));
    assert_eq!(rotated.rotation, Rotation::East);
}

#[test]
fn test_floor_kick_lifts_an_i_over_the_stack() {
    // East to South with a settled row right below: the first free
    // candidate is up two rows in grid terms.
    let mut board = Board::new();
    for x in 0..10 {
        board.set(x, 18, Some(PieceKind::J));
    }
    let east = Piece {
        matrix: ShapeMatrix::canonical(PieceKind::I).rotated_cw(),
        rotation: Rotation::East,
        x: 3,
        y: 15,
        kind: PieceKind::I,
    };
    let rotated = try_rotate_cw(&east, |p| board.collides(p)).unwrap();
    assert_eq!((rotated.x, rotated.y), (2, 13));
    assert_eq!(rotated.rotation, Rotation::South);
}

#[test]
fn test_boxed_in_rotation_fails_cleanly() {
    let mut board = Board::new();
    for y in 0..20 {
        for x in 0..10 {
            board.set(x, y, Some(PieceKind::S));
        }
    }
    let mut piece = Piece::spawn(PieceKind::T);
    piece.x = 4;
    piece.y = 5;
    assert!(try_rotate_cw(&piece, |p| board.collides(p)).is_none());
}
