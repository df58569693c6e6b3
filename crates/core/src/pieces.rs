//! Tetromino shapes and the active piece.
//!
//! A piece carries its shape as a small square boolean matrix that is
//! re-rotated in place (transpose, then reverse rows), rather than a
//! table of precomputed orientations. The matrix, the position of its
//! top-left corner and the rotation state always move together.

use blockfall_types::{PieceKind, Rotation, BOARD_WIDTH};

/// Largest shape side (the I piece uses a 4x4 box).
pub const MAX_SHAPE_SIDE: usize = 4;

/// Square boolean bounding box for one piece orientation.
///
/// Only the top-left `side x side` corner of the backing array is
/// meaningful; `side` is 2 (O), 3 (J, L, S, T, Z) or 4 (I).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeMatrix {
    side: u8,
    cells: [[bool; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
}

impl ShapeMatrix {
    /// Canonical spawn-orientation shape for a piece kind.
    pub fn canonical(kind: PieceKind) -> Self {
        match kind {
            // Vertical bar in column 1 of a 4x4 box.
            PieceKind::I => Self::from_rows(
                4,
                [
                    [false, true, false, false],
                    [false, true, false, false],
                    [false, true, false, false],
                    [false, true, false, false],
                ],
            ),
            PieceKind::J => Self::from_rows(
                3,
                [
                    [true, false, false, false],
                    [true, true, true, false],
                    [false, false, false, false],
                ],
            ),
            PieceKind::L => Self::from_rows(
                3,
                [
                    [false, false, true, false],
                    [true, true, true, false],
                    [false, false, false, false],
                ],
            ),
            PieceKind::O => Self::from_rows(
                2,
                [[true, true, false, false], [true, true, false, false]],
            ),
            PieceKind::S => Self::from_rows(
                3,
                [
                    [false, true, true, false],
                    [true, true, false, false],
                    [false, false, false, false],
                ],
            ),
            PieceKind::T => Self::from_rows(
                3,
                [
                    [false, true, false, false],
                    [true, true, true, false],
                    [false, false, false, false],
                ],
            ),
            PieceKind::Z => Self::from_rows(
                3,
                [
                    [true, true, false, false],
                    [false, true, true, false],
                    [false, false, false, false],
                ],
            ),
        }
    }

    fn from_rows<const N: usize>(side: u8, rows: [[bool; MAX_SHAPE_SIDE]; N]) -> Self {
        let mut cells = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (y, row) in rows.iter().enumerate() {
            cells[y] = *row;
        }
        Self { side, cells }
    }

    /// Side length of the bounding box (2, 3 or 4).
    pub fn side(&self) -> u8 {
        self.side
    }

    /// Whether the cell at local (x, y) is solid. Out-of-box coordinates
    /// read as empty.
    pub fn filled(&self, x: u8, y: u8) -> bool {
        if x >= self.side || y >= self.side {
            return false;
        }
        self.cells[y as usize][x as usize]
    }

    /// Clockwise quarter turn: transpose, then reverse each row.
    /// `out[y][x] = in[side-1-x][y]`.
    pub fn rotated_cw(&self) -> Self {
        let n = self.side as usize;
        let mut out = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (y, row) in out.iter_mut().enumerate().take(n) {
            for (x, cell) in row.iter_mut().enumerate().take(n) {
                *cell = self.cells[n - 1 - x][y];
            }
        }
        Self {
            side: self.side,
            cells: out,
        }
    }
}

/// The falling piece: kind, current shape matrix, position of the
/// matrix's top-left corner on the grid (may be negative while the
/// shape pokes over an edge), and rotation state.
///
/// Invariant: `matrix` equals the canonical matrix rotated
/// `rotation.index()` quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub matrix: ShapeMatrix,
    pub x: i8,
    pub y: i8,
    pub rotation: Rotation,
}

impl Piece {
    /// New piece at the spawn position: horizontally centered
    /// (rounded left), top edge on row 0, spawn orientation.
    pub fn spawn(kind: PieceKind) -> Self {
        let matrix = ShapeMatrix::canonical(kind);
        let x = (BOARD_WIDTH as i8 - matrix.side() as i8) / 2;
        Self {
            kind,
            matrix,
            x,
            y: 0,
            rotation: Rotation::North,
        }
    }

    /// Copy of this piece shifted by (dx, dy) grid cells.
    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}
