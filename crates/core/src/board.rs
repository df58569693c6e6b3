//! The game grid.
//!
//! A 10x20 well stored as a flat array for cache locality and
//! zero-allocation sweeps. Coordinates: x 0..9 left to right,
//! y 0..19 top to bottom. Rows above the top (negative y) are valid
//! empty air: pieces may spawn or kick through them, and any shape
//! cell still above the top when a piece locks is discarded.

use blockfall_types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

use crate::pieces::Piece;

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// The game board, 10 columns x 20 rows in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Flat index for (x, y); `None` when out of bounds.
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Cell at (x, y); `None` if out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether (x, y) is inside the well and holds a settled cell.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Collision test for a piece at its current position.
    ///
    /// A solid shape cell collides when it leaves the well horizontally,
    /// passes the bottom, or overlaps a settled cell. Cells above the
    /// top (y < 0) never collide on their own.
    pub fn collides(&self, piece: &Piece) -> bool {
        let side = piece.matrix.side();
        for row in 0..side {
            for col in 0..side {
                if !piece.matrix.filled(col, row) {
                    continue;
                }
                let x = piece.x + col as i8;
                let y = piece.y + row as i8;
                if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
                    return true;
                }
                if y >= 0 && self.is_occupied(x, y) {
                    return true;
                }
            }
        }
        false
    }

    /// Settle a piece into the grid. Caller guarantees the position is
    /// collision-free; cells still above the top are dropped silently.
    pub fn merge(&mut self, piece: &Piece) {
        let side = piece.matrix.side();
        for row in 0..side {
            for col in 0..side {
                if piece.matrix.filled(col, row) {
                    self.set(piece.x + col as i8, piece.y + row as i8, Some(piece.kind));
                }
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove every full row, shift the rows above down and refill the
    /// top with empty rows. Returns the number of rows removed (0..=4).
    ///
    /// Two-pointer compaction over the flat array: surviving rows keep
    /// their relative order, nothing allocates.
    pub fn sweep(&mut self) -> u32 {
        let width = BOARD_WIDTH as usize;
        let mut cleared = 0u32;
        let mut write_y = BOARD_HEIGHT as usize;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * width;
                    self.cells.copy_within(src..src + width, write_y * width);
                }
            }
        }

        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared
    }

    /// Clear every cell.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Write the grid as color ids (0 = empty) into a reusable buffer.
    pub fn color_grid_into(
        &self,
        grid: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    ) {
        for (y, row) in grid.iter_mut().enumerate() {
            for (x, out) in row.iter_mut().enumerate() {
                *out = match self.cells[y * BOARD_WIDTH as usize + x] {
                    Some(kind) => kind.color_id(),
                    None => 0,
                };
            }
        }
    }

    /// Fill an entire row with one kind (test setup helper).
    #[cfg(test)]
    pub fn fill_row(&mut self, y: i8, kind: PieceKind) {
        for x in 0..BOARD_WIDTH as i8 {
            self.set(x, y, Some(kind));
        }
    }

    /// Count of settled cells (test helper).
    #[cfg(test)]
    pub fn occupied_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall_types::Rotation;

    use crate::pieces::ShapeMatrix;

    fn piece_at(kind: PieceKind, x: i8, y: i8) -> Piece {
        Piece {
            kind,
            matrix: ShapeMatrix::canonical(kind),
            x,
            y,
            rotation: Rotation::North,
        }
    }

    #[test]
    fn index_maps_row_major() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn get_set_roundtrip() {
        let mut board = Board::new();
        assert!(board.set(0, 0, Some(PieceKind::I)));
        assert!(board.set(5, 10, Some(PieceKind::T)));
        assert_eq!(board.get(0, 0), Some(Some(PieceKind::I)));
        assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
        assert_eq!(board.get(1, 0), Some(None));
        assert!(!board.set(10, 0, Some(PieceKind::O)));
    }

    #[test]
    fn collides_with_walls_and_floor() {
        let board = Board::new();
        // O occupies local (0..2, 0..2); x=-1 pokes the left wall.
        assert!(board.collides(&piece_at(PieceKind::O, -1, 0)));
        assert!(board.collides(&piece_at(PieceKind::O, 9, 0)));
        assert!(!board.collides(&piece_at(PieceKind::O, 8, 0)));
        // Bottom: O at y=18 sits on the floor, y=19 passes it.
        assert!(!board.collides(&piece_at(PieceKind::O, 4, 18)));
        assert!(board.collides(&piece_at(PieceKind::O, 4, 19)));
    }

    #[test]
    fn collides_with_settled_cells() {
        let mut board = Board::new();
        board.set(4, 10, Some(PieceKind::Z));
        assert!(board.collides(&piece_at(PieceKind::O, 4, 9)));
        assert!(board.collides(&piece_at(PieceKind::O, 3, 10)));
        assert!(!board.collides(&piece_at(PieceKind::O, 6, 10)));
    }

    #[test]
    fn negative_rows_are_free_air() {
        let board = Board::new();
        // O half above the skyline: local rows land at y=-1 and y=0.
        assert!(!board.collides(&piece_at(PieceKind::O, 4, -1)));
        // Entirely above.
        assert!(!board.collides(&piece_at(PieceKind::O, 4, -2)));
        // Walls still apply above the skyline.
        assert!(board.collides(&piece_at(PieceKind::O, -1, -2)));
    }

    #[test]
    fn empty_shape_columns_do_not_collide() {
        let board = Board::new();
        // Canonical I is a bar in local column 1; local column 0 is
        // hollow, so x=-1 keeps every solid cell in bounds.
        assert!(!board.collides(&piece_at(PieceKind::I, -1, 0)));
        assert!(board.collides(&piece_at(PieceKind::I, -2, 0)));
    }

    #[test]
    fn merge_writes_kind_and_skips_skyline() {
        let mut board = Board::new();
        board.merge(&piece_at(PieceKind::O, 4, -1));
        // Row -1 discarded, row 0 kept.
        assert_eq!(board.occupied_cells(), 2);
        assert_eq!(board.get(4, 0), Some(Some(PieceKind::O)));
        assert_eq!(board.get(5, 0), Some(Some(PieceKind::O)));
    }

    #[test]
    fn sweep_returns_zero_on_untouched_board() {
        let mut board = Board::new();
        let before = board.clone();
        assert_eq!(board.sweep(), 0);
        assert_eq!(board, before);
    }

    #[test]
    fn sweep_clears_single_full_row() {
        let mut board = Board::new();
        board.fill_row(19, PieceKind::J);
        board.set(0, 18, Some(PieceKind::L));
        assert_eq!(board.sweep(), 1);
        // The partial row dropped onto the floor.
        assert_eq!(board.get(0, 19), Some(Some(PieceKind::L)));
        assert_eq!(board.occupied_cells(), 1);
    }

    #[test]
    fn sweep_preserves_surviving_row_order() {
        let mut board = Board::new();
        board.set(0, 16, Some(PieceKind::S));
        board.fill_row(17, PieceKind::I);
        board.set(1, 18, Some(PieceKind::T));
        board.fill_row(19, PieceKind::I);
        assert_eq!(board.sweep(), 2);
        // S stays above T after both full rows vanish.
        assert_eq!(board.get(0, 18), Some(Some(PieceKind::S)));
        assert_eq!(board.get(1, 19), Some(Some(PieceKind::T)));
        assert_eq!(board.occupied_cells(), 2);
    }

    #[test]
    fn sweep_clears_four_stacked_rows() {
        let mut board = Board::new();
        for y in 16..20 {
            board.fill_row(y, PieceKind::I);
        }
        assert_eq!(board.sweep(), 4);
        assert_eq!(board.occupied_cells(), 0);
    }

    #[test]
    fn sweep_handles_non_adjacent_full_rows() {
        let mut board = Board::new();
        board.fill_row(15, PieceKind::Z);
        board.set(3, 16, Some(PieceKind::J));
        board.fill_row(17, PieceKind::Z);
        board.set(5, 18, Some(PieceKind::L));
        board.fill_row(19, PieceKind::Z);
        assert_eq!(board.sweep(), 3);
        assert_eq!(board.get(3, 18), Some(Some(PieceKind::J)));
        assert_eq!(board.get(5, 19), Some(Some(PieceKind::L)));
        assert_eq!(board.occupied_cells(), 2);
    }

    #[test]
    fn reset_empties_everything() {
        let mut board = Board::new();
        board.fill_row(19, PieceKind::T);
        board.set(4, 3, Some(PieceKind::I));
        board.reset();
        assert_eq!(board.occupied_cells(), 0);
    }

    #[test]
    fn color_grid_reports_ids() {
        let mut board = Board::new();
        board.set(0, 0, Some(PieceKind::I));
        board.set(9, 19, Some(PieceKind::Z));
        let mut grid = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        board.color_grid_into(&mut grid);
        assert_eq!(grid[0][0], 1);
        assert_eq!(grid[19][9], 7);
        assert_eq!(grid[10][5], 0);
    }
}
