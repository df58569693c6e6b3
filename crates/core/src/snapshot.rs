use blockfall_types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

use crate::pieces::{Piece, ShapeMatrix};

/// The falling piece as a renderer needs it: kind for color, matrix
/// for the footprint, position and orientation for placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub matrix: ShapeMatrix,
    pub x: i8,
    pub y: i8,
    pub rotation: Rotation,
}

impl From<Piece> for ActivePiece {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            matrix: value.matrix,
            x: value.x,
            y: value.y,
            rotation: value.rotation,
        }
    }
}

/// Flat copy of everything one frame needs, decoupled from the live
/// session. The board holds color ids (0 = empty). Buffers are meant
/// to be reused across frames via `GameSession::snapshot_into`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActivePiece>,
    pub ghost_y: Option<i8>,
    pub hold: Option<PieceKind>,
    pub next: Option<PieceKind>,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub high_score: u32,
    pub can_hold: bool,
    pub started: bool,
    pub paused: bool,
    pub game_over: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost_y: None,
            hold: None,
            next: None,
            score: 0,
            lines: 0,
            level: 1,
            high_score: 0,
            can_hold: true,
            started: false,
            paused: false,
            game_over: false,
        }
    }
}
