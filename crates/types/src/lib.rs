//! Shared vocabulary for the blockfall workspace.
//!
//! Pure data: piece kinds, rotation states, commands, events and the
//! gameplay constants. No dependencies, usable from the core, the
//! terminal front end and the tests alike.
//!
//! # Board
//!
//! The well is 10 columns by 20 rows. Row 0 is the top row, `+x` grows
//! to the right and `+y` grows DOWNWARD. Pieces may extend above the top
//! of the well (negative `y`) while they spawn or kick.
//!
//! # Timing
//!
//! All times are in milliseconds. Gravity speed comes from
//! [`DROP_INTERVALS_MS`], indexed by level; levels past the table use
//! [`DROP_INTERVAL_FLOOR_MS`]. A grounded piece locks after
//! [`LOCK_DELAY_MS`] of rest, extendable up to [`LOCK_RESET_LIMIT`]
//! times per grounding.

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Rest time before a grounded piece locks (500ms)
pub const LOCK_DELAY_MS: u32 = 500;

/// Maximum lock timer resets per grounding episode (15)
pub const LOCK_RESET_LIMIT: u8 = 15;

/// Cleared lines needed to advance one level (10)
pub const LINES_PER_LEVEL: u32 = 10;

/// Gravity intervals by level, milliseconds per row.
///
/// Index 0 = level 1 through index 19 = level 20. Levels above 20 fall
/// at [`DROP_INTERVAL_FLOOR_MS`].
pub const DROP_INTERVALS_MS: [u32; 20] = [
    1000, 900, 800, 720, 650, 580, 520, 460, 410, 360, 320, 280, 240, 200, 160, 130, 100, 80, 60,
    40,
];

/// Gravity floor for levels past the table (20ms per row)
pub const DROP_INTERVAL_FLOOR_MS: u32 = 20;

/// Line clear base points for 0..=4 rows, multiplied by the level.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Points per successful soft-drop step (no level multiplier)
pub const SOFT_DROP_POINTS: u32 = 1;

/// The seven tetromino piece kinds
///
/// Each kind owns a stable color id (1..=7) used in snapshots and saved
/// grids, and a display color:
/// - **I**: cyan, vertical bar at spawn
/// - **J**: blue
/// - **L**: orange
/// - **O**: yellow, 2x2 square
/// - **S**: green
/// - **T**: purple
/// - **Z**: red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

/// All piece kinds in color-id order, for iteration and bag filling.
pub const ALL_KINDS: [PieceKind; 7] = [
    PieceKind::I,
    PieceKind::J,
    PieceKind::L,
    PieceKind::O,
    PieceKind::S,
    PieceKind::T,
    PieceKind::Z,
];

impl PieceKind {
    /// Stable color id, 1..=7. Zero is reserved for empty cells.
    pub fn color_id(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }

    /// Inverse of [`color_id`](Self::color_id); `None` for 0 or out of range.
    pub fn from_color_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::J),
            3 => Some(PieceKind::L),
            4 => Some(PieceKind::O),
            5 => Some(PieceKind::S),
            6 => Some(PieceKind::T),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Display color as (r, g, b).
    pub fn color_rgb(&self) -> (u8, u8, u8) {
        match self {
            PieceKind::I => (0x00, 0xf0, 0xf0),
            PieceKind::J => (0x00, 0x00, 0xf0),
            PieceKind::L => (0xf0, 0xa0, 0x00),
            PieceKind::O => (0xf0, 0xf0, 0x00),
            PieceKind::S => (0x00, 0xf0, 0x00),
            PieceKind::T => (0xa0, 0x00, 0xf0),
            PieceKind::Z => (0xf0, 0x00, 0x00),
        }
    }
}

/// Rotation states following the Super Rotation System (SRS)
///
/// - **North**: spawn orientation
/// - **East**: 90° clockwise
/// - **South**: 180°
/// - **West**: 270° clockwise
///
/// The clockwise cycle is North → East → South → West → North.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Numeric state, 0..=3 in clockwise order from spawn.
    pub fn index(&self) -> u8 {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }
}

/// Commands a host can apply to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Move the active piece one cell left
    MoveLeft,
    /// Move the active piece one cell right
    MoveRight,
    /// Drop the active piece one cell down (scores 1 point)
    SoftDrop,
    /// Drop to the floor and lock immediately
    HardDrop,
    /// Rotate 90° clockwise with wall kicks
    RotateCw,
    /// Stash or swap the active piece (once per spawn)
    Hold,
    /// Pause or resume
    TogglePause,
    /// Start a new game (also restarts after game over)
    Start,
}

/// Events the session emits, drained by the host in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A commanded translation (or hold) succeeded
    Moved,
    /// A rotation succeeded
    Rotated,
    /// A hard drop landed (precedes the lock events)
    HardDropped,
    /// The active piece merged into the stack
    Locked,
    /// `n` full rows were swept (1..=4)
    LinesCleared(u32),
    /// A spawn was blocked; the session is over until restarted
    GameOver,
}

/// A cell on the game board
///
/// - `None`: empty cell
/// - `Some(PieceKind)`: settled cell of that kind
pub type Cell = Option<PieceKind>;
