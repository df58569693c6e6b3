//! Super Rotation System wall kicks.
//!
//! Kick tables hold the published SRS data, which expresses offsets
//! with positive Y pointing UP. The grid's positive Y points DOWN, so
//! every offset passes through [`to_grid_offset`] exactly once before
//! it touches a piece position. Keep the tables verbatim and the sign
//! flip in that one place.
//!
//! Reference: https://tetris.wiki/Super_Rotation_System

use blockfall_types::{PieceKind, Rotation};

use crate::pieces::Piece;

/// A kick candidate in table space: (dx, dy) with +y meaning up.
pub type KickOffset = (i8, i8);

/// Single no-kick candidate for O pieces and unlisted transitions.
const NO_KICK: [KickOffset; 1] = [(0, 0)];

/// Kick table shared by J, L, S, T and Z.
const JLSTZ_KICKS: [[KickOffset; 5]; 8] = [
    // 0->1 (N->E)
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // 1->0 (E->N)
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // 1->2 (E->S)
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // 2->1 (S->E)
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // 2->3 (S->W)
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // 3->2 (W->S)
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // 3->0 (W->N)
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // 0->3 (N->W)
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
];

/// Kick table for the I piece.
const I_KICKS: [[KickOffset; 5]; 8] = [
    // 0->1 (N->E)
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    // 1->0 (E->N)
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    // 1->2 (E->S)
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    // 2->1 (S->E)
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    // 2->3 (S->W)
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    // 3->2 (W->S)
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    // 3->0 (W->N)
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    // 0->3 (N->W)
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
];

/// Row index for an adjacent rotation transition; `None` for identity
/// or 180° jumps, which the tables do not list.
fn transition_index(from: Rotation, to: Rotation) -> Option<usize> {
    use Rotation::{East, North, South, West};
    match (from, to) {
        (North, East) => Some(0),
        (East, North) => Some(1),
        (East, South) => Some(2),
        (South, East) => Some(3),
        (South, West) => Some(4),
        (West, South) => Some(5),
        (West, North) => Some(6),
        (North, West) => Some(7),
        _ => None,
    }
}

/// Ordered kick candidates for a rotation, in table space.
///
/// O pieces never kick, and any transition the tables do not list falls
/// back to the single zero offset.
pub fn kick_candidates(kind: PieceKind, from: Rotation, to: Rotation) -> &'static [KickOffset] {
    if kind == PieceKind::O {
        return &NO_KICK;
    }
    let Some(idx) = transition_index(from, to) else {
        return &NO_KICK;
    };
    match kind {
        PieceKind::I => &I_KICKS[idx],
        _ => &JLSTZ_KICKS[idx],
    }
}

/// Convert a table-space kick into a grid-space delta.
///
/// This is the one place where the axis conventions meet: the table's
/// +y points up, the grid's +y points down, so the y component flips.
#[inline]
pub fn to_grid_offset(kick: KickOffset) -> (i8, i8) {
    (kick.0, -kick.1)
}

/// Attempt a clockwise rotation with wall kicks.
///
/// Tries each candidate in table order against `collides`; the first
/// free position yields the fully updated piece (matrix, position and
/// rotation state together). `None` means every candidate collided and
/// the caller's piece must stay exactly as it was.
pub fn try_rotate_cw(piece: &Piece, collides: impl Fn(&Piece) -> bool) -> Option<Piece> {
    let to = piece.rotation.rotate_cw();
    let matrix = piece.matrix.rotated_cw();
    for &kick in kick_candidates(piece.kind, piece.rotation, to) {
        let (dx, dy) = to_grid_offset(kick);
        let candidate = Piece {
            kind: piece.kind,
            matrix,
            x: piece.x + dx,
            y: piece.y + dy,
            rotation: to,
        };
        if !collides(&candidate) {
            return Some(candidate);
        }
    }
    None
}
