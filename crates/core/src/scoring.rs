//! Score, level and gravity progression.
//!
//! Pure lookups, no state. Line clears pay a fixed base per sweep size
//! multiplied by the level at the time of the clear; levels advance
//! every ten cumulative lines; gravity follows a fixed per-level table
//! down to a hard floor.

use blockfall_types::{
    DROP_INTERVALS_MS, DROP_INTERVAL_FLOOR_MS, LINES_PER_LEVEL, LINE_SCORES,
};

/// Points for clearing `rows` rows in one sweep at `level`.
///
/// 1 -> 100, 2 -> 300, 3 -> 500, 4 -> 800, each times the level.
/// Zero rows (or an impossible count) pays nothing.
pub fn line_clear_points(rows: u32, level: u32) -> u32 {
    match LINE_SCORES.get(rows as usize) {
        Some(base) => base * level,
        None => 0,
    }
}

/// Level for a cumulative line count: every ten lines, starting at 1.
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL + 1
}

/// Gravity interval in milliseconds for a level (1-based).
///
/// Levels 1..=20 read the table; everything above falls at the floor.
pub fn drop_interval_ms(level: u32) -> u32 {
    let idx = level.saturating_sub(1) as usize;
    match DROP_INTERVALS_MS.get(idx) {
        Some(ms) => *ms,
        None => DROP_INTERVAL_FLOOR_MS,
    }
}
