//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management and timing
//! logic. It has **zero dependencies** on UI, persistence, or I/O,
//! making it:
//!
//! - **Deterministic**: Same seed and command stream produce identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation hot paths for game tick processing
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 well with collision detection and row sweeping
//! - [`pieces`]: shape matrices, canonical orientations and spawn placement
//! - [`srs`]: clockwise rotation with SRS wall kicks
//! - [`lock_delay`]: grounded-rest timer with a capped reset budget
//! - [`rng`]: 7-bag piece generation over a seeded LCG
//! - [`scoring`]: line-clear points, level progression and gravity speed
//! - [`session`]: the complete state machine driven by commands and ticks
//! - [`snapshot`]: render-ready copies of session state
//!
//! # Game Rules
//!
//! - **7-Bag Randomizer**: every kind appears exactly once per seven draws
//! - **SRS Rotation**: published kick tables for I and J/L/S/T/Z; O never kicks
//! - **Lock Delay**: 500ms of grounded rest, with a 15-reset budget per landing
//! - **Ghost Piece**: shows where the active piece would come to rest
//! - **Hold**: stash one piece, once per spawned piece
//! - **Scoring**: 100/300/500/800 base points times the current level;
//!   soft drops pay one point per row, level is `lines / 10 + 1`
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameSession;
//! use blockfall_core::types::GameCommand;
//!
//! // Create and start a game
//! let mut game = GameSession::new(12345);
//! game.apply(GameCommand::Start);
//!
//! // Apply player commands
//! game.apply(GameCommand::MoveLeft);
//! game.apply(GameCommand::SoftDrop);
//!
//! // Soft drops pay a point per row
//! assert_eq!(game.score(), 1);
//! ```
//!
//! # Timing
//!
//! The session is real-time-free: the host charges elapsed milliseconds
//! with [`GameSession::tick`] and the session handles gravity and
//! locking from there. Gravity starts at 1000ms per row on level 1 and
//! speeds up per level down to a 20ms floor.

pub mod board;
pub mod lock_delay;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod srs;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use lock_delay::LockDelay;
pub use pieces::{Piece, ShapeMatrix};
pub use rng::{SevenBag, SimpleRng};
pub use scoring::{drop_interval_ms, level_for_lines, line_clear_points};
pub use session::GameSession;
pub use snapshot::{ActivePiece, GameSnapshot};
pub use srs::{kick_candidates, try_rotate_cw};
