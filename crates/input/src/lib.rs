//! Terminal input module.
//!
//! Intentionally independent of any UI framework: it maps `crossterm`
//! key events into [`crate::types::GameCommand`] and nothing more. Key
//! repeat comes from the terminal itself, so there is no repeat state
//! to keep here.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
