//! Audio cues over the terminal bell.
//!
//! The only sound a plain terminal can make is BEL, so the chime rings
//! it for the events worth hearing and stays quiet for routine moves.
//! Output is best-effort: a failed write never disturbs the game.

use std::io::{self, Write};

use crate::types::GameEvent;

pub struct EventChime {
    enabled: bool,
}

impl EventChime {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Ring for line clears and game over; ignore everything else.
    pub fn observe(&mut self, event: GameEvent) {
        if !self.enabled {
            return;
        }
        match event {
            GameEvent::LinesCleared(_) | GameEvent::GameOver => {
                let mut stdout = io::stdout();
                let _ = stdout.write_all(b"\x07");
                let _ = stdout.flush();
            }
            _ => {}
        }
    }
}

impl Default for EventChime {
    fn default() -> Self {
        Self::new(true)
    }
}
