//! Lock-delay controller for the active piece.
//!
//! Tracks whether the piece is resting on something and for how long.
//! A grounded piece locks once its rest time exceeds
//! [`LOCK_DELAY_MS`](blockfall_types::LOCK_DELAY_MS); successful player
//! movement while grounded may push the timer back, at most
//! [`LOCK_RESET_LIMIT`](blockfall_types::LOCK_RESET_LIMIT) times per
//! grounding episode. Leaving the ground discards the episode entirely,
//! so the next touch-down starts with a fresh timer and reset budget.

use blockfall_types::{LOCK_DELAY_MS, LOCK_RESET_LIMIT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Airborne,
    Grounded { rest_ms: u32, resets: u8 },
}

/// Per-active-piece lock timing. Fully reinitialized on every spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockDelay {
    state: State,
}

impl LockDelay {
    /// New controller in the airborne state.
    pub fn new() -> Self {
        Self {
            state: State::Airborne,
        }
    }

    /// Advance by one frame. `grounded` is the current downward-probe
    /// result; `elapsed_ms` is the frame time. Returns true when the
    /// rest threshold is exceeded and the piece must lock now.
    pub fn update(&mut self, grounded: bool, elapsed_ms: u32) -> bool {
        if !grounded {
            self.state = State::Airborne;
            return false;
        }
        let rest_ms = match &mut self.state {
            State::Airborne => {
                // Touch-down: the current frame already counts as rest.
                self.state = State::Grounded {
                    rest_ms: elapsed_ms,
                    resets: 0,
                };
                elapsed_ms
            }
            State::Grounded { rest_ms, .. } => {
                *rest_ms += elapsed_ms;
                *rest_ms
            }
        };
        rest_ms > LOCK_DELAY_MS
    }

    /// A successful player translation or rotation happened. While
    /// grounded this rewinds the rest timer, up to the per-episode cap;
    /// past the cap the request is ignored. Airborne shifts are free.
    pub fn notify_shift(&mut self) {
        if let State::Grounded { rest_ms, resets } = &mut self.state {
            if *resets < LOCK_RESET_LIMIT {
                *rest_ms = 0;
                *resets += 1;
            }
        }
    }

    /// Back to airborne with a cleared episode (spawn, hold).
    pub fn reset(&mut self) {
        self.state = State::Airborne;
    }

    /// Whether the controller currently considers the piece grounded.
    pub fn is_grounded(&self) -> bool {
        matches!(self.state, State::Grounded { .. })
    }

    /// Rest time accrued this grounding episode (0 while airborne).
    pub fn rest_ms(&self) -> u32 {
        match self.state {
            State::Airborne => 0,
            State::Grounded { rest_ms, .. } => rest_ms,
        }
    }

    /// Honored reset count this grounding episode (0 while airborne).
    pub fn resets(&self) -> u8 {
        match self.state {
            State::Airborne => 0,
            State::Grounded { resets, .. } => resets,
        }
    }
}

impl Default for LockDelay {
    fn default() -> Self {
        Self::new()
    }
}
