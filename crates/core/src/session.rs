//! The game session state machine.
//!
//! Ties the board, bag, active piece, lock delay and scoring together.
//! A host drives it with [`GameSession::apply`] for player commands and
//! [`GameSession::tick`] for frame time, then reads a snapshot for
//! rendering and drains events for sound cues. Everything is
//! synchronous and deterministic for a given seed and command stream.

use arrayvec::ArrayVec;

use blockfall_types::{GameCommand, GameEvent, PieceKind, SOFT_DROP_POINTS};

use crate::board::Board;
use crate::lock_delay::LockDelay;
use crate::pieces::Piece;
use crate::rng::SevenBag;
use crate::scoring;
use crate::snapshot::{ActivePiece, GameSnapshot};
use crate::srs;

/// Bound on undrained events. A single command emits at most four
/// (hard drop: dropped, locked, cleared, game over); hosts that drain
/// every frame never come close. On overflow the oldest event is
/// dropped so the queue keeps the most recent history.
const MAX_PENDING_EVENTS: usize = 8;

/// Complete state of one game, including the persistent high score.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    bag: SevenBag,
    active: Option<Piece>,
    next: Option<PieceKind>,
    hold: Option<PieceKind>,
    can_hold: bool,
    score: u32,
    lines: u32,
    level: u32,
    high_score: u32,
    drop_timer_ms: u32,
    drop_interval_ms: u32,
    lock: LockDelay,
    started: bool,
    paused: bool,
    game_over: bool,
    events: ArrayVec<GameEvent, MAX_PENDING_EVENTS>,
}

impl GameSession {
    /// New idle session. Nothing moves until [`start`](Self::start).
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            bag: SevenBag::new(seed),
            active: None,
            next: None,
            hold: None,
            can_hold: true,
            score: 0,
            lines: 0,
            level: 1,
            high_score: 0,
            drop_timer_ms: 0,
            drop_interval_ms: scoring::drop_interval_ms(1),
            lock: LockDelay::new(),
            started: false,
            paused: false,
            game_over: false,
            events: ArrayVec::new(),
        }
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Current gravity interval in milliseconds.
    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn hold_kind(&self) -> Option<PieceKind> {
        self.hold
    }

    pub fn next_kind(&self) -> Option<PieceKind> {
        self.next
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Seed the high score from persisted state. Keeps whichever value
    /// is larger, so a late restore never lowers it.
    pub fn restore_high_score(&mut self, stored: u32) {
        self.high_score = self.high_score.max(stored);
    }

    /// Start a new game. Doubles as restart: everything resets except
    /// the high score and the seeded RNG stream (the bag refills from
    /// where the stream left off rather than replaying it).
    pub fn start(&mut self) {
        self.board.reset();
        self.bag.restart();
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.drop_interval_ms = scoring::drop_interval_ms(self.level);
        self.drop_timer_ms = 0;
        self.hold = None;
        self.can_hold = true;
        self.lock.reset();
        self.events.clear();
        self.paused = false;
        self.game_over = false;
        self.started = true;
        self.next = Some(self.bag.draw());
        self.spawn_from_next();
    }

    /// Dispatch one player command. Returns whether it had an effect.
    pub fn apply(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::MoveLeft => self.move_left(),
            GameCommand::MoveRight => self.move_right(),
            GameCommand::SoftDrop => self.soft_drop(),
            GameCommand::HardDrop => self.hard_drop(),
            GameCommand::RotateCw => self.rotate_cw(),
            GameCommand::Hold => self.hold(),
            GameCommand::TogglePause => self.toggle_pause(),
            GameCommand::Start => {
                self.start();
                true
            }
        }
    }

    /// Advance frame time: gravity first, then the lock-delay
    /// controller, which may commit a lock. No-op while idle, paused or
    /// over; the host simply stops charging time while paused, so a
    /// paused interval never counts as gravity or rest time.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if !self.started || self.paused || self.game_over {
            return;
        }
        if self.active.is_none() {
            return;
        }

        self.drop_timer_ms += elapsed_ms;
        if self.drop_timer_ms > self.drop_interval_ms {
            self.drop_timer_ms = 0;
            // A blocked step is simply skipped; locking is the
            // controller's call, not gravity's.
            self.gravity_step();
        }

        let grounded = self.is_grounded();
        if self.lock.update(grounded, elapsed_ms) {
            self.lock_active();
        }
    }

    pub fn move_left(&mut self) -> bool {
        if self.shift(-1, 0) {
            self.push_event(GameEvent::Moved);
            return true;
        }
        false
    }

    pub fn move_right(&mut self) -> bool {
        if self.shift(1, 0) {
            self.push_event(GameEvent::Moved);
            return true;
        }
        false
    }

    /// One manual downward step. Pays a point on success.
    pub fn soft_drop(&mut self) -> bool {
        if self.shift(0, 1) {
            self.add_points(SOFT_DROP_POINTS);
            self.push_event(GameEvent::Moved);
            return true;
        }
        false
    }

    /// Drop to the floor and lock immediately, bypassing the timer.
    pub fn hard_drop(&mut self) -> bool {
        if self.commands_blocked() {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };
        let mut dropped = piece;
        loop {
            let below = dropped.translated(0, 1);
            if self.board.collides(&below) {
                break;
            }
            dropped = below;
        }
        self.active = Some(dropped);
        self.push_event(GameEvent::HardDropped);
        self.lock_active();
        true
    }

    /// Clockwise rotation with wall kicks; atomic on failure.
    pub fn rotate_cw(&mut self) -> bool {
        if self.commands_blocked() {
            return false;
        }
        let Some(piece) = self.active.as_ref() else {
            return false;
        };
        match srs::try_rotate_cw(piece, |candidate| self.board.collides(candidate)) {
            Some(rotated) => {
                self.active = Some(rotated);
                self.lock.notify_shift();
                self.push_event(GameEvent::Rotated);
                true
            }
            None => false,
        }
    }

    /// Stash the active piece, or swap it with the stashed one. Allowed
    /// once per spawned piece; the incoming piece always re-enters at
    /// the spawn position in spawn orientation. The swap itself is not
    /// collision-checked.
    pub fn hold(&mut self) -> bool {
        if self.commands_blocked() || !self.can_hold {
            return false;
        }
        let Some(active) = self.active.as_ref() else {
            return false;
        };
        let stashed = active.kind;
        self.push_event(GameEvent::Moved);
        match self.hold.replace(stashed) {
            None => self.spawn_from_next(),
            Some(held) => {
                self.active = Some(Piece::spawn(held));
                self.lock.reset();
            }
        }
        self.can_hold = false;
        true
    }

    /// Pause or resume. Only meaningful between start and game over.
    pub fn toggle_pause(&mut self) -> bool {
        if !self.started || self.game_over {
            return false;
        }
        self.paused = !self.paused;
        true
    }

    /// Row the active piece would rest on after a hard drop.
    pub fn ghost_y(&self) -> Option<i8> {
        let piece = self.active.as_ref()?;
        let mut probe = *piece;
        loop {
            let below = probe.translated(0, 1);
            if self.board.collides(&below) {
                return Some(probe.y);
            }
            probe = below;
        }
    }

    /// Drain pending events in emission order.
    pub fn take_events(&mut self) -> ArrayVec<GameEvent, MAX_PENDING_EVENTS> {
        std::mem::take(&mut self.events)
    }

    /// Fill a reusable snapshot buffer without allocating.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.color_grid_into(&mut out.board);
        out.active = self.active.map(ActivePiece::from);
        out.ghost_y = self.ghost_y();
        out.hold = self.hold;
        out.next = self.next;
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level;
        out.high_score = self.high_score;
        out.can_hold = self.can_hold;
        out.started = self.started;
        out.paused = self.paused;
        out.game_over = self.game_over;
    }

    /// Allocate a fresh snapshot.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }

    fn commands_blocked(&self) -> bool {
        !self.started || self.paused || self.game_over
    }

    /// Raw player translation: revert on collision, otherwise commit
    /// and request a grounded lock reset.
    fn shift(&mut self, dx: i8, dy: i8) -> bool {
        if self.commands_blocked() {
            return false;
        }
        let Some(piece) = self.active.as_ref() else {
            return false;
        };
        let moved = piece.translated(dx, dy);
        if self.board.collides(&moved) {
            return false;
        }
        self.active = Some(moved);
        self.lock.notify_shift();
        true
    }

    /// Gravity translation: like a shift but never touches the lock
    /// timer and emits nothing.
    fn gravity_step(&mut self) -> bool {
        let Some(piece) = self.active.as_ref() else {
            return false;
        };
        let below = piece.translated(0, 1);
        if self.board.collides(&below) {
            return false;
        }
        self.active = Some(below);
        true
    }

    fn is_grounded(&self) -> bool {
        match self.active.as_ref() {
            Some(piece) => self.board.collides(&piece.translated(0, 1)),
            None => false,
        }
    }

    /// The lock sequence: merge, sweep, score, respawn.
    fn lock_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };
        self.board.merge(&piece);
        self.push_event(GameEvent::Locked);
        let cleared = self.board.sweep();
        if cleared > 0 {
            self.apply_line_clear(cleared);
            self.push_event(GameEvent::LinesCleared(cleared));
        }
        self.spawn_from_next();
    }

    /// Scoring update for one sweep. The point multiplier uses the
    /// level as it was when the rows cleared; the new level and
    /// gravity interval derive afterwards.
    fn apply_line_clear(&mut self, rows: u32) {
        self.add_points(scoring::line_clear_points(rows, self.level));
        self.lines += rows;
        self.level = scoring::level_for_lines(self.lines);
        self.drop_interval_ms = scoring::drop_interval_ms(self.level);
    }

    fn add_points(&mut self, points: u32) {
        self.score += points;
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }

    /// Promote next to active, draw a fresh next, and check the spawn
    /// position. A blocked spawn ends the game on the spot.
    fn spawn_from_next(&mut self) {
        let kind = match self.next.take() {
            Some(kind) => kind,
            None => self.bag.draw(),
        };
        self.next = Some(self.bag.draw());
        let piece = Piece::spawn(kind);
        self.can_hold = true;
        self.lock.reset();
        self.drop_timer_ms = 0;
        let blocked = self.board.collides(&piece);
        self.active = Some(piece);
        if blocked {
            self.game_over = true;
            self.push_event(GameEvent::GameOver);
        }
    }

    fn push_event(&mut self, event: GameEvent) {
        if self.events.is_full() {
            self.events.remove(0);
        }
        self.events.push(event);
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}
