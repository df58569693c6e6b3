//! Terminal blockfall runner (default binary).
//!
//! Input comes from crossterm, frames go out through the framebuffer
//! renderer, and the high score round-trips through the store. The
//! session itself never touches the clock: this loop charges it with
//! elapsed time in fixed ticks.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{GameSession, GameSnapshot};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::store::HighScoreStore;
use blockfall::term::{EventChime, FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{GameEvent, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let store = HighScoreStore::default();
    let mut session = GameSession::new(seed_from_clock());
    session.restore_high_score(store.load());
    let mut saved_high = session.high_score();

    let view = GameView::default();
    let mut chime = EventChime::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    // Terminal auto-repeat drives held keys, so presses
                    // and repeats are treated alike.
                    if should_quit(key) {
                        break;
                    }
                    if let Some(command) = handle_key_event(key) {
                        session.apply(command);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick(TICK_MS);
        }

        for event in session.take_events() {
            chime.observe(event);
            // A finished game is the natural point to persist a new
            // record; failures must not kill the run mid-game.
            if matches!(event, GameEvent::GameOver) && session.high_score() > saved_high {
                saved_high = session.high_score();
                let _ = store.record(saved_high);
            }
        }
    }

    if session.high_score() > saved_high {
        store.record(session.high_score())?;
    }
    Ok(())
}

/// Seed the bag from the wall clock; determinism only matters within
/// one game.
fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
}
