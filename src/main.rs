//! Terminal memory game runner (default binary).
//!
//! Frame loop: poll crossterm events until the next tick deadline, fold
//! mouse movement and clicks into per-frame pointer state, then tick the
//! game with the measured time delta and render through the diffing
//! terminal renderer.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_memory::core::{GamePhase, GameState};
use tui_memory::input::{handle_key_event, should_quit, Pointer};
use tui_memory::term::{GameView, TerminalRenderer, Viewport};
use tui_memory::types::{GameAction, GameConfig, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut state = GameState::new(GameConfig::default(), seed);
    let mut view = GameView::default();
    let mut pointer = Pointer::default();

    let tick_duration = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();
    let mut prev_frame = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let mut fb = view.render(&state, viewport, pointer.pos());
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(GameAction::ToggleGrid) => view.toggle_grid(),
                        Some(action) => state.apply_action(action),
                        None => {}
                    }
                }
                Event::Mouse(ev) => pointer.handle_mouse_event(ev),
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            let now = Instant::now();
            let dt = now.duration_since(prev_frame).as_secs_f32();
            prev_frame = now;

            let origin = view.board_origin(state.config(), viewport);
            let click = pointer
                .take_click()
                .map(|p| p.offset(-origin.x, -origin.y));

            if state.phase() == GamePhase::Menu && click.is_some() {
                // A click anywhere on the menu starts the round; it must
                // not double as a tile selection on the fresh board.
                state.apply_action(GameAction::Start);
                state.tick(dt, None);
            } else {
                state.tick(dt, click);
            }
        }
    }
}
