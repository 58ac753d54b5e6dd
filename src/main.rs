//! Terminal 3D Tetris runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `tris3d-term`. Gravity
//! runs off measured frame time fed into `GameState::advance`.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use tris3d::clock::FrameClock;
use tris3d::core::{GameConfig, GameState};
use tris3d::engine::{apply_event, Camera};
use tris3d::input::{handle_key_event, should_quit, InputEvent};
use tris3d::logging::{self, LogConfig};
use tris3d::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tris3d::types::{GameAction, FRAME_MS};

fn main() -> Result<()> {
    logging::install(&LogConfig::from_env())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("exiting: {err:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::with_config(GameConfig::from_env());
    let mut camera = Camera::default();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut clock = FrameClock::start();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game.snapshot(), camera.heading(), Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        let timeout = frame.saturating_sub(clock.pending(Instant::now()));
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        log::info!("quit (score {})", game.score());
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(InputEvent::Action(action)) => {
                            apply_event(&mut game, action, camera.heading());
                            if action == GameAction::Reset {
                                camera.reset();
                            }
                        }
                        Some(InputEvent::TurnCamera(turn)) => {
                            camera.turn(turn);
                        }
                        None => {}
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = clock.take_ms(Instant::now());
        if elapsed > 0 {
            game.advance(elapsed);
        }
        if let Some(lock) = game.take_last_lock() {
            log::debug!(
                "locked {} (+{} points, {} rows)",
                lock.kind.as_str(),
                lock.points,
                lock.rows_cleared
            );
        }
    }
}
