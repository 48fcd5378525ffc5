//! Terminal Snake runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and the framebuffer-based
//! renderer from `tui_snake::term`. Ticks are driven by a single-shot
//! deadline that is re-armed after every step at the current speed.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::core::{GameConfig, GameSession, TickScheduler};
use tui_snake::input::InputTranslator;
use tui_snake::term::{
    frame_fingerprint, FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport,
};
use tui_snake::types::{Intent, Phase};

/// Poll timeout while no tick is scheduled.
const IDLE_POLL_MS: u64 = 250;
/// Redraw cadence for frames that did not change.
const STATIC_REFRESH_MS: u64 = 1_000;

fn main() -> Result<()> {
    tui_snake::logging::init_from_env()?;

    let config = GameConfig::from_env();
    log::info!(
        "starting: grid={} speed={}ms seed={:?}",
        config.grid_size,
        config.initial_speed_ms,
        config.seed
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("exiting with error: {err:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<()> {
    let mut session = GameSession::new(config);
    log::info!("session seed {}", session.seed());

    let view = GameView::default();
    let mut translator = InputTranslator::new();
    let mut scheduler = TickScheduler::new();
    let mut throttle = RenderThrottle::new(STATIC_REFRESH_MS);
    let mut fb = FrameBuffer::new(0, 0);
    let started = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let now_ms = started.elapsed().as_millis() as u64;
        let fingerprint = frame_fingerprint(session.revision(), w, h);
        if throttle.should_render(now_ms, fingerprint, !session.is_playing()) {
            view.render_into(&session, viewport, &mut fb);
            term.present(&mut fb)?;
        }

        // Input, waiting at most until the next tick is due.
        let timeout = scheduler
            .timeout(Instant::now())
            .unwrap_or(Duration::from_millis(IDLE_POLL_MS));

        if event::poll(timeout)? {
            let intent = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => translator.key(key),
                Event::Mouse(mouse) => {
                    let layout = view.layout(session.config().grid_size, viewport);
                    translator.pointer(mouse, |col, row| layout.button_at(col, row))
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    throttle.reset();
                    translator.cancel_gesture();
                    None
                }
                _ => None,
            };

            if let Some(intent) = intent {
                log::debug!("intent {intent:?}");
                if intent == Intent::Quit {
                    log::info!(
                        "quit: score={} level={} best={}",
                        session.score(),
                        session.level(),
                        session.high_score()
                    );
                    return Ok(());
                }
                session.apply_intent(intent);
            }
        }

        // Tick.
        let now = Instant::now();
        scheduler.sync(now, session.is_playing(), session.speed_ms());
        if scheduler.poll(now) {
            let outcome = session.tick();
            log::trace!("tick outcome {outcome:?}");
            if session.phase() == Phase::Playing {
                scheduler.arm(now, session.speed_ms());
            }
        }
    }
}
