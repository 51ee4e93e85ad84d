//! Full-screen loop shared by the lane game and the pin game.
//!
//! Rendering, key handling and the fixed-rate tick follow the same order every
//! iteration: draw, wait for input until the next tick is due, then run ticks.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use crate::core::{GameConfig, LaneGame, LaneSnapshot, PinGame, TickInput};
use crate::input::{handle_key_event, should_quit, InputHandler};
use crate::term::{FrameBuffer, LaneView, PinView, TerminalRenderer, TickPacer, Viewport};

/// A game plus the view that draws it.
pub trait Screen {
    fn tick(&mut self, input: &TickInput);
    fn render_into(&mut self, viewport: Viewport, fb: &mut FrameBuffer);
}

pub struct LaneScreen {
    game: LaneGame,
    view: LaneView,
    snap: LaneSnapshot,
}

impl LaneScreen {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let view = LaneView::new(config.ball.power_max);
        let game = LaneGame::new(config, seed);
        let snap = game.snapshot();
        Self { game, view, snap }
    }

    pub fn game(&self) -> &LaneGame {
        &self.game
    }
}

impl Screen for LaneScreen {
    fn tick(&mut self, input: &TickInput) {
        self.game.tick(input);
    }

    fn render_into(&mut self, viewport: Viewport, fb: &mut FrameBuffer) {
        self.game.snapshot_into(&mut self.snap);
        self.view.render_into(&self.snap, viewport, fb);
    }
}

pub struct PinScreen {
    game: PinGame,
    view: PinView,
}

impl PinScreen {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let view = PinView::new(config.ball.power_max);
        Self {
            game: PinGame::new(config, seed),
            view,
        }
    }

    pub fn game(&self) -> &PinGame {
        &self.game
    }
}

impl Screen for PinScreen {
    fn tick(&mut self, input: &TickInput) {
        self.game.tick(input);
    }

    fn render_into(&mut self, viewport: Viewport, fb: &mut FrameBuffer) {
        let snap = self.game.snapshot();
        self.view.render_into(&snap, viewport, fb);
    }
}

/// Take over the terminal, run `screen` until the player quits, then restore it.
pub fn run<S: Screen>(screen: &mut S, config: &GameConfig) -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter().context("entering raw mode")?;

    let result = run_loop(&mut term, screen, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run_loop<S: Screen>(
    term: &mut TerminalRenderer,
    screen: &mut S,
    config: &GameConfig,
) -> Result<()> {
    let mut input_handler = InputHandler::new()
        .with_key_release_timeout_ms(config.input.hold_timeout_ms)
        .with_repeat_delay_ms(config.input.repeat_delay_ms);
    let mut pacer = TickPacer::new(config.timing.tick_ms);
    log::debug!(
        "loop: tick {} ms, key release timeout {} ms, repeat delay {} ms",
        pacer.tick_ms(),
        input_handler.key_release_timeout_ms(),
        input_handler.repeat_delay_ms()
    );
    let mut fb = FrameBuffer::new(0, 0);
    // Throw/restart presses wait here for the next tick.
    let mut pending = TickInput::default();
    let start = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        screen.render_into(Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = Duration::from_millis(pacer.timeout_ms(elapsed_ms(start)));
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        input_handler.handle_key_press(key.code);
                        // Held controls reach the game through `update`.
                        if let Some(action) =
                            handle_key_event(key).filter(|a| !a.is_continuous())
                        {
                            pending.apply(action);
                        }
                    }
                    KeyEventKind::Repeat => input_handler.handle_key_repeat(key.code),
                    KeyEventKind::Release => input_handler.handle_key_release(key.code),
                },
                Event::Resize(..) => term.invalidate(),
                // Keys released in another window never report a release here.
                Event::FocusLost => input_handler.reset(),
                _ => {}
            }
        }

        // Tick.
        for _ in 0..pacer.due(elapsed_ms(start)) {
            let mut input = TickInput::from_actions(&input_handler.update(pacer.tick_ms()));
            input.throw |= pending.throw;
            input.restart |= pending.restart;
            pending = TickInput::default();
            screen.tick(&input);
        }
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
