//! Mouse-driven terminal front end.
//!
//! Uses crossterm for input and the framebuffer renderer from `term` for
//! output. The board only changes in response to input, so the loop blocks on
//! events and redraws when the frame fingerprint changes.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use tracing::{debug, info, instrument};

use crate::core::Simulation;
use crate::input::{handle_key_event, handle_mouse_event, ClickTracker, PointerAction};
use crate::term::{
    restore_terminal, BoardView, FrameBuffer, RedrawGate, TerminalRenderer, ViewState, Viewport,
};
use crate::types::{BoardPosition, GameCommand};

/// How long to wait for input before re-checking the frame.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Unchanged frames are still redrawn this often.
const REFRESH_INTERVAL_MS: u64 = 2_000;

/// What the event loop should do after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Front-end state: the game plus everything the view needs.
pub struct FancyGame {
    sim: Simulation,
    view: BoardView,
    state: ViewState,
    clicks: ClickTracker<BoardPosition>,
    viewport: Viewport,
}

impl FancyGame {
    pub fn new(sim: Simulation, viewport: Viewport) -> Self {
        Self {
            sim,
            view: BoardView::default(),
            state: ViewState::default(),
            clicks: ClickTracker::default(),
            viewport,
        }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    pub fn render_into(&self, fb: &mut FrameBuffer) {
        self.view.render_into(&self.sim, &self.state, self.viewport, fb);
    }

    pub fn fingerprint(&self) -> u64 {
        self.state.fingerprint(&self.sim, self.viewport)
    }

    /// Apply one terminal event. `now_ms` timestamps mouse presses.
    pub fn handle_event(&mut self, event: Event, now_ms: u64) -> Flow {
        match event {
            Event::Key(key) => match handle_key_event(key) {
                Some(command) => return self.apply_command(command),
                None => debug!(?key, "unmapped key"),
            },
            Event::Mouse(mouse) => match handle_mouse_event(mouse) {
                Some(PointerAction::Hover { column, row }) => {
                    self.state.hover = self.view.cell_at(&self.sim, &self.state, column, row);
                }
                Some(PointerAction::Press { column, row }) => {
                    self.state.hover = self.view.cell_at(&self.sim, &self.state, column, row);
                    if let Some(cell) = self.state.hover {
                        self.press(cell, now_ms);
                    }
                }
                None => {}
            },
            Event::Resize(width, height) => {
                self.viewport = Viewport::new(width, height);
            }
            _ => {}
        }
        Flow::Continue
    }

    fn apply_command(&mut self, command: GameCommand) -> Flow {
        debug!(command = command.as_str(), "key command");
        match command {
            GameCommand::Undo => {
                self.sim.undo();
            }
            GameCommand::Redo => {
                self.sim.redo();
            }
            GameCommand::Reset => self.sim.reset(),
            GameCommand::Quit => return Flow::Quit,
            GameCommand::Pan { dx, dy } => self.state.pan(dx, dy, &self.sim),
        }
        Flow::Continue
    }

    /// A single press marks; the second press of a double click restarts a
    /// finished game and is otherwise ignored.
    fn press(&mut self, cell: BoardPosition, now_ms: u64) {
        if self.clicks.press(cell, now_ms) {
            if self.sim.status().is_over() {
                self.sim.reset();
            }
            return;
        }
        if let Err(err) = self.sim.mark(cell) {
            debug!(%cell, %err, "click rejected");
        }
    }
}

/// Run the game on the real terminal until the player quits.
#[instrument(skip(sim))]
pub fn run(sim: Simulation) -> Result<()> {
    let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
    info!(width, height, "fancy game started");

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        restore_terminal();
        previous_hook(panic);
    }));

    let mut term = TerminalRenderer::new();
    term.enter()?;
    let result = event_loop(&mut term, FancyGame::new(sim, Viewport::new(width, height)));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn event_loop(term: &mut TerminalRenderer, mut game: FancyGame) -> Result<()> {
    let started = Instant::now();
    let mut gate = RedrawGate::new(REFRESH_INTERVAL_MS);
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let now_ms = started.elapsed().as_millis() as u64;
        if gate.should_draw(now_ms, game.fingerprint()) {
            game.render_into(&mut fb);
            term.draw_swap(&mut fb)?;
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let ev = event::read()?;
        if matches!(ev, Event::Resize(..)) {
            term.invalidate();
            gate.invalidate();
        }
        let now_ms = started.elapsed().as_millis() as u64;
        if game.handle_event(ev, now_ms) == Flow::Quit {
            info!("quit requested");
            return Ok(());
        }
    }
}
