//! Main Application
//!
//! The App owns the session and drives it from one ordered event queue:
//!
//! 1. The input task turns terminal events into `Event::Key` / `Event::Resize`
//! 2. The tick task sends `Event::Tick` for the spinner
//! 3. The scheduler sends `Event::Message` as commands finish
//!
//! Each event is reduced by the session, the returned commands go to the
//! scheduler, and the screen is redrawn. Emoji images are painted on top of
//! the flushed frame.

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event as TerminalEvent, EventStream};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use misskey_core::{Event, MisskeyApi, Scheduler, Session, SessionConfig};

use crate::graphics::{write_glyphs, GlyphPlacement};
use crate::input;
use crate::theme::Theme;
use crate::ui;

/// Spinner cadence
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Main application state
pub struct App {
    // === Core State ===
    /// Client state and reducer
    session: Session,
    /// Runs commands off the event loop
    scheduler: Scheduler,

    // === Event Queue ===
    events_tx: UnboundedSender<Event>,
    events_rx: UnboundedReceiver<Event>,

    // === Rendering ===
    theme: Theme,
    /// Emoji placements painted after the last frame
    last_glyphs: Vec<GlyphPlacement>,
    /// Paint glyphs even if unchanged (terminal was resized)
    repaint_glyphs: bool,
}

impl App {
    /// Create the App and dispatch the startup fetches
    ///
    /// Must be called inside a tokio runtime.
    pub fn new(api: Arc<dyn MisskeyApi>, config: SessionConfig, theme: Theme) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let scheduler = Scheduler::new(api, events_tx.clone());
        let (session, startup) = Session::new(config);
        scheduler.dispatch_all(startup);

        Self {
            session,
            scheduler,
            events_tx,
            events_rx,
            theme,
            last_glyphs: Vec::new(),
            repaint_glyphs: false,
        }
    }

    /// Current session state
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Reduce one event and dispatch whatever it asks for
    pub fn handle(&mut self, event: Event) {
        if matches!(event, Event::Resize { .. }) {
            self.repaint_glyphs = true;
        }
        let commands = self.session.update(event);
        self.scheduler.dispatch_all(commands);
    }

    /// Wait for the next queued event and handle it
    ///
    /// Returns `false` once every sender is gone.
    pub async fn pump(&mut self) -> bool {
        match self.events_rx.recv().await {
            Some(event) => {
                self.handle(event);
                true
            }
            None => false,
        }
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> anyhow::Result<()> {
        let input = spawn_input(self.events_tx.clone());
        let ticker = spawn_ticker(self.events_tx.clone());
        info!("Event loop started");

        let result = self.event_loop(terminal).await;

        input.abort();
        ticker.abort();
        info!("Event loop stopped");
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> anyhow::Result<()> {
        self.render(terminal)?;
        while self.session.is_running() {
            if !self.pump().await {
                break;
            }
            if self.session.is_running() {
                self.render(terminal)?;
            }
        }
        Ok(())
    }

    /// Draw the frame, then paint emoji over it
    fn render(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
        let mut glyphs = Vec::new();
        terminal.draw(|frame| glyphs = ui::draw(frame, &self.session, &self.theme))?;

        if glyphs == self.last_glyphs && !self.repaint_glyphs {
            return Ok(());
        }

        // Sixel pixels survive cell updates; wipe old ones before repainting
        if !self.last_glyphs.is_empty() {
            debug!("Clearing stale emoji glyphs");
            terminal.clear()?;
            terminal.draw(|frame| {
                ui::draw(frame, &self.session, &self.theme);
            })?;
        }

        write_glyphs(terminal.backend_mut(), &glyphs, self.session.images())?;
        self.last_glyphs = glyphs;
        self.repaint_glyphs = false;
        Ok(())
    }
}

/// Forward key presses and resizes into the queue
fn spawn_input(tx: UnboundedSender<Event>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut stream = EventStream::new();
        while let Some(next) = stream.next().await {
            let event = match next {
                Ok(TerminalEvent::Key(key)) => match input::translate(key) {
                    Some(key) => Event::Key(key),
                    None => continue,
                },
                Ok(TerminalEvent::Resize(width, height)) => Event::Resize { width, height },
                Ok(_) => continue,
                Err(e) => {
                    warn!(error = %e, "Terminal input failed");
                    break;
                }
            };
            if tx.send(event).is_err() {
                break;
            }
        }
    })
}

/// Send `Event::Tick` every [`TICK_INTERVAL`]
fn spawn_ticker(tx: UnboundedSender<Event>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK_INTERVAL);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            if tx.send(Event::Tick).is_err() {
                break;
            }
        }
    })
}
