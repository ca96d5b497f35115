//! Stopwatch screen.

use super::ui;
use super::{Flow, TerminalGuard};
use crate::settings::Settings;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use strictly_stopwatch::{Clock, StopwatchController, SystemClock, Tick, TickerError};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info, instrument};

/// Stopwatch screen state.
#[derive(Debug)]
pub struct StopwatchApp<C> {
    controller: StopwatchController<C>,
    ticks: UnboundedReceiver<Tick>,
    display: String,
}

impl<C: Clock> StopwatchApp<C> {
    /// Creates a stopped stopwatch screen.
    pub fn new(clock: C, settings: &Settings) -> Self {
        let (controller, ticks) = StopwatchController::new(clock, settings.tick_period());
        let display = controller.display();
        Self {
            controller,
            ticks,
            display,
        }
    }

    /// The `MM:SS:CC` text currently published.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Whether the stopwatch is running.
    pub fn is_running(&self) -> bool {
        self.controller.is_running()
    }

    /// Tick period in milliseconds, shown in the help line.
    pub fn tick_ms(&self) -> u128 {
        self.controller.period().as_millis()
    }

    /// Handles every tick queued since the last call and republishes.
    pub fn drain_ticks(&mut self) {
        let mut handled = 0u32;
        while let Ok(tick) = self.ticks.try_recv() {
            self.controller.on_tick(tick);
            handled += 1;
        }
        if handled > 0 {
            self.publish();
        }
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Result<Flow, TickerError> {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(Flow::Quit),
            KeyCode::Char('s') => self.controller.start()?,
            KeyCode::Char('p') => self.controller.pause(),
            KeyCode::Char(' ') => {
                if self.controller.is_running() {
                    self.controller.pause();
                } else {
                    self.controller.start()?;
                }
            }
            KeyCode::Char('r') => self.controller.reset(),
            _ => debug!("Unmapped key"),
        }
        self.publish();
        Ok(Flow::Continue)
    }

    fn publish(&mut self) {
        self.display = self.controller.display();
    }
}

/// Runs the stopwatch screen until the user quits.
///
/// Must be called inside a tokio runtime; the tick task runs on it.
pub async fn run_stopwatch(settings: &Settings) -> Result<()> {
    info!(tick_interval_ms = settings.tick_interval_ms(), "Starting stopwatch");
    let mut guard = TerminalGuard::enter()?;
    let mut app = StopwatchApp::new(SystemClock::new(), settings);

    loop {
        app.drain_ticks();
        guard.terminal.draw(|f| ui::draw_stopwatch(f, &app))?;

        if event::poll(settings.tick_period())? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key.code)? == Flow::Quit {
                    info!("User quit");
                    // Dropping the app cancels any running tick task.
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_stopwatch::ManualClock;

    #[tokio::test(start_paused = true)]
    async fn test_keys_drive_stopwatch() {
        let clock = ManualClock::new();
        let mut app = StopwatchApp::new(clock.clone(), &Settings::default());
        assert_eq!(app.display(), "00:00:00");

        app.handle_key(KeyCode::Char('s')).unwrap();
        assert!(app.is_running());

        clock.advance(1_230);
        tokio::time::sleep(std::time::Duration::from_millis(15)).await;
        app.drain_ticks();
        assert_eq!(app.display(), "00:01:23");

        app.handle_key(KeyCode::Char('p')).unwrap();
        clock.advance(5_000);
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        app.drain_ticks();
        assert_eq!(app.display(), "00:01:23");

        app.handle_key(KeyCode::Char('r')).unwrap();
        assert_eq!(app.display(), "00:00:00");
        assert!(!app.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_space_toggles() {
        let mut app = StopwatchApp::new(ManualClock::new(), &Settings::default());
        app.handle_key(KeyCode::Char(' ')).unwrap();
        assert!(app.is_running());
        app.handle_key(KeyCode::Char(' ')).unwrap();
        assert!(!app.is_running());
        assert_eq!(app.handle_key(KeyCode::Char('q')).unwrap(), Flow::Quit);
    }
}
