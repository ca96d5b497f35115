//! Glue between the stopwatch and its tick task.

use super::clock::Clock;
use super::format::format_elapsed;
use super::stopwatch::Stopwatch;
use super::ticker::{Tick, TickTask, TickerError};
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, instrument, trace};

/// Owns a [`Stopwatch`] and the [`TickTask`] that drives it.
///
/// The caller receives ticks on the channel returned by [`new`](Self::new)
/// and feeds them back through [`on_tick`](Self::on_tick). A ticker exists
/// only while the stopwatch runs; pause, reset and drop all cancel it.
#[derive(Debug)]
pub struct StopwatchController<C> {
    stopwatch: Stopwatch<C>,
    period: Duration,
    ticker: Option<TickTask>,
    tick_tx: UnboundedSender<Tick>,
}

impl<C: Clock> StopwatchController<C> {
    /// Creates a stopped controller and the receiving end of its ticks.
    pub fn new(clock: C, period: Duration) -> (Self, UnboundedReceiver<Tick>) {
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        let controller = Self {
            stopwatch: Stopwatch::new(clock),
            period,
            ticker: None,
            tick_tx,
        };
        (controller, tick_rx)
    }

    /// Starts the stopwatch and its ticker. No-op if already running.
    ///
    /// # Errors
    ///
    /// Fails without starting if the ticker cannot be spawned.
    #[instrument(skip(self), fields(period = ?self.period))]
    pub fn start(&mut self) -> Result<(), TickerError> {
        if self.stopwatch.is_running() {
            debug!("Start ignored, already running");
            return Ok(());
        }
        let ticker = TickTask::spawn(self.period, self.tick_tx.clone())?;
        self.stopwatch.start();
        self.ticker = Some(ticker);
        Ok(())
    }

    /// Cancels the ticker and freezes elapsed time. No-op if not running.
    #[instrument(skip(self))]
    pub fn pause(&mut self) {
        self.cancel_ticker();
        self.stopwatch.pause();
    }

    /// Cancels the ticker and clears elapsed time.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cancel_ticker();
        self.stopwatch.reset();
    }

    /// Recomputes elapsed time for a tick and returns the value to publish.
    ///
    /// Ticks still queued after a pause are harmless: the stopwatch is
    /// frozen and returns the same value.
    pub fn on_tick(&mut self, tick: Tick) -> u64 {
        let elapsed = self.stopwatch.tick();
        trace!(seq = tick.seq, elapsed, "Tick handled");
        elapsed
    }

    /// Last computed elapsed milliseconds.
    pub fn elapsed(&self) -> u64 {
        self.stopwatch.elapsed()
    }

    /// Elapsed time as `MM:SS:CC`.
    pub fn display(&self) -> String {
        format_elapsed(self.elapsed())
    }

    /// Whether the stopwatch is running.
    pub fn is_running(&self) -> bool {
        self.stopwatch.is_running()
    }

    /// Whether a tick task is currently owned.
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    /// The configured tick period.
    pub fn period(&self) -> Duration {
        self.period
    }

    fn cancel_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DEFAULT_TICK_PERIOD, ManualClock};

    #[tokio::test(start_paused = true)]
    async fn test_start_pause_reset_with_simulated_clock() {
        let clock = ManualClock::new();
        let (mut ctl, mut rx) = StopwatchController::new(clock.clone(), DEFAULT_TICK_PERIOD);

        ctl.start().unwrap();
        assert!(ctl.is_running());
        assert!(ctl.is_ticking());

        clock.advance(500);
        let tick = rx.recv().await.unwrap();
        assert_eq!(ctl.on_tick(tick), 500);

        ctl.pause();
        assert!(!ctl.is_running());
        assert!(!ctl.is_ticking());
        assert_eq!(ctl.elapsed(), 500);

        clock.advance(2_000);
        assert_eq!(ctl.elapsed(), 500);
        assert_eq!(ctl.on_tick(Tick::new(99)), 500);

        ctl.reset();
        assert_eq!(ctl.elapsed(), 0);
        assert_eq!(ctl.display(), "00:00:00");
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_start_keeps_single_ticker() {
        let (mut ctl, mut rx) = StopwatchController::new(ManualClock::new(), DEFAULT_TICK_PERIOD);
        ctl.start().unwrap();
        ctl.start().unwrap();

        tokio::time::sleep(Duration::from_millis(95)).await;
        let mut ticks = Vec::new();
        while let Ok(tick) = rx.try_recv() {
            ticks.push(tick.seq);
        }
        assert_eq!(ticks, (1..=9).collect::<Vec<_>>());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_while_running_cancels_ticker() {
        let (mut ctl, mut rx) = StopwatchController::new(ManualClock::new(), DEFAULT_TICK_PERIOD);
        ctl.start().unwrap();
        ctl.reset();
        assert!(!ctl.is_running());
        assert!(!ctl.is_ticking());

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_zero_period_leaves_stopwatch_stopped() {
        let (mut ctl, _rx) = StopwatchController::new(ManualClock::new(), Duration::ZERO);
        assert_eq!(ctl.start(), Err(TickerError::ZeroPeriod));
        assert!(!ctl.is_running());
    }

    #[test]
    fn test_period_is_the_configured_one() {
        let (ctl, _rx) = StopwatchController::new(ManualClock::new(), Duration::from_millis(25));
        assert_eq!(ctl.period(), Duration::from_millis(25));
    }
}
