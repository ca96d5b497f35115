//! Start / pause / reset state over a clock.

use super::clock::Clock;
use tracing::{debug, instrument};

/// Elapsed-time accumulator.
///
/// While running, elapsed time is `banked + (now - resumed_at)`, which is
/// the same as measuring from an anchor placed `banked` milliseconds before
/// the last start. While stopped, elapsed time is frozen at the last value
/// computed.
#[derive(Debug, Clone)]
pub struct Stopwatch<C> {
    clock: C,
    banked: u64,
    resumed_at: Option<u64>,
    elapsed: u64,
}

impl<C: Clock> Stopwatch<C> {
    /// Creates a stopped stopwatch reading zero.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            banked: 0,
            resumed_at: None,
            elapsed: 0,
        }
    }

    /// Whether the stopwatch is running.
    pub fn is_running(&self) -> bool {
        self.resumed_at.is_some()
    }

    /// Last computed elapsed milliseconds.
    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    /// Starts or resumes. Returns `false` if it was already running.
    #[instrument(skip(self), fields(elapsed = self.elapsed))]
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            debug!("Already running");
            return false;
        }
        self.banked = self.elapsed;
        self.resumed_at = Some(self.clock.now_millis());
        debug!("Started");
        true
    }

    /// Pauses, freezing elapsed time. Returns `false` if it was not running.
    #[instrument(skip(self))]
    pub fn pause(&mut self) -> bool {
        if !self.is_running() {
            debug!("Not running");
            return false;
        }
        self.tick();
        self.banked = self.elapsed;
        self.resumed_at = None;
        debug!(elapsed = self.elapsed, "Paused");
        true
    }

    /// Stops and clears elapsed time.
    #[instrument(skip(self), fields(elapsed = self.elapsed))]
    pub fn reset(&mut self) {
        self.banked = 0;
        self.resumed_at = None;
        self.elapsed = 0;
        debug!("Reset");
    }

    /// Recomputes elapsed time from the clock if running and returns it.
    ///
    /// The result never decreases between resets, even if the clock is set
    /// backwards.
    pub fn tick(&mut self) -> u64 {
        if let Some(resumed_at) = self.resumed_at {
            let run = self.clock.now_millis().saturating_sub(resumed_at);
            self.elapsed = self.elapsed.max(self.banked.saturating_add(run));
        }
        self.elapsed
    }
}
