//! Cancellable periodic tick task.

use derive_more::{Display, Error};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, instrument, trace};

/// Default tick period.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(10);

/// One periodic wake-up. `seq` counts from 1 per task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct Tick {
    /// Sequence number within the task that sent it.
    pub seq: u64,
}

/// Errors starting a tick task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum TickerError {
    /// A zero period would spin.
    #[display("Tick period must be greater than zero")]
    ZeroPeriod,
    /// Called outside a tokio runtime.
    #[display("No tokio runtime available to run the tick task")]
    NoRuntime,
}

/// Handle to a running tick task.
///
/// The task sends a [`Tick`] every period until it is cancelled, this handle
/// is dropped, or the receiver goes away. Dropping the handle aborts the
/// task.
#[derive(Debug)]
pub struct TickTask {
    handle: JoinHandle<()>,
}

impl TickTask {
    /// Spawns a task on the current tokio runtime. The first tick arrives
    /// one period after spawning.
    #[instrument(skip(tx))]
    pub fn spawn(period: Duration, tx: UnboundedSender<Tick>) -> Result<Self, TickerError> {
        if period.is_zero() {
            return Err(TickerError::ZeroPeriod);
        }
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| TickerError::NoRuntime)?;

        let handle = runtime.spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut seq = 0;
            loop {
                interval.tick().await;
                seq += 1;
                trace!(seq, "Tick");
                if tx.send(Tick::new(seq)).is_err() {
                    debug!("Tick receiver dropped, stopping");
                    break;
                }
            }
        });

        debug!("Tick task spawned");
        Ok(Self { handle })
    }

    /// Whether the task has stopped.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Cancels the task.
    #[instrument(skip(self))]
    pub fn cancel(self) {
        debug!("Cancelling tick task");
        // Drop does the abort.
    }
}

impl Drop for TickTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn test_ticks_arrive_each_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let start = Instant::now();
        let _task = TickTask::spawn(Duration::from_millis(10), tx).unwrap();

        for expected in 1..=3 {
            let tick = rx.recv().await.unwrap();
            assert_eq!(tick.seq, expected);
        }
        assert_eq!(start.elapsed(), Duration::from_millis(30));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_ticks() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let task = TickTask::spawn(Duration::from_millis(10), tx).unwrap();
        assert_eq!(rx.recv().await, Some(Tick::new(1)));

        task.cancel();
        // The aborted task drops the only sender, closing the channel.
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_task() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        {
            let _task = TickTask::spawn(Duration::from_millis(10), tx).unwrap();
        }
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_receiver_drop_ends_task() {
        let (tx, rx) = mpsc::unbounded_channel();
        let task = TickTask::spawn(Duration::from_millis(10), tx).unwrap();
        drop(rx);
        tokio::time::sleep(Duration::from_millis(25)).await;
        assert!(task.is_finished());
    }

    #[tokio::test]
    async fn test_zero_period_rejected() {
        let (tx, _rx) = mpsc::unbounded_channel();
        assert_eq!(
            TickTask::spawn(Duration::ZERO, tx).unwrap_err(),
            TickerError::ZeroPeriod
        );
    }

    #[test]
    fn test_no_runtime_rejected() {
        let (tx, _rx) = mpsc::unbounded_channel();
        assert_eq!(
            TickTask::spawn(DEFAULT_TICK_PERIOD, tx).unwrap_err(),
            TickerError::NoRuntime
        );
    }
}
