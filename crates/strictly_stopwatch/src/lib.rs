//! Stopwatch engine.
//!
//! [`Stopwatch`] is pure state over a [`Clock`]: it only changes when its
//! owner calls `start`, `pause`, `reset` or `tick`. Periodic ticks come from
//! a [`TickTask`], an explicitly owned tokio task that is cancelled on pause,
//! reset and drop. [`StopwatchController`] wires the two together for a
//! presentation layer.
//!
//! # Example
//!
//! ```
//! use strictly_stopwatch::{ManualClock, Stopwatch, format_elapsed};
//!
//! let clock = ManualClock::new();
//! let mut watch = Stopwatch::new(clock.clone());
//! watch.start();
//! clock.advance(61_005);
//! watch.pause();
//! assert_eq!(format_elapsed(watch.elapsed()), "01:01:00");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod clock;
mod controller;
mod format;
mod stopwatch;
mod ticker;

pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::StopwatchController;
pub use format::{Elapsed, format_elapsed};
pub use stopwatch::Stopwatch;
pub use ticker::{DEFAULT_TICK_PERIOD, Tick, TickTask, TickerError};
