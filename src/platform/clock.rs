//! Sleep capability for the progress display.

use std::time::Duration;

/// Blocks the current run for a duration
pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

/// Real wall-clock sleep
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Returns immediately
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSleeper;

impl Sleeper for NoopSleeper {
    fn sleep(&self, _duration: Duration) {}
}
