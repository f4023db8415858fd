//! Timing primitives used by the throttle.

use std::time::{Duration, Instant};

/// A monotonic millisecond clock with a blocking sleep.
pub trait Clock {
    /// Milliseconds elapsed since some fixed, arbitrary origin.
    fn now_ms(&self) -> u64;

    /// Block the calling thread for the given amount of milliseconds.
    fn sleep_ms(&mut self, ms: u64);
}

/// Wall clock backed by `Instant` and `std::thread::sleep`.
pub struct SystemClock {
    /// The origin all timestamps are measured from.
    origin: Instant,
}

impl SystemClock {
    /// Create a new `SystemClock` instance.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn sleep_ms(&mut self, ms: u64) {
        std::thread::sleep(Duration::from_millis(ms));
    }
}

/// Simulated clock.
///
/// Time only moves when the owner calls [`ManualClock::advance`] or when
/// something sleeps on it. Every sleep is recorded so the slice lengths can
/// be inspected afterwards.
#[derive(Debug, Default, Clone)]
pub struct ManualClock {
    now: u64,
    sleeps: Vec<u64>,
}

impl ManualClock {
    /// Create a new `ManualClock` starting at the given timestamp.
    pub fn starting_at(now: u64) -> Self {
        Self {
            now,
            sleeps: Vec::new(),
        }
    }

    /// Move time forward without sleeping, e.g. to emulate a frame's
    /// worth of work on the host.
    pub fn advance(&mut self, ms: u64) {
        self.now += ms;
    }

    /// All sleep durations requested so far, in order.
    pub fn sleeps(&self) -> &[u64] {
        &self.sleeps
    }

    /// Sum of all requested sleeps.
    pub fn total_slept(&self) -> u64 {
        self.sleeps.iter().sum()
    }

    pub fn clear_sleeps(&mut self) {
        self.sleeps.clear();
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now
    }

    fn sleep_ms(&mut self, ms: u64) {
        self.sleeps.push(ms);
        self.now += ms;
    }
}
