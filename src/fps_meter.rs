use std::time::{Duration, Instant};

/// Measures the frame rate the host actually achieves.
pub struct FpsMeter {
    /// The time the last frame occured.
    last_frame: Instant,

    /// Start of the current measurement period.
    period_start: Instant,

    /// Frames completed in the current period.
    frames: u32,
}

impl FpsMeter {
    /// Length of a measurement period.
    const PERIOD: Duration = Duration::from_secs(1);

    /// Create a new `FpsMeter` instance.
    pub fn new(now: Instant) -> Self {
        Self {
            last_frame: now,
            period_start: now,
            frames: 0,
        }
    }

    /// Record a finished frame, and return the delta to the previous one.
    pub fn update(&mut self, now: Instant) -> Duration {
        let delta = now - self.last_frame;

        self.last_frame = now;
        self.frames += 1;

        delta
    }

    /// Frames per second over the period, once a full period has passed.
    pub fn poll(&mut self, now: Instant) -> Option<f64> {
        let elapsed = now - self.period_start;

        if elapsed < Self::PERIOD {
            return None;
        }

        let fps = f64::from(self.frames) / elapsed.as_secs_f64();

        self.period_start = now;
        self.frames = 0;

        Some(fps)
    }
}
