//! Per-frame wait, served in bounded slices.

use crate::{budget::FrameBudget, clock::Clock};

/// Longest single sleep. Keeps the host able to poll input at 20 Hz
/// even when a frame lasts a second.
pub const MAX_SLICE_MS: u64 = 50;

/// Result of one pacing step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitStatus {
    /// The frame's time slot is used up, emulation may proceed.
    Complete,

    /// More waiting is needed, call again before stepping emulation.
    Pending,
}

impl WaitStatus {
    #[inline]
    pub fn is_complete(self) -> bool {
        self == WaitStatus::Complete
    }
}

/// Bookkeeping for the wait of the current frame.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PacingWindow {
    /// When the current frame's time slot started.
    start: Option<u64>,

    /// When the current frame's time slot ends. `Some` while a wait is
    /// in progress.
    deadline: Option<u64>,
}

impl PacingWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget any frame being measured.
    pub fn reset(&mut self) {
        self.start = None;
        self.deadline = None;
    }

    #[inline]
    pub fn in_progress(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn start(&self) -> Option<u64> {
        self.start
    }

    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Sleep for at most `MAX_SLICE_MS` towards the end of the frame.
    pub fn advance<C: Clock>(&mut self, clock: &mut C, budget: &FrameBudget) -> WaitStatus {
        let start = match self.start {
            Some(start) => start,
            None => {
                let now = clock.now_ms();
                self.start = Some(now);
                now
            }
        };

        let deadline = match self.deadline {
            Some(deadline) => deadline,
            None => {
                let deadline = (start as f64 + budget.as_millis_f64()) as u64;
                self.deadline = Some(deadline);
                deadline
            }
        };

        let remaining = deadline.saturating_sub(clock.now_ms());
        let slice = remaining.min(MAX_SLICE_MS);

        if remaining <= MAX_SLICE_MS {
            self.deadline = None;
        }

        if slice > 0 {
            log::trace!("Sleeping {} ms, {} ms left in frame", slice, remaining);
            clock.sleep_ms(slice);
        }

        if self.in_progress() {
            WaitStatus::Pending
        } else {
            self.start = Some(clock.now_ms());
            WaitStatus::Complete
        }
    }
}
