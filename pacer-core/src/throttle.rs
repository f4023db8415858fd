//! Wrapper struct tying speed state, frame budget and pacing together.

use crate::{
    budget::FrameBudget,
    clock::{Clock, SystemClock},
    error::{Result, ThrottleError},
    pacing::{PacingWindow, WaitStatus},
    rate::NativeRate,
    speed::{ScaleFactor, SpeedChange, SpeedPreset},
};

/// Startup settings for a [`Throttle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrottleConfig {
    /// Frame rate of the emulated machine.
    pub native_rate: NativeRate,

    /// Speed to start at.
    pub initial_scale: ScaleFactor,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            native_rate: NativeRate::NTSC,
            initial_scale: ScaleFactor::NORMAL,
        }
    }
}

/// Keeps emulation running at a chosen multiple of the native frame rate.
///
/// Call [`Throttle::advance`] once per frame, and keep calling it, while
/// handling input in between, until it returns [`WaitStatus::Complete`].
pub struct Throttle<C: Clock = SystemClock> {
    clock: C,

    /// Current speed multiplier.
    scale: ScaleFactor,

    /// Set while the unthrottled preset is active. Frontends use it to skip
    /// their own audio/video synchronisation.
    max_speed: bool,

    /// Last rate reported by the emulation core.
    native_rate: NativeRate,

    /// Wall clock time of one frame at the current speed.
    budget: FrameBudget,

    window: PacingWindow,
}

impl Throttle<SystemClock> {
    /// Create a new `Throttle` at normal NTSC speed on the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock::new())
    }
}

impl<C: Clock> Throttle<C> {
    /// Create a new `Throttle` at normal NTSC speed on the given clock.
    pub fn with_clock(clock: C) -> Self {
        Self::with_config(ThrottleConfig::default(), clock)
    }

    pub fn with_config(config: ThrottleConfig, clock: C) -> Self {
        let mut throttle = Self {
            clock,
            scale: config.initial_scale,
            max_speed: false,
            native_rate: config.native_rate,
            budget: FrameBudget::default(),
            window: PacingWindow::new(),
        };

        throttle.recalculate_budget();
        throttle
    }

    /// Derive the frame budget from the native rate and current speed,
    /// and restart frame measurement.
    pub fn recalculate_budget(&mut self) {
        self.budget = FrameBudget::compute(self.native_rate, self.scale.get());
        self.window.reset();

        log::debug!(
            "Frame budget {:.3} ms (~{} ms) at {} x{:.4}",
            self.budget.as_millis_f64(),
            self.budget.millis(),
            self.native_rate,
            self.scale.get()
        );
    }

    /// Install the rate reported by the emulation core. Only recalculates
    /// when it actually changed.
    pub fn set_native_rate(&mut self, rate: NativeRate) {
        if rate == self.native_rate {
            return;
        }

        log::info!("Native frame rate changed to {}", rate);

        self.native_rate = rate;
        self.recalculate_budget();
    }

    /// Run one pacing step of the current frame. Sleeps at most
    /// [`MAX_SLICE_MS`](crate::pacing::MAX_SLICE_MS).
    pub fn advance(&mut self) -> WaitStatus {
        if self.scale.is_unthrottled() {
            return WaitStatus::Complete;
        }

        self.window.advance(&mut self.clock, &self.budget)
    }

    /// Block until the current frame's wait is over.
    pub fn wait_frame(&mut self) {
        while !self.advance().is_complete() {}
    }

    /// Step the speed up by a third of a doubling.
    pub fn increase_speed(&mut self) -> SpeedChange {
        self.apply(self.scale.faster(), false)
    }

    /// Step the speed down by a third of a halving.
    pub fn decrease_speed(&mut self) -> SpeedChange {
        self.apply(self.scale.slower(), false)
    }

    /// Set the speed to a whole percentage of native speed.
    ///
    /// Fails with [`ThrottleError::InvalidArgument`] below 1%, leaving the
    /// throttle untouched.
    pub fn set_speed_percent(&mut self, percent: i32) -> Result<SpeedChange> {
        if percent < 1 {
            return Err(ThrottleError::InvalidArgument { percent });
        }

        Ok(self.apply(ScaleFactor::from_percent(percent), false))
    }

    /// Apply a named speed command. `None` does nothing at all.
    pub fn set_preset(&mut self, preset: Option<SpeedPreset>) -> Option<SpeedChange> {
        let preset = preset?;
        let scale = preset.apply(self.scale);

        Some(self.apply(scale, preset == SpeedPreset::Fastest))
    }

    fn apply(&mut self, scale: ScaleFactor, max_speed: bool) -> SpeedChange {
        self.scale = scale;
        self.max_speed = max_speed;
        self.recalculate_budget();

        let change = SpeedChange { scale, max_speed };
        log::info!("{}", change);

        change
    }

    pub fn scale(&self) -> ScaleFactor {
        self.scale
    }

    pub fn max_speed(&self) -> bool {
        self.max_speed
    }

    pub fn native_rate(&self) -> NativeRate {
        self.native_rate
    }

    pub fn budget(&self) -> &FrameBudget {
        &self.budget
    }

    pub fn window(&self) -> &PacingWindow {
        &self.window
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}
