//! Wall clock time allotted to a single emulated frame.

use crate::rate::NativeRate;

/// Smallest budget handed out when the inputs do not yield a positive one.
const MIN_BUDGET_SECS: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameBudget {
    /// Frame duration in seconds. Always positive and finite.
    seconds: f64,

    /// Truncated millisecond estimate, never below 1.
    millis: u32,
}

impl FrameBudget {
    /// Compute the budget of one frame running at `rate` times `scale`.
    pub fn compute(rate: NativeRate, scale: f64) -> Self {
        let mut seconds = 1.0 / (rate.hz() * scale);

        // Catches zero, negative and NaN rates alike.
        if !(seconds > 0.0 && seconds.is_finite()) {
            seconds = MIN_BUDGET_SECS;
        }

        let millis = ((seconds * 1000.0) as u32).max(1);

        Self { seconds, millis }
    }

    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    pub fn millis(&self) -> u32 {
        self.millis
    }

    /// Budget in fractional milliseconds, used to place frame deadlines.
    pub fn as_millis_f64(&self) -> f64 {
        self.seconds * 1000.0
    }
}

impl Default for FrameBudget {
    fn default() -> Self {
        Self::compute(NativeRate::default(), 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speed::{FASTEST, SLOWEST};

    #[test]
    fn budget_is_inverse_of_scaled_rate() {
        let rate = NativeRate::from_hz(60.0);

        for &scale in &[SLOWEST, 0.5, 1.0, 2.0, 7.3, FASTEST] {
            let budget = FrameBudget::compute(rate, scale);
            let expected = 1.0 / (60.0 * scale);

            assert!((budget.seconds() - expected).abs() < 1e-12);
            assert!(budget.seconds() > 0.0);
            assert!(budget.millis() >= 1);
        }
    }

    #[test]
    fn millisecond_hint_truncates() {
        let budget = FrameBudget::compute(NativeRate::from_hz(60.0), 1.0);
        assert_eq!(budget.millis(), 16);

        let budget = FrameBudget::compute(NativeRate::from_hz(60.0), SLOWEST);
        assert_eq!(budget.millis(), 1066);
    }

    #[test]
    fn sub_millisecond_budget_keeps_a_one_ms_hint() {
        let budget = FrameBudget::compute(NativeRate::NTSC, FASTEST);

        assert!(budget.seconds() < 0.001);
        assert_eq!(budget.millis(), 1);
    }

    #[test]
    fn pathological_rates_are_clamped() {
        for &raw in &[0, -1, i32::MIN] {
            let budget = FrameBudget::compute(NativeRate::from_raw(raw), 1.0);

            assert_eq!(budget.seconds(), MIN_BUDGET_SECS);
            assert_eq!(budget.millis(), 1);
        }
    }

    #[test]
    fn default_is_ntsc_at_normal_speed() {
        let budget = FrameBudget::default();

        assert!((budget.seconds() - 1.0 / 60.099_823).abs() < 1e-7);
    }
}
