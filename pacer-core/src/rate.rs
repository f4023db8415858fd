//! Native frame rate as reported by the emulation core.

use std::fmt;

/// Scale of the fixed point representation (2^24).
const FIXED_ONE: f64 = 16_777_216.0;

/// Native refresh rate of the emulated machine, in Hz, stored as a
/// 8.24 fixed point integer. Shift right by 24 to get whole Hz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativeRate(i32);

impl NativeRate {
    /// NTSC, 60.0998 Hz.
    pub const NTSC: NativeRate = NativeRate(1_008_307_711);

    /// PAL, 50.0070 Hz.
    pub const PAL: NativeRate = NativeRate(838_977_920);

    /// Dendy clones run their picture at PAL rate.
    pub const DENDY: NativeRate = NativeRate(838_977_920);

    /// Wrap a raw fixed point value as reported by the core.
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Convert a rate in Hz into the fixed point form.
    /// Saturates at the bounds of `i32`.
    pub fn from_hz(hz: f64) -> Self {
        Self((hz * FIXED_ONE) as i32)
    }

    pub const fn raw(self) -> i32 {
        self.0
    }

    /// The rate in Hz.
    pub fn hz(self) -> f64 {
        f64::from(self.0) / FIXED_ONE
    }
}

impl Default for NativeRate {
    fn default() -> Self {
        Self::NTSC
    }
}

impl fmt::Display for NativeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} Hz", self.hz())
    }
}
