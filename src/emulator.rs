//! Stand-in for an emulation core.

use std::{str::FromStr, time::Duration};

use pacer_core::NativeRate;

/// Video standard of the emulated console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Ntsc,
    Pal,
    Dendy,
}

impl Region {
    pub fn native_rate(self) -> NativeRate {
        match self {
            Region::Ntsc => NativeRate::NTSC,
            Region::Pal => NativeRate::PAL,
            Region::Dendy => NativeRate::DENDY,
        }
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ntsc" => Ok(Region::Ntsc),
            "pal" => Ok(Region::Pal),
            "dendy" => Ok(Region::Dendy),

            _ => Err(format!("unknown region `{}`, expected ntsc, pal or dendy", s)),
        }
    }
}

/// Emulation core that does nothing but burn a fixed amount of host time
/// per frame.
pub struct SimulatedCore {
    /// Reported refresh rate.
    rate: NativeRate,

    /// Host time spent emulating one frame.
    work: Duration,

    /// Frames executed so far.
    frames: u64,
}

impl SimulatedCore {
    /// Create a new `SimulatedCore` instance.
    pub fn new(rate: NativeRate, work: Duration) -> Self {
        Self {
            rate,
            work,
            frames: 0,
        }
    }

    /// Execute a frame's worth of emulation.
    pub fn execute_frame(&mut self) {
        if !self.work.is_zero() {
            std::thread::sleep(self.work);
        }

        self.frames += 1;
    }

    /// The frame rate the core wants to be presented at.
    pub fn desired_rate(&self) -> NativeRate {
        self.rate
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}
