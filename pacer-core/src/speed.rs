//! Emulation speed state and the commands that change it.

use std::{fmt, str::FromStr, time::Duration};

use crate::error::ThrottleError;

/// 1/64x, around 1 fps on NTSC.
pub const SLOWEST: f64 = 0.015_625;

/// 1x, native speed.
pub const NORMAL: f64 = 1.0;

/// 32x, around 1920 fps on NTSC. Reaching it disables throttling.
pub const FASTEST: f64 = 32.0;

/// Cube root of two. Three steps in the same direction double or
/// halve the speed.
pub const STEP: f64 = 1.259_921_049_894_873_2;

/// Multiplier applied to the native frame rate, always within
/// `[SLOWEST, FASTEST]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    pub const SLOWEST: ScaleFactor = ScaleFactor(SLOWEST);
    pub const NORMAL: ScaleFactor = ScaleFactor(NORMAL);
    pub const FASTEST: ScaleFactor = ScaleFactor(FASTEST);

    /// Create a new `ScaleFactor`, clamping it into range. NaN maps to
    /// normal speed.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::NORMAL;
        }

        Self(value.max(SLOWEST).min(FASTEST))
    }

    /// Scale factor for a whole percentage of native speed.
    pub fn from_percent(percent: i32) -> Self {
        Self::new(f64::from(percent) / 100.0)
    }

    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }

    /// Speed as a percentage of native speed.
    #[inline]
    pub fn percent(self) -> f64 {
        self.0 * 100.0
    }

    /// Is the speed pinned at the upper bound?
    #[inline]
    pub fn is_unthrottled(self) -> bool {
        self.0 >= FASTEST
    }

    /// One geometric step up.
    pub fn faster(self) -> Self {
        Self::new(self.0 * STEP)
    }

    /// One geometric step down.
    pub fn slower(self) -> Self {
        Self::new(self.0 / STEP)
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Named speed commands, as bound to hotkeys by frontends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpeedPreset {
    Slowest,
    Slower,
    Normal,
    Faster,
    Fastest,
}

impl SpeedPreset {
    /// Decode a numeric speed command. Codes outside `0..=4` mean
    /// "no command" and yield `None`.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(SpeedPreset::Slowest),
            1 => Some(SpeedPreset::Slower),
            2 => Some(SpeedPreset::Normal),
            3 => Some(SpeedPreset::Faster),
            4 => Some(SpeedPreset::Fastest),

            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            SpeedPreset::Slowest => 0,
            SpeedPreset::Slower => 1,
            SpeedPreset::Normal => 2,
            SpeedPreset::Faster => 3,
            SpeedPreset::Fastest => 4,
        }
    }

    /// Apply the preset to the current scale.
    pub fn apply(self, current: ScaleFactor) -> ScaleFactor {
        match self {
            SpeedPreset::Slowest => ScaleFactor::SLOWEST,
            SpeedPreset::Slower => current.slower(),
            SpeedPreset::Normal => ScaleFactor::NORMAL,
            SpeedPreset::Faster => current.faster(),
            SpeedPreset::Fastest => ScaleFactor::FASTEST,
        }
    }
}

impl FromStr for SpeedPreset {
    type Err = ThrottleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "slowest" => Ok(SpeedPreset::Slowest),
            "slower" => Ok(SpeedPreset::Slower),
            "normal" => Ok(SpeedPreset::Normal),
            "faster" => Ok(SpeedPreset::Faster),
            "fastest" => Ok(SpeedPreset::Fastest),

            _ => Err(ThrottleError::UnknownPreset(s.to_owned())),
        }
    }
}

impl fmt::Display for SpeedPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpeedPreset::Slowest => "slowest",
            SpeedPreset::Slower => "slower",
            SpeedPreset::Normal => "normal",
            SpeedPreset::Faster => "faster",
            SpeedPreset::Fastest => "fastest",
        };

        f.write_str(name)
    }
}

/// Outcome of a speed command, handed back to the caller for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedChange {
    /// The scale factor now in effect.
    pub scale: ScaleFactor,

    /// Whether the unthrottled preset is active.
    pub max_speed: bool,
}

impl SpeedChange {
    /// How long the message should stay on screen. Zero leaves the
    /// choice to the display layer.
    pub fn display_duration(&self) -> Duration {
        Duration::ZERO
    }
}

impl fmt::Display for SpeedChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Emulation speed {:.1}%", self.scale.percent())
    }
}
