//! Whole-second durations shown on the form

use serde::{Deserialize, Serialize};
use std::fmt;

/// Time per one unit of distance.
///
/// `seconds` is not required to stay below 60; the engine treats the pace as
/// `minutes * 60 + seconds` seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(default)]
pub struct Pace {
    pub minutes: u32,
    pub seconds: u32,
}

impl Pace {
    pub const ZERO: Pace = Pace { minutes: 0, seconds: 0 };

    pub const fn new(minutes: u32, seconds: u32) -> Self {
        Self { minutes, seconds }
    }

    /// Seconds per unit of distance.
    pub fn total_seconds(&self) -> f64 {
        f64::from(self.minutes) * 60.0 + f64::from(self.seconds)
    }
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}m {:02}s", self.minutes, self.seconds)
    }
}

/// Elapsed time for the whole distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(default)]
pub struct TotalTime {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl TotalTime {
    pub const ZERO: TotalTime = TotalTime { hours: 0, minutes: 0, seconds: 0 };

    pub const fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self { hours, minutes, seconds }
    }

    pub fn total_seconds(&self) -> f64 {
        f64::from(self.hours) * 3600.0 + f64::from(self.minutes) * 60.0 + f64::from(self.seconds)
    }
}

impl fmt::Display for TotalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}h {:02}m {:02}s", self.hours, self.minutes, self.seconds)
    }
}
