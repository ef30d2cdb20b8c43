//! Active calculation direction

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{CalculatorError, Result};

/// Which side of the form is the input and which is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "snake_case")]
pub enum ActiveMode {
    /// Pace is edited, total time is derived
    #[default]
    #[serde(alias = "timeFromPace")]
    PaceToTime,
    /// Total time is edited, pace is derived
    #[serde(alias = "paceFromTime")]
    TimeToPace,
}

impl ActiveMode {
    /// Tab caption.
    pub const fn label(&self) -> &'static str {
        match self {
            ActiveMode::PaceToTime => "Pace → Time",
            ActiveMode::TimeToPace => "Time → Pace",
        }
    }
}

impl fmt::Display for ActiveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ActiveMode {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "pacetotime" | "timefrompace" => Ok(ActiveMode::PaceToTime),
            "timetopace" | "pacefromtime" => Ok(ActiveMode::TimeToPace),
            _ => Err(CalculatorError::invalid_command(
                s,
                "unknown mode (expected pace-to-time or time-to-pace)",
            )),
        }
    }
}
