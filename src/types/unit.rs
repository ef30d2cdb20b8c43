//! Distance unit definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{CalculatorError, Result};

/// Unit system for distances and paces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// Kilometers (presets are defined in this unit)
    #[default]
    #[serde(alias = "km")]
    Kilometers,
    /// Statute miles
    #[serde(alias = "mi", alias = "mile")]
    Miles,
}

impl Unit {
    /// Short label shown next to distances and in "per ..." pace captions.
    pub const fn abbreviation(&self) -> &'static str {
        match self {
            Unit::Kilometers => "km",
            Unit::Miles => "miles",
        }
    }

    /// Full name shown on the unit selector.
    pub const fn name(&self) -> &'static str {
        match self {
            Unit::Kilometers => "Kilometers",
            Unit::Miles => "Miles",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for Unit {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "km" | "kms" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => {
                Ok(Unit::Kilometers)
            }
            "mi" | "mile" | "miles" => Ok(Unit::Miles),
            other => Err(CalculatorError::invalid_command(s, format!("unknown unit '{}'", other))),
        }
    }
}
