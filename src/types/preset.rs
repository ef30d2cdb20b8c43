//! Named race distances

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{CalculatorError, Result};

/// One of the popular race distances offered on the distance selector.
///
/// Values are always kilometers, even while the calculator shows miles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub enum Preset {
    #[serde(rename = "5k")]
    FiveK,
    #[serde(rename = "10k")]
    TenK,
    #[serde(rename = "half_marathon", alias = "half", alias = "Half Marathon")]
    HalfMarathon,
    #[serde(rename = "marathon", alias = "Marathon")]
    Marathon,
}

impl Preset {
    /// Presets in selector order.
    pub const ALL: [Preset; 4] = [Preset::FiveK, Preset::TenK, Preset::HalfMarathon, Preset::Marathon];

    /// Distance in kilometers.
    pub const fn km(&self) -> f64 {
        match self {
            Preset::FiveK => 5.0,
            Preset::TenK => 10.0,
            Preset::HalfMarathon => 21.0975,
            Preset::Marathon => 42.195,
        }
    }

    /// Selector label.
    pub const fn label(&self) -> &'static str {
        match self {
            Preset::FiveK => "5k",
            Preset::TenK => "10k",
            Preset::HalfMarathon => "Half Marathon",
            Preset::Marathon => "Marathon",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Preset {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "5k" | "5km" => Ok(Preset::FiveK),
            "10k" | "10km" => Ok(Preset::TenK),
            "half" | "halfmarathon" | "hm" => Ok(Preset::HalfMarathon),
            "marathon" | "full" => Ok(Preset::Marathon),
            _ => Err(CalculatorError::invalid_command(
                s,
                "unknown distance (expected 5k, 10k, half or marathon)",
            )),
        }
    }
}
