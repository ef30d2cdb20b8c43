//! Form fields and the edits that mutate them

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{ActiveMode, Preset, Unit};
use crate::input::{parse_float_or_zero, parse_int_or_zero};
use crate::{CalculatorError, Result};

/// Every user-editable input on the calculator form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Mode tabs
    Mode,
    /// Preset radio group
    #[serde(alias = "distance")]
    Preset,
    /// "Custom" radio button
    Custom,
    /// Custom distance number box
    CustomDistance,
    /// Unit radio group
    Unit,
    PaceMinutes,
    PaceSeconds,
    Hours,
    Minutes,
    Seconds,
}

impl Field {
    /// Fields in form order.
    pub const ALL: [Field; 10] = [
        Field::Mode,
        Field::Preset,
        Field::Custom,
        Field::CustomDistance,
        Field::Unit,
        Field::PaceMinutes,
        Field::PaceSeconds,
        Field::Hours,
        Field::Minutes,
        Field::Seconds,
    ];

    /// Command word used by the terminal front end.
    pub const fn command(&self) -> &'static str {
        match self {
            Field::Mode => "mode",
            Field::Preset => "distance",
            Field::Custom => "custom",
            Field::CustomDistance => "custom-distance",
            Field::Unit => "unit",
            Field::PaceMinutes => "pace-min",
            Field::PaceSeconds => "pace-sec",
            Field::Hours => "hours",
            Field::Minutes => "minutes",
            Field::Seconds => "seconds",
        }
    }

    /// One-line usage shown by `help`.
    pub const fn usage(&self) -> &'static str {
        match self {
            Field::Mode => "mode <pace-to-time|time-to-pace>",
            Field::Preset => "distance <5k|10k|half|marathon>",
            Field::Custom => "custom [value]",
            Field::CustomDistance => "custom-distance <value>",
            Field::Unit => "unit <km|miles>",
            Field::PaceMinutes => "pace-min <n>",
            Field::PaceSeconds => "pace-sec <n>",
            Field::Hours => "hours <n>",
            Field::Minutes => "minutes <n>",
            Field::Seconds => "seconds <n>",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

impl FromStr for Field {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self> {
        let field = match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "mode" | "tab" => Field::Mode,
            "distance" | "preset" => Field::Preset,
            "custom" => Field::Custom,
            "custom-distance" | "dist" => Field::CustomDistance,
            "unit" | "units" => Field::Unit,
            "pace-min" | "pace-minutes" | "pm" => Field::PaceMinutes,
            "pace-sec" | "pace-seconds" | "ps" => Field::PaceSeconds,
            "hours" | "h" => Field::Hours,
            "minutes" | "min" | "m" => Field::Minutes,
            "seconds" | "sec" | "s" => Field::Seconds,
            _ => return Err(CalculatorError::invalid_command(s, "unknown field")),
        };
        Ok(field)
    }
}

/// A single user edit to the form.
///
/// Numeric payloads are already coerced; use [`Edit::from_input`] to build an
/// edit from raw field text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "snake_case")]
pub enum Edit {
    SetMode(ActiveMode),
    SelectPreset(Preset),
    /// Switch to the custom distance without touching its value
    SelectCustom,
    SetCustomDistance(f64),
    SetUnit(Unit),
    SetPaceMinutes(u32),
    SetPaceSeconds(u32),
    SetHours(u32),
    SetMinutes(u32),
    SetSeconds(u32),
}

impl Edit {
    /// Build an edit from the raw text typed into `field`.
    ///
    /// Numeric fields never fail: unparseable text becomes 0. Selector fields
    /// fail with [`CalculatorError::InvalidCommand`] when the word names no
    /// option.
    pub fn from_input(field: Field, text: &str) -> Result<Self> {
        let edit = match field {
            Field::Mode => Edit::SetMode(text.parse()?),
            Field::Preset => Edit::SelectPreset(text.parse()?),
            Field::Custom => Edit::SelectCustom,
            Field::CustomDistance => Edit::SetCustomDistance(parse_float_or_zero(text)),
            Field::Unit => Edit::SetUnit(text.parse()?),
            Field::PaceMinutes => Edit::SetPaceMinutes(parse_int_or_zero(text)),
            Field::PaceSeconds => Edit::SetPaceSeconds(parse_int_or_zero(text)),
            Field::Hours => Edit::SetHours(parse_int_or_zero(text)),
            Field::Minutes => Edit::SetMinutes(parse_int_or_zero(text)),
            Field::Seconds => Edit::SetSeconds(parse_int_or_zero(text)),
        };
        Ok(edit)
    }

    /// The field this edit writes.
    pub const fn field(&self) -> Field {
        match self {
            Edit::SetMode(_) => Field::Mode,
            Edit::SelectPreset(_) => Field::Preset,
            Edit::SelectCustom => Field::Custom,
            Edit::SetCustomDistance(_) => Field::CustomDistance,
            Edit::SetUnit(_) => Field::Unit,
            Edit::SetPaceMinutes(_) => Field::PaceMinutes,
            Edit::SetPaceSeconds(_) => Field::PaceSeconds,
            Edit::SetHours(_) => Field::Hours,
            Edit::SetMinutes(_) => Field::Minutes,
            Edit::SetSeconds(_) => Field::Seconds,
        }
    }

    /// Whether this edit writes the side that `mode` derives, so recompute
    /// will overwrite it.
    pub const fn targets_derived(&self, mode: ActiveMode) -> bool {
        match (self, mode) {
            (Edit::SetPaceMinutes(_) | Edit::SetPaceSeconds(_), ActiveMode::TimeToPace) => true,
            (
                Edit::SetHours(_) | Edit::SetMinutes(_) | Edit::SetSeconds(_),
                ActiveMode::PaceToTime,
            ) => true,
            _ => false,
        }
    }
}
