//! Calculator form state and the recompute rule.
//!
//! [`CalculatorState`] is one consistent snapshot of the form. Every change
//! goes through [`CalculatorState::apply`], which writes the edit and then
//! re-derives the output side of the active mode:
//!
//! - [`ActiveMode::PaceToTime`]: total time is recomputed from the pace
//! - [`ActiveMode::TimeToPace`]: pace is recomputed from the total time
//!
//! Both durations are always present. Whichever one the mode derives is
//! simply overwritten.

use serde::{Deserialize, Serialize};

use crate::engine::{convert_distance, pace_from_time, time_from_pace};
use crate::types::{ActiveMode, Edit, Pace, Preset, TotalTime, Unit};

/// One snapshot of the calculator form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct CalculatorState {
    pub mode: ActiveMode,
    pub unit: Unit,
    /// Preset-derived distance. Starts at a preset's km value and is rescaled
    /// in place by unit changes.
    pub distance: f64,
    /// Custom distance in the current unit
    pub custom_distance: f64,
    pub is_custom: bool,
    pub pace: Pace,
    pub time: TotalTime,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            mode: ActiveMode::PaceToTime,
            unit: Unit::Kilometers,
            distance: Preset::FiveK.km(),
            custom_distance: 5.0,
            is_custom: false,
            pace: Pace::new(5, 0),
            time: TotalTime::new(0, 25, 0),
        }
    }
}

impl CalculatorState {
    /// Distance the conversions run against.
    pub fn effective_distance(&self) -> f64 {
        if self.is_custom { self.custom_distance } else { self.distance }
    }

    /// Preset whose km value matches the current distance exactly.
    ///
    /// `None` while custom is active, and after a unit change has rescaled
    /// the preset value.
    pub fn selected_preset(&self) -> Option<Preset> {
        if self.is_custom {
            return None;
        }
        Preset::ALL.into_iter().find(|preset| preset.km() == self.distance)
    }

    /// Whether conversions currently have a positive distance to work with.
    pub fn has_valid_distance(&self) -> bool {
        let distance = self.effective_distance();
        distance.is_finite() && distance > 0.0
    }

    /// Re-derive the output side of the active mode.
    #[must_use]
    pub fn recompute(mut self) -> Self {
        let distance = self.effective_distance();
        match self.mode {
            ActiveMode::PaceToTime => self.time = time_from_pace(self.pace, distance),
            ActiveMode::TimeToPace => self.pace = pace_from_time(self.time, distance),
        }
        self
    }

    /// Apply one edit and restore consistency.
    #[must_use]
    pub fn apply(mut self, edit: Edit) -> Self {
        match edit {
            Edit::SetMode(mode) => self.mode = mode,
            Edit::SelectPreset(preset) => {
                self.distance = preset.km();
                self.is_custom = false;
            }
            Edit::SelectCustom => self.is_custom = true,
            Edit::SetCustomDistance(value) => {
                self.custom_distance = if value.is_finite() { value } else { 0.0 };
                self.is_custom = true;
            }
            Edit::SetUnit(unit) => {
                if unit != self.unit {
                    if self.is_custom {
                        self.custom_distance =
                            convert_distance(self.custom_distance, self.unit, unit);
                    } else {
                        self.distance = convert_distance(self.distance, self.unit, unit);
                    }
                    self.unit = unit;
                }
            }
            Edit::SetPaceMinutes(minutes) => self.pace.minutes = minutes,
            Edit::SetPaceSeconds(seconds) => self.pace.seconds = seconds,
            Edit::SetHours(hours) => self.time.hours = hours,
            Edit::SetMinutes(minutes) => self.time.minutes = minutes,
            Edit::SetSeconds(seconds) => self.time.seconds = seconds,
        }
        self.recompute()
    }
}
