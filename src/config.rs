//! Initial form state loaded from YAML.
//!
//! Every key is optional; a missing key keeps the stock starting form (5k
//! preset, km, 5:00 pace, 25:00 finish, pace → time).
//!
//! ```yaml
//! mode: time_to_pace
//! unit: miles
//! custom_distance: 13.1
//! time:
//!   hours: 1
//!   minutes: 45
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::state::CalculatorState;
use crate::types::{ActiveMode, Pace, Preset, TotalTime, Unit};
use crate::{CalculatorError, Result};

/// Starting values for a calculator session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    pub mode: ActiveMode,
    pub unit: Unit,
    /// Preset to start on. Mutually exclusive with `custom_distance`.
    pub distance: Option<Preset>,
    /// Start on a custom distance, in `unit`.
    pub custom_distance: Option<f64>,
    pub pace: Pace,
    pub time: TotalTime,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        let state = CalculatorState::default();
        Self {
            mode: state.mode,
            unit: state.unit,
            distance: None,
            custom_distance: None,
            pace: state.pace,
            time: state.time,
        }
    }
}

impl CalculatorConfig {
    /// Read a config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| CalculatorError::file_error(path.to_path_buf(), e))?;
        debug!("Loaded config from {} ({} bytes)", path.display(), text.len());
        Self::from_yaml(&text)
    }

    /// Parse a config document. An empty document is the default config.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml_ng::from_str(yaml)
            .map_err(|e| CalculatorError::parse_error("config", e.to_string()))
    }

    /// Build the first snapshot, already recomputed for the starting mode.
    pub fn initial_state(&self) -> Result<CalculatorState> {
        let defaults = CalculatorState::default();

        let (distance, custom_distance, is_custom) = match (self.distance, self.custom_distance) {
            (Some(_), Some(_)) => {
                return Err(CalculatorError::config_error(
                    "both 'distance' and 'custom_distance' are set",
                ));
            }
            (_, Some(custom)) if !(custom.is_finite() && custom > 0.0) => {
                return Err(CalculatorError::config_error(format!(
                    "custom_distance must be a positive number, got {}",
                    custom
                )));
            }
            (None, Some(custom)) => (defaults.distance, custom, true),
            (Some(preset), None) => (preset.km(), defaults.custom_distance, false),
            (None, None) => (defaults.distance, defaults.custom_distance, false),
        };

        let state = CalculatorState {
            mode: self.mode,
            unit: self.unit,
            distance,
            custom_distance,
            is_custom,
            pace: self.pace,
            time: self.time,
        };
        Ok(state.recompute())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_matches_default_state() {
        let config = CalculatorConfig::from_yaml("").unwrap();
        assert_eq!(config, CalculatorConfig::default());
        assert_eq!(config.initial_state().unwrap(), CalculatorState::default());
    }

    #[test]
    fn test_custom_distance_config() {
        let config = CalculatorConfig::from_yaml(
            "mode: time_to_pace\nunit: miles\ncustom_distance: 10\ntime:\n  hours: 1\n",
        )
        .unwrap();
        let state = config.initial_state().unwrap();
        assert!(state.is_custom);
        assert_eq!(state.unit, Unit::Miles);
        assert_eq!(state.pace, Pace::new(6, 0));
        // Unspecified time fields default to zero once a time block is given
        assert_eq!(state.time, TotalTime::new(1, 0, 0));
    }

    #[test]
    fn test_preset_config() {
        let config = CalculatorConfig::from_yaml("distance: half_marathon\npace:\n  minutes: 4\n")
            .unwrap();
        let state = config.initial_state().unwrap();
        assert_eq!(state.selected_preset(), Some(Preset::HalfMarathon));
        // 240 * 21.0975 = 5063.4s
        assert_eq!(state.time, TotalTime::new(1, 24, 23));
    }

    #[test]
    fn test_conflicting_distances_rejected() {
        let config = CalculatorConfig::from_yaml("distance: 10k\ncustom_distance: 3\n").unwrap();
        assert!(matches!(config.initial_state(), Err(CalculatorError::Config { .. })));
    }

    #[test]
    fn test_non_positive_custom_rejected() {
        let config = CalculatorConfig::from_yaml("custom_distance: 0\n").unwrap();
        assert!(matches!(config.initial_state(), Err(CalculatorError::Config { .. })));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result = CalculatorConfig::from_yaml("units: km\n");
        assert!(matches!(result, Err(CalculatorError::Parse { .. })));
    }

    #[test]
    fn test_missing_file_is_file_error() {
        let result = CalculatorConfig::load("/definitely/not/here.yaml");
        assert!(matches!(result, Err(CalculatorError::File { .. })));
    }
}
