//! Test utilities for fixture resolution and offline script replay
//!
//! Edit scripts used by tests and benchmarks live under `test-data/scripts/`.

#![cfg(any(test, feature = "benchmark"))]

use std::path::{Path, PathBuf};

use crate::sources::ScriptStep;
use crate::state::CalculatorState;
use crate::types::Edit;

/// Guidance shown when a fixture is missing from the checkout.
pub const FIXTURE_GUIDANCE: &str =
    "Script fixtures are stored under test-data/scripts/ at the crate root.";

/// Error returned when a required fixture cannot be located.
#[derive(Debug, Clone)]
pub struct FixtureError {
    message: String,
}

impl FixtureError {
    fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl std::fmt::Display for FixtureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for FixtureError {}

/// Require that a specific fixture exists on disk.
pub fn require_fixture<P: AsRef<Path>>(path: P) -> Result<PathBuf, FixtureError> {
    let path_ref = path.as_ref();
    if path_ref.exists() {
        Ok(path_ref.to_path_buf())
    } else {
        Err(FixtureError::new(format!(
            "Missing fixture: {}. {}",
            path_ref.display(),
            FIXTURE_GUIDANCE
        )))
    }
}

/// The `test-data` directory at the crate root.
pub fn get_test_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("test-data")
}

/// Path of a named script under `test-data/scripts/`.
pub fn script_fixture(name: &str) -> Result<PathBuf, FixtureError> {
    require_fixture(get_test_data_dir().join("scripts").join(name))
}

/// All `.yaml` scripts under `test-data/scripts/`, sorted by name.
pub fn get_script_fixtures() -> Vec<PathBuf> {
    let dir = get_test_data_dir().join("scripts");
    let mut scripts = vec![];
    if let Ok(entries) = std::fs::read_dir(&dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some("yaml") {
                scripts.push(path);
            }
        }
    }
    scripts.sort();
    scripts
}

/// Read the steps of a script file.
pub fn load_steps<P: AsRef<Path>>(path: P) -> Result<Vec<ScriptStep>, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_yaml_ng::from_str(&text)?)
}

/// Apply steps without a runtime, skipping any a session would reject.
pub fn apply_steps(state: CalculatorState, steps: &[ScriptStep]) -> CalculatorState {
    steps
        .iter()
        .filter_map(|step| Edit::from_input(step.field, &step.value).ok())
        .fold(state, CalculatorState::apply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Pace, TotalTime};

    #[test]
    fn test_missing_fixture_mentions_guidance() {
        let err = require_fixture("/no/such/script.yaml").unwrap_err();
        assert!(err.to_string().contains(FIXTURE_GUIDANCE));
    }

    #[test]
    fn test_fixtures_are_discovered() {
        let scripts = get_script_fixtures();
        assert!(!scripts.is_empty(), "{}", FIXTURE_GUIDANCE);
        for script in &scripts {
            load_steps(script).unwrap_or_else(|e| panic!("{}: {}", script.display(), e));
        }
    }

    #[test]
    fn test_marathon_plan_fixture() {
        let path = script_fixture("marathon_plan.yaml").unwrap();
        let steps = load_steps(&path).unwrap();
        let state = apply_steps(CalculatorState::default(), &steps);
        assert_eq!(state.time, TotalTime::new(3, 30, 0));
        // 12600 / 42.195 = 298.6s
        assert_eq!(state.pace, Pace::new(4, 58));
    }
}
