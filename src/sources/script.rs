//! Script source that replays edits from a YAML file
//!
//! A script is a list of steps, each naming a field and the text typed into
//! it:
//!
//! ```yaml
//! - field: mode
//!   value: time_to_pace
//! - field: preset
//!   value: marathon
//! - field: hours
//!   value: "3"
//! - field: custom
//! ```

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, trace};

use crate::source::EditSource;
use crate::types::{Edit, Field};
use crate::{CalculatorError, Result};

/// One scripted edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptStep {
    pub field: Field,
    /// Raw text, as typed. Missing means empty.
    #[serde(default, deserialize_with = "text_or_number")]
    pub value: String,
}

/// Accept `value: 5` as well as `value: "5"`.
fn text_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_yaml_ng::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_yaml_ng::Value::Null => String::new(),
        serde_yaml_ng::Value::String(s) => s,
        serde_yaml_ng::Value::Number(n) => n.to_string(),
        serde_yaml_ng::Value::Bool(b) => b.to_string(),
        other => {
            return Err(serde::de::Error::custom(format!(
                "expected text or a number, got {:?}",
                other
            )));
        }
    })
}

/// Source that replays a fixed list of steps
pub struct ScriptSource {
    /// Where the steps came from
    origin: PathBuf,

    /// Remaining steps
    steps: VecDeque<ScriptStep>,

    /// Pause between steps (zero replays instantly)
    delay: Duration,

    /// Steps handed out so far
    position: usize,
}

impl ScriptSource {
    /// Load a script file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| CalculatorError::file_error(path.to_path_buf(), e))?;
        let mut source = Self::from_yaml(&text)?;
        source.origin = path.to_path_buf();

        info!("Opened script {}: {} steps", path.display(), source.steps.len());
        Ok(source)
    }

    /// Parse a script document
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let steps: Vec<ScriptStep> = if yaml.trim().is_empty() {
            Vec::new()
        } else {
            serde_yaml_ng::from_str(yaml)
                .map_err(|e| CalculatorError::parse_error("script", e.to_string()))?
        };
        Ok(Self::from_steps(steps))
    }

    /// Build a source from steps already in memory
    pub fn from_steps(steps: impl IntoIterator<Item = ScriptStep>) -> Self {
        Self {
            origin: PathBuf::from("<inline>"),
            steps: steps.into_iter().collect(),
            delay: Duration::ZERO,
            position: 0,
        }
    }

    /// Pause between steps, for demos
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        debug!("Script step delay set to {:?}", delay);
        self
    }

    /// Steps not yet replayed
    pub fn remaining(&self) -> usize {
        self.steps.len()
    }
}

#[async_trait::async_trait]
impl EditSource for ScriptSource {
    async fn next_edit(&mut self) -> Result<Option<Edit>> {
        let Some(step) = self.steps.pop_front() else {
            debug!("Script {} exhausted after {} steps", self.origin.display(), self.position);
            return Ok(None);
        };
        self.position += 1;

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        trace!("Step {}: {} {:?}", self.position, step.field, step.value);
        Edit::from_input(step.field, &step.value).map(Some).map_err(|e| match e {
            CalculatorError::InvalidCommand { input, reason } => CalculatorError::invalid_command(
                input,
                format!("{} (step {} of {})", reason, self.position, self.origin.display()),
            ),
            other => other,
        })
    }

    fn describe(&self) -> String {
        format!("script {}", self.origin.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ActiveMode, Preset};

    #[tokio::test]
    async fn test_replays_steps_in_order() {
        let mut source = ScriptSource::from_yaml(
            "- field: mode\n  value: time_to_pace\n- field: distance\n  value: marathon\n- field: hours\n  value: 3\n- field: custom\n",
        )
        .unwrap();
        assert_eq!(source.remaining(), 4);

        assert_eq!(source.next_edit().await.unwrap(), Some(Edit::SetMode(ActiveMode::TimeToPace)));
        assert_eq!(
            source.next_edit().await.unwrap(),
            Some(Edit::SelectPreset(Preset::Marathon))
        );
        assert_eq!(source.next_edit().await.unwrap(), Some(Edit::SetHours(3)));
        assert_eq!(source.next_edit().await.unwrap(), Some(Edit::SelectCustom));
        assert_eq!(source.next_edit().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_bad_selector_reports_step() {
        let mut source = ScriptSource::from_yaml("- field: unit\n  value: leagues\n").unwrap();
        let err = source.next_edit().await.unwrap_err();
        assert!(err.to_string().contains("step 1"));
        assert!(err.is_retryable());
        assert_eq!(source.next_edit().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_numeric_garbage_becomes_zero() {
        let mut source =
            ScriptSource::from_yaml("- field: custom_distance\n  value: \"far away\"\n").unwrap();
        assert_eq!(source.next_edit().await.unwrap(), Some(Edit::SetCustomDistance(0.0)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_paces_each_step() {
        let mut source = ScriptSource::from_yaml(
            "- field: hours\n  value: 1\n- field: minutes\n  value: 2\n- field: seconds\n  value: 3\n",
        )
        .unwrap()
        .with_delay(Duration::from_secs(2));

        let start = tokio::time::Instant::now();
        assert_eq!(source.next_edit().await.unwrap(), Some(Edit::SetHours(1)));
        assert!(start.elapsed() >= Duration::from_secs(2));

        while source.next_edit().await.unwrap().is_some() {}
        assert!(start.elapsed() >= Duration::from_secs(6));
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_delay_by_default() {
        let mut source = ScriptSource::from_yaml("- field: hours\n  value: 1\n").unwrap();
        let start = tokio::time::Instant::now();
        source.next_edit().await.unwrap();
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let result = ScriptSource::from_yaml("- field: altitude\n  value: 3\n");
        assert!(matches!(result, Err(CalculatorError::Parse { .. })));
    }

    #[test]
    fn test_empty_script() {
        assert_eq!(ScriptSource::from_yaml("").unwrap().remaining(), 0);
    }
}
