//! Running pace calculator.
//!
//! Pacer converts between running pace (time per km or mile) and finish time
//! for the popular race distances or any custom distance.
//!
//! # Features
//!
//! - **Two directions**: pace → finish time, or finish time → pace
//! - **Race presets**: 5k, 10k, Half Marathon, Marathon
//! - **Units**: kilometers and miles, with in-place distance rescaling
//! - **Forgiving input**: unparseable numbers read as zero, never as errors
//!
//! # Quick Start
//!
//! The conversions and the form state are plain synchronous values:
//!
//! ```rust
//! use pacer::{CalculatorState, Edit, Preset, TotalTime};
//!
//! let state = CalculatorState::default()
//!     .apply(Edit::SelectPreset(Preset::TenK))
//!     .apply(Edit::SetPaceMinutes(4))
//!     .apply(Edit::SetPaceSeconds(30));
//!
//! assert_eq!(state.time, TotalTime::new(0, 45, 0));
//! ```
//!
//! ## Example (scripted session)
//!
//! ```rust,no_run
//! use pacer::{CalculatorConfig, Pacer};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> pacer::Result<()> {
//!     let session = Pacer::replay("race-plan.yaml", &CalculatorConfig::default()).await?;
//!     let last = session.finished().await;
//!     println!("{}", pacer::render::render(&last));
//!     Ok(())
//! }
//! ```

// Core types and error handling
pub mod engine;
mod error;
pub mod input;
pub mod state;
#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;
pub mod types;

// Edit-driven session architecture
pub mod driver;
pub mod session;
pub mod source;
pub mod sources;

// Outer surfaces
pub mod config;
pub mod render;

// Core exports
pub use error::*;
pub use state::CalculatorState;
pub use types::*;

pub use config::CalculatorConfig;
pub use session::Session;
pub use source::EditSource;
pub use sources::{ChannelSource, EditSender, ScriptSource, TerminalSource};

/// Unified entry point for calculator sessions.
///
/// Each constructor builds the starting form from a [`CalculatorConfig`] and
/// spawns a driver on the current tokio runtime.
pub struct Pacer;

impl Pacer {
    /// Run against commands typed on stdin.
    ///
    /// # Errors
    ///
    /// Returns an error if the config describes an impossible starting form.
    pub async fn interactive(config: &CalculatorConfig) -> Result<Session> {
        let initial = config.initial_state()?;
        Ok(Session::start(TerminalSource::stdin(), initial))
    }

    /// Replay a YAML edit script.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The script cannot be read or parsed
    /// - The config describes an impossible starting form
    pub async fn replay<P: AsRef<std::path::Path>>(
        path: P,
        config: &CalculatorConfig,
    ) -> Result<Session> {
        Self::replay_paced(path, config, std::time::Duration::ZERO).await
    }

    /// Replay a YAML edit script, pausing `delay` before each step.
    ///
    /// # Errors
    ///
    /// Same as [`Pacer::replay`].
    pub async fn replay_paced<P: AsRef<std::path::Path>>(
        path: P,
        config: &CalculatorConfig,
        delay: std::time::Duration,
    ) -> Result<Session> {
        let initial = config.initial_state()?;
        let source = ScriptSource::open(path)?.with_delay(delay);
        Ok(Session::start(source, initial))
    }

    /// Drive a session from code.
    ///
    /// The session ends once every [`EditSender`] clone is dropped.
    ///
    /// ```rust
    /// use pacer::{CalculatorConfig, Edit, Pacer, Unit};
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() -> pacer::Result<()> {
    /// let (session, edits) = Pacer::channel(&CalculatorConfig::default()).await?;
    /// edits.send(Edit::SetUnit(Unit::Miles)).await?;
    /// drop(edits);
    /// assert_eq!(session.finished().await.unit, Unit::Miles);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn channel(config: &CalculatorConfig) -> Result<(Session, EditSender)> {
        let initial = config.initial_state()?;
        let (source, sender) = ChannelSource::channel();
        Ok((Session::start(source, initial), sender))
    }
}
