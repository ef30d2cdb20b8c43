//! Driver spawns and manages the edit processing task

use std::sync::Arc;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, trace, warn};

use crate::source::EditSource;
use crate::state::CalculatorState;

/// Consecutive source failures before the driver gives up on a source.
/// Rejected commands are retryable and never count.
const MAX_ERRORS: u32 = 10;

/// Result of spawning the driver task
pub struct DriverChannels {
    /// Receiver for form snapshots; closes when the driver stops
    pub states: watch::Receiver<Arc<CalculatorState>>,
    /// Cancellation token for graceful shutdown
    pub cancel: CancellationToken,
}

/// Driver applies edits from a source to the form, one at a time
///
/// The task owns both the source and the current snapshot. Each edit is
/// applied and recomputed before the next one is read, and only complete
/// snapshots are published.
pub struct Driver;

impl Driver {
    /// Spawn the driver task for the given source
    ///
    /// `initial` is published immediately. Must be called from within a
    /// tokio runtime.
    pub fn spawn<S>(source: S, initial: CalculatorState) -> DriverChannels
    where
        S: EditSource,
    {
        let (state_tx, state_rx) = watch::channel(Arc::new(initial));
        let cancel = CancellationToken::new();
        let cancel_task = cancel.clone();

        tokio::spawn(async move {
            Self::edit_loop(source, initial, state_tx, cancel_task).await;
        });

        DriverChannels { states: state_rx, cancel }
    }

    async fn edit_loop<S>(
        mut source: S,
        mut state: CalculatorState,
        state_tx: watch::Sender<Arc<CalculatorState>>,
        cancel: CancellationToken,
    ) where
        S: EditSource,
    {
        let origin = source.describe();
        info!("Edit loop started ({})", origin);
        let mut edit_count = 0u64;
        let mut error_count = 0u32;

        loop {
            let result = tokio::select! {
                _ = cancel.cancelled() => {
                    info!("Edit loop cancelled");
                    break;
                }
                result = source.next_edit() => result,
            };

            match result {
                Ok(Some(edit)) => {
                    edit_count += 1;
                    error_count = 0;

                    if edit.targets_derived(state.mode) {
                        debug!(
                            "Edit {} writes {} which {} derives; it will be recomputed",
                            edit_count,
                            edit.field(),
                            state.mode
                        );
                    }

                    state = state.apply(edit);
                    debug!("Edit {}: {:?}", edit_count, edit);
                    trace!(
                        "Snapshot: pace={} time={} distance={}",
                        state.pace,
                        state.time,
                        state.effective_distance()
                    );

                    if state_tx.send(Arc::new(state)).is_err() {
                        debug!("State receivers dropped, shutting down");
                        break;
                    }
                }
                Ok(None) => {
                    info!("{} ended after {} edits", origin, edit_count);
                    break;
                }
                Err(e) if e.is_retryable() => {
                    warn!("Rejected input from {}: {}", origin, e);
                }
                Err(e) => {
                    error_count += 1;
                    warn!("Source error ({}/{}): {}", error_count, MAX_ERRORS, e);

                    if error_count >= MAX_ERRORS {
                        error!("Too many errors from {}, shutting down", origin);
                        break;
                    }
                }
            }
        }

        info!("Edit loop ended (applied {} edits)", edit_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{ChannelSource, ScriptSource, TerminalSource};
    use crate::types::{Edit, Pace, TotalTime};
    use crate::{CalculatorError, Result};

    /// Fails with a parse error a fixed number of times, then yields one edit.
    struct FailingSource {
        failures: u32,
        then: Option<Edit>,
    }

    #[async_trait::async_trait]
    impl EditSource for FailingSource {
        async fn next_edit(&mut self) -> Result<Option<Edit>> {
            if self.failures > 0 {
                self.failures -= 1;
                return Err(CalculatorError::parse_error("input", "unreadable"));
            }
            Ok(self.then.take())
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }

    async fn wait_closed(mut rx: watch::Receiver<Arc<CalculatorState>>) -> Arc<CalculatorState> {
        while rx.changed().await.is_ok() {}
        let state = rx.borrow().clone();
        state
    }

    #[tokio::test]
    async fn test_publishes_initial_state() {
        let (source, _sender) = ChannelSource::channel();
        let channels = Driver::spawn(source, CalculatorState::default());
        assert_eq!(**channels.states.borrow(), CalculatorState::default());
        channels.cancel.cancel();
    }

    #[tokio::test]
    async fn test_applies_edits_in_order() {
        let (source, sender) = ChannelSource::channel();
        let channels = Driver::spawn(source, CalculatorState::default());

        sender.send(Edit::SetPaceMinutes(4)).await.unwrap();
        sender.send(Edit::SetPaceSeconds(30)).await.unwrap();
        drop(sender);

        let last = wait_closed(channels.states).await;
        assert_eq!(last.pace, Pace::new(4, 30));
        assert_eq!(last.time, TotalTime::new(0, 22, 30));
    }

    #[tokio::test]
    async fn test_gives_up_after_repeated_errors() {
        let source = FailingSource { failures: MAX_ERRORS, then: Some(Edit::SetPaceMinutes(9)) };
        let channels = Driver::spawn(source, CalculatorState::default());

        let last = wait_closed(channels.states).await;
        assert_eq!(last.pace, Pace::new(5, 0), "edits after the error cap are never applied");
    }

    #[tokio::test]
    async fn test_source_errors_below_cap_are_survived() {
        let source =
            FailingSource { failures: MAX_ERRORS - 1, then: Some(Edit::SetPaceMinutes(9)) };
        let channels = Driver::spawn(source, CalculatorState::default());

        let last = wait_closed(channels.states).await;
        assert_eq!(last.pace, Pace::new(9, 0));
    }

    #[tokio::test]
    async fn test_typos_never_end_the_session() {
        let input = "unit furlongs\n".repeat(MAX_ERRORS as usize * 2) + "pace-min 7\n";
        let source = TerminalSource::new(std::io::Cursor::new(input.into_bytes()), Vec::new());
        let channels = Driver::spawn(source, CalculatorState::default());

        let last = wait_closed(channels.states).await;
        assert_eq!(last.pace, Pace::new(7, 0));
        assert_eq!(last.time, TotalTime::new(0, 35, 0));
    }

    #[tokio::test]
    async fn test_rejected_script_steps_are_not_counted() {
        let script = "- field: unit\n  value: cubits\n".repeat(MAX_ERRORS as usize + 1)
            + "- field: pace_minutes\n  value: 9\n";
        let source = ScriptSource::from_yaml(&script).unwrap();
        let channels = Driver::spawn(source, CalculatorState::default());

        let last = wait_closed(channels.states).await;
        assert_eq!(last.pace, Pace::new(9, 0));
    }

    #[tokio::test]
    async fn test_isolated_errors_are_skipped() {
        let script = "- field: unit\n  value: cubits\n- field: pace_minutes\n  value: 6\n";
        let source = ScriptSource::from_yaml(script).unwrap();
        let channels = Driver::spawn(source, CalculatorState::default());

        let last = wait_closed(channels.states).await;
        assert_eq!(last.time, TotalTime::new(0, 30, 0));
    }

    #[tokio::test]
    async fn test_cancel_stops_the_loop() {
        let (source, sender) = ChannelSource::channel();
        let channels = Driver::spawn(source, CalculatorState::default());
        channels.cancel.cancel();

        let last = wait_closed(channels.states).await;
        assert_eq!(*last, CalculatorState::default());
        assert!(sender.send(Edit::SelectCustom).await.is_err());
    }
}
