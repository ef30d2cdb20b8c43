//! Live calculator session

use futures::Stream;
use std::sync::Arc;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::driver::Driver;
use crate::source::EditSource;
use crate::state::CalculatorState;

/// A running calculator fed by one edit source
pub struct Session {
    /// Snapshot watch receiver
    states: watch::Receiver<Arc<CalculatorState>>,

    /// Cancellation token for stopping the driver
    cancel: CancellationToken,
}

impl Session {
    /// Start a session driven by `source`, beginning from `initial`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<S: EditSource>(source: S, initial: CalculatorState) -> Self {
        info!("Starting session on {}", source.describe());
        let channels = Driver::spawn(source, initial);
        Self { states: channels.states, cancel: channels.cancel }
    }

    /// Stream of snapshots, starting with the current one.
    ///
    /// Latest-wins: a slow reader sees the newest snapshot, not every one.
    /// The stream ends when the source is exhausted.
    pub fn updates(&self) -> impl Stream<Item = Arc<CalculatorState>> + 'static {
        WatchStream::new(self.states.clone())
    }

    /// Current snapshot
    pub fn current(&self) -> Arc<CalculatorState> {
        self.states.borrow().clone()
    }

    /// Wait for the source to end and return the final snapshot
    pub async fn finished(&self) -> Arc<CalculatorState> {
        let mut rx = self.states.clone();
        while rx.changed().await.is_ok() {}
        let last = rx.borrow().clone();
        last
    }

    /// Whether the driver is still accepting edits
    pub fn is_running(&self) -> bool {
        self.states.has_changed().is_ok()
    }

    /// Stop processing edits; the last snapshot stays readable
    pub fn stop(&self) {
        self.cancel.cancel();
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        debug!("Dropping calculator session");
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{ChannelSource, ScriptSource};
    use crate::types::{ActiveMode, Edit, Field, Pace, Unit};
    use futures::StreamExt;

    #[tokio::test]
    async fn test_finished_returns_final_snapshot() {
        let script = "- field: mode\n  value: time_to_pace\n- field: minutes\n  value: 30\n";
        let session =
            Session::start(ScriptSource::from_yaml(script).unwrap(), CalculatorState::default());

        let last = session.finished().await;
        assert_eq!(last.mode, ActiveMode::TimeToPace);
        assert_eq!(last.pace, Pace::new(6, 0));
        assert!(!session.is_running());
        assert_eq!(session.current(), last);
    }

    #[tokio::test]
    async fn test_updates_start_with_current_and_end_with_source() {
        let (source, sender) = ChannelSource::channel();
        let session = Session::start(source, CalculatorState::default());
        let mut updates = session.updates();

        let first = updates.next().await.unwrap();
        assert_eq!(*first, CalculatorState::default());

        sender.input(Field::Unit, "miles").await.unwrap();
        let second = updates.next().await.unwrap();
        assert_eq!(second.unit, Unit::Miles);

        drop(sender);
        assert!(updates.next().await.is_none());
    }

    #[tokio::test]
    async fn test_stop_keeps_last_snapshot() {
        let (source, sender) = ChannelSource::channel();
        let session = Session::start(source, CalculatorState::default());
        sender.send(Edit::SetPaceMinutes(6)).await.unwrap();

        // Let the driver drain the queued edit
        while session.current().pace.minutes != 6 {
            tokio::task::yield_now().await;
        }
        session.stop();

        let last = session.finished().await;
        assert_eq!(last.pace, Pace::new(6, 0));
        assert!(!session.is_running());
    }
}
