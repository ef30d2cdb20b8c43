//! Channel source fed programmatically

use tokio::sync::mpsc;
use tracing::debug;

use crate::source::EditSource;
use crate::types::{Edit, Field};
use crate::{CalculatorError, Result};

/// Buffered edits before `send` waits
const CHANNEL_CAPACITY: usize = 64;

/// Source draining edits pushed through an [`EditSender`]
pub struct ChannelSource {
    rx: mpsc::Receiver<Edit>,
}

/// Handle for pushing edits into a [`ChannelSource`]
///
/// The source ends once every sender has been dropped.
#[derive(Clone, Debug)]
pub struct EditSender {
    tx: mpsc::Sender<Edit>,
}

impl ChannelSource {
    pub fn channel() -> (Self, EditSender) {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        (Self { rx }, EditSender { tx })
    }
}

impl EditSender {
    /// Queue a typed edit
    pub async fn send(&self, edit: Edit) -> Result<()> {
        self.tx.send(edit).await.map_err(|_| CalculatorError::SessionClosed)
    }

    /// Queue the raw text typed into `field`
    pub async fn input(&self, field: Field, text: &str) -> Result<()> {
        self.send(Edit::from_input(field, text)?).await
    }

    /// Whether the receiving session has stopped
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

#[async_trait::async_trait]
impl EditSource for ChannelSource {
    async fn next_edit(&mut self) -> Result<Option<Edit>> {
        let edit = self.rx.recv().await;
        if edit.is_none() {
            debug!("All edit senders dropped");
        }
        Ok(edit)
    }

    fn describe(&self) -> String {
        "channel".to_string()
    }
}
