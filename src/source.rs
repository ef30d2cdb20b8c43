//! Source trait for user edits

use crate::Result;
use crate::types::Edit;

/// Trait for anything that produces form edits
///
/// Sources abstract over where edits come from (a terminal, a script file,
/// another task) and handle their own waiting internally.
#[async_trait::async_trait]
pub trait EditSource: Send + 'static {
    /// Get the next edit
    ///
    /// Returns:
    /// - `Ok(Some(edit))` - The user made an edit
    /// - `Ok(None)` - The source is exhausted (normal termination)
    /// - `Err(e)` - The input could not be turned into an edit
    ///
    /// An error does not end the source; the driver logs it and asks again.
    async fn next_edit(&mut self) -> Result<Option<Edit>>;

    /// Short description for logs
    fn describe(&self) -> String;
}
