//! Edit source implementations

pub mod channel;
pub mod script;
pub mod terminal;

pub use channel::{ChannelSource, EditSender};
pub use script::{ScriptSource, ScriptStep};
pub use terminal::TerminalSource;
