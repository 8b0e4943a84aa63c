// In-window journal: ring-buffered log entries with change fan-out.

mod buffer;
mod entry;
mod error;
mod source;

pub use buffer::CircularBuffer;
pub use entry::{LogEntry, LogLevel};
pub use error::JournalError;
pub use source::JournalSource;
