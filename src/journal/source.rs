use crate::journal::{CircularBuffer, JournalError, LogEntry, LogLevel};
use crate::watch::{Listener, ListenerSet};

/// The journal the log panel reads from: a ring buffer of entries plus a
/// broadcast-on-append listener set.
///
/// There is no global instance. Whoever needs to log through the journal
/// gets a handle passed down from the application shell.
pub struct JournalSource {
    messages: CircularBuffer<LogEntry>,
    listeners: ListenerSet,
}

impl JournalSource {
    pub fn new(capacity: usize) -> Self {
        JournalSource {
            messages: CircularBuffer::new(capacity),
            listeners: ListenerSet::new(),
        }
    }

    /// Appends an entry and synchronously notifies every subscriber.
    ///
    /// The buffer lock is released before dispatch and the listener set is
    /// snapshotted, so callbacks may read the journal or change the
    /// subscription set freely. A panicking listener aborts the remaining
    /// dispatch and propagates to the caller.
    pub fn append(&self, level: LogLevel, message: impl Into<String>) {
        self.messages.push(LogEntry::new(level, message));
        self.listeners.notify();
    }

    pub fn debug(&self, message: impl Into<String>) {
        self.append(LogLevel::Debug, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.append(LogLevel::Info, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.append(LogLevel::Error, message);
    }

    pub fn size(&self) -> usize {
        self.messages.len()
    }

    pub fn get(&self, index: usize) -> Result<LogEntry, JournalError> {
        self.messages.get(index)
    }

    /// Snapshot of up to `count` entries starting at `start`, oldest first.
    pub fn range(&self, start: usize, count: usize) -> Vec<LogEntry> {
        self.messages.range(start, count)
    }

    /// Snapshot of all current entries, oldest first.
    pub fn all(&self) -> Vec<LogEntry> {
        self.messages.snapshot()
    }

    pub fn subscribe(&self, listener: &Listener) {
        self.listeners.register(listener);
    }

    pub fn unsubscribe(&self, listener: &Listener) {
        self.listeners.unregister(listener);
    }
}
