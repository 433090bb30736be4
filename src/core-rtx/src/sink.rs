//! Where generation reports warnings and errors.
//!
//! The generator never owns a logger: callers pass a [`LogSink`] into every call.

use std::sync::Mutex;

/// Receives the messages produced while generating or writing robots.txt.
pub trait LogSink: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Forwards messages to `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn info(&self, message: &str) {
        tracing::info!(target: "robots_txt", "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "robots_txt", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "robots_txt", "{}", message);
    }
}

/// Severity of a recorded message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

/// Keeps every message in memory, in the order received.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<(Level, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded messages with their level.
    pub fn messages(&self) -> Vec<(Level, String)> {
        self.lock().clone()
    }

    /// Recorded messages of one level.
    pub fn at(&self, level: Level) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.at(Level::Warn)
    }

    pub fn errors(&self) -> Vec<String> {
        self.at(Level::Error)
    }

    fn record(&self, level: Level, message: &str) {
        self.lock().push((level, message.to_string()));
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(Level, String)>> {
        // pushes are atomic with respect to panics, so a poisoned Vec is still whole
        self.messages.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LogSink for MemorySink {
    fn info(&self, message: &str) {
        self.record(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.record(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.record(Level::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_keeps_order_and_levels() {
        let sink = MemorySink::new();
        sink.warn("first");
        sink.info("second");
        sink.error("third");
        sink.warn("fourth");

        assert_eq!(
            sink.messages(),
            vec![
                (Level::Warn, "first".to_string()),
                (Level::Info, "second".to_string()),
                (Level::Error, "third".to_string()),
                (Level::Warn, "fourth".to_string()),
            ]
        );
        assert_eq!(sink.warnings(), vec!["first", "fourth"]);
        assert_eq!(sink.errors(), vec!["third"]);
    }
}
