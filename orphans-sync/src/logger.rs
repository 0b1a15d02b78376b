//! Injected logging capability for the synchronizer.
//!
//! The synchronizer never talks to a global logger directly; callers hand it
//! a [`BootstrapLogger`]. [`LogLogger`] forwards to the `log` facade for real
//! runs, [`NullLogger`] and [`MemoryLogger`] keep tests quiet and inspectable.

use std::cell::RefCell;

/// Severity of a bootstrap log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Success,
    Warn,
    Error,
    Complete,
}

/// Sink for bootstrap progress messages.
///
/// Implementations must not influence the run; they only observe it.
pub trait BootstrapLogger {
    fn debug(&self, msg: &str);
    fn info(&self, msg: &str);
    /// A single file was put in place.
    fn success(&self, msg: &str);
    fn warn(&self, msg: &str);
    fn error(&self, msg: &str);
    /// Final summary of a run that did work.
    fn complete(&self, msg: &str);

    fn log(&self, level: Level, msg: &str) {
        match level {
            Level::Debug => self.debug(msg),
            Level::Info => self.info(msg),
            Level::Success => self.success(msg),
            Level::Warn => self.warn(msg),
            Level::Error => self.error(msg),
            Level::Complete => self.complete(msg),
        }
    }
}

// ---------------------------------------------------------------------------
// LogLogger
// ---------------------------------------------------------------------------

/// Forwards to the `log` facade under the `orphans` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogLogger;

const TARGET: &str = "orphans";

impl BootstrapLogger for LogLogger {
    fn debug(&self, msg: &str) {
        tracing::debug!(target: TARGET, "{msg}");
    }

    fn info(&self, msg: &str) {
        tracing::info!(target: TARGET, "{msg}");
    }

    fn success(&self, msg: &str) {
        tracing::info!(target: TARGET, "✔ {msg}");
    }

    fn warn(&self, msg: &str) {
        tracing::warn!(target: TARGET, "{msg}");
    }

    fn error(&self, msg: &str) {
        tracing::error!(target: TARGET, "{msg}");
    }

    fn complete(&self, msg: &str) {
        tracing::info!(target: TARGET, "★ {msg}");
    }
}

// ---------------------------------------------------------------------------
// NullLogger
// ---------------------------------------------------------------------------

/// Discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl BootstrapLogger for NullLogger {
    fn debug(&self, _msg: &str) {}
    fn info(&self, _msg: &str) {}
    fn success(&self, _msg: &str) {}
    fn warn(&self, _msg: &str) {}
    fn error(&self, _msg: &str) {}
    fn complete(&self, _msg: &str) {}
}

// ---------------------------------------------------------------------------
// MemoryLogger
// ---------------------------------------------------------------------------

/// Records every message in order.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    records: RefCell<Vec<(Level, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything logged so far.
    pub fn records(&self) -> Vec<(Level, String)> {
        self.records.borrow().clone()
    }

    /// Messages logged at `level`, in order.
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.records
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    fn push(&self, level: Level, msg: &str) {
        self.records.borrow_mut().push((level, msg.to_string()));
    }
}

impl BootstrapLogger for MemoryLogger {
    fn debug(&self, msg: &str) {
        self.push(Level::Debug, msg);
    }

    fn info(&self, msg: &str) {
        self.push(Level::Info, msg);
    }

    fn success(&self, msg: &str) {
        self.push(Level::Success, msg);
    }

    fn warn(&self, msg: &str) {
        self.push(Level::Warn, msg);
    }

    fn error(&self, msg: &str) {
        self.push(Level::Error, msg);
    }

    fn complete(&self, msg: &str) {
        self.push(Level::Complete, msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_logger_keeps_order_and_level() {
        let logger = MemoryLogger::new();
        logger.info("first");
        logger.warn("second");
        logger.log(Level::Complete, "third");

        assert_eq!(
            logger.records(),
            vec![
                (Level::Info, "first".to_string()),
                (Level::Warn, "second".to_string()),
                (Level::Complete, "third".to_string()),
            ]
        );
        assert_eq!(logger.messages_at(Level::Warn), vec!["second".to_string()]);
    }

    #[test]
    fn log_logger_accepts_every_level() {
        let _ = env_logger::builder().is_test(true).try_init();
        let logger = LogLogger;
        for level in [
            Level::Debug,
            Level::Info,
            Level::Success,
            Level::Warn,
            Level::Error,
            Level::Complete,
        ] {
            logger.log(level, "message");
        }
    }
}
