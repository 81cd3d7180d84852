//! Messages travelling through the delivery queue

use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};

/// One log event, fully resolved at the producer call site.
///
/// All fields are owned, so a record's lifetime is independent of any
/// caller-side buffer. `text` is the final message, never a format
/// template; format arguments are resolved before the record is built
/// (see the crate macros), so the queue and the worker never deal with
/// formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub level: LogLevel,
    /// Source file the record was emitted from
    pub file: String,
    /// Line number within `file`
    pub line: u32,
    /// Enclosing function or module path
    pub func: String,
    /// The formatted log message
    pub text: String,
}

impl LogRecord {
    pub fn new(
        level: LogLevel,
        file: impl Into<String>,
        line: u32,
        func: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            level,
            file: file.into(),
            line,
            func: func.into(),
            text: text.into(),
        }
    }
}

/// What actually travels through the queue: either a record to deliver or
/// the shutdown sentinel that makes the worker exit. The sentinel carries
/// no record fields, so tearing one down cannot touch any.
#[derive(Debug)]
pub enum QueueMessage {
    Record(LogRecord),
    Shutdown,
}
