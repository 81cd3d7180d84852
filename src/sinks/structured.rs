//! Structured sink implementation
//!
//! Forwards records to the host structured-logging facility, which for
//! this crate is the `tracing` ecosystem: whatever subscriber the host
//! application installs receives the events. Delivery is best-effort and
//! has no error path.

use crate::core::{LogLevel, LogRecord};
use tracing::Level;

/// The fixed logging domain all structured records are emitted under.
pub const LOG_DOMAIN: &str = "logspool";

/// Forwards level, source location and text to the host facility as one
/// event per record, with the location carried in the `CODE_FILE`,
/// `CODE_LINE` (decimal string) and `CODE_FUNC` fields.
#[derive(Debug, Default)]
pub struct StructuredSink;

impl StructuredSink {
    pub fn new() -> Self {
        Self
    }

    /// Emit one record. Infallible; the subscriber decides what to do
    /// with the event.
    pub fn write(&self, record: &LogRecord) {
        match record.level {
            LogLevel::Debug => tracing::event!(
                target: LOG_DOMAIN,
                Level::DEBUG,
                CODE_FILE = %record.file,
                CODE_LINE = %record.line,
                CODE_FUNC = %record.func,
                "{}",
                record.text
            ),
            LogLevel::Info => tracing::event!(
                target: LOG_DOMAIN,
                Level::INFO,
                CODE_FILE = %record.file,
                CODE_LINE = %record.line,
                CODE_FUNC = %record.func,
                "{}",
                record.text
            ),
            LogLevel::Notice => tracing::event!(
                target: LOG_DOMAIN,
                Level::INFO,
                CODE_FILE = %record.file,
                CODE_LINE = %record.line,
                CODE_FUNC = %record.func,
                "{}",
                record.text
            ),
            LogLevel::Warning => tracing::event!(
                target: LOG_DOMAIN,
                Level::WARN,
                CODE_FILE = %record.file,
                CODE_LINE = %record.line,
                CODE_FUNC = %record.func,
                "{}",
                record.text
            ),
            LogLevel::Error => tracing::event!(
                target: LOG_DOMAIN,
                Level::ERROR,
                CODE_FILE = %record.file,
                CODE_LINE = %record.line,
                CODE_FUNC = %record.func,
                "{}",
                record.text
            ),
            // The facility has no level above ERROR; the worker raises the
            // trap separately after dispatch.
            LogLevel::Fatal => tracing::event!(
                target: LOG_DOMAIN,
                Level::ERROR,
                CODE_FILE = %record.file,
                CODE_LINE = %record.line,
                CODE_FUNC = %record.func,
                "{}",
                record.text
            ),
        }
    }
}
