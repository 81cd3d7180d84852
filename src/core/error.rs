//! Error types for the logging subsystem

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Errors returned by the dispatcher's lifecycle and switch operations.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The OS refused to spawn the delivery worker thread. There is no
    /// retry; the subsystem cannot operate without its worker.
    #[error("failed to spawn the log delivery worker: {source}")]
    WorkerSpawn {
        #[source]
        source: std::io::Error,
    },

    /// The log file could not be created or replaced at the given path.
    /// The previously active backend is left untouched.
    #[error("failed to create log file '{path}': {message}")]
    FileCreate { path: String, message: String },
}

impl LoggerError {
    /// Create a worker spawn error from the underlying IO error
    pub fn worker_spawn(source: std::io::Error) -> Self {
        LoggerError::WorkerSpawn { source }
    }

    /// Create a file creation error with path context
    pub fn file_create(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FileCreate {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Errors produced by a sink while writing a single record.
///
/// Only the file sink can fail; the structured sink is best-effort and has
/// no error path. A failed file write is consumed by the worker's fallback
/// sequence rather than surfaced to any caller.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// A formatted line could not be written to the open log file.
    #[error("failed to write log line: {0}")]
    WriteFailed(String),
}

impl SinkError {
    /// Create a write failure from the underlying IO error
    pub fn write_failed(source: &std::io::Error) -> Self {
        SinkError::WriteFailed(source.to_string())
    }
}
