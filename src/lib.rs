//! # Logspool
//!
//! An embeddable asynchronous logging subsystem with switchable file and
//! structured-log backends.
//!
//! ## Features
//!
//! - **Asynchronous delivery**: producers enqueue and return; a single
//!   background worker performs all I/O
//! - **Two backends**: plain line-oriented log files, or the host's
//!   `tracing` subscriber as a structured facility, switchable at runtime
//! - **Automatic fallback**: a failing file write reroutes delivery to the
//!   structured backend and reports the failure there
//! - **Thread safe**: any number of producer threads, strict global FIFO

pub mod core;
pub mod macros;
pub mod sinks;
pub mod toolkit;

pub mod prelude {
    pub use crate::core::{
        FatalHook, LogLevel, LogRecord, Logger, LoggerBuilder, LoggerError, LoggerMetrics,
        QueueMessage, Result, SinkError,
    };
    pub use crate::sinks::{Backend, BackendKind, FileSink, StructuredSink, LOG_DOMAIN};
}

pub use crate::core::{
    FatalHook, LogLevel, LogRecord, Logger, LoggerBuilder, LoggerError, LoggerMetrics,
    QueueMessage, Result, SinkError,
};
pub use crate::sinks::{Backend, BackendKind, FileSink, StructuredSink, LOG_DOMAIN};
pub use crate::toolkit::{ControlChannel, ControlError, IrError, IrService};
