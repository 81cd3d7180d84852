//! Core pipeline types

pub mod error;
pub mod log_level;
pub mod logger;
pub mod message;
pub mod metrics;
pub mod queue;
pub mod worker;

pub use error::{LoggerError, Result, SinkError};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use message::{LogRecord, QueueMessage};
pub use metrics::LoggerMetrics;
pub use queue::{queue, QueueReceiver, QueueSender};
pub use worker::FatalHook;
