//! Logging macros for ergonomic log message formatting.
//!
//! These macros are the intended producer call sites: they capture the
//! source location (`file!`, `line!`, `module_path!`) and resolve the
//! format arguments into a final string before anything is enqueued, so
//! the queue and the worker never deal with formatting.
//!
//! # Examples
//!
//! ```
//! use logspool::prelude::*;
//! use logspool::info;
//!
//! let logger = Logger::init().unwrap();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message with automatic formatting and location capture.
///
/// # Examples
///
/// ```
/// # use logspool::prelude::*;
/// # let logger = Logger::init().unwrap();
/// use logspool::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, file!(), line!(), module_path!(), format!($($arg)+))
    };
}

/// Log a debugging message.
///
/// # Examples
///
/// ```
/// # use logspool::prelude::*;
/// # let logger = Logger::init().unwrap();
/// use logspool::debug;
/// debug!(logger, "Entering function: calculate()");
/// debug!(logger, "Variable value: {}", 42);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an informational message.
///
/// # Examples
///
/// ```
/// # use logspool::prelude::*;
/// # let logger = Logger::init().unwrap();
/// use logspool::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a general message.
///
/// # Examples
///
/// ```
/// # use logspool::prelude::*;
/// # let logger = Logger::init().unwrap();
/// use logspool::notice;
/// notice!(logger, "Configuration reloaded");
/// ```
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Notice, $($arg)+)
    };
}

/// Log a warning message.
///
/// # Examples
///
/// ```
/// # use logspool::prelude::*;
/// # let logger = Logger::init().unwrap();
/// use logspool::warning;
/// warning!(logger, "Low disk space");
/// warning!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error message.
///
/// # Examples
///
/// ```
/// # use logspool::prelude::*;
/// # let logger = Logger::init().unwrap();
/// use logspool::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal error message.
///
/// Note that after the record is delivered the worker runs the fatal
/// trap, which by default aborts the process. See
/// [`LoggerBuilder::on_fatal`](crate::LoggerBuilder::on_fatal).
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LogLevel, Logger};

    #[test]
    fn test_log_macro() {
        let logger = Logger::init().unwrap();
        log!(logger, LogLevel::Info, "Test message");
        log!(logger, LogLevel::Info, "Formatted: {}", 42);
    }

    #[test]
    fn test_level_macros() {
        let logger = Logger::init().unwrap();
        debug!(logger, "Debug message");
        info!(logger, "Items: {}", 100);
        notice!(logger, "Notice message");
        warning!(logger, "Retry {} of {}", 1, 3);
        error!(logger, "Code: {}", 500);
    }

    #[test]
    fn test_macros_capture_this_file() {
        let logger = Logger::init().unwrap();
        info!(logger, "where am I");
        logger.shutdown();
        assert_eq!(logger.metrics().enqueued(), 1);
    }
}
