//! Main logger implementation
//!
//! The `Logger` is the front door producers call and the owner of all
//! process-wide pipeline state: the queue's sending half, the shared
//! backend, the worker join handle and the metrics. One instance drives
//! one worker; independent instances are fully isolated.

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::message::{LogRecord, QueueMessage};
use super::metrics::LoggerMetrics;
use super::queue::{self, QueueSender};
use super::worker::{self, FatalHook, Worker};
use crate::sinks::{Backend, BackendKind, FileSink, StructuredSink, LOG_DOMAIN};
use crate::toolkit::control::ControlChannel;
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::JoinHandle;

pub struct Logger {
    backend: Arc<Mutex<Backend>>,
    sender: QueueSender,
    worker: Mutex<Option<JoinHandle<()>>>,
    metrics: Arc<LoggerMetrics>,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("backend", &self.backend.lock().kind())
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Start a logger on the structured backend: allocate the queue and
    /// spawn the delivery worker. Fails only if the worker thread cannot
    /// be spawned, which is unrecoverable for the subsystem.
    pub fn init() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use logspool::prelude::*;
    ///
    /// let logger = Logger::builder().build().unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Build a record and append it to the delivery queue. Never blocks
    /// beyond the queue's O(1) push and never performs I/O on the calling
    /// thread; safe from any thread.
    ///
    /// `file` and `func` must be non-empty; the location arguments are
    /// normally supplied by the crate macros, and an empty one is a bug at
    /// the call site, not a runtime condition.
    pub fn log(&self, level: LogLevel, file: &str, line: u32, func: &str, text: impl Into<String>) {
        debug_assert!(!file.is_empty(), "log call site has no source file");
        debug_assert!(!func.is_empty(), "log call site has no function name");

        self.sender
            .push(QueueMessage::Record(LogRecord::new(
                level, file, line, func, text,
            )));
        self.metrics.record_enqueued();
    }

    /// Switch the active backend to a log file at `path`, creating or
    /// replacing it (an existing regular file is kept as `path~`).
    ///
    /// If the file backend is already open on this very path, the open
    /// handle is reused and nothing else happens. On creation failure the
    /// previously active backend stays active and the error is returned.
    /// Any previously open file on a different path is closed once the
    /// new one is in place.
    pub fn switch_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        tracing::debug!(target: LOG_DOMAIN, "opening log file at {}", path.display());

        let mut backend = self.backend.lock();

        if let Backend::File(sink) = &*backend {
            if sink.path() == path {
                return Ok(());
            }
        }

        let sink = FileSink::create(path).inspect_err(|e| {
            tracing::warn!(target: LOG_DOMAIN, "failed to create a log file: {}", e);
        })?;
        *backend = Backend::File(sink);
        drop(backend);

        tracing::debug!(target: LOG_DOMAIN, "opened log file at {}", path.display());
        Ok(())
    }

    /// Switch the active backend to the structured facility, closing any
    /// open log file. Always succeeds.
    pub fn switch_to_structured(&self) {
        tracing::debug!(target: LOG_DOMAIN, "switching to the structured logging backend");
        let mut backend = self.backend.lock();
        *backend = Backend::Structured(StructuredSink::new());
    }

    /// Stop logging to the file opened by [`Logger::switch_to_file`].
    /// Identical in effect to [`Logger::switch_to_structured`]; idempotent.
    pub fn close_file(&self) {
        tracing::info!(target: LOG_DOMAIN, "closing the log file");
        self.switch_to_structured();
    }

    /// Which backend records are currently dispatched to.
    pub fn active_backend(&self) -> BackendKind {
        self.backend.lock().kind()
    }

    /// Pipeline health counters.
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Tear the pipeline down: push the shutdown sentinel, wait for the
    /// worker to drain every record ahead of it and exit, then close any
    /// open log file.
    ///
    /// Records already queued are still delivered to the active backend
    /// before the file closes. Returns `false` only if the worker thread
    /// panicked. Idempotent; a second call returns `true` immediately.
    /// Records pushed after shutdown are discarded without being
    /// delivered.
    pub fn shutdown(&self) -> bool {
        let taken = self.worker.lock().take();
        let Some(handle) = taken else {
            return true;
        };

        self.sender.push(QueueMessage::Shutdown);
        let joined = handle.join();

        self.switch_to_structured();

        match joined {
            Ok(()) => true,
            Err(_) => {
                eprintln!("[LOGSPOOL ERROR] delivery worker panicked during shutdown");
                false
            }
        }
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```no_run
/// use logspool::prelude::*;
///
/// let logger = Logger::builder()
///     .file("/var/log/app.log")
///     .build()
///     .unwrap();
/// ```
pub struct LoggerBuilder {
    file_path: Option<PathBuf>,
    on_fatal: Option<FatalHook>,
    control: Option<Arc<dyn ControlChannel>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            file_path: None,
            on_fatal: None,
            control: None,
        }
    }

    /// Start on the file backend, logging to `path`. Without this the
    /// logger starts on the structured backend.
    #[must_use = "builder methods return a new value"]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Replace the trap run after every Fatal record. The default hook
    /// aborts the process.
    #[must_use = "builder methods return a new value"]
    pub fn on_fatal(mut self, hook: FatalHook) -> Self {
        self.on_fatal = Some(hook);
        self
    }

    /// Wire in the host's control channel. The logger only uses it to
    /// report catastrophic failures (a worker that could not be spawned).
    #[must_use = "builder methods return a new value"]
    pub fn control_channel(mut self, channel: Arc<dyn ControlChannel>) -> Self {
        self.control = Some(channel);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Result<Logger> {
        let backend = match &self.file_path {
            Some(path) => Backend::File(FileSink::create(path)?),
            None => Backend::Structured(StructuredSink::new()),
        };
        let backend = Arc::new(Mutex::new(backend));
        let metrics = Arc::new(LoggerMetrics::new());
        let (sender, receiver) = queue::queue();

        let on_fatal: FatalHook = self
            .on_fatal
            .unwrap_or_else(|| Arc::new(|| std::process::abort()));

        let spawned = worker::spawn(Worker {
            receiver,
            backend: Arc::clone(&backend),
            metrics: Arc::clone(&metrics),
            on_fatal,
        });

        let handle = match spawned {
            Ok(handle) => handle,
            Err(e) => {
                if let Some(control) = &self.control {
                    let _ = control.notify(
                        "log.worker_spawn_failed",
                        serde_json::json!({ "error": e.to_string() }),
                    );
                }
                return Err(LoggerError::worker_spawn(e));
            }
        };

        Ok(Logger {
            backend,
            sender,
            worker: Mutex::new(Some(handle)),
            metrics,
        })
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
