//! The delivery worker
//!
//! A single background thread that drains the queue for the lifetime of
//! the logger: pop one message, dispatch it to whichever backend is
//! active at that moment, drop it, repeat. The shutdown sentinel (or a
//! disconnected queue) is the only way out of the loop; there is no
//! restart.

use super::log_level::LogLevel;
use super::message::{LogRecord, QueueMessage};
use super::metrics::LoggerMetrics;
use super::queue::QueueReceiver;
use crate::sinks::{Backend, StructuredSink};
use parking_lot::Mutex;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Invoked by the worker after a Fatal record has been dispatched,
/// whichever backend delivered it. The default hook aborts the process.
pub type FatalHook = Arc<dyn Fn() + Send + Sync>;

pub(crate) struct Worker {
    pub receiver: QueueReceiver,
    pub backend: Arc<Mutex<Backend>>,
    pub metrics: Arc<LoggerMetrics>,
    pub on_fatal: FatalHook,
}

/// Start the delivery thread. Spawn failure is fatal to the subsystem.
pub(crate) fn spawn(worker: Worker) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("logspool-worker".into())
        .spawn(move || worker.run())
}

impl Worker {
    fn run(self) {
        while let Some(message) = self.receiver.pop_blocking() {
            match message {
                QueueMessage::Record(record) => self.dispatch(record),
                QueueMessage::Shutdown => break,
            }
        }
    }

    fn dispatch(&self, record: LogRecord) {
        let mut backend = self.backend.lock();

        // The backend is resolved per dispatch, not per enqueue: a record
        // pushed while backend A was active may be delivered by backend B
        // if a switch lands in between. Accepted behavior; delivery order
        // and backend identity are not jointly atomic.
        let written = match &mut *backend {
            Backend::File(sink) => sink.write(&record),
            Backend::Structured(sink) => {
                sink.write(&record);
                Ok(())
            }
        };

        match written {
            Ok(()) => self.metrics.record_delivered(),
            Err(err) => {
                // File write failed: switch to the structured backend,
                // report the failure through it, then close the file
                // handle. Repeated failures re-run this sequence, but the
                // backend is already structured after the first, so file
                // writes cannot fail twice in a row.
                self.metrics.record_write_failure();

                let failed =
                    std::mem::replace(&mut *backend, Backend::Structured(StructuredSink::new()));

                let report = LogRecord::new(
                    LogLevel::Error,
                    file!(),
                    line!(),
                    module_path!(),
                    format!(
                        "Failed to write a log line to the file backend: {}. \
                         The log message is \"{}\". \
                         Falling back to the structured backend.",
                        err, record.text
                    ),
                );
                if let Backend::Structured(sink) = &*backend {
                    sink.write(&report);
                }

                drop(failed);
                self.metrics.record_fallback();
            }
        }

        drop(backend);

        if record.level == LogLevel::Fatal {
            (self.on_fatal)();
        }
    }
}
