//! Sink backends
//!
//! The two interchangeable record destinations, held in a tagged union.
//! The file handle lives inside the `File` variant, so "file backend
//! active without an open handle" is unrepresentable, and replacing the
//! variant closes the handle before the switch can be observed.

pub mod file;
pub mod structured;

pub use file::{render_line, FileSink};
pub use structured::{StructuredSink, LOG_DOMAIN};

/// The currently active backend. Producers and the worker share one of
/// these behind a mutex; switching is an atomic replace of the value.
pub enum Backend {
    File(FileSink),
    Structured(StructuredSink),
}

impl Backend {
    pub fn kind(&self) -> BackendKind {
        match self {
            Backend::File(_) => BackendKind::File,
            Backend::Structured(_) => BackendKind::Structured,
        }
    }
}

/// Which backend is active, without the handle. What `Logger::active_backend`
/// reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    File,
    Structured,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_kind_tracks_variant() {
        let dir = TempDir::new().unwrap();
        let sink = FileSink::create(dir.path().join("app.log")).unwrap();

        let mut backend = Backend::File(sink);
        assert_eq!(backend.kind(), BackendKind::File);

        backend = Backend::Structured(StructuredSink::new());
        assert_eq!(backend.kind(), BackendKind::Structured);
    }
}
