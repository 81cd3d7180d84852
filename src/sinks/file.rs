//! File sink implementation

use crate::core::{LogLevel, LogRecord, LoggerError, Result, SinkError};
use std::ffi::OsString;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes formatted log lines to an open file handle.
///
/// Creating a sink replaces any regular file already at the path, keeping
/// the previous contents in a backup named after the path with a `~`
/// suffix. Lines are written straight to the handle with no interposed
/// buffering, so a failing write surfaces on the record that hit it.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: File,
}

impl FileSink {
    /// Open the log file at `path`, backing up and replacing an existing
    /// one. On failure nothing is created and the caller's state is
    /// untouched.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if path.is_file() {
            let backup = backup_path(&path);
            std::fs::rename(&path, &backup).map_err(|e| {
                LoggerError::file_create(path.display().to_string(), e.to_string())
            })?;
        }

        let file = File::create(&path)
            .map_err(|e| LoggerError::file_create(path.display().to_string(), e.to_string()))?;

        Ok(Self { path, file })
    }

    /// The path this sink was opened at.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render and append one record as a single line.
    pub fn write(&mut self, record: &LogRecord) -> std::result::Result<(), SinkError> {
        let line = render_line(record);
        self.file
            .write_all(line.as_bytes())
            .map_err(|e| SinkError::write_failed(&e))
    }
}

/// Render a record into its single-line file representation.
///
/// Debug, Info, Error and Fatal lines carry the source location; Notice
/// and Warning lines carry the message alone.
pub fn render_line(record: &LogRecord) -> String {
    match record.level {
        LogLevel::Debug | LogLevel::Info | LogLevel::Error => format!(
            "{}: {}:{} {}: {}\n",
            record.level, record.file, record.line, record.func, record.text
        ),
        LogLevel::Fatal => format!(
            "Fatal Error: {}:{} {}: {}\n",
            record.file, record.line, record.func, record.text
        ),
        LogLevel::Notice | LogLevel::Warning => {
            format!("{}: {}\n", record.level, record.text)
        }
    }
}

fn backup_path(path: &Path) -> PathBuf {
    let mut backup: OsString = path.as_os_str().to_owned();
    backup.push("~");
    PathBuf::from(backup)
}
