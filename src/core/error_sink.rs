//! Error sink implementations
//!
//! - `FileErrorSink` appends one line per diagnostic to a persistent log,
//!   across runs
//! - `MemoryErrorSink` keeps diagnostics in memory, used by tests and callers
//!   that want to inspect rejections programmatically

use crate::core::traits::ErrorSink;
use crate::types::ReportError;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends diagnostics to a log file
///
/// The file is opened in append mode for every message and closed again, so
/// nothing is lost if the process stops mid-run. Write failures are reported
/// through `tracing` and otherwise ignored.
#[derive(Debug)]
pub struct FileErrorSink {
    path: PathBuf,
    recorded: usize,
    failed_writes: usize,
}

impl FileErrorSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileErrorSink {
            path: path.into(),
            recorded: 0,
            failed_writes: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Messages that could not be written to the log
    pub fn failed_writes(&self) -> usize {
        self.failed_writes
    }

    fn append(&self, message: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", message)
    }
}

impl ErrorSink for FileErrorSink {
    fn record(&mut self, error: &ReportError) {
        self.recorded += 1;
        tracing::debug!(%error, "record rejected");

        if let Err(e) = self.append(&error.to_string()) {
            self.failed_writes += 1;
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "could not write to error log"
            );
        }
    }

    fn count(&self) -> usize {
        self.recorded
    }
}

/// Collects diagnostics in memory
#[derive(Debug, Default, Clone)]
pub struct MemoryErrorSink {
    errors: Vec<ReportError>,
}

impl MemoryErrorSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &[ReportError] {
        &self.errors
    }

    /// Diagnostics rendered the way `FileErrorSink` would write them
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

impl ErrorSink for MemoryErrorSink {
    fn record(&mut self, error: &ReportError) {
        self.errors.push(error.clone());
    }

    fn count(&self) -> usize {
        self.errors.len()
    }
}
