//! Core traits shared by the pipeline stages

use crate::types::ReportError;

/// Destination for recoverable diagnostics
///
/// Every stage reports rejected records here instead of stopping. Recording
/// must never fail the caller: implementations deal with their own I/O
/// problems.
pub trait ErrorSink {
    /// Record one diagnostic
    fn record(&mut self, error: &ReportError);

    /// Number of diagnostics recorded so far
    fn count(&self) -> usize;
}
