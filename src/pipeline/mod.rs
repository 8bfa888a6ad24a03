//! Report pipeline
//!
//! Wires the stages together for one run:
//! 1. load the catalog and the roster (fatal if either is unreadable)
//! 2. feed every transaction file through a `TransactionProcessor`
//! 3. write the revenue and units reports
//!
//! Transaction files are passed in explicitly to `run_with`; `run` discovers
//! them by file name prefix first. A transaction file that fails is recorded
//! and skipped, so it never keeps the other files from contributing.

pub mod config;

pub use config::PipelineConfig;

use crate::core::{Catalog, ErrorSink, FileErrorSink, Roster, TransactionProcessor};
use crate::io::report_writer::{write_revenue_report, write_units_report};
use crate::types::ReportError;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// What a completed run did
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub products_loaded: usize,
    pub salespeople_loaded: usize,
    pub files_processed: usize,
    pub files_skipped: usize,
    pub lines_applied: usize,
    pub lines_rejected: usize,
    /// Diagnostics sent to the error sink during the run
    pub errors_logged: usize,
}

/// List the files in `dir` whose name starts with `prefix`, sorted by name
///
/// Sorting only makes the error log order reproducible; totals do not depend
/// on it.
///
/// # Errors
///
/// Returns a fatal error if `dir` cannot be listed.
pub fn discover_transaction_files(dir: &Path, prefix: &str) -> Result<Vec<PathBuf>, ReportError> {
    let entries = fs::read_dir(dir).map_err(|e| ReportError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ReportError::io(dir, e))?;
        let is_match = entry.file_name().to_string_lossy().starts_with(prefix);
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if is_match && is_file {
            files.push(entry.path());
        }
    }
    files.sort();

    tracing::debug!(dir = %dir.display(), count = files.len(), "transaction files discovered");
    Ok(files)
}

/// Run the pipeline, discovering transaction files and logging to the error log
///
/// # Errors
///
/// Returns a fatal error if the catalog, the roster or the data directory
/// cannot be read, or if a report cannot be written.
pub fn run(config: &PipelineConfig) -> Result<RunSummary, ReportError> {
    create_parent_dir(&config.error_log_path)?;
    let mut sink = FileErrorSink::new(&config.error_log_path);

    let files = discover_transaction_files(&config.data_dir, &config.transaction_prefix)?;
    run_with(config, &files, &mut sink)
}

/// Run the pipeline over an explicit list of transaction files
///
/// # Errors
///
/// Same fatal conditions as `run`, minus directory discovery.
pub fn run_with(
    config: &PipelineConfig,
    transaction_files: &[PathBuf],
    sink: &mut dyn ErrorSink,
) -> Result<RunSummary, ReportError> {
    let catalog = Catalog::load(&config.catalog_path, sink)?;
    let roster = Roster::load(&config.roster_path, sink)?;

    let mut processor = TransactionProcessor::new(&catalog, sink);
    for path in transaction_files {
        if let Err(e) = processor.process_file(path) {
            tracing::debug!(file = %path.display(), error = %e, "transaction file skipped");
        }
    }
    let (aggregates, stats) = processor.finish();

    write_report_file(&config.revenue_report_path, |output| {
        write_revenue_report(&aggregates.revenue, &roster, output)
    })?;
    write_report_file(&config.units_report_path, |output| {
        write_units_report(&aggregates.units, &catalog, output)
    })?;

    let summary = RunSummary {
        products_loaded: catalog.len(),
        salespeople_loaded: roster.len(),
        files_processed: stats.files_processed,
        files_skipped: stats.files_skipped,
        lines_applied: stats.lines_applied,
        lines_rejected: stats.lines_rejected,
        errors_logged: sink.count(),
    };
    tracing::info!(?summary, "reports written");

    Ok(summary)
}

fn create_parent_dir(path: &Path) -> Result<(), ReportError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| ReportError::io(parent, e))
        }
        _ => Ok(()),
    }
}

/// Create (or truncate) `path` and let `write` fill it
fn write_report_file<F>(path: &Path, write: F) -> Result<(), ReportError>
where
    F: FnOnce(&mut dyn Write) -> std::io::Result<()>,
{
    create_parent_dir(path)?;
    let file = File::create(path).map_err(|e| ReportError::io(path, e))?;
    let mut output = BufWriter::new(file);

    write(&mut output).map_err(|e| ReportError::io(path, e))?;
    output.flush().map_err(|e| ReportError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MemoryErrorSink;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn write_inputs(dir: &Path, files: &[(&str, &str)]) {
        for (name, content) in files {
            fs::write(dir.join(name), content).unwrap();
        }
    }

    fn setup(files: &[(&str, &str)]) -> (TempDir, PipelineConfig) {
        let dir = tempdir().unwrap();
        write_inputs(dir.path(), files);
        let config = PipelineConfig::new(dir.path(), dir.path().join("out"));
        (dir, config)
    }

    #[test]
    fn test_discovery_matches_prefix_only() {
        let (dir, _) = setup(&[
            ("ventas_2.txt", "CC;2\n"),
            ("ventas_1.txt", "CC;1\n"),
            ("productos.txt", ""),
            ("notes_ventas.txt", ""),
        ]);
        fs::create_dir(dir.path().join("ventas_dir")).unwrap();

        let files = discover_transaction_files(dir.path(), "ventas_").unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["ventas_1.txt", "ventas_2.txt"]);
    }

    #[test]
    fn test_discovery_of_missing_directory_is_fatal() {
        let dir = tempdir().unwrap();
        let error = discover_transaction_files(&dir.path().join("nope"), "ventas_").unwrap_err();
        assert!(error.is_fatal());
    }

    #[test]
    fn test_run_with_explicit_files() {
        let (dir, config) = setup(&[
            ("productos.txt", "1;Widget;10.00\n"),
            ("vendedores.txt", "CC;101;Ana;Perez\n"),
            ("a.txt", "CC;101\n1;3\n1;2\n"),
            ("ventas_ignored.txt", "CC;101\n1;100\n"),
        ]);
        let mut sink = MemoryErrorSink::new();

        let summary = run_with(&config, &[dir.path().join("a.txt")], &mut sink).unwrap();

        assert_eq!(summary.files_processed, 1);
        assert_eq!(summary.lines_applied, 2);
        assert_eq!(
            fs::read_to_string(&config.revenue_report_path).unwrap(),
            "Ana Perez;50.00\n"
        );
        assert_eq!(
            fs::read_to_string(&config.units_report_path).unwrap(),
            "Widget;10.00;5\n"
        );
    }

    #[test]
    fn test_missing_catalog_is_fatal() {
        let (_dir, config) = setup(&[("vendedores.txt", "CC;101;Ana;Perez\n")]);
        let mut sink = MemoryErrorSink::new();

        let error = run_with(&config, &[], &mut sink).unwrap_err();

        assert!(matches!(error, ReportError::FileNotFound { ref path } if path.ends_with("productos.txt")));
        assert!(!config.revenue_report_path.exists());
    }

    #[test]
    fn test_missing_roster_is_fatal() {
        let (_dir, config) = setup(&[("productos.txt", "1;Widget;10.00\n")]);
        let mut sink = MemoryErrorSink::new();

        let error = run_with(&config, &[], &mut sink).unwrap_err();

        assert!(matches!(error, ReportError::FileNotFound { ref path } if path.ends_with("vendedores.txt")));
    }

    #[test]
    fn test_run_writes_error_log_and_overwrites_reports() {
        let (dir, config) = setup(&[
            ("productos.txt", "1;Widget;10.00\n2;Broken\n"),
            ("vendedores.txt", "CC;101;Ana;Perez\n"),
            ("ventas_101.txt", "CC;101\n1;1\n"),
            ("ventas_102.txt", ""),
        ]);
        fs::create_dir_all(dir.path().join("out")).unwrap();
        fs::write(&config.revenue_report_path, "stale;1.00\nstale;2.00\n").unwrap();

        let summary = run(&config).unwrap();

        assert_eq!(summary.files_processed, 1);
        assert_eq!(summary.files_skipped, 1);
        assert_eq!(summary.errors_logged, 2);
        assert_eq!(
            fs::read_to_string(&config.revenue_report_path).unwrap(),
            "Ana Perez;10.00\n"
        );

        let log = fs::read_to_string(&config.error_log_path).unwrap();
        assert_eq!(log.lines().count(), 2);
        assert!(log.contains("productos.txt"));
        assert!(log.contains("Empty file: ventas_102.txt"));

        run(&config).unwrap();
        let log = fs::read_to_string(&config.error_log_path).unwrap();
        assert_eq!(log.lines().count(), 4);
    }
}
