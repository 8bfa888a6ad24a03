//! Transaction processor
//!
//! Streams transaction sources through the validation chain and accumulates
//! the two aggregates.
//!
//! Every line is checked once, in order:
//! 1. field count
//! 2. numeric parse of product id and quantity
//! 3. quantity strictly positive
//! 4. product present in the catalog
//! 5. neither running total overflows
//!
//! and is then either applied to both aggregates or rejected. File-level
//! problems (unopenable file, no header, bad header) reject the whole source
//! without touching the aggregates; other sources are unaffected.

use crate::core::aggregates::Aggregates;
use crate::core::catalog::Catalog;
use crate::core::traits::ErrorSink;
use crate::io::record_format::{parse_header, parse_sale_line};
use crate::io::record_reader::{RawRecord, RecordReader};
use crate::types::{ReportError, SalespersonId};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Outcome of one accepted transaction source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub salesperson: SalespersonId,
    pub lines_applied: usize,
    pub lines_rejected: usize,
}

/// Counters across all sources seen by a processor
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingStats {
    pub files_processed: usize,
    pub files_skipped: usize,
    pub lines_applied: usize,
    pub lines_rejected: usize,
}

/// Applies transaction sources to a fresh pair of aggregates
///
/// Sources can be fed in any order; the final totals only depend on which
/// lines were valid.
pub struct TransactionProcessor<'a> {
    catalog: &'a Catalog,
    sink: &'a mut dyn ErrorSink,
    aggregates: Aggregates,
    stats: ProcessingStats,
}

impl<'a> TransactionProcessor<'a> {
    pub fn new(catalog: &'a Catalog, sink: &'a mut dyn ErrorSink) -> Self {
        TransactionProcessor {
            catalog,
            sink,
            aggregates: Aggregates::new(),
            stats: ProcessingStats::default(),
        }
    }

    /// Process one transaction file
    ///
    /// A file that cannot be opened is reported and skipped like any other
    /// file-level rejection.
    pub fn process_file(&mut self, path: &Path) -> Result<BatchSummary, ReportError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        match File::open(path) {
            Ok(file) => self.process_source(&name, file),
            Err(e) => Err(self.skip_source(ReportError::unreadable_file(&name, e))),
        }
    }

    /// Process one transaction source read from `reader`
    ///
    /// Line-level rejections are recorded and processing continues with the
    /// next line. A file-level rejection is recorded too and returned as the
    /// error, with the aggregates left untouched.
    pub fn process_source<R: Read>(
        &mut self,
        name: &str,
        reader: R,
    ) -> Result<BatchSummary, ReportError> {
        let mut records = RecordReader::from_reader(name, reader);

        let header = match records.next() {
            None => Err(ReportError::empty_file(name)),
            Some(result) => result.and_then(|record| parse_header(name, &record)),
        };
        let header = match header {
            Ok(header) => header,
            Err(e) => return Err(self.skip_source(e)),
        };

        let mut summary = BatchSummary {
            salesperson: header.salesperson,
            lines_applied: 0,
            lines_rejected: 0,
        };

        for result in records {
            match result.and_then(|record| self.apply_line(name, header.salesperson, &record)) {
                Ok(()) => summary.lines_applied += 1,
                Err(e) => {
                    self.sink.record(&e);
                    summary.lines_rejected += 1;
                }
            }
        }

        self.stats.files_processed += 1;
        self.stats.lines_applied += summary.lines_applied;
        self.stats.lines_rejected += summary.lines_rejected;

        tracing::debug!(
            file = name,
            salesperson = summary.salesperson,
            applied = summary.lines_applied,
            rejected = summary.lines_rejected,
            "transaction file processed"
        );

        Ok(summary)
    }

    fn apply_line(
        &mut self,
        name: &str,
        salesperson: SalespersonId,
        record: &RawRecord,
    ) -> Result<(), ReportError> {
        let line = parse_sale_line(name, record)?;

        let product = self
            .catalog
            .get(line.product)
            .ok_or_else(|| ReportError::product_not_found(name, record.line(), line.product))?;

        self.aggregates.apply(
            name,
            record.line(),
            salesperson,
            line.product,
            line.quantity,
            product.unit_price,
        )
    }

    fn skip_source(&mut self, error: ReportError) -> ReportError {
        self.sink.record(&error);
        self.stats.files_skipped += 1;
        error
    }

    pub fn aggregates(&self) -> &Aggregates {
        &self.aggregates
    }

    pub fn stats(&self) -> ProcessingStats {
        self.stats
    }

    /// Hand the aggregates over to the report stage
    pub fn finish(self) -> (Aggregates, ProcessingStats) {
        (self.aggregates, self.stats)
    }
}
