//! Salesperson roster
//!
//! Loads `vendedores.txt` into a lookup table from salesperson id to display
//! name, with the same skip-and-report handling as the catalog.

use crate::core::traits::ErrorSink;
use crate::io::record_format::parse_salesperson;
use crate::io::record_reader::RecordReader;
use crate::types::{ReportError, Salesperson, SalespersonId};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// In-memory salesperson lookup table
#[derive(Debug, Default, Clone)]
pub struct Roster {
    salespeople: HashMap<SalespersonId, Salesperson>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the roster from a file
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound`/`IoError` if the file cannot be read. Malformed
    /// rows are reported to `sink` and skipped.
    pub fn load(path: &Path, sink: &mut dyn ErrorSink) -> Result<Self, ReportError> {
        let reader = RecordReader::open(path).map_err(|e| ReportError::io(path, e))?;
        let name = reader.name().to_string();
        Self::from_records(&name, reader, sink).map_err(|e| match e {
            ReportError::UnreadableFile { message, .. } => ReportError::IoError {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    pub fn from_reader<R: Read>(
        name: &str,
        reader: R,
        sink: &mut dyn ErrorSink,
    ) -> Result<Self, ReportError> {
        Self::from_records(name, RecordReader::from_reader(name, reader), sink)
    }

    fn from_records<R: Read>(
        name: &str,
        records: RecordReader<R>,
        sink: &mut dyn ErrorSink,
    ) -> Result<Self, ReportError> {
        let mut roster = Roster::new();

        for result in records {
            match result.and_then(|record| parse_salesperson(name, &record)) {
                Ok(salesperson) => roster.insert(salesperson),
                Err(e @ ReportError::UnreadableFile { .. }) => return Err(e),
                Err(e) => sink.record(&e),
            }
        }

        tracing::debug!(file = name, salespeople = roster.len(), "roster loaded");
        Ok(roster)
    }

    pub fn insert(&mut self, salesperson: Salesperson) {
        self.salespeople.insert(salesperson.id, salesperson);
    }

    pub fn get(&self, id: SalespersonId) -> Option<&Salesperson> {
        self.salespeople.get(&id)
    }

    /// Full name for `id`, if the roster knows it
    pub fn full_name(&self, id: SalespersonId) -> Option<&str> {
        self.get(id).map(|s| s.full_name.as_str())
    }

    pub fn len(&self) -> usize {
        self.salespeople.len()
    }

    pub fn is_empty(&self) -> bool {
        self.salespeople.is_empty()
    }
}

impl FromIterator<Salesperson> for Roster {
    fn from_iter<I: IntoIterator<Item = Salesperson>>(iter: I) -> Self {
        let mut roster = Roster::new();
        for salesperson in iter {
            roster.insert(salesperson);
        }
        roster
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error_sink::MemoryErrorSink;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_loads_full_names_and_skips_bad_rows() {
        let content = "CC;101;Ana;Perez\n\
                       CC;102;Luis\n\
                       CC;abc;Carlos;Ruiz\n\
                       TI;103;Maria;Diaz\n";
        let mut sink = MemoryErrorSink::new();

        let roster = Roster::from_reader("vendedores.txt", content.as_bytes(), &mut sink).unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.full_name(101), Some("Ana Perez"));
        assert_eq!(roster.full_name(103), Some("Maria Diaz"));
        assert_eq!(roster.full_name(102), None);

        assert_eq!(sink.count(), 2);
        assert!(matches!(sink.errors()[0], ReportError::FieldCount { .. }));
        assert!(matches!(sink.errors()[1], ReportError::InvalidNumber { .. }));
    }

    #[test]
    fn test_last_duplicate_wins_without_error() {
        let content = "CC;101;Ana;Perez\nCC;101;Sofia;Lopez\n";
        let mut sink = MemoryErrorSink::new();

        let roster = Roster::from_reader("vendedores.txt", content.as_bytes(), &mut sink).unwrap();

        assert_eq!(roster.len(), 1);
        assert_eq!(roster.full_name(101), Some("Sofia Lopez"));
        assert_eq!(sink.count(), 0);
    }

    #[test]
    fn test_load_from_file_and_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vendedores.txt");
        let mut sink = MemoryErrorSink::new();

        let error = Roster::load(&path, &mut sink).unwrap_err();
        assert!(error.is_fatal());

        fs::write(&path, "CC;100;Sofia;Lopez\n").unwrap();
        let roster = Roster::load(&path, &mut sink).unwrap();
        assert_eq!(roster.full_name(100), Some("Sofia Lopez"));
    }
}
