//! Streaming reader for `;`-delimited input files
//!
//! Reads the catalog, roster and transaction files one physical line at a
//! time: no header row, `;` as delimiter, no quoting, whitespace trimmed and a
//! variable number of fields per line. Each line is split into a
//! `csv::StringRecord`; field-count validation is left to the caller since
//! every file kind expects a different count.
//!
//! Blank lines are not skipped. They come out as a record with a single empty
//! field, so the caller rejects them like any other short row. The newline
//! ending the last line does not start another record.
//!
//! # Iterator Interface
//!
//! `RecordReader` implements `Iterator`, yielding `Result<RawRecord, ReportError>`
//! for each line:
//!
//! ```no_run
//! use sales_report_engine::io::RecordReader;
//! use std::path::Path;
//!
//! let reader = RecordReader::open(Path::new("productos.txt")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("line {}: {}", record.line(), record.raw()),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Failing to open the file is returned from `open()` as a plain `io::Error`,
//!   so the caller decides whether that is fatal
//! - A line that is not valid UTF-8 is yielded as `ParseError` and iteration
//!   continues with the next line
//! - An I/O failure mid-stream is yielded once as `UnreadableFile` and ends
//!   the iteration

use crate::types::ReportError;
use csv::StringRecord;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

const DELIMITER: char = ';';

/// One line of an input file, split on `;`
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    line: u64,
    fields: StringRecord,
}

impl RawRecord {
    /// Split `text` into trimmed fields
    pub fn parse(line: u64, text: &str) -> Self {
        let fields: StringRecord = text.split(DELIMITER).map(str::trim).collect();
        RawRecord { line, fields }
    }

    /// 1-based physical line number in the source file
    pub fn line(&self) -> u64 {
        self.line
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Trimmed field at `index`, if present
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index)
    }

    /// The fields joined back with `;`, for diagnostics
    pub fn raw(&self) -> String {
        self.fields.iter().collect::<Vec<_>>().join(";")
    }
}

/// Streaming record reader
///
/// Reads one line at a time; memory use does not depend on file size.
#[derive(Debug)]
pub struct RecordReader<R> {
    reader: BufReader<R>,
    name: String,
    line: u64,
    buffer: Vec<u8>,
    finished: bool,
}

impl RecordReader<File> {
    /// Open a file for streaming, naming diagnostics after its file name
    pub fn open(path: &Path) -> std::io::Result<Self> {
        let file = File::open(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::from_reader(name, file))
    }
}

impl<R: Read> RecordReader<R> {
    /// Wrap any reader; `name` is used as the file name in diagnostics
    pub fn from_reader(name: impl Into<String>, reader: R) -> Self {
        Self {
            reader: BufReader::with_capacity(8 * 1024, reader),
            name: name.into(),
            line: 0,
            buffer: Vec::new(),
            finished: false,
        }
    }

    /// Name used for this source in diagnostics
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<RawRecord, ReportError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        self.buffer.clear();
        match self.reader.read_until(b'\n', &mut self.buffer) {
            Ok(0) => {
                self.finished = true;
                None
            }
            Ok(_) => {
                self.line += 1;
                let text = match std::str::from_utf8(&self.buffer) {
                    Ok(text) => text,
                    Err(e) => {
                        return Some(Err(ReportError::parse_error(
                            &self.name,
                            self.line,
                            &e.to_string(),
                        )))
                    }
                };
                let text = text.trim_end_matches(['\n', '\r']);
                Some(Ok(RawRecord::parse(self.line, text)))
            }
            Err(e) => {
                // The underlying reader is unusable from here on
                self.finished = true;
                Some(Err(ReportError::unreadable_file(&self.name, e)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn records(content: &str) -> Vec<Result<RawRecord, ReportError>> {
        RecordReader::from_reader("test.txt", content.as_bytes()).collect()
    }

    #[test]
    fn test_splits_on_semicolon_and_trims() {
        let records = records("1; Widget ;10.00\n");

        assert_eq!(records.len(), 1);
        let record = records[0].as_ref().unwrap();
        assert_eq!(record.len(), 3);
        assert_eq!(record.get(0), Some("1"));
        assert_eq!(record.get(1), Some("Widget"));
        assert_eq!(record.get(2), Some("10.00"));
        assert_eq!(record.raw(), "1;Widget;10.00");
    }

    #[test]
    fn test_allows_varying_field_counts() {
        let records = records("CC;101\n1;3\n1;2;extra\n");

        let lens: Vec<usize> = records.iter().map(|r| r.as_ref().unwrap().len()).collect();
        assert_eq!(lens, vec![2, 2, 3]);
    }

    #[test]
    fn test_tracks_physical_line_numbers() {
        let lines: Vec<u64> = records("CC;101\n\n1;3\n")
            .iter()
            .map(|r| r.as_ref().unwrap().line())
            .collect();

        assert_eq!(lines, vec![1, 2, 3]);
    }

    #[test]
    fn test_blank_lines_are_single_empty_field_records() {
        let records = records("CC;101\n\n  \n\n1;-2\n");

        let lines: Vec<(u64, usize, String)> = records
            .iter()
            .map(|r| {
                let record = r.as_ref().unwrap();
                (record.line(), record.len(), record.raw())
            })
            .collect();
        assert_eq!(
            lines,
            vec![
                (1, 2, "CC;101".to_string()),
                (2, 1, String::new()),
                (3, 1, String::new()),
                (4, 1, String::new()),
                (5, 2, "1;-2".to_string()),
            ]
        );
    }

    #[rstest]
    #[case::trailing_newline("1;2\n3;4\n", 2)]
    #[case::no_trailing_newline("1;2\n3;4", 2)]
    #[case::crlf("1;2\r\n3;4\r\n", 2)]
    #[case::trailing_blank_line("1;2\n3;4\n\n", 3)]
    fn test_final_newline_ends_input(#[case] content: &str, #[case] expected: usize) {
        assert_eq!(records(content).len(), expected);
    }

    #[test]
    fn test_trailing_delimiter_keeps_empty_field() {
        let records = records("1;3;\n");
        let record = records[0].as_ref().unwrap();
        assert_eq!(record.len(), 3);
        assert_eq!(record.get(2), Some(""));
    }

    #[test]
    fn test_quotes_are_plain_characters() {
        let records = records("1;\"Deluxe\" Lamp;5\n");

        let record = records[0].as_ref().unwrap();
        assert_eq!(record.len(), 3);
        assert_eq!(record.get(1), Some("\"Deluxe\" Lamp"));
    }

    #[test]
    fn test_invalid_utf8_is_reported_and_iteration_continues() {
        let mut content = b"1;ok;1\n".to_vec();
        content.extend_from_slice(&[b'2', b';', 0xff, 0xfe, b';', b'1', b'\n']);
        content.extend_from_slice(b"3;ok;3\n");

        let records: Vec<_> = RecordReader::from_reader("bytes.txt", content.as_slice()).collect();

        assert_eq!(records.len(), 3);
        assert!(records[0].is_ok());
        assert!(matches!(
            records[1],
            Err(ReportError::ParseError { ref file, line: Some(2), .. }) if file == "bytes.txt"
        ));
        assert_eq!(records[2].as_ref().unwrap().get(0), Some("3"));
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(records("").is_empty());
    }

    #[test]
    fn test_open_names_source_after_file_name() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(b"1;2\n").expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");

        let reader = RecordReader::open(file.path()).unwrap();
        let expected = file.path().file_name().unwrap().to_string_lossy().into_owned();
        assert_eq!(reader.name(), expected);
    }

    #[test]
    fn test_open_fails_on_missing_file() {
        let result = RecordReader::open(Path::new("does-not-exist.txt"));
        assert_eq!(result.unwrap_err().kind(), std::io::ErrorKind::NotFound);
    }
}
