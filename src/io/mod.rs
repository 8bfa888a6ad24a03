//! I/O module
//!
//! Handles reading the `;`-delimited input files and writing the reports.
//!
//! # Components
//!
//! - `record_reader` - Streaming reader yielding one raw record per line
//! - `record_format` - Pure conversion of raw records into domain types
//! - `report_writer` - Ranked report serialization

pub mod record_format;
pub mod record_reader;
pub mod report_writer;

pub use record_format::{format_amount, parse_header, parse_product, parse_sale_line, parse_salesperson};
pub use record_reader::{RawRecord, RecordReader};
pub use report_writer::{write_revenue_report, write_units_report, UNKNOWN_SALESPERSON};
