//! Error types for the Sales Report Engine
//!
//! This module defines all error types that can occur while loading reference
//! data, processing transaction files and writing reports.
//!
//! # Error Categories
//!
//! - **Fatal**: a required input file (catalog, roster) is missing or unreadable,
//!   or a report cannot be written. The run stops.
//! - **Recoverable**: malformed rows, non-numeric fields, out-of-range values,
//!   unknown products, unusable transaction files. The offending record (or file)
//!   is skipped, the error goes to the error sink and processing continues.

use crate::types::{ProductId, Quantity};
use rust_decimal::Decimal;
use std::path::Path;
use thiserror::Error;

/// Main error type for the report pipeline
///
/// Every recoverable variant carries the name of the file it came from so that
/// a line in the error log can be traced back to its input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    /// Required file not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// I/O error while reading a required input or writing a report
    #[error("I/O error on {path}: {message}")]
    IoError { path: String, message: String },

    /// Row does not have the number of fields its file format requires
    #[error("Wrong field count in {file} at line {line}: expected {expected}, found {found} ({raw})")]
    FieldCount {
        file: String,
        line: u64,
        expected: usize,
        found: usize,
        raw: String,
    },

    /// A numeric field could not be parsed
    #[error("Invalid {field} '{value}' in {file} at line {line} ({raw})")]
    InvalidNumber {
        file: String,
        line: u64,
        field: String,
        value: String,
        raw: String,
    },

    /// Catalog row with a price below zero
    #[error("Negative price {price} for product {product} in {file} at line {line}")]
    NegativePrice {
        file: String,
        line: u64,
        product: ProductId,
        price: Decimal,
    },

    /// Catalog row whose product id is below 1
    #[error("Product id {product} out of range in {file} at line {line}")]
    ProductIdOutOfRange {
        file: String,
        line: u64,
        product: ProductId,
    },

    /// Sale line with zero or negative quantity
    #[error("Invalid quantity ({quantity}) in {file} at line {line}")]
    InvalidQuantity {
        file: String,
        line: u64,
        quantity: Quantity,
    },

    /// Sale line referencing a product id absent from the catalog
    #[error("Product not found: id {product} in {file} at line {line}")]
    ProductNotFound {
        file: String,
        line: u64,
        product: ProductId,
    },

    /// Transaction file without even a header line
    #[error("Empty file: {file}")]
    EmptyFile { file: String },

    /// Transaction file whose header does not name a salesperson
    #[error("Invalid header in {file}: {header}")]
    InvalidHeader { file: String, header: String },

    /// Applying a line would overflow one of the running totals
    #[error("Arithmetic overflow in {aggregate} total in {file} at line {line}")]
    ArithmeticOverflow {
        file: String,
        line: u64,
        aggregate: String,
    },

    /// A row that cannot be read as text (e.g. invalid UTF-8)
    #[error("Parse error in {file}{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        file: String,
        line: Option<u64>,
        message: String,
    },

    /// A transaction file that could not be opened or read
    #[error("Unreadable file {file}: {message}")]
    UnreadableFile { file: String, message: String },
}

impl ReportError {
    /// Whether this error stops the whole run
    ///
    /// Only missing or unreadable reference data and unwritable outputs are
    /// fatal; everything else only costs the record or file it came from.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ReportError::FileNotFound { .. } | ReportError::IoError { .. }
        )
    }

    /// Convert an I/O error on a required file, singling out missing files
    pub fn io(path: &Path, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            ReportError::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            ReportError::IoError {
                path: path.display().to_string(),
                message: error.to_string(),
            }
        }
    }

    /// A line of `file` that could not be decoded
    pub fn parse_error(file: &str, line: u64, message: &str) -> Self {
        ReportError::ParseError {
            file: file.to_string(),
            line: Some(line),
            message: message.to_string(),
        }
    }

    pub fn field_count(file: &str, line: u64, expected: usize, found: usize, raw: &str) -> Self {
        ReportError::FieldCount {
            file: file.to_string(),
            line,
            expected,
            found,
            raw: raw.to_string(),
        }
    }

    pub fn invalid_number(file: &str, line: u64, field: &str, value: &str, raw: &str) -> Self {
        ReportError::InvalidNumber {
            file: file.to_string(),
            line,
            field: field.to_string(),
            value: value.to_string(),
            raw: raw.to_string(),
        }
    }

    pub fn negative_price(file: &str, line: u64, product: ProductId, price: Decimal) -> Self {
        ReportError::NegativePrice {
            file: file.to_string(),
            line,
            product,
            price,
        }
    }

    pub fn product_id_out_of_range(file: &str, line: u64, product: ProductId) -> Self {
        ReportError::ProductIdOutOfRange {
            file: file.to_string(),
            line,
            product,
        }
    }

    pub fn invalid_quantity(file: &str, line: u64, quantity: Quantity) -> Self {
        ReportError::InvalidQuantity {
            file: file.to_string(),
            line,
            quantity,
        }
    }

    pub fn product_not_found(file: &str, line: u64, product: ProductId) -> Self {
        ReportError::ProductNotFound {
            file: file.to_string(),
            line,
            product,
        }
    }

    pub fn empty_file(file: &str) -> Self {
        ReportError::EmptyFile {
            file: file.to_string(),
        }
    }

    pub fn invalid_header(file: &str, header: &str) -> Self {
        ReportError::InvalidHeader {
            file: file.to_string(),
            header: header.to_string(),
        }
    }

    pub fn arithmetic_overflow(file: &str, line: u64, aggregate: &str) -> Self {
        ReportError::ArithmeticOverflow {
            file: file.to_string(),
            line,
            aggregate: aggregate.to_string(),
        }
    }

    pub fn unreadable_file(file: &str, error: std::io::Error) -> Self {
        ReportError::UnreadableFile {
            file: file.to_string(),
            message: error.to_string(),
        }
    }
}
