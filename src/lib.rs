//! Sales Report Engine Library
//! # Overview
//!
//! This library turns flat-file sales data into two ranked reports: revenue per
//! salesperson and units sold per product. Malformed input never aborts a run;
//! each rejected record is written to an error log and skipped.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Product, Salesperson, SaleLine, ReportError)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::catalog`] - Product lookup table loaded from `productos.txt`
//!   - [`core::roster`] - Salesperson lookup table loaded from `vendedores.txt`
//!   - [`core::processor`] - Validation and accumulation of `ventas_*.txt` files
//!   - [`core::aggregates`] - Revenue and units running totals
//!   - [`core::error_sink`] - Destinations for recoverable diagnostics
//! - [`io`] - Record reading, line formats and report writing
//! - [`pipeline`] - Runs the stages in order from a `PipelineConfig`
//! - [`generator`] - Random input files for trying the pipeline out
//!
//! # Input Files
//!
//! All files use `;` as delimiter, one record per line:
//!
//! - **productos.txt**: `id;name;price`
//! - **vendedores.txt**: `docType;id;firstName;lastName`
//! - **ventas_<id>.txt**: header `docType;salespersonId`, then `productId;quantity`
//!
//! # Failure Handling
//!
//! - A missing catalog or roster stops the run
//! - A bad transaction file is skipped as a whole; the others still count
//! - A bad line is skipped; the rest of its file still counts

// Module declarations
pub mod cli;
pub mod core;
pub mod generator;
pub mod io;
pub mod pipeline;
pub mod types;

pub use self::core::{
    Aggregates, Catalog, ErrorSink, FileErrorSink, MemoryErrorSink, RevenueAggregate, Roster,
    TransactionProcessor, UnitsAggregate,
};
pub use generator::{DataGenerator, GeneratorConfig};
pub use io::{write_revenue_report, write_units_report};
pub use pipeline::{run, run_with, PipelineConfig, RunSummary};
pub use types::{Product, ProductId, ReportError, Salesperson, SalespersonId};
