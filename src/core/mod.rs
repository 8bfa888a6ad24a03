//! Core business logic module
//!
//! This module contains the pipeline stages:
//! - `traits` - The `ErrorSink` abstraction shared by every stage
//! - `error_sink` - File-backed and in-memory error sinks
//! - `catalog` - Product lookup table and its loader
//! - `roster` - Salesperson lookup table and its loader
//! - `aggregates` - Revenue and units running totals
//! - `processor` - Transaction file validation and accumulation

pub mod aggregates;
pub mod catalog;
pub mod error_sink;
pub mod processor;
pub mod roster;
pub mod traits;

pub use aggregates::{Aggregates, RevenueAggregate, UnitsAggregate};
pub use catalog::Catalog;
pub use error_sink::{FileErrorSink, MemoryErrorSink};
pub use processor::{BatchSummary, ProcessingStats, TransactionProcessor};
pub use roster::Roster;
pub use traits::ErrorSink;
