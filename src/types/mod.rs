//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `product`: Catalog entries
//! - `salesperson`: Roster entries
//! - `sale`: Transaction file headers and sale lines
//! - `error`: Error types for the report pipeline

pub mod error;
pub mod product;
pub mod sale;
pub mod salesperson;

pub use error::ReportError;
pub use product::{Product, ProductId};
pub use sale::{BatchHeader, Quantity, SaleLine};
pub use salesperson::{Salesperson, SalespersonId};
