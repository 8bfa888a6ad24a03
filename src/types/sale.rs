//! Transaction file types
//!
//! A transaction file starts with a header naming the salesperson, followed by
//! any number of sale lines. Neither is retained once it has been applied to
//! the aggregates.

use super::product::ProductId;
use super::salesperson::SalespersonId;

/// Units sold on a single line
pub type Quantity = i32;

/// First line of a transaction file (`docType;salespersonId`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchHeader {
    pub salesperson: SalespersonId,
}

/// One validated `productId;quantity` line
///
/// `quantity` is strictly positive once a `SaleLine` exists; the foreign key
/// against the catalog is checked later by the processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaleLine {
    pub product: ProductId,
    pub quantity: Quantity,
}
