//! Product types for the catalog

use rust_decimal::Decimal;

/// Product identifier
pub type ProductId = i32;

/// A single catalog entry
///
/// Products are created by the catalog loader and never change afterwards.
/// Rows with a negative price never make it into a `Product`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,

    /// Display name used in the units report
    pub name: String,

    /// Price of a single unit, always non-negative
    pub unit_price: Decimal,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, unit_price: Decimal) -> Self {
        Product {
            id,
            name: name.into(),
            unit_price,
        }
    }
}
