//! Salesperson types for the roster

/// Salesperson identifier (identity document number)
pub type SalespersonId = i64;

/// A single roster entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Salesperson {
    pub id: SalespersonId,

    /// "firstName lastName", as shown in the revenue report
    pub full_name: String,
}

impl Salesperson {
    /// Build a salesperson from the separate name columns of the roster file
    pub fn new(id: SalespersonId, first_name: &str, last_name: &str) -> Self {
        Salesperson {
            id,
            full_name: format!("{} {}", first_name, last_name),
        }
    }
}
