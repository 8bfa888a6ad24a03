//! Running totals built from valid sale lines
//!
//! Both aggregates start empty and only gain keys when a valid line is
//! applied, so every key present corresponds to at least one sale.
//! `Aggregates::apply` checks both updates before performing either, the same
//! way a balance update computes the new values before assigning them.

use crate::types::{ProductId, Quantity, ReportError, SalespersonId};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Accumulated revenue per salesperson
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RevenueAggregate {
    totals: HashMap<SalespersonId, Decimal>,
}

impl RevenueAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, salesperson: SalespersonId) -> Option<Decimal> {
        self.totals.get(&salesperson).copied()
    }

    /// The total `salesperson` would have after adding `amount`
    fn checked_total(&self, salesperson: SalespersonId, amount: Decimal) -> Option<Decimal> {
        self.get(salesperson).unwrap_or(Decimal::ZERO).checked_add(amount)
    }

    /// Add `amount` to the running total of `salesperson`
    ///
    /// Returns `None` and leaves the total unchanged on overflow.
    pub fn add(&mut self, salesperson: SalespersonId, amount: Decimal) -> Option<Decimal> {
        let total = self.checked_total(salesperson, amount)?;
        self.totals.insert(salesperson, total);
        Some(total)
    }

    /// Entries by descending total, ties by ascending salesperson id
    pub fn ranked(&self) -> Vec<(SalespersonId, Decimal)> {
        let mut entries: Vec<_> = self.totals.iter().map(|(&id, &total)| (id, total)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

/// Accumulated units sold per product
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UnitsAggregate {
    totals: HashMap<ProductId, u64>,
}

impl UnitsAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, product: ProductId) -> Option<u64> {
        self.totals.get(&product).copied()
    }

    fn checked_total(&self, product: ProductId, units: u64) -> Option<u64> {
        self.get(product).unwrap_or(0).checked_add(units)
    }

    /// Add `units` to the running count of `product`
    ///
    /// Returns `None` and leaves the count unchanged on overflow.
    pub fn add(&mut self, product: ProductId, units: u64) -> Option<u64> {
        let total = self.checked_total(product, units)?;
        self.totals.insert(product, total);
        Some(total)
    }

    /// Entries by descending units, ties by ascending product id
    pub fn ranked(&self) -> Vec<(ProductId, u64)> {
        let mut entries: Vec<_> = self.totals.iter().map(|(&id, &units)| (id, units)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

/// The pair of aggregates fed by the transaction processor
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Aggregates {
    pub revenue: RevenueAggregate,
    pub units: UnitsAggregate,
}

impl Aggregates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one validated sale line to both aggregates
    ///
    /// `quantity` must already be positive. Either both totals are updated or,
    /// on overflow, neither is.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` naming the aggregate that would overflow.
    pub fn apply(
        &mut self,
        file: &str,
        line: u64,
        salesperson: SalespersonId,
        product: ProductId,
        quantity: Quantity,
        unit_price: Decimal,
    ) -> Result<(), ReportError> {
        let units = u64::try_from(quantity)
            .map_err(|_| ReportError::invalid_quantity(file, line, quantity))?;

        let revenue_total = unit_price
            .checked_mul(Decimal::from(quantity))
            .and_then(|amount| self.revenue.checked_total(salesperson, amount))
            .ok_or_else(|| ReportError::arithmetic_overflow(file, line, "revenue"))?;

        let units_total = self
            .units
            .checked_total(product, units)
            .ok_or_else(|| ReportError::arithmetic_overflow(file, line, "units"))?;

        self.revenue.totals.insert(salesperson, revenue_total);
        self.units.totals.insert(product, units_total);

        Ok(())
    }
}
