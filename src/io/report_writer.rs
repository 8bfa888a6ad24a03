//! Ranked report serialization
//!
//! Writes the two `;`-delimited reports:
//! - revenue per salesperson: `fullName;total`
//! - units per product: `productName;unitPrice;totalUnits`
//!
//! Both are ordered by the aggregate's ranking (descending value, ascending id
//! on ties), so writing an unchanged aggregate twice yields identical bytes.
//!
//! The two reports treat unknown ids differently: a salesperson missing from
//! the roster is still listed under `UNKNOWN_SALESPERSON`, while a product
//! missing from the catalog is left out of the units report.

use crate::core::{Catalog, RevenueAggregate, Roster, UnitsAggregate};
use crate::io::record_format::format_amount;
use csv::{QuoteStyle, WriterBuilder};
use serde::Serialize;
use std::io::Write;

/// Display name for revenue rows whose salesperson is not in the roster
pub const UNKNOWN_SALESPERSON: &str = "Desconocido";

#[derive(Debug, Serialize)]
struct RevenueRow<'a> {
    name: &'a str,
    total: String,
}

#[derive(Debug, Serialize)]
struct UnitsRow<'a> {
    name: &'a str,
    unit_price: String,
    units: u64,
}

fn report_writer(output: &mut dyn Write) -> csv::Writer<&mut dyn Write> {
    WriterBuilder::new()
        .has_headers(false)
        .delimiter(b';')
        .quote_style(QuoteStyle::Never)
        .from_writer(output)
}

/// Write the revenue-per-salesperson report
///
/// # Errors
///
/// Returns the underlying I/O error if `output` cannot be written.
pub fn write_revenue_report(
    revenue: &RevenueAggregate,
    roster: &Roster,
    output: &mut dyn Write,
) -> std::io::Result<()> {
    let mut writer = report_writer(output);

    for (salesperson, total) in revenue.ranked() {
        let name = roster.full_name(salesperson).unwrap_or(UNKNOWN_SALESPERSON);
        writer.serialize(RevenueRow {
            name,
            total: format_amount(total),
        })?;
    }

    writer.flush()
}

/// Write the units-per-product report, omitting products not in the catalog
///
/// # Errors
///
/// Returns the underlying I/O error if `output` cannot be written.
pub fn write_units_report(
    units: &UnitsAggregate,
    catalog: &Catalog,
    output: &mut dyn Write,
) -> std::io::Result<()> {
    let mut writer = report_writer(output);

    for (product_id, count) in units.ranked() {
        let Some(product) = catalog.get(product_id) else {
            continue;
        };
        writer.serialize(UnitsRow {
            name: &product.name,
            unit_price: format_amount(product.unit_price),
            units: count,
        })?;
    }

    writer.flush()
}
