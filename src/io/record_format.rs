//! Record format handling for the input files and report amounts
//!
//! This module centralizes the per-line format rules:
//! - catalog rows `id;name;price`
//! - roster rows `docType;id;firstName;lastName`
//! - transaction headers `docType;salespersonId`
//! - sale lines `productId;quantity`
//!
//! Each parser checks, in order, the field count, the numeric fields and the
//! value ranges, and reports the first failure. All functions are pure (no I/O)
//! for easy testing.

use crate::io::record_reader::RawRecord;
use crate::types::{
    BatchHeader, Product, ProductId, Quantity, ReportError, SaleLine, Salesperson, SalespersonId,
};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

const PRODUCT_FIELDS: usize = 3;
const SALESPERSON_FIELDS: usize = 4;
const HEADER_MIN_FIELDS: usize = 2;
const SALE_FIELDS: usize = 2;
const MIN_PRODUCT_ID: ProductId = 1;

fn expect_fields(file: &str, record: &RawRecord, expected: usize) -> Result<(), ReportError> {
    if record.len() != expected {
        return Err(ReportError::field_count(
            file,
            record.line(),
            expected,
            record.len(),
            &record.raw(),
        ));
    }
    Ok(())
}

fn parse_field<T: FromStr>(
    file: &str,
    record: &RawRecord,
    index: usize,
    field: &str,
) -> Result<T, ReportError> {
    let value = record.get(index).unwrap_or_default();
    value
        .parse::<T>()
        .map_err(|_| ReportError::invalid_number(file, record.line(), field, value, &record.raw()))
}

/// Convert a catalog row into a `Product`
///
/// Rejects rows without exactly three fields, with a non-integer id or a
/// non-decimal price, rows whose id is below 1 and rows whose price is
/// negative.
pub fn parse_product(file: &str, record: &RawRecord) -> Result<Product, ReportError> {
    expect_fields(file, record, PRODUCT_FIELDS)?;

    let id: ProductId = parse_field(file, record, 0, "product id")?;
    let unit_price: Decimal = parse_field(file, record, 2, "price")?;

    if id < MIN_PRODUCT_ID {
        return Err(ReportError::product_id_out_of_range(file, record.line(), id));
    }
    if unit_price < Decimal::ZERO {
        return Err(ReportError::negative_price(
            file,
            record.line(),
            id,
            unit_price,
        ));
    }

    Ok(Product::new(id, record.get(1).unwrap_or_default(), unit_price))
}

/// Convert a roster row into a `Salesperson`
///
/// The document type column is only checked for presence.
pub fn parse_salesperson(file: &str, record: &RawRecord) -> Result<Salesperson, ReportError> {
    expect_fields(file, record, SALESPERSON_FIELDS)?;

    let id: SalespersonId = parse_field(file, record, 1, "salesperson id")?;

    Ok(Salesperson::new(
        id,
        record.get(2).unwrap_or_default(),
        record.get(3).unwrap_or_default(),
    ))
}

/// Read the salesperson id out of a transaction file header
///
/// Any header that does not yield an integer in its second field is reported
/// as `InvalidHeader`; the caller drops the whole file.
pub fn parse_header(file: &str, record: &RawRecord) -> Result<BatchHeader, ReportError> {
    if record.len() < HEADER_MIN_FIELDS {
        return Err(ReportError::invalid_header(file, &record.raw()));
    }

    record
        .get(1)
        .unwrap_or_default()
        .parse::<SalespersonId>()
        .map(|salesperson| BatchHeader { salesperson })
        .map_err(|_| ReportError::invalid_header(file, &record.raw()))
}

/// Convert a transaction line into a `SaleLine`
///
/// Checks the field count, both integers and that the quantity is strictly
/// positive. Whether the product exists is up to the processor.
pub fn parse_sale_line(file: &str, record: &RawRecord) -> Result<SaleLine, ReportError> {
    expect_fields(file, record, SALE_FIELDS)?;

    let product: ProductId = parse_field(file, record, 0, "product id")?;
    let quantity: Quantity = parse_field(file, record, 1, "quantity")?;

    if quantity <= 0 {
        return Err(ReportError::invalid_quantity(file, record.line(), quantity));
    }

    Ok(SaleLine { product, quantity })
}

/// Format a monetary amount with exactly two decimals, rounding half away from zero
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn record(line: &str) -> RawRecord {
        RawRecord::parse(1, line)
    }

    #[rstest]
    #[case::integer_price("1;Widget;10", 1, "Widget", Decimal::new(10, 0))]
    #[case::decimal_price("2;Gadget;10.50", 2, "Gadget", Decimal::new(1050, 2))]
    #[case::zero_price("3;Sample;0", 3, "Sample", Decimal::ZERO)]
    #[case::padded_fields(" 5 ; Lamp ; 7.25 ", 5, "Lamp", Decimal::new(725, 2))]
    fn test_parse_product_valid(
        #[case] line: &str,
        #[case] id: ProductId,
        #[case] name: &str,
        #[case] price: Decimal,
    ) {
        let product = parse_product("productos.txt", &record(line)).unwrap();
        assert_eq!(product.id, id);
        assert_eq!(product.name, name);
        assert_eq!(product.unit_price, price);
    }

    #[rstest]
    #[case::too_few_fields("1;Widget", "Wrong field count")]
    #[case::too_many_fields("1;Widget;10;extra", "Wrong field count")]
    #[case::non_numeric_id("one;Widget;10", "Invalid product id 'one'")]
    #[case::non_numeric_price("1;Widget;ten", "Invalid price 'ten'")]
    #[case::empty_price("1;Widget;", "Invalid price ''")]
    #[case::negative_price("1;Widget;-3.5", "Negative price -3.5 for product 1")]
    #[case::zero_id("0;Zero;1", "Product id 0 out of range")]
    #[case::negative_id("-4;Neg;2", "Product id -4 out of range")]
    #[case::blank_line("", "Wrong field count in productos.txt at line 1: expected 3, found 1 ()")]
    #[case::trailing_delimiter("1;Widget;10;", "Wrong field count")]
    fn test_parse_product_errors(#[case] line: &str, #[case] expected: &str) {
        let error = parse_product("productos.txt", &record(line)).unwrap_err();
        assert!(
            error.to_string().contains(expected),
            "'{}' does not contain '{}'",
            error,
            expected
        );
        assert!(!error.is_fatal());
    }

    #[test]
    fn test_parse_salesperson_joins_names() {
        let salesperson = parse_salesperson("vendedores.txt", &record("CC;101;Ana;Perez")).unwrap();
        assert_eq!(salesperson.id, 101);
        assert_eq!(salesperson.full_name, "Ana Perez");
    }

    #[rstest]
    #[case::missing_last_name("CC;101;Ana", "Wrong field count")]
    #[case::non_numeric_id("CC;abc;Ana;Perez", "Invalid salesperson id 'abc'")]
    fn test_parse_salesperson_errors(#[case] line: &str, #[case] expected: &str) {
        let error = parse_salesperson("vendedores.txt", &record(line)).unwrap_err();
        assert!(error.to_string().contains(expected));
    }

    #[rstest]
    #[case::regular("CC;101", Some(101))]
    #[case::extra_fields("CC;102;ignored", Some(102))]
    #[case::missing_id("CC", None)]
    #[case::non_numeric_id("CC;abc", None)]
    #[case::decimal_id("CC;10.5", None)]
    fn test_parse_header(#[case] line: &str, #[case] expected: Option<SalespersonId>) {
        let result = parse_header("ventas_101.txt", &record(line));
        match expected {
            Some(id) => assert_eq!(result.unwrap().salesperson, id),
            None => assert!(matches!(result, Err(ReportError::InvalidHeader { .. }))),
        }
    }

    #[test]
    fn test_parse_sale_line_valid() {
        let line = parse_sale_line("ventas_101.txt", &record("4;12")).unwrap();
        assert_eq!(
            line,
            SaleLine {
                product: 4,
                quantity: 12
            }
        );
    }

    #[rstest]
    #[case::single_field("4", "Wrong field count")]
    #[case::three_fields("4;1;2", "Wrong field count")]
    #[case::non_numeric_product("x;1", "Invalid product id 'x'")]
    #[case::non_numeric_quantity("4;two", "Invalid quantity 'two'")]
    #[case::decimal_quantity("4;1.5", "Invalid quantity '1.5'")]
    #[case::zero_quantity("4;0", "Invalid quantity (0)")]
    #[case::negative_quantity("1;-2", "Invalid quantity (-2)")]
    #[case::blank_line("  ", "expected 2, found 1 ()")]
    #[case::trailing_delimiter("1;3;", "expected 2, found 3 (1;3;)")]
    fn test_parse_sale_line_errors(#[case] line: &str, #[case] expected: &str) {
        let error = parse_sale_line("ventas_101.txt", &record(line)).unwrap_err();
        assert!(
            error.to_string().contains(expected),
            "'{}' does not contain '{}'",
            error,
            expected
        );
    }

    #[rstest]
    #[case(Decimal::new(50, 0), "50.00")]
    #[case(Decimal::new(5, 1), "0.50")]
    #[case(Decimal::new(12345, 3), "12.35")]
    #[case(Decimal::new(12355, 3), "12.36")]
    #[case(Decimal::new(1, 3), "0.00")]
    fn test_format_amount(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(format_amount(amount), expected);
    }
}
