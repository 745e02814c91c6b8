//! CSV export of the product catalog

use std::fmt::Write;

use shared::models::Product;

use crate::cart::round_money;

pub const PRODUCTS_CSV_HEADER: &str =
    "SKU,Product Name,Category,Pack Size,Unit,Current Price,Stock Quantity,Stock Status";

/// Render products in catalog order, one row each
///
/// Name, pack size and unit are always quoted, with embedded quotes doubled.
pub fn products_csv(products: &[Product]) -> String {
    let mut out = String::with_capacity(64 * (products.len() + 1));
    out.push_str(PRODUCTS_CSV_HEADER);
    out.push('\n');

    for p in products {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{:.2},{},{}",
            p.id,
            quote(&p.name),
            p.category,
            quote(&p.pack_size),
            quote(&p.unit),
            round_money(p.price),
            p.stock_quantity.map(|q| q.to_string()).unwrap_or_default(),
            p.stock_status.map(|s| s.as_str()).unwrap_or_default(),
        );
    }
    out
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::models::ProductCategory;

    #[test]
    fn test_header_and_rows() {
        let mut avocado = Product::new(
            "AVG001",
            "Avocados Mix #1",
            ProductCategory::Produce,
            Decimal::new(485, 1),
            "case",
            "48 ct",
        );
        avocado.set_stock_quantity(12);
        let mut tortilla = Product::new(
            "TOR001",
            "White Corn Tortillas 6\"",
            ProductCategory::Tortilla,
            Decimal::new(1250, 2),
            "case",
            "12 x 5 lb, \"family\"",
        );
        tortilla.stock_quantity = None;

        let csv = products_csv(&[avocado, tortilla]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], PRODUCTS_CSV_HEADER);
        assert_eq!(
            lines[1],
            r#"AVG001,"Avocados Mix #1",produce,"48 ct","case",48.50,12,low-stock"#
        );
        assert_eq!(
            lines[2],
            r#"TOR001,"White Corn Tortillas 6""",tortilla,"12 x 5 lb, ""family""","case",12.50,,"#
        );
    }

    #[test]
    fn test_empty_catalog_is_header_only() {
        assert_eq!(products_csv(&[]), format!("{PRODUCTS_CSV_HEADER}\n"));
    }
}
