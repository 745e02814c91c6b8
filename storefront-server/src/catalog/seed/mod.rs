//! Static catalog literals
//!
//! Split by coarse category the way the buying team maintains them. Prices
//! are written in cents so the literals stay exact.

mod dairy;
mod produce;
mod tortilla;

use rust_decimal::Decimal;
use shared::models::{Product, ProductCategory};

/// One hard-coded catalog entry
#[derive(Debug, Clone, Copy)]
pub struct SeedProduct {
    pub id: &'static str,
    pub name: &'static str,
    /// Hint kept when no subcategory rule matches the name
    pub subcategory: &'static str,
    pub price_cents: i64,
    pub unit: &'static str,
    pub pack_size: &'static str,
    pub stock: u32,
}

const fn seed(
    id: &'static str,
    name: &'static str,
    subcategory: &'static str,
    price_cents: i64,
    unit: &'static str,
    pack_size: &'static str,
    stock: u32,
) -> SeedProduct {
    SeedProduct {
        id,
        name,
        subcategory,
        price_cents,
        unit,
        pack_size,
        stock,
    }
}

/// Every seed table with its category
pub const SEED_TABLES: &[(ProductCategory, &[SeedProduct])] = &[
    (ProductCategory::Produce, produce::PRODUCE),
    (ProductCategory::Tortilla, tortilla::TORTILLAS),
    (ProductCategory::Dairy, dairy::DAIRY),
];

impl SeedProduct {
    pub fn to_product(&self, category: ProductCategory) -> Product {
        let mut product = Product::new(
            self.id,
            self.name,
            category,
            Decimal::new(self.price_cents, 2),
            self.unit,
            self.pack_size,
        );
        product.subcategory = self.subcategory.to_string();
        product.set_stock_quantity(self.stock);
        product
    }
}

/// Assemble the raw (unenriched) catalog in table order
pub fn seed_products() -> Vec<Product> {
    SEED_TABLES
        .iter()
        .flat_map(|(category, table)| table.iter().map(move |seed| seed.to_product(*category)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let products = seed_products();
        let ids: HashSet<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_prices_non_negative_and_stock_consistent() {
        for product in seed_products() {
            assert!(product.price >= Decimal::ZERO, "{}", product.id);
            assert!(product.stock_consistent(), "{}", product.id);
        }
    }

    #[test]
    fn test_sample_entries_present() {
        let products = seed_products();
        let avocado = products.iter().find(|p| p.id == "AVG001").unwrap();
        assert_eq!(avocado.name, "Avocados Mix #1");
        assert_eq!(avocado.subcategory, "Avocados");

        for id in ["TOM004", "TOM005", "TOM006", "TOM007", "TOM008"] {
            let product = products.iter().find(|p| p.id == id).unwrap();
            assert!(product.name.to_lowercase().contains("tomato"), "{id}");
        }
    }
}
