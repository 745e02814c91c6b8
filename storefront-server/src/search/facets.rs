//! Facet counts for filter sidebars

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::Product;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Facets {
    pub total: usize,
    pub categories: BTreeMap<String, usize>,
    pub subcategories: BTreeMap<String, usize>,
    pub departments: BTreeMap<String, usize>,
    pub tags: BTreeMap<String, usize>,
    pub stock_statuses: BTreeMap<String, usize>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub min_price: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub max_price: Option<Decimal>,
}

pub fn facets<'a>(products: impl IntoIterator<Item = &'a Product>) -> Facets {
    let mut facets = Facets::default();

    for product in products {
        facets.total += 1;
        bump(&mut facets.categories, product.category.as_str());
        if !product.subcategory.is_empty() {
            bump(&mut facets.subcategories, &product.subcategory);
        }
        if let Some(department) = product.department {
            bump(&mut facets.departments, department.as_str());
        }
        for tag in &product.tags {
            bump(&mut facets.tags, tag.as_str());
        }
        if let Some(status) = product.stock_status {
            bump(&mut facets.stock_statuses, status.as_str());
        }
        facets.min_price = Some(facets.min_price.map_or(product.price, |m| m.min(product.price)));
        facets.max_price = Some(facets.max_price.map_or(product.price, |m| m.max(product.price)));
    }

    facets
}

fn bump(counts: &mut BTreeMap<String, usize>, key: &str) {
    *counts.entry(key.to_string()).or_insert(0) += 1;
}
