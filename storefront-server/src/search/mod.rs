//! Search/filter engine
//!
//! [`ProductFilter::apply`] narrows the catalog in a fixed order, cheap
//! exact predicates first:
//!
//! | Step | Predicate |
//! |------|-----------|
//! | 1 | category equality |
//! | 2 | subcategory equality (ASCII case-insensitive) |
//! | 3 | department equality |
//! | 4 | every requested tag present |
//! | 5 | price inside the inclusive range |
//! | 6 | stock status in the requested set |
//! | 7 | fuzzy text match, only for queries of 2+ characters |
//! | 8 | stable sort |
//!
//! Nothing here errors; empty inputs give empty outputs.

pub mod facets;
pub mod fuzzy;

use std::cmp::Ordering;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::{Department, Product, ProductCategory, ProductTag, StockStatus};

pub use facets::{Facets, facets};
pub use fuzzy::{FUZZY_THRESHOLD, FuzzyIndex, FuzzyMatch};

/// Queries shorter than this (in characters, after trimming) do not filter
pub const MIN_QUERY_CHARS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    Name,
    PriceAsc,
    PriceDesc,
    Category,
}

impl SortBy {
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortBy::Name => collate(&a.name, &b.name),
            SortBy::PriceAsc => a.price.cmp(&b.price),
            SortBy::PriceDesc => b.price.cmp(&a.price),
            SortBy::Category => collate(a.category.as_str(), b.category.as_str()),
        }
    }
}

impl std::str::FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortBy::Name),
            "price-asc" => Ok(SortBy::PriceAsc),
            "price-desc" => Ok(SortBy::PriceDesc),
            "category" => Ok(SortBy::Category),
            other => Err(format!("unknown sort '{other}'")),
        }
    }
}

/// Case-insensitive comparison standing in for locale collation
fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Inclusive price bounds; a missing bound is open
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub min: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub max: Option<Decimal>,
}

impl PriceRange {
    pub fn new(min: Option<Decimal>, max: Option<Decimal>) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: Decimal) -> bool {
        self.min.is_none_or(|min| price >= min) && self.max.is_none_or(|max| price <= max)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductFilter {
    pub search_query: String,
    pub category: Option<ProductCategory>,
    pub subcategory: Option<String>,
    pub department: Option<Department>,
    /// Product must carry every listed tag
    pub tags: Vec<ProductTag>,
    pub price_range: Option<PriceRange>,
    /// Product status must be one of these; empty means any
    pub stock_status: Vec<StockStatus>,
    /// `None` keeps relevance order for text searches, catalog order otherwise
    pub sort_by: Option<SortBy>,
}

impl ProductFilter {
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            search_query: query.into(),
            ..Default::default()
        }
    }

    /// Whether the text query is long enough to filter
    pub fn has_text_query(&self) -> bool {
        self.search_query.trim().chars().count() >= MIN_QUERY_CHARS
    }

    fn matches_exact(&self, product: &Product) -> bool {
        if self.category.is_some_and(|c| c != product.category) {
            return false;
        }
        if let Some(sub) = &self.subcategory
            && !sub.trim().eq_ignore_ascii_case(&product.subcategory)
        {
            return false;
        }
        if self.department.is_some() && self.department != product.department {
            return false;
        }
        if !self.tags.iter().all(|tag| product.has_tag(*tag)) {
            return false;
        }
        if let Some(range) = &self.price_range
            && !range.contains(product.price)
        {
            return false;
        }
        if !self.stock_status.is_empty() {
            match product.stock_status {
                Some(status) if self.stock_status.contains(&status) => {}
                _ => return false,
            }
        }
        true
    }

    /// Run the filter over `catalog`
    pub fn apply<'a>(&self, catalog: &'a [Product]) -> Vec<&'a Product> {
        let narrowed = catalog.iter().filter(|p| self.matches_exact(p));

        let mut results: Vec<&'a Product> = if self.has_text_query() {
            FuzzyIndex::new(narrowed)
                .search(&self.search_query)
                .into_iter()
                .map(|m| m.product)
                .collect()
        } else {
            narrowed.collect()
        };

        if let Some(sort_by) = self.sort_by {
            // Vec::sort_by is stable, ties keep their prior order
            results.sort_by(|a, b| sort_by.compare(a, b));
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_catalog;

    fn ids<'a>(products: &[&'a Product]) -> Vec<&'a str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_short_query_does_not_filter() {
        let catalog = build_catalog();
        assert_eq!(ProductFilter::default().apply(&catalog).len(), catalog.len());
        assert_eq!(ProductFilter::query("t").apply(&catalog).len(), catalog.len());
        assert_eq!(ProductFilter::query("  t ").apply(&catalog).len(), catalog.len());

        let produce_only = ProductFilter {
            search_query: "x".into(),
            category: Some(ProductCategory::Produce),
            ..Default::default()
        };
        let expected = catalog.iter().filter(|p| p.category == ProductCategory::Produce).count();
        assert_eq!(produce_only.apply(&catalog).len(), expected);
    }

    #[test]
    fn test_tomato_query() {
        let catalog = build_catalog();
        let results = ProductFilter::query("tomato").apply(&catalog);
        let found = ids(&results);

        for id in ["TOM001", "TOM002", "TOM003", "TOM004", "TOM005", "TOM006", "TOM007", "TOM008"] {
            assert!(found.contains(&id), "missing {id}");
        }
        for product in &results {
            let text = format!("{} {}", product.name, product.subcategory).to_lowercase();
            assert!(text.contains("tomat"), "unrelated match {}", product.id);
        }
        assert!(!found.contains(&"POT001"));
        assert!(!found.contains(&"TOR001"));
        assert!(!found.contains(&"AVG001"));
    }

    #[test]
    fn test_empty_catalog_and_no_match() {
        let empty: Vec<Product> = Vec::new();
        assert!(ProductFilter::query("tomato").apply(&empty).is_empty());

        let catalog = build_catalog();
        assert!(ProductFilter::query("zzzzqqq").apply(&catalog).is_empty());
    }

    #[test]
    fn test_exact_filters_compose() {
        let catalog = build_catalog();
        let filter = ProductFilter {
            subcategory: Some("tomatoes".into()),
            tags: vec![ProductTag::Organic],
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&catalog)), vec!["TOM006"]);

        let filter = ProductFilter {
            department: Some(Department::Bakery),
            stock_status: vec![StockStatus::LowStock],
            ..Default::default()
        };
        let results = filter.apply(&catalog);
        assert!(!results.is_empty());
        for p in results {
            assert_eq!(p.department, Some(Department::Bakery));
            assert_eq!(p.stock_status, Some(StockStatus::LowStock));
        }
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let catalog = build_catalog();
        let filter = ProductFilter {
            price_range: Some(PriceRange::new(Some(Decimal::new(1250, 2)), Some(Decimal::new(1250, 2)))),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&catalog)), vec!["TOR001", "TOR002"]);
    }

    #[test]
    fn test_sorts_are_stable() {
        let catalog = build_catalog();
        let filter = ProductFilter {
            price_range: Some(PriceRange::new(Some(Decimal::new(1250, 2)), Some(Decimal::new(1250, 2)))),
            sort_by: Some(SortBy::PriceDesc),
            ..Default::default()
        };
        // Equal prices keep catalog order
        assert_eq!(ids(&filter.apply(&catalog)), vec!["TOR001", "TOR002"]);

        let filter = ProductFilter {
            sort_by: Some(SortBy::PriceAsc),
            ..Default::default()
        };
        let results = filter.apply(&catalog);
        assert!(results.windows(2).all(|w| w[0].price <= w[1].price));

        let filter = ProductFilter {
            sort_by: Some(SortBy::Name),
            ..Default::default()
        };
        let results = filter.apply(&catalog);
        assert!(
            results
                .windows(2)
                .all(|w| w[0].name.to_lowercase() <= w[1].name.to_lowercase())
        );
    }

    #[test]
    fn test_category_sort_keeps_catalog_order_within_category() {
        let catalog = build_catalog();
        let filter = ProductFilter {
            sort_by: Some(SortBy::Category),
            ..Default::default()
        };
        let results = filter.apply(&catalog);
        assert_eq!(results.first().map(|p| p.category), Some(ProductCategory::Dairy));
        assert_eq!(results.first().map(|p| p.id.as_str()), Some("DAI001"));
        assert_eq!(results.last().map(|p| p.id.as_str()), Some("TOR011"));
    }

    #[test]
    fn test_sort_by_parses_labels() {
        assert_eq!("price-desc".parse::<SortBy>(), Ok(SortBy::PriceDesc));
        assert_eq!(" Name ".parse::<SortBy>(), Ok(SortBy::Name));
        assert!("random".parse::<SortBy>().is_err());
    }
}
