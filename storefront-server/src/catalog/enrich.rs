//! Categorization enricher
//!
//! Derives department, subcategory, tags, origin, seasonality and
//! preparation level from the product name using the tables in
//! [`super::rules`]. Pure; every field degrades to a documented default.

use shared::models::{
    Department, PreparationLevel, Product, ProductTag, Seasonality, StockStatus,
};

use super::rules::{
    DEFAULT_DEPARTMENT, DEFAULT_ORIGIN, DEFAULT_PREPARATION, DEFAULT_SEASONALITY, DEPARTMENT_RULES,
    FALLBACK_SUBCATEGORY, KeywordRule, ORIGIN_RULES, PREPARATION_RULES, SEASONALITY_RULES,
    SUBCATEGORY_LABELS, SUBCATEGORY_RULES, TAG_RULES,
};

/// Produce a fully enriched copy of `product`
///
/// Also derives `stock_status` from `stock_quantity` when a quantity is set.
pub fn enrich(mut product: Product) -> Product {
    let seasonality = seasonality(&product);

    product.department = Some(department(&product));
    product.tags = tags(&product, seasonality);
    product.subcategory = subcategory(&product);
    product.origin = Some(origin(&product));
    product.seasonality = Some(seasonality);
    product.preparation_level = Some(preparation_level(&product));
    if let Some(quantity) = product.stock_quantity {
        product.stock_status = Some(StockStatus::from_quantity(quantity));
    }

    product
}

pub fn department(product: &Product) -> Department {
    let name = product.name.to_lowercase();
    DEPARTMENT_RULES
        .iter()
        .find(|rule| rule.matches(product.category, &name))
        .map(|rule| rule.department)
        .unwrap_or(DEFAULT_DEPARTMENT)
}

/// First matching rule, else the existing subcategory when canonical, else "Specialty"
pub fn subcategory(product: &Product) -> String {
    let name = product.name.to_lowercase();
    if let Some(label) = first_match(SUBCATEGORY_RULES, &name) {
        return label.to_string();
    }
    if is_canonical_subcategory(&product.subcategory) {
        return product.subcategory.clone();
    }
    FALLBACK_SUBCATEGORY.to_string()
}

/// Existing tags first, then every matching rule in table order, no duplicates
pub fn tags(product: &Product, seasonality: Seasonality) -> Vec<ProductTag> {
    let name = product.name.to_lowercase();
    let mut tags = Vec::with_capacity(product.tags.len() + 6);

    let mut push = |tag: ProductTag| {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    };

    for tag in &product.tags {
        push(*tag);
    }
    for rule in TAG_RULES {
        if rule.matches(product.category, &name) {
            push(rule.tag);
        }
    }
    push(if seasonality == Seasonality::YearRound {
        ProductTag::YearRound
    } else {
        ProductTag::Seasonal
    });

    tags
}

pub fn origin(product: &Product) -> String {
    let name = product.name.to_lowercase();
    first_match(ORIGIN_RULES, &name)
        .unwrap_or(DEFAULT_ORIGIN)
        .to_string()
}

pub fn seasonality(product: &Product) -> Seasonality {
    let name = product.name.to_lowercase();
    first_match(SEASONALITY_RULES, &name).unwrap_or(DEFAULT_SEASONALITY)
}

pub fn preparation_level(product: &Product) -> PreparationLevel {
    let name = product.name.to_lowercase();
    first_match(PREPARATION_RULES, &name).unwrap_or(DEFAULT_PREPARATION)
}

pub fn is_canonical_subcategory(label: &str) -> bool {
    SUBCATEGORY_LABELS.contains(&label)
}

fn first_match<T: Copy>(rules: &[KeywordRule<T>], lowered_name: &str) -> Option<T> {
    rules
        .iter()
        .find(|rule| rule.matches(lowered_name))
        .map(|rule| rule.value)
}
