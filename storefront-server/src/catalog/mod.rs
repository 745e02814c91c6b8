//! Product catalog pipeline
//!
//! ```text
//! seed literals ──▶ enrich ──▶ resolve_image ──▶ enriched catalog ──▶ seed_if_empty
//! ```
//!
//! - [`seed`] - static literals per category
//! - [`enrich`] - name-driven categorization
//! - [`image`] - image URL resolution
//! - [`rules`] - ordered rule tables used by both

pub mod enrich;
pub mod image;
pub mod rules;
pub mod seed;

use shared::models::Product;

pub use enrich::{enrich, is_canonical_subcategory};
pub use image::{DEFAULT_IMAGE, resolve_image};
pub use rules::SUBCATEGORY_LABELS;
pub use seed::seed_products;

/// Enrich one product and attach its image
pub fn prepare_product(product: Product) -> Product {
    let mut product = enrich(product);
    product.image = Some(resolve_image(&product.name, Some(&product.subcategory)).to_string());
    product
}

/// Build the enriched catalog from the seed literals
pub fn build_catalog() -> Vec<Product> {
    seed_products().into_iter().map(prepare_product).collect()
}
