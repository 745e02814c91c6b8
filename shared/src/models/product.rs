//! Product Model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Quantities below this (and above zero) are reported as low stock
pub const LOW_STOCK_THRESHOLD: u32 = 20;

labeled_enum! {
    /// Coarse catalog category assigned by the seed data
    pub enum ProductCategory {
        Produce => "produce",
        Tortilla => "tortilla",
        Dairy => "dairy",
    }
}

labeled_enum! {
    /// Department derived from the product name
    pub enum Department {
        FreshProduce => "Fresh Produce",
        PreparedProduce => "Prepared Produce",
        Specialty => "Specialty",
        Bakery => "Bakery",
    }
}

labeled_enum! {
    /// Semantic labels accumulated by enrichment
    pub enum ProductTag {
        Organic => "organic",
        Conventional => "conventional",
        Local => "local",
        Imported => "imported",
        FarmFresh => "farm-fresh",
        Premium => "premium",
        RestaurantGrade => "restaurant-grade",
        PreCut => "pre-cut",
        ReadyToUse => "ready-to-use",
        Seasonal => "seasonal",
        YearRound => "year-round",
        Heirloom => "heirloom",
        Exotic => "exotic",
        Refrigerated => "refrigerated",
        RoomTemperature => "room-temperature",
        GlutenFree => "gluten-free",
        Vegan => "vegan",
        Bestseller => "bestseller",
    }
}

labeled_enum! {
    /// How much handling the product has had before sale
    pub enum PreparationLevel {
        Whole => "whole",
        PreCut => "pre-cut",
        ReadyToUse => "ready-to-use",
        Prepared => "prepared",
    }
}

labeled_enum! {
    /// Peak season
    pub enum Seasonality {
        YearRound => "year-round",
        Spring => "spring",
        Summer => "summer",
        Fall => "fall",
        Winter => "winter",
    }
}

labeled_enum! {
    /// Stock tri-state derived from the stock quantity
    pub enum StockStatus {
        InStock => "in-stock",
        LowStock => "low-stock",
        OutOfStock => "out-of-stock",
    }
}

impl StockStatus {
    /// 0 → out of stock, below [`LOW_STOCK_THRESHOLD`] → low stock, else in stock
    pub fn from_quantity(quantity: u32) -> Self {
        match quantity {
            0 => Self::OutOfStock,
            q if q < LOW_STOCK_THRESHOLD => Self::LowStock,
            _ => Self::InStock,
        }
    }
}

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Author-assigned mnemonic code, immutable once assigned (e.g. `TOM004`)
    pub id: String,
    pub name: String,
    pub category: ProductCategory,
    #[serde(default)]
    pub subcategory: String,
    pub department: Option<Department>,
    #[serde(default)]
    pub tags: Vec<ProductTag>,
    pub origin: Option<String>,
    pub seasonality: Option<Seasonality>,
    pub preparation_level: Option<PreparationLevel>,
    /// Unit price, never negative
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Sales unit label ("case", "lb", "each")
    pub unit: String,
    pub pack_size: String,
    pub price_effective_date: Option<NaiveDate>,
    pub stock_quantity: Option<u32>,
    pub stock_status: Option<StockStatus>,
    pub image: Option<String>,
}

impl Product {
    /// Create a bare product; derived fields are filled in by enrichment
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: ProductCategory,
        price: Decimal,
        unit: impl Into<String>,
        pack_size: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            subcategory: String::new(),
            department: None,
            tags: Vec::new(),
            origin: None,
            seasonality: None,
            preparation_level: None,
            price,
            unit: unit.into(),
            pack_size: pack_size.into(),
            price_effective_date: None,
            stock_quantity: None,
            stock_status: None,
            image: None,
        }
    }

    /// Set the stock quantity and the status derived from it
    pub fn set_stock_quantity(&mut self, quantity: u32) {
        self.stock_quantity = Some(quantity);
        self.stock_status = Some(StockStatus::from_quantity(quantity));
    }

    /// Status and quantity agree whenever both are present
    pub fn stock_consistent(&self) -> bool {
        match (self.stock_quantity, self.stock_status) {
            (Some(q), Some(status)) => StockStatus::from_quantity(q) == status,
            _ => true,
        }
    }

    pub fn has_tag(&self, tag: ProductTag) -> bool {
        self.tags.contains(&tag)
    }
}

/// Partial update applied by admin edits
///
/// `id` is deliberately absent: product ids never change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProductPatch {
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub stock_quantity: Option<u32>,
    pub pack_size: Option<String>,
    pub unit: Option<String>,
    pub image: Option<String>,
}

impl ProductPatch {
    pub fn price(price: Decimal) -> Self {
        Self {
            price: Some(price),
            ..Default::default()
        }
    }

    pub fn stock(quantity: u32) -> Self {
        Self {
            stock_quantity: Some(quantity),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.price.is_none()
            && self.stock_quantity.is_none()
            && self.pack_size.is_none()
            && self.unit.is_none()
            && self.image.is_none()
    }
}
