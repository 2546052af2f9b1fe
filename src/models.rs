//! data types returned by the remote product catalog
use serde::{Deserialize, Serialize};

/// a product from the catalog
///
/// missing fields fall back to their defaults, records are shown as they come
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    /// unique identifier of the product
    pub id: i64,
    /// product name
    pub title: String,
    /// price in the store currency
    pub price: f64,
    /// long form description
    pub description: String,
    /// the category the product is listed under
    pub category: String,
    /// url of the product image
    pub image: String,
    /// aggregated customer rating
    pub rating: Rating,
}

/// an aggregated customer rating
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rating {
    /// average rating
    pub rate: f64,
    /// number of ratings
    pub count: i64,
}
