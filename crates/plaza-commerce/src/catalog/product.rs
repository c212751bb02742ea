//! Marketplace product listings.

use crate::ids::{ProductId, SellerId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Listing visibility status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProductStatus {
    /// Listed and purchasable.
    #[default]
    Active,
    /// Taken down by the seller; data preserved for past orders.
    Delisted,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::Delisted => "delisted",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "active" => Some(ProductStatus::Active),
            "delisted" => Some(ProductStatus::Delisted),
            _ => None,
        }
    }
}

/// A product listed by a seller.
///
/// Every product belongs to exactly one seller; that reference is what the
/// order aggregation uses to partition a buyer's cart per seller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// The seller this listing belongs to.
    pub seller: SellerId,
    /// Listing title.
    pub title: String,
    /// Full description.
    pub description: Option<String>,
    /// Path to the listing image.
    pub image_path: Option<String>,
    /// Current listed price. Orders keep their own price snapshot.
    pub price: Money,
    /// Listing status.
    pub status: ProductStatus,
    /// Additional metadata as JSON.
    pub metadata: serde_json::Value,
    /// Unix timestamp of creation.
    pub created_at: i64,
}

impl Product {
    /// Create a new active listing.
    pub fn new(seller: SellerId, title: impl Into<String>, price: Money) -> Self {
        Self {
            id: ProductId::generate(),
            seller,
            title: title.into(),
            description: None,
            image_path: None,
            price,
            status: ProductStatus::Active,
            metadata: serde_json::Value::Object(serde_json::Map::new()),
            created_at: current_timestamp(),
        }
    }

    /// Whether the listing is available for purchase.
    pub fn is_available(&self) -> bool {
        self.status == ProductStatus::Active
    }

    /// Take the listing down without deleting it.
    pub fn delist(&mut self) {
        self.status = ProductStatus::Delisted;
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_new_product_is_available() {
        let p = Product::new(
            SellerId::new("s1"),
            "Walnut desk",
            Money::new(12900, Currency::USD),
        );
        assert!(p.is_available());
        assert_eq!(p.seller, SellerId::new("s1"));
    }

    #[test]
    fn test_delisted_product_is_unavailable() {
        let mut p = Product::new(
            SellerId::new("s1"),
            "Walnut desk",
            Money::new(12900, Currency::USD),
        );
        p.delist();
        assert!(!p.is_available());
        assert_eq!(p.status.as_str(), "delisted");
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!(ProductStatus::from_str("Active"), Some(ProductStatus::Active));
        assert_eq!(ProductStatus::from_str("gone"), None);
    }
}
