//! Persisted cart snapshot and its derived views.
//!
//! A `CartSnapshot` is written once when an order is placed and is never
//! mutated afterwards; reads reconstruct it from storage and derive the
//! buyer-facing and seller-facing views fresh each time.

use crate::cart::{LineItem, SellerPartition};
use crate::catalog::ProductCatalog;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One persisted unit of a cart: a product reference, how many, and the
/// unit price captured at order time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartEntry {
    /// The product being purchased.
    pub product_id: ProductId,
    /// Quantity, at least 1.
    pub quantity: i64,
    /// Unit price snapshot at order time.
    pub unit_price: Money,
}

impl CartEntry {
    /// Create an entry, validating quantity and price.
    pub fn new(
        product_id: ProductId,
        quantity: i64,
        unit_price: Money,
    ) -> Result<Self, CommerceError> {
        if quantity < 1 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        if unit_price.is_negative() {
            return Err(CommerceError::NegativeAmount(unit_price.amount_cents));
        }
        Ok(Self {
            product_id,
            quantity,
            unit_price,
        })
    }
}

/// Immutable snapshot of a cart captured at order time.
///
/// Entries are keyed by product (keys unique) and kept in insertion order;
/// that order is the display order for every derived view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSnapshot {
    entries: Vec<CartEntry>,
    currency: Currency,
}

impl CartSnapshot {
    /// Build a snapshot from ordered entries.
    ///
    /// Fails if two entries reference the same product or an entry's price is
    /// in a different currency than the cart's.
    pub fn from_entries(
        entries: Vec<CartEntry>,
        currency: Currency,
    ) -> Result<Self, CommerceError> {
        let mut seen: HashSet<&ProductId> = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(&entry.product_id) {
                return Err(CommerceError::DuplicateCartEntry(entry.product_id.clone()));
            }
            if entry.unit_price.currency != currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: currency.code().to_string(),
                    got: entry.unit_price.currency.code().to_string(),
                });
            }
        }
        Ok(Self { entries, currency })
    }

    /// An empty snapshot. Valid: an order with no items renders as "no items",
    /// which is distinct from a lookup failure.
    pub fn empty(currency: Currency) -> Self {
        Self {
            entries: Vec::new(),
            currency,
        }
    }

    /// The entries in stored order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// The cart currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.entries.len()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    /// Whether the snapshot has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Derive the flat, buyer-facing line item list.
    ///
    /// Entries are expanded in stored order against the catalog. Any entry
    /// whose product cannot be resolved fails the whole call with
    /// `CommerceError::ProductResolution`; a silently dropped entry would
    /// corrupt the order's totals.
    pub fn line_items(
        &self,
        catalog: &impl ProductCatalog,
    ) -> Result<Vec<LineItem>, CommerceError> {
        self.entries
            .iter()
            .map(|entry| {
                let product = catalog
                    .product(&entry.product_id)
                    .ok_or_else(|| CommerceError::ProductResolution(entry.product_id.clone()))?;
                let line_total = entry
                    .unit_price
                    .try_mul(entry.quantity)
                    .ok_or(CommerceError::Overflow)?;
                Ok(LineItem {
                    product_id: entry.product_id.clone(),
                    title: product.title.clone(),
                    seller: product.seller.clone(),
                    quantity: entry.quantity,
                    unit_price: entry.unit_price,
                    line_total,
                })
            })
            .collect()
    }

    /// Derive the seller-partitioned view.
    ///
    /// Computes the flat line item list, then partitions it by seller
    /// identity. Groups appear in first-seen order and items keep their
    /// relative flat order within a group, so the result is deterministic.
    /// Resolution failures propagate exactly as in
    /// [`line_items`](Self::line_items).
    pub fn seller_partition(
        &self,
        catalog: &impl ProductCatalog,
    ) -> Result<SellerPartition, CommerceError> {
        SellerPartition::from_items(self.line_items(catalog)?, self.currency)
    }
}
