//! Derived views of a cart snapshot.
//!
//! `LineItem` and `SellerGroup` are ephemeral: recomputed on every read,
//! never cached or written back. They carry no behavior beyond selection so
//! render layers consume them as plain data.

use crate::error::CommerceError;
use crate::ids::{ProductId, SellerId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// One resolved, priced cart entry, flattened for buyer display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// The product purchased.
    pub product_id: ProductId,
    /// Product title at resolution time.
    pub title: String,
    /// The seller this item belongs to.
    pub seller: SellerId,
    /// Quantity purchased.
    pub quantity: i64,
    /// Unit price snapshot.
    pub unit_price: Money,
    /// `unit_price * quantity`.
    pub line_total: Money,
}

/// The slice of an order belonging to one seller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SellerGroup {
    /// The seller all items in this group belong to.
    pub seller: SellerId,
    /// This seller's line items, in flat-view order.
    pub items: Vec<LineItem>,
    /// Sum of the items' line totals.
    pub subtotal: Money,
}

impl SellerGroup {
    /// Total item count in this group (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

/// An order's line items partitioned by seller.
///
/// Groups are kept in first-seen order (the seller of the first flat item
/// forms the first group) and are additionally indexed by seller identity,
/// so selecting one seller's slice is a keyed lookup rather than a scan.
/// Every line item belongs to exactly one group.
#[derive(Debug, Clone, Default)]
pub struct SellerPartition {
    groups: Vec<SellerGroup>,
    index: HashMap<SellerId, usize>,
}

impl SellerPartition {
    /// Partition flat line items by seller identity.
    ///
    /// Items must already be in flat-view order; each group receives its
    /// items in that relative order.
    pub fn from_items(
        items: Vec<LineItem>,
        currency: Currency,
    ) -> Result<Self, CommerceError> {
        let mut groups: Vec<SellerGroup> = Vec::new();
        let mut index: HashMap<SellerId, usize> = HashMap::new();
        for item in items {
            let slot = match index.entry(item.seller.clone()) {
                Entry::Occupied(occupied) => *occupied.get(),
                Entry::Vacant(vacant) => {
                    let slot = groups.len();
                    groups.push(SellerGroup {
                        seller: item.seller.clone(),
                        items: Vec::new(),
                        subtotal: Money::zero(currency),
                    });
                    vacant.insert(slot);
                    slot
                }
            };
            let group = &mut groups[slot];
            group.subtotal = group
                .subtotal
                .try_add(&item.line_total)
                .ok_or(CommerceError::Overflow)?;
            group.items.push(item);
        }
        // One group per seller, one index slot per group.
        debug_assert_eq!(groups.len(), index.len());
        Ok(Self { groups, index })
    }

    /// Select one seller's group by identity.
    ///
    /// `None` means the seller is not party to this order, a normal
    /// occurrence (distinct from the order having no items at all).
    pub fn group_for(&self, seller: &SellerId) -> Option<&SellerGroup> {
        self.index.get(seller).map(|&slot| &self.groups[slot])
    }

    /// The groups in first-seen order.
    pub fn groups(&self) -> &[SellerGroup] {
        &self.groups
    }

    /// Consume the partition, keeping the ordered groups.
    pub fn into_groups(self) -> Vec<SellerGroup> {
        self.groups
    }

    /// Iterate groups in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &SellerGroup> {
        self.groups.iter()
    }

    /// Number of distinct sellers in the order.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the order has no items at all.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
