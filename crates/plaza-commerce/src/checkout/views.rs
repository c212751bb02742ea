//! Order history views.
//!
//! Assembles whole collections of orders into render-ready data: the buyer's
//! order history and a seller's sales history. Each order's cart is
//! re-aggregated from its snapshot; nothing here mutates or caches. A
//! resolution failure anywhere aborts the whole assembly so the renderer
//! never sees partial totals.

use crate::cart::LineItem;
use crate::catalog::ProductCatalog;
use crate::checkout::Order;
use crate::error::CommerceError;
use crate::ids::{AddressId, OrderId, SellerId, UserId};
use crate::money::Money;
use chrono::{LocalResult, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One order in the buyer's history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BuyerOrderView {
    /// The order shown.
    pub order_id: OrderId,
    /// Human-readable order number.
    pub order_number: String,
    /// Placement time, formatted for display.
    pub placed_at: String,
    /// Every item in the order, in cart order.
    pub items: Vec<LineItem>,
    /// Order total.
    pub total: Money,
}

/// One order in a seller's sales history: only that seller's slice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SellerOrderView {
    /// The order shown.
    pub order_id: OrderId,
    /// Human-readable order number.
    pub order_number: String,
    /// The buyer who placed the order.
    pub buyer_id: UserId,
    /// Where this seller's items ship to.
    pub shipping_address_id: AddressId,
    /// Placement time, formatted for display.
    pub placed_at: String,
    /// This seller's items, in cart order.
    pub items: Vec<LineItem>,
    /// Subtotal over this seller's items only.
    pub subtotal: Money,
}

/// Assemble the buyer-facing history for a collection of orders.
///
/// Orders are transformed as a whole collection and handed back once fully
/// done; an empty input yields an empty history.
pub fn buyer_order_history(
    orders: &[Order],
    catalog: &impl ProductCatalog,
) -> Result<Vec<BuyerOrderView>, CommerceError> {
    debug!(orders = orders.len(), "assembling buyer order history");
    orders
        .iter()
        .map(|order| {
            let items = order.cart.line_items(catalog)?;
            let total = Money::try_sum(items.iter().map(|i| &i.line_total), order.cart.currency())
                .ok_or(CommerceError::Overflow)?;
            Ok(BuyerOrderView {
                order_id: order.id.clone(),
                order_number: order.order_number.clone(),
                placed_at: format_placed_at(order.created_at, "%b %-d, %Y %I:%M %p"),
                items,
                total,
            })
        })
        .collect()
}

/// Assemble one seller's sales history for a collection of orders.
///
/// Orders the seller is not party to are skipped, not errors: the store may
/// hand over a broader set than the seller's own, and an order with no group
/// for this seller simply does not appear in their history.
pub fn seller_sales_history(
    orders: &[Order],
    seller: &SellerId,
    catalog: &impl ProductCatalog,
) -> Result<Vec<SellerOrderView>, CommerceError> {
    debug!(
        orders = orders.len(),
        seller = %seller,
        "assembling seller sales history"
    );
    let mut views = Vec::new();
    for order in orders {
        if !order.involves_seller(seller) {
            continue;
        }
        let partition = order.cart.seller_partition(catalog)?;
        let group = match partition.group_for(seller) {
            Some(group) => group,
            None => continue,
        };
        views.push(SellerOrderView {
            order_id: order.id.clone(),
            order_number: order.order_number.clone(),
            buyer_id: order.buyer_id.clone(),
            shipping_address_id: order.shipping_address_id.clone(),
            placed_at: format_placed_at(order.created_at, "%B %-d, %Y %I:%M %p"),
            items: group.items.clone(),
            subtotal: group.subtotal,
        });
    }
    Ok(views)
}

/// Format a persisted Unix timestamp for display.
fn format_placed_at(timestamp: i64, format: &str) -> String {
    match Utc.timestamp_opt(timestamp, 0) {
        LocalResult::Single(dt) => dt.format(format).to_string(),
        _ => timestamp.to_string(),
    }
}
