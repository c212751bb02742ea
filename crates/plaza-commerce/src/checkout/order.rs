//! Order record.

use crate::cart::CartSnapshot;
use crate::error::CommerceError;
use crate::ids::{AddressId, OrderId, SellerId, UserId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A placed order, as the order store persists and returns it.
///
/// The cart snapshot inside is frozen at placement; buyer and seller views
/// are derived from it on every read. The `sellers` list is denormalized at
/// placement so the store can query "orders involving seller X" without
/// re-aggregating every cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Human-readable order number.
    pub order_number: String,
    /// The buyer who placed the order.
    pub buyer_id: UserId,
    /// Shipping address chosen at checkout.
    pub shipping_address_id: AddressId,
    /// Every seller with at least one item in the cart.
    pub sellers: Vec<SellerId>,
    /// The cart as captured at placement.
    pub cart: CartSnapshot,
    /// Payment reference from the processor, if charged.
    pub payment_ref: Option<String>,
    /// Additional metadata as JSON.
    pub metadata: serde_json::Value,
    /// Unix timestamp of placement.
    pub created_at: i64,
}

impl Order {
    /// Create an order from a frozen cart snapshot.
    pub fn new(
        buyer_id: UserId,
        shipping_address_id: AddressId,
        sellers: Vec<SellerId>,
        cart: CartSnapshot,
    ) -> Self {
        Self {
            id: OrderId::generate(),
            order_number: Self::generate_order_number(),
            buyer_id,
            shipping_address_id,
            sellers,
            cart,
            payment_ref: None,
            metadata: serde_json::Value::Object(serde_json::Map::new()),
            created_at: current_timestamp(),
        }
    }

    /// Generate a new order number.
    pub fn generate_order_number() -> String {
        use std::time::{SystemTime, UNIX_EPOCH};
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        format!("PLZ-{}", ts)
    }

    /// Whether the given seller has items in this order.
    pub fn involves_seller(&self, seller: &SellerId) -> bool {
        self.sellers.contains(seller)
    }

    /// Order total: sum of the snapshot's line values.
    pub fn total(&self) -> Result<Money, CommerceError> {
        let mut total = Money::zero(self.cart.currency());
        for entry in self.cart.entries() {
            let line = entry
                .unit_price
                .try_mul(entry.quantity)
                .ok_or(CommerceError::Overflow)?;
            total = total.try_add(&line).ok_or(CommerceError::Overflow)?;
        }
        Ok(total)
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
