//! Marketplace commerce domain types and order aggregation for Plaza.
//!
//! A Plaza cart can hold items from multiple independent sellers. This crate
//! owns the persisted cart snapshot and the pure transformations over it:
//!
//! - **Catalog**: product listings and the resolution seam
//! - **Cart**: the order-time snapshot and its two derived views, a flat
//!   buyer-facing line item list and a per-seller partition
//! - **Checkout**: the order record and the buyer/seller history views
//!
//! The aggregation layer is synchronous and side-effect-free: it neither
//! performs I/O nor caches, so concurrent calls over different orders need no
//! coordination. Storage, sessions, routing, rendering, and payments live in
//! the surrounding services and exchange plain data with this crate.
//!
//! # Example
//!
//! ```rust,ignore
//! use plaza_commerce::prelude::*;
//!
//! let cart = CartSnapshot::from_entries(entries, Currency::USD)?;
//!
//! // Buyer view: every item, in cart order.
//! let items = cart.line_items(&catalog)?;
//!
//! // Seller view: this seller's slice only.
//! let partition = cart.seller_partition(&catalog)?;
//! if let Some(group) = partition.group_for(&seller) {
//!     println!("{} items, {}", group.item_count(), group.subtotal.display());
//! }
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{InMemoryCatalog, Product, ProductCatalog, ProductStatus};

    // Cart
    pub use crate::cart::{CartEntry, CartSnapshot, LineItem, SellerGroup, SellerPartition};

    // Checkout
    pub use crate::checkout::{
        buyer_order_history, seller_sales_history, BuyerOrderView, Order, SellerOrderView,
        ShippingAddress,
    };
}
