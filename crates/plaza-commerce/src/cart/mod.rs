//! Cart module.
//!
//! Contains the persisted cart snapshot and the two views derived from it:
//! the flat line item list and the per-seller partition.

mod aggregate;
mod snapshot;

pub use aggregate::{LineItem, SellerGroup, SellerPartition};
pub use snapshot::{CartEntry, CartSnapshot};
