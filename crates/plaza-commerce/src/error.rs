//! Commerce error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur in marketplace commerce operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// A cart entry references a product that cannot be resolved.
    ///
    /// Fatal for the whole aggregation call: a missing product would corrupt
    /// the order's totals, so no partial result is ever returned.
    #[error("product cannot be resolved: {0}")]
    ProductResolution(ProductId),

    /// Invalid quantity (must be at least 1).
    #[error("invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Negative amount where a price snapshot was expected.
    #[error("negative amount: {0} cents")]
    NegativeAmount(i64),

    /// Two cart entries reference the same product.
    #[error("duplicate cart entry for product: {0}")]
    DuplicateCartEntry(ProductId),

    /// Currency mismatch.
    #[error("currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("arithmetic overflow in money calculation")]
    Overflow,

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}
