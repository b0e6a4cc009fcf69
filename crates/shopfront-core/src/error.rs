//! Error types for shopfront domain validation.

use rust_decimal::Decimal;

/// Result type for validation operations.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Errors raised when input violates a domain invariant.
///
/// Invalid input is always rejected, never coerced; each variant carries
/// enough context for the API layer to report which field was at fault.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required string field was empty.
    #[error("required field is empty: {field}")]
    EmptyField {
        /// Name of the offending field.
        field: &'static str,
    },

    /// A unit price was negative.
    #[error("unit price must not be negative: {price}")]
    NegativePrice {
        /// The rejected price.
        price: Decimal,
    },

    /// An inventory quantity was (or would become) negative.
    #[error("quantity must not be negative: {quantity}")]
    NegativeQuantity {
        /// The rejected quantity.
        quantity: i64,
    },

    /// A sale requested more stock than the inventory holds.
    #[error("insufficient stock: available={available}, requested={requested}")]
    InsufficientStock {
        /// Units currently in stock.
        available: i64,
        /// Units the sale asked for.
        requested: u64,
    },
}
