//! Error types for shopfront storage.

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in storage operations.
///
/// Store failures are not retried in-process; retry policy belongs to the
/// caller of the service, not this layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Database operation failed.
    #[error("database error: {0}")]
    Database(String),

    /// Serialization/deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Referenced document does not exist.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// The kind of document that was missing.
        entity: &'static str,
        /// The identifier that was looked up.
        id: String,
    },
}

impl StoreError {
    /// Convenience constructor for a missing inventory item.
    #[must_use]
    pub fn item_not_found(id: &shopfront_core::ItemId) -> Self {
        Self::NotFound {
            entity: "inventory item",
            id: id.to_string(),
        }
    }
}
