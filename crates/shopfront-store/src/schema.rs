//! Database schema definitions and column families.
//!
//! Each column family holds one document collection.

/// Column family names for the `RocksDB` database.
pub mod cf {
    /// Sales records, keyed by `record_id` (ULID).
    pub const SALES: &str = "sales";

    /// Inventory items, keyed by `item_id` (ULID).
    pub const INVENTORY: &str = "inventory";
}

/// Returns all column family names for database initialization.
#[must_use]
pub fn all_column_families() -> Vec<&'static str> {
    vec![cf::SALES, cf::INVENTORY]
}
