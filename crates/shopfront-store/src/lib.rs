//! Document storage layer for shopfront.
//!
//! This crate provides persistence for the `sales` and `inventory`
//! collections using `RocksDB`, with one column family per collection and
//! CBOR-encoded documents keyed by ULID.
//!
//! # Architecture
//!
//! - `Store` trait: the document-store interface the rest of the system
//!   depends on
//! - `RocksStore`: the on-disk implementation
//! - `MemoryStore`: an in-memory fake for tests
//!
//! Documents are validated on read as well as on write: a stored document
//! that no longer decodes into its typed record is skipped from listings
//! (with a warning) rather than trusted.
//!
//! # Example
//!
//! ```no_run
//! use shopfront_store::{RocksStore, Store};
//! use shopfront_core::NewItem;
//!
//! let store = RocksStore::open("/tmp/shopfront-db").unwrap();
//!
//! let item = store
//!     .insert_item(NewItem { product_name: "Health and beauty".into(), quantity: 25 })
//!     .unwrap();
//!
//! let fetched = store.get_item(&item.id).unwrap();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod keys;
pub mod memory;
pub mod rocks;
pub mod schema;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use rocks::RocksStore;

use shopfront_core::{InventoryItem, ItemId, NewItem, NewSale, SalesRecord};

/// The storage trait defining all database operations.
///
/// This trait abstracts the storage layer, allowing for different
/// implementations (`RocksDB` on disk, in-memory for testing). Identifiers
/// are assigned by the store on insert.
///
/// The store performs no domain validation of its own; callers validate
/// payloads before delegating here.
pub trait Store: Send + Sync {
    // =========================================================================
    // Sales Operations
    // =========================================================================

    /// List all sales records, in insertion order.
    ///
    /// Documents that fail to decode or violate the record invariants are
    /// skipped, not surfaced as errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn list_sales(&self) -> Result<Vec<SalesRecord>>;

    /// Insert a sales record, assigning its identifier.
    ///
    /// Returns the stored record. Sales records are immutable once
    /// inserted; there are no update or delete operations for them.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn insert_sale(&self, sale: NewSale) -> Result<SalesRecord>;

    // =========================================================================
    // Inventory Operations
    // =========================================================================

    /// List all inventory items, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn list_items(&self) -> Result<Vec<InventoryItem>>;

    /// Get an inventory item by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails or the document
    /// cannot be decoded.
    fn get_item(&self, id: &ItemId) -> Result<Option<InventoryItem>>;

    /// Insert an inventory item, assigning its identifier.
    ///
    /// Returns the stored item.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn insert_item(&self, item: NewItem) -> Result<InventoryItem>;

    /// Replace a stored inventory item with `item` (matched by its id).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no item with that id exists.
    fn update_item(&self, item: &InventoryItem) -> Result<()>;

    /// Delete an inventory item by identifier.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no item with that id exists.
    fn delete_item(&self, id: &ItemId) -> Result<()>;

    /// Find the first inventory item whose product name matches exactly.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn find_item_by_product(&self, product_name: &str) -> Result<Option<InventoryItem>>;
}
