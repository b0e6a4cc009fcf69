//! `RocksDB` storage implementation.
//!
//! This module provides the `RocksStore` implementation of the `Store`
//! trait. Each collection lives in its own column family; documents are
//! CBOR-encoded.

use std::path::Path;
use std::sync::Arc;

use rocksdb::{
    BoundColumnFamily, ColumnFamilyDescriptor, DBWithThreadMode, IteratorMode, MultiThreaded,
    Options,
};

use shopfront_core::{InventoryItem, ItemId, NewItem, NewSale, RecordId, SalesRecord};

use crate::error::{Result, StoreError};
use crate::keys;
use crate::schema::{all_column_families, cf};
use crate::Store;

/// RocksDB-backed storage implementation.
pub struct RocksStore {
    db: Arc<DBWithThreadMode<MultiThreaded>>,
}

impl RocksStore {
    /// Open or create a `RocksDB` database at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_descriptors: Vec<_> = all_column_families()
            .into_iter()
            .map(|name| ColumnFamilyDescriptor::new(name, Options::default()))
            .collect();

        let db = DBWithThreadMode::open_cf_descriptors(&opts, path, cf_descriptors)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Get a column family handle.
    fn cf(&self, name: &str) -> Result<Arc<BoundColumnFamily<'_>>> {
        self.db
            .cf_handle(name)
            .ok_or_else(|| StoreError::Database(format!("column family not found: {name}")))
    }

    /// Serialize a value using CBOR.
    fn serialize<T: serde::Serialize>(value: &T) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        ciborium::into_writer(value, &mut buf)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        Ok(buf)
    }

    /// Deserialize a value from CBOR.
    fn deserialize<T: serde::de::DeserializeOwned>(data: &[u8]) -> Result<T> {
        ciborium::from_reader(data).map_err(|e| StoreError::Serialization(e.to_string()))
    }
}

impl Store for RocksStore {
    // =========================================================================
    // Sales Operations
    // =========================================================================

    fn list_sales(&self) -> Result<Vec<SalesRecord>> {
        let cf = self.cf(cf::SALES)?;
        let mut records = Vec::new();

        for item in self.db.iterator_cf(&cf, IteratorMode::Start) {
            let (_, value) = item.map_err(|e| StoreError::Database(e.to_string()))?;

            // Never trust the stored schema: a document that no longer
            // decodes, or that violates the record invariants, is skipped
            // rather than poisoning every aggregate built on this listing.
            match Self::deserialize::<SalesRecord>(&value) {
                Ok(record) => match record.validate() {
                    Ok(()) => records.push(record),
                    Err(e) => {
                        tracing::warn!(record_id = %record.id, error = %e, "skipping invalid sales document");
                    }
                },
                Err(e) => {
                    tracing::warn!(error = %e, "skipping undecodable sales document");
                }
            }
        }

        Ok(records)
    }

    fn insert_sale(&self, sale: NewSale) -> Result<SalesRecord> {
        let cf = self.cf(cf::SALES)?;
        let record = sale.into_record(RecordId::generate());

        let key = keys::sale_key(&record.id);
        let value = Self::serialize(&record)?;

        self.db
            .put_cf(&cf, key, value)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(record)
    }

    // =========================================================================
    // Inventory Operations
    // =========================================================================

    fn list_items(&self) -> Result<Vec<InventoryItem>> {
        let cf = self.cf(cf::INVENTORY)?;
        let mut items = Vec::new();

        for entry in self.db.iterator_cf(&cf, IteratorMode::Start) {
            let (_, value) = entry.map_err(|e| StoreError::Database(e.to_string()))?;

            match Self::deserialize::<InventoryItem>(&value) {
                Ok(item) if item.quantity >= 0 => items.push(item),
                Ok(item) => {
                    tracing::warn!(item_id = %item.id, quantity = item.quantity, "skipping inventory document with negative quantity");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "skipping undecodable inventory document");
                }
            }
        }

        Ok(items)
    }

    fn get_item(&self, id: &ItemId) -> Result<Option<InventoryItem>> {
        let cf = self.cf(cf::INVENTORY)?;
        let key = keys::item_key(id);

        self.db
            .get_cf(&cf, key)
            .map_err(|e| StoreError::Database(e.to_string()))?
            .map(|data| Self::deserialize(&data))
            .transpose()
    }

    fn insert_item(&self, item: NewItem) -> Result<InventoryItem> {
        let cf = self.cf(cf::INVENTORY)?;
        let item = item.into_item(ItemId::generate());

        let key = keys::item_key(&item.id);
        let value = Self::serialize(&item)?;

        self.db
            .put_cf(&cf, key, value)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(item)
    }

    fn update_item(&self, item: &InventoryItem) -> Result<()> {
        let cf = self.cf(cf::INVENTORY)?;
        let key = keys::item_key(&item.id);

        if self.get_item(&item.id)?.is_none() {
            return Err(StoreError::item_not_found(&item.id));
        }

        let value = Self::serialize(item)?;
        self.db
            .put_cf(&cf, key, value)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(())
    }

    fn delete_item(&self, id: &ItemId) -> Result<()> {
        let cf = self.cf(cf::INVENTORY)?;
        let key = keys::item_key(id);

        if self.get_item(id)?.is_none() {
            return Err(StoreError::item_not_found(id));
        }

        self.db
            .delete_cf(&cf, key)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(())
    }

    fn find_item_by_product(&self, product_name: &str) -> Result<Option<InventoryItem>> {
        let cf = self.cf(cf::INVENTORY)?;

        for entry in self.db.iterator_cf(&cf, IteratorMode::Start) {
            let (_, value) = entry.map_err(|e| StoreError::Database(e.to_string()))?;

            if let Ok(item) = Self::deserialize::<InventoryItem>(&value) {
                if item.product_name == product_name {
                    return Ok(Some(item));
                }
            }
        }

        Ok(None)
    }
}
