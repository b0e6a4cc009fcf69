//! In-memory storage implementation.
//!
//! A `Store` fake for tests: the same contract as `RocksStore` without
//! touching disk. Documents are held as typed records, so the
//! validate-on-read skipping that guards the RocksDB backend has nothing
//! to do here.

use std::collections::BTreeMap;
use std::sync::RwLock;

use shopfront_core::{InventoryItem, ItemId, NewItem, NewSale, RecordId, SalesRecord};

use crate::error::{Result, StoreError};
use crate::Store;

/// In-memory `Store` implementation for tests.
///
/// Keys are ULIDs, so the `BTreeMap` ordering matches the insertion order
/// a `RocksStore` listing would produce.
#[derive(Debug, Default)]
pub struct MemoryStore {
    sales: RwLock<BTreeMap<RecordId, SalesRecord>>,
    items: RwLock<BTreeMap<ItemId, InventoryItem>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> StoreError {
    StoreError::Database("lock poisoned".into())
}

impl Store for MemoryStore {
    fn list_sales(&self) -> Result<Vec<SalesRecord>> {
        let sales = self.sales.read().map_err(|_| poisoned())?;
        Ok(sales.values().cloned().collect())
    }

    fn insert_sale(&self, sale: NewSale) -> Result<SalesRecord> {
        let record = sale.into_record(RecordId::generate());
        let mut sales = self.sales.write().map_err(|_| poisoned())?;
        sales.insert(record.id, record.clone());
        Ok(record)
    }

    fn list_items(&self) -> Result<Vec<InventoryItem>> {
        let items = self.items.read().map_err(|_| poisoned())?;
        Ok(items.values().cloned().collect())
    }

    fn get_item(&self, id: &ItemId) -> Result<Option<InventoryItem>> {
        let items = self.items.read().map_err(|_| poisoned())?;
        Ok(items.get(id).cloned())
    }

    fn insert_item(&self, item: NewItem) -> Result<InventoryItem> {
        let item = item.into_item(ItemId::generate());
        let mut items = self.items.write().map_err(|_| poisoned())?;
        items.insert(item.id, item.clone());
        Ok(item)
    }

    fn update_item(&self, item: &InventoryItem) -> Result<()> {
        let mut items = self.items.write().map_err(|_| poisoned())?;
        if !items.contains_key(&item.id) {
            return Err(StoreError::item_not_found(&item.id));
        }
        items.insert(item.id, item.clone());
        Ok(())
    }

    fn delete_item(&self, id: &ItemId) -> Result<()> {
        let mut items = self.items.write().map_err(|_| poisoned())?;
        if items.remove(id).is_none() {
            return Err(StoreError::item_not_found(id));
        }
        Ok(())
    }

    fn find_item_by_product(&self, product_name: &str) -> Result<Option<InventoryItem>> {
        let items = self.items.read().map_err(|_| poisoned())?;
        Ok(items
            .values()
            .find(|i| i.product_name == product_name)
            .cloned())
    }
}
