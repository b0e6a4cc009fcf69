//! Key encoding utilities for `RocksDB`.
//!
//! Documents are keyed by the raw 16 bytes of their ULID. ULIDs are
//! time-ordered, so iterating a column family in key order yields
//! insertion order.

use shopfront_core::{ItemId, RecordId};

/// Create a sales document key from a record ID.
#[must_use]
pub fn sale_key(record_id: &RecordId) -> Vec<u8> {
    record_id.to_bytes().to_vec()
}

/// Create an inventory document key from an item ID.
#[must_use]
pub fn item_key(item_id: &ItemId) -> Vec<u8> {
    item_id.to_bytes().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sale_key_length() {
        let id = RecordId::generate();
        let key = sale_key(&id);
        assert_eq!(key.len(), 16);
    }

    #[test]
    fn item_key_length() {
        let id = ItemId::generate();
        let key = item_key(&id);
        assert_eq!(key.len(), 16);
    }

    #[test]
    fn keys_sort_by_generation_time() {
        let first = RecordId::generate();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = RecordId::generate();

        assert!(sale_key(&first) < sale_key(&second));
    }
}
