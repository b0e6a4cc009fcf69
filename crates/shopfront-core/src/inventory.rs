//! Inventory items and the consistency rules governing their mutation.
//!
//! Items are plain CRUD entities: they either exist or they don't, with no
//! workflow states in between. Every mutation is validated here before the
//! store is touched; an update that would drive the quantity negative is
//! rejected, never clamped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};
use crate::ids::ItemId;

/// Stock level below which an item appears in the low-stock report.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// An inventory item as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Store-assigned identifier.
    pub id: ItemId,

    /// Product name. Non-empty; duplicates are allowed.
    pub product_name: String,

    /// Units in stock. Never negative.
    pub quantity: i64,

    /// When the item was created.
    pub created_at: DateTime<Utc>,

    /// When the item was last updated.
    pub updated_at: DateTime<Utc>,
}

impl InventoryItem {
    /// Whether the item's stock is below [`LOW_STOCK_THRESHOLD`].
    #[must_use]
    pub fn is_low_stock(&self) -> bool {
        self.quantity < LOW_STOCK_THRESHOLD
    }
}

/// Input payload for creating an inventory item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewItem {
    /// Product name.
    pub product_name: String,
    /// Initial stock.
    pub quantity: i64,
}

impl NewItem {
    /// Validate the payload.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the product name is empty or the
    /// quantity is negative.
    pub fn validate(&self) -> Result<()> {
        if self.product_name.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                field: "product_name",
            });
        }
        if self.quantity < 0 {
            return Err(ValidationError::NegativeQuantity {
                quantity: self.quantity,
            });
        }
        Ok(())
    }

    /// Build the item this payload will be stored as.
    ///
    /// Callers are expected to [`validate`](Self::validate) first; this is
    /// pure construction.
    #[must_use]
    pub fn into_item(self, id: ItemId) -> InventoryItem {
        let now = Utc::now();
        InventoryItem {
            id,
            product_name: self.product_name,
            quantity: self.quantity,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A partial update to an inventory item.
///
/// Absent fields leave the stored value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemPatch {
    /// New product name, if changing.
    #[serde(default)]
    pub product_name: Option<String>,

    /// New stock level, if changing.
    #[serde(default)]
    pub quantity: Option<i64>,
}

impl ItemPatch {
    /// Merge the patch over `current`, re-validating the result.
    ///
    /// On success the returned item has a fresh `updated_at`; on failure
    /// `current` is untouched, so the stored state is unchanged by a
    /// rejected update.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the merged item would have an
    /// empty product name or a negative quantity.
    pub fn apply(self, current: &InventoryItem) -> Result<InventoryItem> {
        let product_name = self
            .product_name
            .unwrap_or_else(|| current.product_name.clone());
        let quantity = self.quantity.unwrap_or(current.quantity);

        if product_name.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                field: "product_name",
            });
        }
        if quantity < 0 {
            return Err(ValidationError::NegativeQuantity { quantity });
        }

        Ok(InventoryItem {
            id: current.id,
            product_name,
            quantity,
            created_at: current.created_at,
            updated_at: Utc::now(),
        })
    }
}

/// Aggregate statistics over the inventory collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryStats {
    /// Number of inventory records.
    pub total_items: usize,

    /// Sum of their quantities.
    pub total_quantity: i64,
}

/// Compute [`InventoryStats`] over a set of items.
#[must_use]
pub fn stats(items: &[InventoryItem]) -> InventoryStats {
    InventoryStats {
        total_items: items.len(),
        total_quantity: items.iter().map(|i| i.quantity).sum(),
    }
}
