//! Inventory CRUD and reporting handlers.
//!
//! Mutations follow the same shape throughout: validate the input against
//! the domain invariants, then delegate persistence to the store. A
//! rejected mutation leaves the stored item untouched.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use shopfront_core::{stats, InventoryItem, InventoryStats, ItemId, ItemPatch, NewItem};

use crate::error::ApiError;
use crate::state::AppState;

/// Parse a path segment as an [`ItemId`].
///
/// A malformed identifier is a 400, distinct from a well-formed identifier
/// that matches nothing (404).
fn parse_item_id(raw: &str) -> Result<ItemId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::Validation(format!("invalid item id: {raw}")))
}

/// List all inventory items.
pub async fn list_inventory(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<InventoryItem>>, ApiError> {
    Ok(Json(state.store.list_items()?))
}

/// Item count and total quantity.
pub async fn inventory_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<InventoryStats>, ApiError> {
    let items = state.store.list_items()?;
    Ok(Json(stats(&items)))
}

/// One entry in the low-stock report.
#[derive(Debug, Serialize)]
pub struct LowStockEntry {
    /// Product name of the item running low.
    pub product_name: String,
    /// Its current quantity.
    pub quantity: i64,
}

/// Low-stock report response.
#[derive(Debug, Serialize)]
pub struct LowStockResponse {
    /// Items whose quantity is below the threshold.
    pub low_stock_items: Vec<LowStockEntry>,
}

/// Items whose stock is below the low-stock threshold.
pub async fn low_stock(
    State(state): State<Arc<AppState>>,
) -> Result<Json<LowStockResponse>, ApiError> {
    let items = state.store.list_items()?;

    let low_stock_items = items
        .into_iter()
        .filter(InventoryItem::is_low_stock)
        .map(|item| LowStockEntry {
            product_name: item.product_name,
            quantity: item.quantity,
        })
        .collect();

    Ok(Json(LowStockResponse { low_stock_items }))
}

/// Get one inventory item.
pub async fn get_item(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<String>,
) -> Result<Json<InventoryItem>, ApiError> {
    let id = parse_item_id(&item_id)?;

    let item = state
        .store
        .get_item(&id)?
        .ok_or_else(|| ApiError::NotFound(format!("inventory item not found: {id}")))?;

    Ok(Json(item))
}

/// Create an inventory item.
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewItem>,
) -> Result<(StatusCode, Json<InventoryItem>), ApiError> {
    body.validate()?;

    let item = state.store.insert_item(body)?;

    tracing::info!(item_id = %item.id, product_name = %item.product_name, "Inventory item created");

    Ok((StatusCode::CREATED, Json(item)))
}

/// Partially update an inventory item.
///
/// The patch is merged over the current item and the result re-validated;
/// a patch that would drive the quantity negative is rejected and the
/// stored item is unchanged.
pub async fn update_item(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<String>,
    Json(patch): Json<ItemPatch>,
) -> Result<Json<InventoryItem>, ApiError> {
    let id = parse_item_id(&item_id)?;

    let current = state
        .store
        .get_item(&id)?
        .ok_or_else(|| ApiError::NotFound(format!("inventory item not found: {id}")))?;

    let updated = patch.apply(&current)?;
    state.store.update_item(&updated)?;

    tracing::info!(item_id = %id, quantity = updated.quantity, "Inventory item updated");

    Ok(Json(updated))
}

/// Delete an inventory item.
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = parse_item_id(&item_id)?;

    state.store.delete_item(&id)?;

    tracing::info!(item_id = %id, "Inventory item deleted");

    Ok(Json(serde_json::json!({ "deleted": true })))
}
