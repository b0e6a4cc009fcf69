//! Sales listing, aggregation, and ingestion handlers.
//!
//! The read endpoints fetch the full collection once, then run the pure
//! aggregation functions from `shopfront-core` over it; nothing is cached
//! between requests.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use rust_decimal::Decimal;

use shopfront_core::sales as engine;
use shopfront_core::{ItemPatch, NewSale, SalesAnalysis, SalesRecord, ValidationError};

use crate::error::ApiError;
use crate::state::AppState;

/// List all sales records.
pub async fn list_sales(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SalesRecord>>, ApiError> {
    Ok(Json(state.store.list_sales()?))
}

/// Total quantity and average unit price over all sales.
pub async fn analyze_sales(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SalesAnalysis>, ApiError> {
    let records = state.store.list_sales()?;
    Ok(Json(engine::analyze(&records)))
}

/// Revenue summed per product line.
pub async fn total_revenue_by_category(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BTreeMap<String, Decimal>>, ApiError> {
    let records = state.store.list_sales()?;
    Ok(Json(engine::revenue_by_category(&records)))
}

/// Distinct product lines present in the sales collection.
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BTreeSet<String>>, ApiError> {
    let records = state.store.list_sales()?;
    Ok(Json(engine::categories(&records)))
}

/// Number of sales records.
pub async fn total_sales(State(state): State<Arc<AppState>>) -> Result<Json<usize>, ApiError> {
    let records = state.store.list_sales()?;
    Ok(Json(engine::total_sales(&records)))
}

/// Grand revenue total.
pub async fn total_revenue(State(state): State<Arc<AppState>>) -> Result<Json<Decimal>, ApiError> {
    let records = state.store.list_sales()?;
    Ok(Json(engine::total_revenue(&records)))
}

/// Sales records for one product line.
///
/// An unknown product line yields an empty array, not a 404.
pub async fn sales_for_product_line(
    State(state): State<Arc<AppState>>,
    Path(product_line): Path<String>,
) -> Result<Json<Vec<SalesRecord>>, ApiError> {
    let records = state.store.list_sales()?;
    Ok(Json(engine::by_product_line(&records, &product_line)))
}

/// Record a new sale.
///
/// The sale must name a product line that exists in the inventory with
/// enough stock; the stock is decremented before the record is inserted.
/// The two writes are not transactional - last write wins under
/// concurrency, the same boundary as plain inventory updates.
pub async fn create_sale(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewSale>,
) -> Result<(StatusCode, Json<SalesRecord>), ApiError> {
    body.validate()?;

    let item = state
        .store
        .find_item_by_product(&body.product_line)?
        .ok_or_else(|| {
            ApiError::NotFound(format!(
                "no inventory item for product line: {}",
                body.product_line
            ))
        })?;

    let requested = i64::try_from(body.quantity)
        .map_err(|_| ApiError::Validation(format!("quantity out of range: {}", body.quantity)))?;

    if item.quantity < requested {
        return Err(ValidationError::InsufficientStock {
            available: item.quantity,
            requested: body.quantity,
        }
        .into());
    }

    let patch = ItemPatch {
        product_name: None,
        quantity: Some(item.quantity - requested),
    };
    let updated = patch.apply(&item)?;
    state.store.update_item(&updated)?;

    let record = state.store.insert_sale(body)?;

    tracing::info!(
        record_id = %record.id,
        product_line = %record.product_line,
        quantity = record.quantity,
        remaining_stock = updated.quantity,
        "Sale recorded"
    );

    Ok((StatusCode::CREATED, Json(record)))
}
