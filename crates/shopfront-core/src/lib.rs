//! Core types and computation for the shopfront service.
//!
//! This crate provides the domain layer shared by the store and the HTTP
//! service:
//!
//! - **Identifiers**: `RecordId`, `ItemId`
//! - **Sales**: `SalesRecord`, `NewSale`, and the aggregation functions
//!   (`analyze`, `revenue_by_category`, `categories`, `total_sales`,
//!   `total_revenue`, `by_product_line`)
//! - **Inventory**: `InventoryItem`, `NewItem`, `ItemPatch`, `stats`
//! - **Validation**: `ValidationError`
//!
//! # Money
//!
//! Unit prices and revenue aggregates are `rust_decimal::Decimal`, so
//! large sums accumulate without floating-point drift. Quantities are
//! integer arithmetic exclusively.
//!
//! Everything here is pure: no I/O, no hidden state. Persistence lives in
//! `shopfront-store`, HTTP in `shopfront-service`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod ids;
pub mod inventory;
pub mod sales;

pub use error::{Result, ValidationError};
pub use ids::{IdError, ItemId, RecordId};
pub use inventory::{stats, InventoryItem, InventoryStats, ItemPatch, NewItem};
pub use sales::{
    analyze, by_product_line, categories, revenue_by_category, total_revenue, total_sales,
    NewSale, SalesAnalysis, SalesRecord,
};
