//! Shopfront HTTP API Service.
//!
//! This crate provides the HTTP API over the two document collections,
//! including:
//!
//! - Sales listing, aggregation, and ingestion
//! - Inventory CRUD, stats, and the low-stock report
//!
//! The handlers are thin: they fetch documents through the
//! [`shopfront_store::Store`] handle held in [`AppState`], run the pure
//! computations from `shopfront-core`, and serialize the results. Each
//! request is stateless; nothing is shared between calls beyond the store
//! handle itself.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Handlers must be async for Axum even when the store is sync

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
