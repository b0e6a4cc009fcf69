//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{health, inventory, sales};
use crate::state::AppState;

/// Maximum concurrent requests for API endpoints.
const API_MAX_CONCURRENT_REQUESTS: usize = 100;

/// Create the service router with all routes and middleware.
///
/// # Routes
///
/// ## Public
/// - `GET /health` - Health check
///
/// ## Sales
/// - `GET /sales` - List all sales records
/// - `POST /sales` - Record a new sale (decrements inventory)
/// - `GET /sales/analyze` - Total quantity and average unit price
/// - `GET /sales/total_revenue_by_category` - Revenue per product line
/// - `GET /sales/categories` - Distinct product lines
/// - `GET /sales/total_sales` - Number of sales records
/// - `GET /sales/total_revenue` - Grand revenue total
/// - `GET /sales/{product_line}` - Sales for one product line
///
/// ## Inventory
/// - `GET /inventory` - List all items
/// - `POST /inventory` - Create an item
/// - `GET /inventory/stats` - Item count and total quantity
/// - `GET /inventory/low_stock` - Items below the stock threshold
/// - `GET /inventory/{id}` - Get one item
/// - `PUT /inventory/{id}` - Partially update an item
/// - `DELETE /inventory/{id}` - Delete an item
pub fn create_router(state: AppState) -> Router {
    // Extract config values before moving state
    let cors_origins = state.config.cors_origins.clone();
    let max_body_bytes = state.config.max_body_bytes;
    let request_timeout_seconds = state.config.request_timeout_seconds;

    // Build CORS layer
    let cors = build_cors_layer(&cors_origins);

    let state = Arc::new(state);

    // Static segments ("/sales/analyze") take priority over the trailing
    // path parameters, so the aggregate routes never shadow a product line.
    let api_routes = Router::new()
        // Sales
        .route("/sales", get(sales::list_sales).post(sales::create_sale))
        .route("/sales/analyze", get(sales::analyze_sales))
        .route(
            "/sales/total_revenue_by_category",
            get(sales::total_revenue_by_category),
        )
        .route("/sales/categories", get(sales::list_categories))
        .route("/sales/total_sales", get(sales::total_sales))
        .route("/sales/total_revenue", get(sales::total_revenue))
        .route("/sales/:product_line", get(sales::sales_for_product_line))
        // Inventory
        .route(
            "/inventory",
            get(inventory::list_inventory).post(inventory::create_item),
        )
        .route("/inventory/stats", get(inventory::inventory_stats))
        .route("/inventory/low_stock", get(inventory::low_stock))
        .route(
            "/inventory/:item_id",
            get(inventory::get_item)
                .put(inventory::update_item)
                .delete(inventory::delete_item),
        )
        .layer(ConcurrencyLimitLayer::new(API_MAX_CONCURRENT_REQUESTS));

    Router::new()
        // Health (public, no concurrency limit)
        .route("/health", get(health::health))
        .merge(api_routes)
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            request_timeout_seconds,
        )))
        .with_state(state)
}

/// Build the CORS layer from configured origins.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
