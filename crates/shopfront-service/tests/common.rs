//! Common test utilities for shopfront integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use rust_decimal::Decimal;

use shopfront_core::{InventoryItem, NewItem, NewSale, SalesRecord};
use shopfront_service::{create_router, AppState, ServiceConfig};
use shopfront_store::{MemoryStore, Store};

/// Test harness containing everything needed for integration tests.
///
/// Built on the in-memory store, so each test gets a fresh, isolated
/// set of collections that can be seeded directly.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Direct handle to the backing store, for seeding documents.
    pub store: Arc<MemoryStore>,
}

impl TestHarness {
    /// Create a new test harness with empty collections.
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());

        let config = ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            data_dir: "unused-by-memory-store".into(),
            cors_origins: vec!["*".into()],
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 30,
        };

        let state = AppState::new(store.clone(), config);
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self { server, store }
    }

    /// Seed a sales record directly into the store.
    pub fn seed_sale(&self, product_line: &str, unit_price: Decimal, quantity: u64) -> SalesRecord {
        self.store
            .insert_sale(NewSale {
                invoice_id: format!("INV-{product_line}-{quantity}"),
                branch: "A".into(),
                city: "Yangon".into(),
                product_line: product_line.into(),
                unit_price,
                quantity,
            })
            .expect("Failed to seed sale")
    }

    /// Seed an inventory item directly into the store.
    pub fn seed_item(&self, product_name: &str, quantity: i64) -> InventoryItem {
        self.store
            .insert_item(NewItem {
                product_name: product_name.into(),
                quantity,
            })
            .expect("Failed to seed item")
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
