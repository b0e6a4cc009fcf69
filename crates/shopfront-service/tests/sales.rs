//! Sales endpoint integration tests.

mod common;

use common::TestHarness;
use rust_decimal_macros::dec;
use serde_json::json;

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn list_sales_empty() {
    let harness = TestHarness::new();

    let response = harness.server.get("/sales").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn list_sales_returns_seeded_records() {
    let harness = TestHarness::new();
    harness.seed_sale("Health and beauty", dec!(74.69), 7);

    let response = harness.server.get("/sales").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["product_line"], "Health and beauty");
    assert_eq!(body[0]["quantity"], 7);
}

// ============================================================================
// Aggregation
// ============================================================================

#[tokio::test]
async fn analyze_returns_totals() {
    let harness = TestHarness::new();
    harness.seed_sale("A", dec!(10), 2);
    harness.seed_sale("B", dec!(5), 4);

    let response = harness.server.get("/sales/analyze").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["total_quantity"], 6);
    assert_eq!(body["average_unit_price"], "7.5");
}

#[tokio::test]
async fn analyze_empty_returns_zeros() {
    let harness = TestHarness::new();

    let response = harness.server.get("/sales/analyze").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["total_quantity"], 0);
    assert_eq!(body["average_unit_price"], "0");
}

#[tokio::test]
async fn revenue_by_category_groups_and_sums() {
    let harness = TestHarness::new();
    harness.seed_sale("A", dec!(10), 2);
    harness.seed_sale("B", dec!(5), 4);

    let response = harness.server.get("/sales/total_revenue_by_category").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["A"], "20");
    assert_eq!(body["B"], "20");
    assert_eq!(body.as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn categories_are_distinct() {
    let harness = TestHarness::new();
    harness.seed_sale("A", dec!(1), 1);
    harness.seed_sale("A", dec!(2), 1);
    harness.seed_sale("B", dec!(3), 1);

    let response = harness.server.get("/sales/categories").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body, json!(["A", "B"]));
}

#[tokio::test]
async fn total_sales_counts_records() {
    let harness = TestHarness::new();
    harness.seed_sale("A", dec!(1), 50);
    harness.seed_sale("A", dec!(1), 50);

    let response = harness.server.get("/sales/total_sales").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body, json!(2));
}

#[tokio::test]
async fn total_revenue_sums_line_totals() {
    let harness = TestHarness::new();
    harness.seed_sale("A", dec!(10), 2);
    harness.seed_sale("B", dec!(5), 4);

    let response = harness.server.get("/sales/total_revenue").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body, json!("40"));
}

// ============================================================================
// Per-product-line filtering
// ============================================================================

#[tokio::test]
async fn sales_for_product_line_filters() {
    let harness = TestHarness::new();
    harness.seed_sale("Electronic accessories", dec!(9.99), 3);
    harness.seed_sale("Food and beverages", dec!(4.20), 1);

    let response = harness.server.get("/sales/Electronic%20accessories").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["product_line"], "Electronic accessories");
}

#[tokio::test]
async fn sales_for_unknown_product_line_is_empty_not_error() {
    let harness = TestHarness::new();
    harness.seed_sale("A", dec!(1), 1);

    let response = harness.server.get("/sales/Furniture").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body, json!([]));
}

// ============================================================================
// Sale ingestion
// ============================================================================

#[tokio::test]
async fn create_sale_decrements_inventory() {
    let harness = TestHarness::new();
    let item = harness.seed_item("Health and beauty", 10);

    let response = harness
        .server
        .post("/sales")
        .json(&json!({
            "invoice_id": "750-67-8428",
            "branch": "A",
            "city": "Yangon",
            "product_line": "Health and beauty",
            "unit_price": "74.69",
            "quantity": 4
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["invoice_id"], "750-67-8428");

    // Stock decremented from 10 to 6.
    let item_response = harness.server.get(&format!("/inventory/{}", item.id)).await;
    let item_body: serde_json::Value = item_response.json();
    assert_eq!(item_body["quantity"], 6);

    // The record is visible in the listing.
    let list: serde_json::Value = harness.server.get("/sales").await.json();
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn create_sale_for_unknown_product_fails() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/sales")
        .json(&json!({
            "invoice_id": "INV-1",
            "branch": "B",
            "city": "Mandalay",
            "product_line": "Furniture",
            "unit_price": "10.00",
            "quantity": 1
        }))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn create_sale_with_insufficient_stock_changes_nothing() {
    let harness = TestHarness::new();
    let item = harness.seed_item("Sports and travel", 3);

    let response = harness
        .server
        .post("/sales")
        .json(&json!({
            "invoice_id": "INV-2",
            "branch": "C",
            "city": "Naypyitaw",
            "product_line": "Sports and travel",
            "unit_price": "15.00",
            "quantity": 5
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "insufficient_stock");
    assert_eq!(body["error"]["details"]["available"], 3);
    assert_eq!(body["error"]["details"]["requested"], 5);

    // Neither collection was touched by the rejected sale.
    let item_body: serde_json::Value =
        harness.server.get(&format!("/inventory/{}", item.id)).await.json();
    assert_eq!(item_body["quantity"], 3);

    let list: serde_json::Value = harness.server.get("/sales").await.json();
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn create_sale_with_empty_invoice_fails_validation() {
    let harness = TestHarness::new();
    harness.seed_item("Health and beauty", 10);

    let response = harness
        .server
        .post("/sales")
        .json(&json!({
            "invoice_id": "",
            "branch": "A",
            "city": "Yangon",
            "product_line": "Health and beauty",
            "unit_price": "74.69",
            "quantity": 1
        }))
        .await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn create_sale_with_negative_price_fails_validation() {
    let harness = TestHarness::new();
    harness.seed_item("Health and beauty", 10);

    let response = harness
        .server
        .post("/sales")
        .json(&json!({
            "invoice_id": "INV-3",
            "branch": "A",
            "city": "Yangon",
            "product_line": "Health and beauty",
            "unit_price": "-1.00",
            "quantity": 1
        }))
        .await;

    response.assert_status_bad_request();
}
