//! Handler tests for Products domain
//!
//! These exercise the products router on its own, without the bearer-token
//! gate or the outer application router:
//! - Request deserialization and validation
//! - Response envelopes and status codes
//! - `{ "error": ... }` bodies on failure

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    handlers::router(ProductService::new(
        InMemoryProductRepository::with_seed_data(),
    ))
}

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn with_json(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_list_returns_envelope_sorted_by_name() {
    let response = app().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: ProductListResponse = json_body(response.into_body()).await;
    assert_eq!(body.message, "Products retrieved successfully");
    assert_eq!(body.total, 8);
    assert_eq!(body.products.len(), 8);
    assert_eq!(body.products[0].name, "Breville Coffee Maker");
}

#[tokio::test]
async fn test_list_with_category_and_price_sort() {
    let response = app()
        .oneshot(get("/?category=electronics&sort=price"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: ProductListResponse = json_body(response.into_body()).await;
    let names: Vec<_> = body.products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Sony WH-1000XM5", "iPhone 15 Pro", "MacBook Pro 16\""]);
    assert_eq!(body.total, 3);
}

#[tokio::test]
async fn test_list_matches_local_query_engine() {
    let query = ProductQuery {
        search: Some("pro".to_string()),
        sort: Some("price-desc".to_string()),
        ..Default::default()
    };
    let expected = query::apply(&seed::demo_products(), &query);

    let response = app()
        .oneshot(get("/?search=pro&sort=price-desc"))
        .await
        .unwrap();
    let body: ProductListResponse = json_body(response.into_body()).await;

    assert_eq!(body.products, expected);
}

#[tokio::test]
async fn test_list_json_uses_camel_case() {
    let response = app().oneshot(get("/?category=books")).await.unwrap();
    let body: Value = json_body(response.into_body()).await;

    let product = &body["products"][0];
    assert_eq!(product["name"], "Kindle Paperwhite");
    assert_eq!(product["createdAt"], "2025-08-29T14:00:00Z");
}

#[tokio::test]
async fn test_get_product_returns_200() {
    let response = app().oneshot(get("/2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: ProductResponse = json_body(response.into_body()).await;
    assert_eq!(body.message, "Product retrieved successfully");
    assert_eq!(body.product.name, "iPhone 15 Pro");
}

#[tokio::test]
async fn test_get_unknown_product_returns_404() {
    let response = app().oneshot(get("/does-not-exist")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({ "error": "Product not found" }));
}

#[tokio::test]
async fn test_create_product_returns_201() {
    let app = app();
    let request = with_json(
        "POST",
        "/",
        json!({
            "name": "Desk Lamp",
            "description": "LED lamp with dimmer",
            "price": 39.5,
            "category": "Home & Kitchen",
            "stock": 12
        }),
    );

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: ProductResponse = json_body(response.into_body()).await;
    assert_eq!(body.message, "Product created successfully");
    assert_eq!(body.product.name, "Desk Lamp");
    assert!(!body.product.id.is_empty());

    let fetched = app
        .oneshot(get(&format!("/{}", body.product.id)))
        .await
        .unwrap();
    let fetched: ProductResponse = json_body(fetched.into_body()).await;
    assert_eq!(fetched.product, body.product);
}

#[tokio::test]
async fn test_create_product_accepts_form_strings() {
    let request = with_json(
        "POST",
        "/",
        json!({
            "name": "Desk Lamp",
            "description": "LED lamp with dimmer",
            "price": "39.5",
            "category": "Home & Kitchen",
            "stock": "12"
        }),
    );

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["product"]["price"], 39.5);
    assert_eq!(body["product"]["stock"], 12);
}

#[tokio::test]
async fn test_create_product_negative_price_string_returns_400() {
    let request = with_json(
        "POST",
        "/",
        json!({
            "name": "Broken",
            "description": "Should never be stored",
            "price": "-5",
            "category": "Electronics",
            "stock": "1"
        }),
    );

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "Price and stock must be non-negative");
}

#[tokio::test]
async fn test_create_product_non_numeric_price_returns_400() {
    let request = with_json(
        "POST",
        "/",
        json!({
            "name": "Desk Lamp",
            "description": "LED lamp with dimmer",
            "price": "cheap",
            "category": "Home & Kitchen",
            "stock": 12
        }),
    );

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_product_missing_field_returns_400() {
    let request = with_json(
        "POST",
        "/",
        json!({ "name": "Desk Lamp", "price": 39.5, "stock": 12 }),
    );

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "All fields are required");
}

#[tokio::test]
async fn test_create_product_negative_price_returns_400_without_insert() {
    let app = app();
    let request = with_json(
        "POST",
        "/",
        json!({
            "name": "Broken",
            "description": "Should never be stored",
            "price": -5,
            "category": "Electronics",
            "stock": 1
        }),
    );

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "Price and stock must be non-negative");

    let list = app.oneshot(get("/")).await.unwrap();
    let list: ProductListResponse = json_body(list.into_body()).await;
    assert_eq!(list.total, 8);
}

#[tokio::test]
async fn test_create_product_malformed_json_returns_400() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_price_only_keeps_other_fields() {
    let request = with_json("PUT", "/4", json!({ "price": 119.99, "name": "" }));

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: ProductResponse = json_body(response.into_body()).await;
    assert_eq!(body.message, "Product updated successfully");
    assert_eq!(body.product.price, 119.99);
    assert_eq!(body.product.name, "Nike Air Max 270");
    assert_eq!(body.product.category, "Sports");
    assert_eq!(body.product.stock, 75);
}

#[tokio::test]
async fn test_update_accepts_form_strings() {
    let request = with_json("PUT", "/4", json!({ "price": "119.99", "stock": "60", "category": "" }));

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: ProductResponse = json_body(response.into_body()).await;
    assert_eq!(body.product.price, 119.99);
    assert_eq!(body.product.stock, 60);
    assert_eq!(body.product.category, "Sports");
}

#[tokio::test]
async fn test_update_blank_stock_keeps_value() {
    let request = with_json("PUT", "/4", json!({ "stock": "" }));

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: ProductResponse = json_body(response.into_body()).await;
    assert_eq!(body.product.stock, 75);
}

#[tokio::test]
async fn test_update_to_zero_stock_is_allowed() {
    let request = with_json("PUT", "/5", json!({ "stock": 0 }));

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: ProductResponse = json_body(response.into_body()).await;
    assert_eq!(body.product.stock, 0);
}

#[tokio::test]
async fn test_update_negative_stock_returns_400() {
    let request = with_json("PUT", "/5", json!({ "stock": -1 }));

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "Price and stock must be non-negative");
}

#[tokio::test]
async fn test_update_unknown_product_returns_404_even_when_invalid() {
    let request = with_json("PUT", "/999", json!({ "price": -1 }));

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_returns_removed_product() {
    let app = app();
    let request = Request::builder()
        .method("DELETE")
        .uri("/7")
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: ProductResponse = json_body(response.into_body()).await;
    assert_eq!(body.message, "Product deleted successfully");
    assert_eq!(body.product.name, "Sony WH-1000XM5");

    let response = app.clone().oneshot(get("/7")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let list = app.oneshot(get("/")).await.unwrap();
    let list: ProductListResponse = json_body(list.into_body()).await;
    assert_eq!(list.total, 7);
}
