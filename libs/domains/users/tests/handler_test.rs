//! Handler tests for Users domain

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_users::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    handlers::router(UserService::new(InMemoryUserRepository::with_seed_data()))
}

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

#[tokio::test]
async fn test_list_users() {
    let response = app().oneshot(request("GET", "/", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: UserListResponse = json_body(response.into_body()).await;
    assert_eq!(body.message, "Users retrieved successfully");
    assert_eq!(body.total, 5);
    assert_eq!(body.users[0].username, "john_doe");
}

#[tokio::test]
async fn test_get_user_json_shape() {
    let response = app().oneshot(request("GET", "/2", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "User retrieved successfully");
    assert_eq!(
        body["user"],
        json!({
            "id": "2",
            "username": "jane_smith",
            "email": "jane@example.com",
            "role": "admin",
            "createdAt": "2025-08-29T11:00:00Z"
        })
    );
}

#[tokio::test]
async fn test_get_unknown_user_returns_404() {
    let response = app().oneshot(request("GET", "/42", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({ "error": "User not found" }));
}

#[tokio::test]
async fn test_create_user_defaults_role() {
    let response = app()
        .oneshot(request(
            "POST",
            "/",
            Some(json!({ "username": "kim", "email": "kim@example.com" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: UserResponse = json_body(response.into_body()).await;
    assert_eq!(body.message, "User created successfully");
    assert_eq!(body.user.role, Role::User);
    assert!(!body.user.id.is_empty());
}

#[tokio::test]
async fn test_create_user_missing_email_returns_400() {
    let response = app()
        .oneshot(request("POST", "/", Some(json!({ "username": "kim" }))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "Username and email are required");
}

#[tokio::test]
async fn test_create_user_unknown_role_returns_400() {
    let response = app()
        .oneshot(request(
            "POST",
            "/",
            Some(json!({ "username": "kim", "email": "kim@example.com", "role": "root" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_user_partial() {
    let response = app()
        .oneshot(request(
            "PUT",
            "/1",
            Some(json!({ "email": "john.doe@example.com", "username": "" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: UserResponse = json_body(response.into_body()).await;
    assert_eq!(body.message, "User updated successfully");
    assert_eq!(body.user.email, "john.doe@example.com");
    assert_eq!(body.user.username, "john_doe");
    assert_eq!(body.user.role, Role::User);
}

#[tokio::test]
async fn test_update_user_blank_role_keeps_role() {
    let response = app()
        .oneshot(request(
            "PUT",
            "/2",
            Some(json!({ "username": "johnny", "role": "" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: UserResponse = json_body(response.into_body()).await;
    assert_eq!(body.user.username, "johnny");
    assert_eq!(body.user.role, Role::Admin);
}

#[tokio::test]
async fn test_update_unknown_user_returns_404() {
    let response = app()
        .oneshot(request("PUT", "/404", Some(json!({ "role": "admin" }))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user_then_gone() {
    let app = app();

    let response = app
        .clone()
        .oneshot(request("DELETE", "/4", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: UserResponse = json_body(response.into_body()).await;
    assert_eq!(body.message, "User deleted successfully");
    assert_eq!(body.user.username, "sarah_jones");

    let response = app.clone().oneshot(request("GET", "/4", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(request("GET", "/", None)).await.unwrap();
    let body: UserListResponse = json_body(response.into_body()).await;
    assert_eq!(body.total, 4);
}
