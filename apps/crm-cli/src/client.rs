//! Thin typed client over the CRM REST API.

use axum_helpers::ErrorResponse;
use domain_products::{
    CreateProduct, ProductListResponse, ProductQuery, ProductResponse, UpdateProduct,
};
use domain_users::{CreateUser, UpdateUser, UserListResponse, UserResponse};
use eyre::{Result, WrapErr, eyre};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

pub struct CrmClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl CrmClient {
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/api{}", self.base_url, path);
        debug!(%method, %url, "Sending request");
        let builder = self.client.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub async fn list_products(&self, query: &ProductQuery) -> Result<ProductListResponse> {
        let response = self
            .request(Method::GET, "/products")
            .query(query)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn get_product(&self, id: &str) -> Result<ProductResponse> {
        let response = self
            .request(Method::GET, &format!("/products/{id}"))
            .send()
            .await?;
        decode(response).await
    }

    pub async fn create_product(&self, input: &CreateProduct) -> Result<ProductResponse> {
        let response = self
            .request(Method::POST, "/products")
            .json(input)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn update_product(&self, id: &str, input: &UpdateProduct) -> Result<ProductResponse> {
        let response = self
            .request(Method::PUT, &format!("/products/{id}"))
            .json(input)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn delete_product(&self, id: &str) -> Result<ProductResponse> {
        let response = self
            .request(Method::DELETE, &format!("/products/{id}"))
            .send()
            .await?;
        decode(response).await
    }

    pub async fn list_users(&self) -> Result<UserListResponse> {
        let response = self.request(Method::GET, "/users").send().await?;
        decode(response).await
    }

    pub async fn get_user(&self, id: &str) -> Result<UserResponse> {
        let response = self
            .request(Method::GET, &format!("/users/{id}"))
            .send()
            .await?;
        decode(response).await
    }

    pub async fn create_user(&self, input: &CreateUser) -> Result<UserResponse> {
        let response = self
            .request(Method::POST, "/users")
            .json(input)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn update_user(&self, id: &str, input: &UpdateUser) -> Result<UserResponse> {
        let response = self
            .request(Method::PUT, &format!("/users/{id}"))
            .json(input)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn delete_user(&self, id: &str) -> Result<UserResponse> {
        let response = self
            .request(Method::DELETE, &format!("/users/{id}"))
            .send()
            .await?;
        decode(response).await
    }
}

/// Decode a success body, or turn an `{ "error": ... }` body into a report.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return response
            .json()
            .await
            .wrap_err("Failed to decode response body");
    }

    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
    };
    Err(eyre!("{} {}", status.as_u16(), message))
}
