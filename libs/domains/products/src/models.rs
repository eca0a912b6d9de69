use axum_helpers::extractors::form_value;
use chrono::{DateTime, Utc};
use record_store::Record;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::error::{ProductError, ProductResult, REQUIRED_FIELDS};

/// Product entity as stored in memory and returned over the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque identifier, assigned at creation
    pub id: String,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Unit price, never negative
    pub price: f64,
    /// Free-form category, e.g. "Electronics"
    pub category: String,
    /// Units in stock, never negative
    pub stock: i64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a product.
///
/// Every field is required; they are optional here so that a missing field
/// is reported as invalid input rather than as a malformed body. `price` and
/// `stock` also accept numeric strings, as posted by HTML forms.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(
        required(message = "All fields are required"),
        length(min = 1, message = "All fields are required")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "All fields are required"),
        length(min = 1, message = "All fields are required")
    )]
    pub description: Option<String>,
    #[validate(
        required(message = "All fields are required"),
        range(min = 0.0, message = "Price and stock must be non-negative")
    )]
    #[serde(default, deserialize_with = "form_value::optional")]
    pub price: Option<f64>,
    #[validate(
        required(message = "All fields are required"),
        length(min = 1, message = "All fields are required")
    )]
    pub category: Option<String>,
    #[validate(
        required(message = "All fields are required"),
        range(min = 0, message = "Price and stock must be non-negative")
    )]
    #[serde(default, deserialize_with = "form_value::optional")]
    pub stock: Option<i64>,
}

/// Validated fields for a new product; id and timestamp are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub stock: i64,
}

impl CreateProduct {
    /// Validate the request and turn it into a [`NewProduct`].
    pub fn into_new(self) -> ProductResult<NewProduct> {
        self.validate()?;

        let missing = || ProductError::InvalidInput(REQUIRED_FIELDS.to_string());
        Ok(NewProduct {
            name: self.name.ok_or_else(missing)?,
            description: self.description.ok_or_else(missing)?,
            price: self.price.ok_or_else(missing)?,
            category: self.category.ok_or_else(missing)?,
            stock: self.stock.ok_or_else(missing)?,
        })
    }
}

/// Request body for a partial product update.
///
/// Omitted fields, and empty strings, keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "form_value::optional",
        skip_serializing_if = "Option::is_none"
    )]
    #[validate(range(min = 0.0, message = "Price and stock must be non-negative"))]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(
        default,
        deserialize_with = "form_value::optional",
        skip_serializing_if = "Option::is_none"
    )]
    #[validate(range(min = 0, message = "Price and stock must be non-negative"))]
    pub stock: Option<i64>,
}

impl Product {
    /// Apply a partial update in place.
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name.filter(|s| !s.is_empty()) {
            self.name = name;
        }
        if let Some(description) = update.description.filter(|s| !s.is_empty()) {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(category) = update.category.filter(|s| !s.is_empty()) {
            self.category = category;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
    }
}

impl Record for Product {
    type Draft = NewProduct;
    type Patch = UpdateProduct;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, created_at: DateTime<Utc>, draft: NewProduct) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            category: draft.category,
            stock: draft.stock,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: UpdateProduct) {
        self.apply_update(patch);
    }
}

/// Ordering applied to a product listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, ToSchema)]
pub enum SortKey {
    /// Name, ascending
    #[default]
    #[strum(serialize = "name")]
    Name,
    /// Price, ascending
    #[strum(serialize = "price")]
    Price,
    /// Price, descending
    #[strum(serialize = "price-desc")]
    PriceDesc,
    /// Stock, ascending
    #[strum(serialize = "stock")]
    Stock,
}

impl SortKey {
    /// Unknown or absent values fall back to [`SortKey::Name`].
    pub fn from_param(param: Option<&str>) -> Self {
        param.and_then(|p| p.parse().ok()).unwrap_or_default()
    }
}

/// Query parameters accepted by the product listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, IntoParams)]
pub struct ProductQuery {
    /// Exact category, case-insensitive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Substring of name or description, case-insensitive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// One of `name`, `price`, `price-desc`, `stock` (default `name`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

/// Envelope returned by the listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductListResponse {
    pub message: String,
    pub products: Vec<Product>,
    pub total: usize,
}

/// Envelope returned by single-product endpoints
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub message: String,
    pub product: Product,
}
