//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductQuery, UpdateProduct};
use crate::query;
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// The service layer handles validation and runs listing queries over
/// repository snapshots.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List products filtered and sorted by `query`
    #[instrument(skip(self))]
    pub async fn list_products(&self, query: ProductQuery) -> ProductResult<Vec<Product>> {
        let products = self.repository.list().await?;
        Ok(query::apply(&products, &query))
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(product_name = ?input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        let new = input.into_new()?;
        self.repository.create(new).await
    }

    /// Update an existing product
    ///
    /// A missing product is reported before any validation failure.
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: &str, input: UpdateProduct) -> ProductResult<Product> {
        if self.repository.get_by_id(id).await?.is_none() {
            return Err(ProductError::NotFound(id.to_string()));
        }

        input.validate()?;

        self.repository
            .update(id, input)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Delete a product, returning the removed record
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ProductResult<Product> {
        self.repository
            .delete(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Count stored products
    #[instrument(skip(self))]
    pub async fn count_products(&self) -> ProductResult<usize> {
        self.repository.count().await
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
