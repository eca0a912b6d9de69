use async_trait::async_trait;
use record_store::MemoryStore;

use crate::error::ProductResult;
use crate::models::{NewProduct, Product, UpdateProduct};
use crate::seed::demo_products;

/// Repository trait for Product persistence
///
/// Implementations decide where products live; the service only relies on
/// the operations below.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Store a new product and return it with its assigned id
    async fn create(&self, input: NewProduct) -> ProductResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>>;

    /// All products in store order
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Apply a partial update; `None` when the product does not exist
    async fn update(&self, id: &str, input: UpdateProduct) -> ProductResult<Option<Product>>;

    /// Remove a product and return it; `None` when it does not exist
    async fn delete(&self, id: &str) -> ProductResult<Option<Product>>;

    /// Number of stored products
    async fn count(&self) -> ProductResult<usize>;
}

/// In-memory product repository backed by a [`MemoryStore`]
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    store: MemoryStore<Product>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-loaded with the demo catalogue
    pub fn with_seed_data() -> Self {
        Self::with_products(demo_products())
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            store: MemoryStore::with_records(products),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: NewProduct) -> ProductResult<Product> {
        let product = self.store.insert(input).await;
        tracing::info!(product_id = %product.id, name = %product.name, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        Ok(self.store.get(id).await)
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        Ok(self.store.list().await)
    }

    async fn update(&self, id: &str, input: UpdateProduct) -> ProductResult<Option<Product>> {
        let updated = self.store.update(id, input).await;
        if updated.is_some() {
            tracing::info!(product_id = %id, "Updated product");
        }
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> ProductResult<Option<Product>> {
        let removed = self.store.delete(id).await;
        if removed.is_some() {
            tracing::info!(product_id = %id, "Deleted product");
        }
        Ok(removed)
    }

    async fn count(&self) -> ProductResult<usize> {
        Ok(self.store.len().await)
    }
}
