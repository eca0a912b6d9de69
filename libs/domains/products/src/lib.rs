//! Products Domain
//!
//! Product catalogue kept in process memory, with a listing query engine
//! shared by the HTTP API and the CLI.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐     ┌─────────────┐
//! │   Service   │ ──► │    Query    │  ← filter / search / sort
//! └──────┬──────┘     └─────────────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, InMemoryProductRepository, ProductService};
//!
//! let repository = InMemoryProductRepository::with_seed_data();
//! let service = ProductService::new(repository);
//! let router: axum::Router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod query;
pub mod repository;
pub mod seed;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{
    CreateProduct, NewProduct, Product, ProductListResponse, ProductQuery, ProductResponse,
    SortKey, UpdateProduct,
};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
