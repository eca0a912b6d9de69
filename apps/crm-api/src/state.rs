//! Application state management

use axum_helpers::JwtAuth;
use domain_products::{InMemoryProductRepository, ProductService};
use domain_users::{InMemoryUserRepository, UserService};
use tracing::info;

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub auth: JwtAuth,
    pub products: ProductService<InMemoryProductRepository>,
    pub users: UserService<InMemoryUserRepository>,
}

impl AppState {
    /// Build the stores, seeding them with demo records when enabled.
    pub fn new(config: Config) -> Self {
        let (products, users) = if config.seed_data {
            info!("Seeding demo products and users");
            (
                InMemoryProductRepository::with_seed_data(),
                InMemoryUserRepository::with_seed_data(),
            )
        } else {
            (
                InMemoryProductRepository::new(),
                InMemoryUserRepository::new(),
            )
        };

        Self {
            auth: JwtAuth::new(&config.jwt),
            products: ProductService::new(products),
            users: UserService::new(users),
            config,
        }
    }
}
