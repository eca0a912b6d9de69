use std::sync::Arc;
use tracing::instrument;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, User};
use crate::repository::UserRepository;

/// User service containing business logic
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// All users in store order
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.list().await
    }

    #[instrument(skip(self))]
    pub async fn get_user(&self, id: &str) -> UserResult<User> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    /// Create a user; the role defaults to `user`
    #[instrument(skip(self, input), fields(username = ?input.username))]
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        let new = input.into_new()?;
        self.repository.create(new).await
    }

    #[instrument(skip(self, input))]
    pub async fn update_user(&self, id: &str, input: UpdateUser) -> UserResult<User> {
        self.repository
            .update(id, input)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    /// Delete a user, returning the removed record
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: &str) -> UserResult<User> {
        self.repository
            .delete(id)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }
}
