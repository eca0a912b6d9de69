use async_trait::async_trait;
use record_store::MemoryStore;

use crate::error::UserResult;
use crate::models::{NewUser, UpdateUser, User};
use crate::seed::demo_users;

/// Repository trait for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user and return it with its assigned id
    async fn create(&self, input: NewUser) -> UserResult<User>;

    /// Get a user by ID
    async fn get_by_id(&self, id: &str) -> UserResult<Option<User>>;

    /// All users in store order
    async fn list(&self) -> UserResult<Vec<User>>;

    /// Apply a partial update; `None` when the user does not exist
    async fn update(&self, id: &str, input: UpdateUser) -> UserResult<Option<User>>;

    /// Remove a user and return it; `None` when it does not exist
    async fn delete(&self, id: &str) -> UserResult<Option<User>>;
}

/// In-memory user repository (for development/testing)
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    store: MemoryStore<User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-loaded with the demo users
    pub fn with_seed_data() -> Self {
        Self {
            store: MemoryStore::with_records(demo_users()),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, input: NewUser) -> UserResult<User> {
        let user = self.store.insert(input).await;
        tracing::info!(user_id = %user.id, username = %user.username, "Created user");
        Ok(user)
    }

    async fn get_by_id(&self, id: &str) -> UserResult<Option<User>> {
        Ok(self.store.get(id).await)
    }

    async fn list(&self) -> UserResult<Vec<User>> {
        Ok(self.store.list().await)
    }

    async fn update(&self, id: &str, input: UpdateUser) -> UserResult<Option<User>> {
        let updated = self.store.update(id, input).await;
        if updated.is_some() {
            tracing::info!(user_id = %id, "Updated user");
        }
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> UserResult<Option<User>> {
        let removed = self.store.delete(id).await;
        if removed.is_some() {
            tracing::info!(user_id = %id, "Deleted user");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[tokio::test]
    async fn test_create_and_get_user() {
        let repo = InMemoryUserRepository::new();

        let created = repo
            .create(NewUser {
                username: "kim".to_string(),
                email: "kim@example.com".to_string(),
                role: Role::User,
            })
            .await
            .unwrap();

        let fetched = repo.get_by_id(&created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_seed_data_keeps_order() {
        let repo = InMemoryUserRepository::with_seed_data();
        let users = repo.list().await.unwrap();

        let names: Vec<_> = users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(
            names,
            ["john_doe", "jane_smith", "mike_wilson", "sarah_jones", "alex_brown"]
        );
        assert_eq!(users.iter().filter(|u| u.role == Role::Admin).count(), 2);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_accepted() {
        let repo = InMemoryUserRepository::with_seed_data();
        let dup = repo
            .create(NewUser {
                username: "john_again".to_string(),
                email: "john@example.com".to_string(),
                role: Role::User,
            })
            .await;
        assert!(dup.is_ok());
        assert_eq!(repo.list().await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_update_role_only() {
        let repo = InMemoryUserRepository::with_seed_data();
        let update = UpdateUser {
            role: Some(Role::Admin),
            ..Default::default()
        };

        let updated = repo.update("3", update).await.unwrap().unwrap();
        assert_eq!(updated.role, Role::Admin);
        assert_eq!(updated.username, "mike_wilson");
        assert_eq!(updated.email, "mike@example.com");
    }

    #[tokio::test]
    async fn test_delete_user() {
        let repo = InMemoryUserRepository::with_seed_data();

        let removed = repo.delete("5").await.unwrap().unwrap();
        assert_eq!(removed.username, "alex_brown");
        assert!(repo.get_by_id("5").await.unwrap().is_none());
        assert!(repo.delete("5").await.unwrap().is_none());
    }
}
