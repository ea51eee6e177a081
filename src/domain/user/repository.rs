//! Remote user source trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{User, UserId};
use crate::domain::DomainError;

/// Remote service holding the server-origin user records
#[async_trait]
pub trait UserApi: Send + Sync + Debug {
    /// Fetch the full collection (`GET /users`)
    async fn list_users(&self) -> Result<Vec<User>, DomainError>;

    /// Fetch one record (`GET /users/:id`); `None` when the body carries no record
    async fn get_user(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Delete one record (`DELETE /users/:id`)
    async fn delete_user(&self, id: UserId) -> Result<(), DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock user API for testing
    #[derive(Debug, Default)]
    pub struct MockUserApi {
        users: Arc<RwLock<Vec<User>>>,
        deleted: Arc<RwLock<Vec<UserId>>>,
        should_fail: Arc<RwLock<bool>>,
    }

    impl MockUserApi {
        /// Create a new mock seeded with users
        pub fn with_users(users: Vec<User>) -> Self {
            Self {
                users: Arc::new(RwLock::new(users)),
                ..Self::default()
            }
        }

        /// Set whether operations should fail
        pub async fn set_should_fail(&self, fail: bool) {
            *self.should_fail.write().await = fail;
        }

        /// Ids that received a delete request
        pub async fn deleted(&self) -> Vec<UserId> {
            self.deleted.read().await.clone()
        }

        async fn check_should_fail(&self, operation: &str) -> Result<(), DomainError> {
            if *self.should_fail.read().await {
                return Err(DomainError::remote(
                    operation,
                    "Mock API configured to fail",
                ));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl UserApi for MockUserApi {
        async fn list_users(&self) -> Result<Vec<User>, DomainError> {
            self.check_should_fail("list_users").await?;
            Ok(self.users.read().await.clone())
        }

        async fn get_user(&self, id: UserId) -> Result<Option<User>, DomainError> {
            self.check_should_fail("get_user").await?;
            let users = self.users.read().await;
            Ok(users.iter().find(|u| u.id() == id).cloned())
        }

        async fn delete_user(&self, id: UserId) -> Result<(), DomainError> {
            self.check_should_fail("delete_user").await?;
            // The placeholder service acknowledges deletes without removing anything
            self.deleted.write().await.push(id);
            Ok(())
        }
    }
}
