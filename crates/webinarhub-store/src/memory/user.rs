//! In-memory user store using a Tokio read-write lock.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use webinarhub_core::error::AppError;
use webinarhub_core::result::AppResult;
use webinarhub_core::types::UserId;
use webinarhub_entity::User;

use crate::user::UserRepository;

/// In-memory user repository.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserRepository {
    /// Canonical user records, keyed by identifier.
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl MemoryUserRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create(&self, user: &User) -> AppResult<()> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.id) {
            return Err(AppError::conflict(format!("User {} already exists", user.id)));
        }
        users.insert(user.id, user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }
}
