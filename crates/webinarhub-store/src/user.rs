//! User repository port.

use async_trait::async_trait;

use webinarhub_core::result::AppResult;
use webinarhub_core::types::UserId;
use webinarhub_entity::User;

/// Trait for user persistence adapters.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user.
    async fn create(&self, user: &User) -> AppResult<()>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>>;
}
