use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::users::{User, UserChanges, UserDraft};
use crate::error::Result;

// User record repository: pass-through CRUD against the backing store.
// Storage errors propagate unmodified; a missing id is `None`, never an
// error.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    async fn create_user(&self, draft: &UserDraft) -> Result<Uuid>;
    async fn get_user_by_id(&self, id: Uuid) -> Result<Option<User>>;
    async fn get_all_users(&self) -> Result<Vec<User>>;
    async fn update_user(&self, id: Uuid, changes: &UserChanges) -> Result<Option<User>>;
    async fn delete_user(&self, id: Uuid) -> Result<Option<User>>;
}
