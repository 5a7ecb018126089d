use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::UserId,
    user::{
        event::{CreateUser, UpdateProfile, UpdateUserPassword},
        User,
    },
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_current_user(&self, current_user_id: UserId) -> AppResult<Option<User>>;
    // Registers a principal together with its agent profile
    async fn create(&self, event: CreateUser) -> AppResult<User>;
    async fn update_profile(&self, event: UpdateProfile) -> AppResult<()>;
    async fn update_password(&self, event: UpdateUserPassword) -> AppResult<()>;
}
