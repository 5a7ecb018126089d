use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::view::ViewPath;

#[async_trait]
pub trait ViewCacheRepository: Send + Sync {
    async fn get(&self, path: ViewPath) -> AppResult<Option<String>>;
    async fn store(&self, path: ViewPath, body: String) -> AppResult<()>;
    async fn invalidate(&self, paths: &[ViewPath]) -> AppResult<()>;
}
