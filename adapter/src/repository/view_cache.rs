use std::sync::Arc;

use async_trait::async_trait;
use derive_new::new;
use kernel::{model::view::ViewPath, repository::view_cache::ViewCacheRepository};
use shared::error::{AppError, AppResult};

use crate::redis::{
    model::{RedisKey, RedisValue},
    RedisClient,
};

pub struct ViewCacheKey(ViewPath);
pub struct CachedView(String);

impl RedisKey for ViewCacheKey {
    type Value = CachedView;

    fn inner(&self) -> String {
        self.0.cache_key()
    }
}

impl RedisValue for CachedView {
    fn inner(&self) -> String {
        self.0.clone()
    }
}

impl TryFrom<String> for CachedView {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Ok(Self(value))
    }
}

#[derive(new)]
pub struct ViewCacheRepositoryImpl {
    kv: Arc<RedisClient>,
    ttl: u64,
}

#[async_trait]
impl ViewCacheRepository for ViewCacheRepositoryImpl {
    async fn get(&self, path: ViewPath) -> AppResult<Option<String>> {
        let cached = self.kv.get(&ViewCacheKey(path)).await?;
        Ok(cached.map(|v| v.0))
    }

    async fn store(&self, path: ViewPath, body: String) -> AppResult<()> {
        self.kv
            .set_ex(&ViewCacheKey(path), &CachedView(body), self.ttl)
            .await
    }

    async fn invalidate(&self, paths: &[ViewPath]) -> AppResult<()> {
        let keys: Vec<ViewCacheKey> = paths.iter().copied().map(ViewCacheKey).collect();
        self.kv.delete_all(&keys).await
    }
}
