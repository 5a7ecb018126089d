use std::future::Future;

use kernel::model::view::ViewPath;
use registry::AppRegistry;
use serde::{de::DeserializeOwned, Serialize};
use shared::error::AppResult;

/// Serves `path` from the view cache, loading and storing it on a miss.
///
/// Cache failures are logged and fall through to `load`. Errors from `load`
/// are returned as is and nothing is stored.
pub(crate) async fn cached<T, F, Fut>(registry: &AppRegistry, path: ViewPath, load: F) -> AppResult<T>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = AppResult<T>>,
{
    let cache = registry.view_cache_repository();
    match cache.get(path).await {
        Ok(Some(body)) => match serde_json::from_str(&body) {
            Ok(view) => return Ok(view),
            Err(e) => tracing::warn!(
                error.message = %e,
                view = %path.cache_key(),
                "Discarding an unreadable cached view"
            ),
        },
        Ok(None) => {}
        Err(e) => tracing::error!(
            error.cause_chain = ?e,
            error.message = %e,
            "Failed to read the view cache"
        ),
    }

    let view = load().await?;
    match serde_json::to_string(&view) {
        Ok(body) => {
            if let Err(e) = cache.store(path, body).await {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Failed to store a view"
                );
            }
        }
        Err(e) => tracing::error!(error.message = %e, "Failed to serialize a view"),
    }
    Ok(view)
}

pub(crate) async fn invalidate(registry: &AppRegistry, paths: &[ViewPath]) {
    if let Err(e) = registry.view_cache_repository().invalidate(paths).await {
        tracing::error!(
            error.cause_chain = ?e,
            error.message = %e,
            "Failed to invalidate cached views"
        );
    }
}

// List, dashboard and analytics reads render an empty view instead of failing.
pub(crate) fn or_empty<T: Default>(result: AppResult<T>, what: &str) -> T {
    result.unwrap_or_else(|e| {
        tracing::error!(
            error.cause_chain = ?e,
            error.message = %e,
            "Failed to load {what}"
        );
        T::default()
    })
}
