use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{destination::Destination, id::DestinationId};

#[async_trait]
pub trait DestinationRepository: Send + Sync {
    // Ordered by name
    async fn find_all(&self) -> AppResult<Vec<Destination>>;
    async fn find_by_id(&self, destination_id: DestinationId) -> AppResult<Option<Destination>>;
    async fn count(&self) -> AppResult<i64>;
}
