use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::payment::Payment;

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    // Newest payments first, joined with their booking, customer and destination
    async fn find_all(&self) -> AppResult<Vec<Payment>>;
}
