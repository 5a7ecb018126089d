use async_trait::async_trait;
use derive_new::new;
use kernel::{model::payment::Payment, repository::payment::PaymentRepository};
use shared::error::{AppError, AppResult};

use crate::database::{model::payment::PaymentRow, ConnectionPool};

#[derive(new)]
pub struct PaymentRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl PaymentRepository for PaymentRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Payment>> {
        let rows = sqlx::query_as::<_, PaymentRow>(
            r#"
                SELECT
                    p.payment_id,
                    p.amount,
                    p.payment_method,
                    p.status,
                    p.transaction_id,
                    p.created_at,
                    b.booking_id,
                    b.booking_reference,
                    c.full_name AS customer_name,
                    c.email AS customer_email,
                    d.name AS destination_name
                FROM payments AS p
                INNER JOIN bookings AS b ON p.booking_id = b.booking_id
                INNER JOIN customers AS c ON b.customer_id = c.customer_id
                INNER JOIN destinations AS d ON b.destination_id = d.destination_id
                ORDER BY p.created_at DESC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Payment::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::payment::{PaymentSummary, TransactionStatus};
    use rust_decimal::Decimal;

    #[sqlx::test(fixtures("destinations", "bookings"))]
    #[ignore = "requires a PostgreSQL instance reachable through DATABASE_URL"]
    async fn payments_carry_their_booking(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = PaymentRepositoryImpl::new(ConnectionPool::new(pool));

        let payments = repo.find_all().await?;
        assert_eq!(payments.len(), 2);
        assert_eq!(payments[0].booking.booking_reference, "TRV-100003");
        assert_eq!(payments[0].status, TransactionStatus::Pending);
        assert_eq!(payments[1].booking.destination_name, "Alfama Loft");

        let summary = PaymentSummary::of(&payments);
        assert_eq!(summary.total_amount, Decimal::from(780));
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.pending, 1);
        Ok(())
    }
}
