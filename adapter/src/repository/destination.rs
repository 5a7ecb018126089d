use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{destination::Destination, id::DestinationId},
    repository::destination::DestinationRepository,
};
use shared::error::{AppError, AppResult};

use crate::database::{model::destination::DestinationRow, ConnectionPool};

#[derive(new)]
pub struct DestinationRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl DestinationRepository for DestinationRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Destination>> {
        let rows = sqlx::query_as::<_, DestinationRow>(
            r#"
                SELECT
                    destination_id, name, city, country, description,
                    image_url, price_per_night, rating
                FROM destinations
                ORDER BY name ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Destination::from).collect())
    }

    async fn find_by_id(&self, destination_id: DestinationId) -> AppResult<Option<Destination>> {
        let row = sqlx::query_as::<_, DestinationRow>(
            r#"
                SELECT
                    destination_id, name, city, country, description,
                    image_url, price_per_night, rating
                FROM destinations
                WHERE destination_id = $1
            "#,
        )
        .bind(destination_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Destination::from))
    }

    async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM destinations")
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[sqlx::test(fixtures("destinations"))]
    #[ignore = "requires a PostgreSQL instance reachable through DATABASE_URL"]
    async fn destinations_are_listed_by_name(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = DestinationRepositoryImpl::new(ConnectionPool::new(pool));

        let names: Vec<String> = repo.find_all().await?.into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["Alfama Loft", "Gion Ryokan", "Nordic Cabin"]);
        assert_eq!(repo.count().await?, 3);

        let first = repo.find_all().await?.remove(0);
        let found = repo.find_by_id(first.id).await?.unwrap();
        assert_eq!(found.price_per_night, Decimal::new(12000, 2));
        Ok(())
    }
}
