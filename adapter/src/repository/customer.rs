use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        customer::{
            event::{CreateCustomer, DeleteCustomer, UpdateCustomer},
            Customer,
        },
        id::CustomerId,
    },
    repository::customer::CustomerRepository,
};
use shared::error::{AppError, AppResult};

use crate::database::{contains_pattern, model::customer::CustomerRow, ConnectionPool};

#[derive(new)]
pub struct CustomerRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl CustomerRepository for CustomerRepositoryImpl {
    async fn create(&self, event: CreateCustomer) -> AppResult<CustomerId> {
        let profile = event.profile;
        sqlx::query_scalar::<_, CustomerId>(
            r#"
                INSERT INTO customers
                (full_name, email, phone, address, passport_number, date_of_birth)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING customer_id
            "#,
        )
        .bind(profile.full_name)
        .bind(profile.email)
        .bind(profile.phone)
        .bind(profile.address)
        .bind(profile.passport_number)
        .bind(profile.date_of_birth)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(|e| AppError::persistence("create customer", e))
    }

    async fn find_all(&self) -> AppResult<Vec<Customer>> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            r#"
                SELECT
                    customer_id, full_name, email, phone, address,
                    passport_number, date_of_birth, created_at
                FROM customers
                ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn search(&self, query: &str, limit: i64) -> AppResult<Vec<Customer>> {
        let pattern = contains_pattern(query);
        let rows = sqlx::query_as::<_, CustomerRow>(
            r#"
                SELECT
                    customer_id, full_name, email, phone, address,
                    passport_number, date_of_birth, created_at
                FROM customers
                WHERE full_name ILIKE $1 ESCAPE '\'
                   OR email ILIKE $1 ESCAPE '\'
                   OR phone ILIKE $1 ESCAPE '\'
                ORDER BY full_name ASC
                LIMIT $2
            "#,
        )
        .bind(pattern)
        .bind(limit)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn find_by_id(&self, customer_id: CustomerId) -> AppResult<Option<Customer>> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
                SELECT
                    customer_id, full_name, email, phone, address,
                    passport_number, date_of_birth, created_at
                FROM customers
                WHERE customer_id = $1
            "#,
        )
        .bind(customer_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Customer::from))
    }

    async fn update(&self, event: UpdateCustomer) -> AppResult<()> {
        let UpdateCustomer {
            customer_id,
            profile,
        } = event;
        let res = sqlx::query(
            r#"
                UPDATE customers
                SET
                    full_name = $1,
                    email = $2,
                    phone = $3,
                    address = $4,
                    passport_number = $5,
                    date_of_birth = $6
                WHERE customer_id = $7
            "#,
        )
        .bind(profile.full_name)
        .bind(profile.email)
        .bind(profile.phone)
        .bind(profile.address)
        .bind(profile.passport_number)
        .bind(profile.date_of_birth)
        .bind(customer_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| AppError::persistence("update customer", e))?;

        if res.rows_affected() < 1 {
            return Err(AppError::PersistenceError(format!(
                "Failed to update customer: no customer with id {customer_id}"
            )));
        }

        Ok(())
    }

    async fn delete(&self, event: DeleteCustomer) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                DELETE FROM customers WHERE customer_id = $1
            "#,
        )
        .bind(event.customer_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| AppError::persistence("delete customer", e))?;

        if res.rows_affected() < 1 {
            return Err(AppError::PersistenceError(format!(
                "Failed to delete customer: no customer with id {}",
                event.customer_id
            )));
        }

        Ok(())
    }

    async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM customers")
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)
    }
}
