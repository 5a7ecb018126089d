use async_trait::async_trait;
use chrono::{Days, NaiveTime};
use derive_new::new;
use kernel::{
    model::{
        analytics::{CustomerSummary, DestinationSummary, RevenueEntry, SpendEntry, StatusEntry},
        booking::{
            event::{CreateBooking, DeleteBooking, UpdateBookingStatus, UpdatePaymentStatus},
            Booking, BookingStatus, PaymentStatus,
        },
        id::{BookingId, CustomerId},
        list::{BookingSearch, CreatedRange},
    },
    repository::booking::BookingRepository,
};
use shared::error::{AppError, AppResult};
use sqlx::{Postgres, QueryBuilder};

use crate::database::{
    model::booking::{
        BookingRow, CustomerSpendRow, DestinationSpendRow, RevenueRow, StatusRow, BOOKING_SELECT,
    },
    contains_pattern, push_created_range, ConnectionPool,
};

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

fn into_bookings(rows: Vec<BookingRow>) -> AppResult<Vec<Booking>> {
    rows.into_iter().map(Booking::try_from).collect()
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId> {
        let CreateBooking {
            customer_id,
            destination_id,
            agent_id,
            booking_reference,
            stay,
            guests,
            total_amount,
            special_requests,
        } = event;

        sqlx::query_scalar::<_, BookingId>(
            r#"
                INSERT INTO bookings
                (booking_reference, customer_id, destination_id, agent_id,
                check_in_date, check_out_date, guests, total_amount,
                special_requests, status, payment_status)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                RETURNING booking_id
            "#,
        )
        .bind(booking_reference.into_inner())
        .bind(customer_id)
        .bind(destination_id)
        .bind(agent_id)
        .bind(stay.check_in)
        .bind(stay.check_out)
        .bind(guests)
        .bind(total_amount)
        .bind(special_requests)
        .bind(BookingStatus::Pending.as_ref())
        .bind(PaymentStatus::Pending.as_ref())
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(|e| AppError::persistence("create booking", e))
    }

    async fn find_all(&self) -> AppResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, BookingRow>(&format!(
            "{BOOKING_SELECT} ORDER BY b.created_at DESC"
        ))
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        into_bookings(rows)
    }

    async fn find_recent(&self, limit: i64) -> AppResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, BookingRow>(&format!(
            "{BOOKING_SELECT} ORDER BY b.created_at DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        into_bookings(rows)
    }

    async fn search(&self, search: BookingSearch) -> AppResult<Vec<Booking>> {
        let mut builder = QueryBuilder::<Postgres>::new(BOOKING_SELECT);
        builder.push(" WHERE TRUE");

        if let Some(query) = search.query.as_deref().filter(|q| !q.trim().is_empty()) {
            let pattern = contains_pattern(query.trim());
            builder
                .push(" AND (b.booking_reference ILIKE ")
                .push_bind(pattern.clone())
                .push(r" ESCAPE '\' OR c.full_name ILIKE ")
                .push_bind(pattern.clone())
                .push(r" ESCAPE '\' OR c.email ILIKE ")
                .push_bind(pattern.clone())
                .push(r" ESCAPE '\' OR d.name ILIKE ")
                .push_bind(pattern)
                .push(r" ESCAPE '\')");
        }
        if let Some(status) = search.status {
            builder
                .push(" AND b.status = ")
                .push_bind(status.as_ref().to_string());
        }
        if let Some(payment_status) = search.payment_status {
            builder
                .push(" AND b.payment_status = ")
                .push_bind(payment_status.as_ref().to_string());
        }
        // dateTo is inclusive: the whole day is part of the range
        let range = CreatedRange {
            from: search
                .date_from
                .map(|d| d.and_time(NaiveTime::MIN).and_utc()),
            to: search
                .date_to
                .and_then(|d| d.checked_add_days(Days::new(1)))
                .map(|d| d.and_time(NaiveTime::MIN).and_utc()),
        };
        push_created_range(&mut builder, "b.created_at", range);

        builder
            .push(" ORDER BY b.created_at DESC LIMIT ")
            .push_bind(search.limit.clamp(1, BookingSearch::MAX_RESULTS));

        let rows = builder
            .build_query_as::<BookingRow>()
            .fetch_all(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        into_bookings(rows)
    }

    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>> {
        let row = sqlx::query_as::<_, BookingRow>(&format!(
            "{BOOKING_SELECT} WHERE b.booking_id = $1"
        ))
        .bind(booking_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Booking::try_from).transpose()
    }

    async fn find_by_customer_id(&self, customer_id: CustomerId) -> AppResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, BookingRow>(&format!(
            "{BOOKING_SELECT} WHERE b.customer_id = $1 ORDER BY b.created_at DESC"
        ))
        .bind(customer_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        into_bookings(rows)
    }

    async fn update_status(&self, event: UpdateBookingStatus) -> AppResult<CustomerId> {
        sqlx::query_scalar::<_, CustomerId>(
            r#"
                UPDATE bookings SET status = $1 WHERE booking_id = $2
                RETURNING customer_id
            "#,
        )
        .bind(event.status.as_ref())
        .bind(event.booking_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(|e| AppError::persistence("update booking status", e))?
        .ok_or_else(|| {
            AppError::PersistenceError(format!(
                "Failed to update booking status: no booking with id {}",
                event.booking_id
            ))
        })
    }

    async fn update_payment_status(&self, event: UpdatePaymentStatus) -> AppResult<CustomerId> {
        sqlx::query_scalar::<_, CustomerId>(
            r#"
                UPDATE bookings SET payment_status = $1 WHERE booking_id = $2
                RETURNING customer_id
            "#,
        )
        .bind(event.payment_status.as_ref())
        .bind(event.booking_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(|e| AppError::persistence("update payment status", e))?
        .ok_or_else(|| {
            AppError::PersistenceError(format!(
                "Failed to update payment status: no booking with id {}",
                event.booking_id
            ))
        })
    }

    async fn delete(&self, event: DeleteBooking) -> AppResult<CustomerId> {
        sqlx::query_scalar::<_, CustomerId>(
            r#"
                DELETE FROM bookings WHERE booking_id = $1
                RETURNING customer_id
            "#,
        )
        .bind(event.booking_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(|e| AppError::persistence("delete booking", e))?
        .ok_or_else(|| {
            AppError::PersistenceError(format!(
                "Failed to delete booking: no booking with id {}",
                event.booking_id
            ))
        })
    }

    async fn count(&self, range: CreatedRange) -> AppResult<i64> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM bookings WHERE TRUE");
        push_created_range(&mut builder, "created_at", range);

        builder
            .build_query_scalar::<i64>()
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)
    }

    async fn find_paid_revenue(&self, range: CreatedRange) -> AppResult<Vec<RevenueEntry>> {
        let mut builder = QueryBuilder::<Postgres>::new(
            "SELECT total_amount, created_at FROM bookings WHERE payment_status = ",
        );
        builder.push_bind(PaymentStatus::Paid.as_ref().to_string());
        push_created_range(&mut builder, "created_at", range);
        builder.push(" ORDER BY created_at ASC");

        let rows = builder
            .build_query_as::<RevenueRow>()
            .fetch_all(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(RevenueEntry::from).collect())
    }

    async fn find_status_entries(&self, range: CreatedRange) -> AppResult<Vec<StatusEntry>> {
        let mut builder =
            QueryBuilder::<Postgres>::new("SELECT status, created_at FROM bookings WHERE TRUE");
        push_created_range(&mut builder, "created_at", range);
        builder.push(" ORDER BY created_at ASC");

        let rows = builder
            .build_query_as::<StatusRow>()
            .fetch_all(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(StatusEntry::try_from).collect()
    }

    async fn find_paid_spend_by_customer(&self) -> AppResult<Vec<SpendEntry<CustomerSummary>>> {
        let rows = sqlx::query_as::<_, CustomerSpendRow>(
            r#"
                SELECT c.customer_id, c.full_name, c.email, b.total_amount
                FROM bookings AS b
                INNER JOIN customers AS c ON b.customer_id = c.customer_id
                WHERE b.payment_status = $1
                ORDER BY b.created_at ASC
            "#,
        )
        .bind(PaymentStatus::Paid.as_ref())
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(SpendEntry::from).collect())
    }

    async fn find_paid_spend_by_destination(
        &self,
    ) -> AppResult<Vec<SpendEntry<DestinationSummary>>> {
        let rows = sqlx::query_as::<_, DestinationSpendRow>(
            r#"
                SELECT d.destination_id, d.name, b.total_amount
                FROM bookings AS b
                INNER JOIN destinations AS d ON b.destination_id = d.destination_id
                WHERE b.payment_status = $1
                ORDER BY b.created_at ASC
            "#,
        )
        .bind(PaymentStatus::Paid.as_ref())
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(SpendEntry::from).collect())
    }
}
