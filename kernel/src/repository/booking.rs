use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    analytics::{CustomerSummary, DestinationSummary, RevenueEntry, SpendEntry, StatusEntry},
    booking::{
        event::{CreateBooking, DeleteBooking, UpdateBookingStatus, UpdatePaymentStatus},
        Booking,
    },
    id::{BookingId, CustomerId},
    list::{BookingSearch, CreatedRange},
};

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId>;
    // Newest bookings first
    async fn find_all(&self) -> AppResult<Vec<Booking>>;
    async fn find_recent(&self, limit: i64) -> AppResult<Vec<Booking>>;
    async fn search(&self, search: BookingSearch) -> AppResult<Vec<Booking>>;
    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>>;
    async fn find_by_customer_id(&self, customer_id: CustomerId) -> AppResult<Vec<Booking>>;
    // Single-column overwrite. Concurrent updates of the same row: last write wins.
    // Writes by id return the customer the booking belongs to.
    async fn update_status(&self, event: UpdateBookingStatus) -> AppResult<CustomerId>;
    async fn update_payment_status(&self, event: UpdatePaymentStatus) -> AppResult<CustomerId>;
    async fn delete(&self, event: DeleteBooking) -> AppResult<CustomerId>;
    async fn count(&self, range: CreatedRange) -> AppResult<i64>;
    // Amounts of paid bookings, oldest first
    async fn find_paid_revenue(&self, range: CreatedRange) -> AppResult<Vec<RevenueEntry>>;
    // Statuses of all bookings, oldest first
    async fn find_status_entries(&self, range: CreatedRange) -> AppResult<Vec<StatusEntry>>;
    async fn find_paid_spend_by_customer(&self) -> AppResult<Vec<SpendEntry<CustomerSummary>>>;
    async fn find_paid_spend_by_destination(
        &self,
    ) -> AppResult<Vec<SpendEntry<DestinationSummary>>>;
}
