use derive_new::new;
use rust_decimal::Decimal;

use super::{BookingReference, BookingStatus, PaymentStatus, Stay};
use crate::model::id::{BookingId, CustomerId, DestinationId, UserId};

/// New booking; status and payment status always start as pending.
#[derive(Debug, new)]
pub struct CreateBooking {
    pub customer_id: CustomerId,
    pub destination_id: DestinationId,
    pub agent_id: UserId,
    pub booking_reference: BookingReference,
    pub stay: Stay,
    pub guests: i32,
    pub total_amount: Decimal,
    pub special_requests: Option<String>,
}

#[derive(Debug, new)]
pub struct UpdateBookingStatus {
    pub booking_id: BookingId,
    pub status: BookingStatus,
}

#[derive(Debug, new)]
pub struct UpdatePaymentStatus {
    pub booking_id: BookingId,
    pub payment_status: PaymentStatus,
}

#[derive(Debug, new)]
pub struct DeleteBooking {
    pub booking_id: BookingId,
}
