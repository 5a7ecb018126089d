use chrono::{DateTime, Utc};
use kernel::model::{
    id::{BookingId, PaymentId},
    payment::{Payment, PaymentBooking, TransactionStatus},
};
use rust_decimal::Decimal;
use shared::error::AppError;
use std::str::FromStr;

#[derive(sqlx::FromRow)]
pub struct PaymentRow {
    pub payment_id: PaymentId,
    pub amount: Decimal,
    pub payment_method: String,
    pub status: String,
    pub transaction_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub booking_id: BookingId,
    pub booking_reference: String,
    pub customer_name: String,
    pub customer_email: String,
    pub destination_name: String,
}

impl TryFrom<PaymentRow> for Payment {
    type Error = AppError;

    fn try_from(value: PaymentRow) -> Result<Self, Self::Error> {
        let PaymentRow {
            payment_id,
            amount,
            payment_method,
            status,
            transaction_id,
            created_at,
            booking_id,
            booking_reference,
            customer_name,
            customer_email,
            destination_name,
        } = value;
        Ok(Payment {
            id: payment_id,
            amount,
            payment_method,
            status: TransactionStatus::from_str(&status).map_err(|e| {
                AppError::ConversionEntityError(format!("payment state {status:?}: {e}"))
            })?,
            transaction_id,
            created_at,
            booking: PaymentBooking {
                booking_id,
                booking_reference,
                customer_name,
                customer_email,
                destination_name,
            },
        })
    }
}
