use chrono::{DateTime, Utc};
use kernel::model::{
    id::{BookingId, PaymentId},
    payment::{Payment, PaymentBooking, PaymentSummary, TransactionStatus},
};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentsResponse {
    pub items: Vec<PaymentResponse>,
    pub summary: PaymentSummaryResponse,
}

impl From<Vec<Payment>> for PaymentsResponse {
    fn from(value: Vec<Payment>) -> Self {
        let summary = PaymentSummary::of(&value).into();
        Self {
            items: value.into_iter().map(PaymentResponse::from).collect(),
            summary,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSummaryResponse {
    pub total_amount: Decimal,
    pub completed: usize,
    pub pending: usize,
}

impl From<PaymentSummary> for PaymentSummaryResponse {
    fn from(value: PaymentSummary) -> Self {
        let PaymentSummary {
            total_amount,
            completed,
            pending,
        } = value;
        Self {
            total_amount,
            completed,
            pending,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub id: PaymentId,
    pub amount: Decimal,
    pub payment_method: String,
    pub status: TransactionStatus,
    pub transaction_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub booking_id: BookingId,
    pub booking_reference: String,
    pub customer_name: String,
    pub customer_email: String,
    pub destination_name: String,
}

impl From<Payment> for PaymentResponse {
    fn from(value: Payment) -> Self {
        let Payment {
            id,
            amount,
            payment_method,
            status,
            transaction_id,
            created_at,
            booking:
                PaymentBooking {
                    booking_id,
                    booking_reference,
                    customer_name,
                    customer_email,
                    destination_name,
                },
        } = value;
        Self {
            id,
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
        }
    }
}
