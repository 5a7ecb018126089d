use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::model::id::{BookingId, PaymentId};

/// State of a payment transaction, distinct from a booking's payment status.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

#[derive(Debug, Clone)]
pub struct Payment {
    pub id: PaymentId,
    pub amount: Decimal,
    pub payment_method: String,
    pub status: TransactionStatus,
    pub transaction_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub booking: PaymentBooking,
}

#[derive(Debug, Clone)]
pub struct PaymentBooking {
    pub booking_id: BookingId,
    pub booking_reference: String,
    pub customer_name: String,
    pub customer_email: String,
    pub destination_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentSummary {
    pub total_amount: Decimal,
    pub completed: usize,
    pub pending: usize,
}

impl PaymentSummary {
    pub fn of(payments: &[Payment]) -> Self {
        payments.iter().fold(Self::default(), |mut acc, p| {
            acc.total_amount += p.amount;
            match p.status {
                TransactionStatus::Completed => acc.completed += 1,
                TransactionStatus::Pending => acc.pending += 1,
                TransactionStatus::Failed | TransactionStatus::Refunded => {}
            }
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment(amount: i64, status: TransactionStatus) -> Payment {
        Payment {
            id: PaymentId::new(),
            amount: Decimal::from(amount),
            payment_method: "card".into(),
            status,
            transaction_id: None,
            created_at: Utc::now(),
            booking: PaymentBooking {
                booking_id: BookingId::new(),
                booking_reference: "TRV-000001".into(),
                customer_name: "Grace Hopper".into(),
                customer_email: "grace@example.com".into(),
                destination_name: "Kyoto".into(),
            },
        }
    }

    #[test]
    fn summary_counts_every_amount_but_only_completed_and_pending_states() {
        let payments = vec![
            payment(100, TransactionStatus::Completed),
            payment(40, TransactionStatus::Pending),
            payment(25, TransactionStatus::Failed),
            payment(10, TransactionStatus::Completed),
        ];
        let summary = PaymentSummary::of(&payments);
        assert_eq!(summary.total_amount, Decimal::from(175));
        assert_eq!(summary.completed, 2);
        assert_eq!(summary.pending, 1);
    }

    #[test]
    fn empty_summary_is_zero() {
        assert_eq!(PaymentSummary::of(&[]), PaymentSummary::default());
    }
}
