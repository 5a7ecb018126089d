use chrono::{DateTime, NaiveDate, Utc};
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantNames};

use crate::model::id::{BookingId, CustomerId, DestinationId, UserId};

pub mod event;

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    AsRefStr,
    Display,
    VariantNames,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    AsRefStr,
    Display,
    VariantNames,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Refunded,
}

#[derive(Debug, Clone)]
pub struct Booking {
    pub id: BookingId,
    pub booking_reference: String,
    pub agent_id: UserId,
    pub stay: Stay,
    pub guests: i32,
    pub total_amount: Decimal,
    pub special_requests: Option<String>,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub customer: BookingCustomer,
    pub destination: BookingDestination,
}

#[derive(Debug, Clone)]
pub struct BookingCustomer {
    pub customer_id: CustomerId,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone)]
pub struct BookingDestination {
    pub destination_id: DestinationId,
    pub name: String,
    pub city: String,
    pub country: String,
    pub description: String,
    pub image_url: Option<String>,
    pub price_per_night: Decimal,
}

/// Check-in/check-out pair of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Stay {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl Stay {
    /// Whole days between check-in and check-out. Negative when the dates are reversed.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Price of the stay; zero unless at least one night is booked.
    pub fn total_for(&self, price_per_night: Decimal) -> Decimal {
        match self.nights() {
            n if n > 0 => price_per_night * Decimal::from(n),
            _ => Decimal::ZERO,
        }
    }
}

/// Human-facing booking token: `TRV-` followed by the last six digits of the
/// creation time in epoch milliseconds.
///
/// Two bookings created 1,000,000 ms apart (or within the same millisecond)
/// share a reference. The primary key is the identifier; this is a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingReference(String);

impl BookingReference {
    const PREFIX: &'static str = "TRV-";
    const DIGITS: usize = 6;

    pub fn generate() -> Self {
        Self::from_timestamp_millis(Utc::now().timestamp_millis())
    }

    pub fn from_timestamp_millis(millis: i64) -> Self {
        let digits = millis.unsigned_abs().to_string();
        let tail = &digits[digits.len().saturating_sub(Self::DIGITS)..];
        Self(format!("{}{tail}", Self::PREFIX))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for BookingReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn three_nights_at_one_hundred() {
        let stay = Stay::new(date("2024-03-01"), date("2024-03-04"));
        assert_eq!(stay.nights(), 3);
        assert_eq!(stay.total_for(Decimal::from(100)), Decimal::from(300));
    }

    #[rstest]
    #[case("2024-03-04", "2024-03-04")]
    #[case("2024-03-04", "2024-03-01")]
    fn no_nights_means_no_charge(#[case] check_in: &str, #[case] check_out: &str) {
        let stay = Stay::new(date(check_in), date(check_out));
        assert!(stay.nights() <= 0);
        assert_eq!(stay.total_for(Decimal::from(250)), Decimal::ZERO);
    }

    #[test]
    fn nights_cross_month_boundaries() {
        let stay = Stay::new(date("2024-02-27"), date("2024-03-02"));
        assert_eq!(stay.nights(), 4);
    }

    #[test]
    fn reference_keeps_last_six_digits() {
        let reference = BookingReference::from_timestamp_millis(1_709_251_234_567);
        assert_eq!(reference.as_str(), "TRV-234567");
    }

    #[test]
    fn reference_keeps_leading_zeros_of_the_tail() {
        let reference = BookingReference::from_timestamp_millis(1_709_251_000_042);
        assert_eq!(reference.as_str(), "TRV-000042");
    }

    #[test]
    fn generated_reference_has_prefix_and_six_digits() {
        let reference = BookingReference::generate().into_inner();
        let digits = reference.strip_prefix("TRV-").unwrap();
        assert_eq!(digits.len(), 6);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn statuses_round_trip_through_their_stored_names() {
        assert_eq!(BookingStatus::Cancelled.as_ref(), "cancelled");
        assert_eq!(
            BookingStatus::from_str("confirmed").unwrap(),
            BookingStatus::Confirmed
        );
        assert_eq!(PaymentStatus::from_str("paid").unwrap(), PaymentStatus::Paid);
        assert!(PaymentStatus::from_str("failed").is_err());
    }
}
