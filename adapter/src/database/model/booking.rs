use chrono::{DateTime, NaiveDate, Utc};
use kernel::model::{
    analytics::{CustomerSummary, DestinationSummary, RevenueEntry, SpendEntry, StatusEntry},
    booking::{Booking, BookingCustomer, BookingDestination, BookingStatus, PaymentStatus, Stay},
    id::{BookingId, CustomerId, DestinationId, UserId},
};
use rust_decimal::Decimal;
use shared::error::AppError;
use std::str::FromStr;

// Columns of a booking joined with its customer and destination.
// Every query returning `BookingRow` selects from this.
pub const BOOKING_SELECT: &str = r#"
    SELECT
        b.booking_id,
        b.booking_reference,
        b.agent_id,
        b.check_in_date,
        b.check_out_date,
        b.guests,
        b.total_amount,
        b.special_requests,
        b.status,
        b.payment_status,
        b.created_at,
        c.customer_id,
        c.full_name AS customer_name,
        c.email AS customer_email,
        c.phone AS customer_phone,
        c.address AS customer_address,
        d.destination_id,
        d.name AS destination_name,
        d.city,
        d.country,
        d.description,
        d.image_url,
        d.price_per_night
    FROM bookings AS b
    INNER JOIN customers AS c ON b.customer_id = c.customer_id
    INNER JOIN destinations AS d ON b.destination_id = d.destination_id
"#;

#[derive(sqlx::FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub booking_reference: String,
    pub agent_id: UserId,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub guests: i32,
    pub total_amount: Decimal,
    pub special_requests: Option<String>,
    pub status: String,
    pub payment_status: String,
    pub created_at: DateTime<Utc>,
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub customer_address: Option<String>,
    pub destination_id: DestinationId,
    pub destination_name: String,
    pub city: String,
    pub country: String,
    pub description: String,
    pub image_url: Option<String>,
    pub price_per_night: Decimal,
}

pub(crate) fn parse_booking_status(value: &str) -> Result<BookingStatus, AppError> {
    BookingStatus::from_str(value)
        .map_err(|e| AppError::ConversionEntityError(format!("booking status {value:?}: {e}")))
}

pub(crate) fn parse_payment_status(value: &str) -> Result<PaymentStatus, AppError> {
    PaymentStatus::from_str(value)
        .map_err(|e| AppError::ConversionEntityError(format!("payment status {value:?}: {e}")))
}

impl TryFrom<BookingRow> for Booking {
    type Error = AppError;

    fn try_from(value: BookingRow) -> Result<Self, Self::Error> {
        let BookingRow {
            booking_id,
            booking_reference,
            agent_id,
            check_in_date,
            check_out_date,
            guests,
            total_amount,
            special_requests,
            status,
            payment_status,
            created_at,
            customer_id,
            customer_name,
            customer_email,
            customer_phone,
            customer_address,
            destination_id,
            destination_name,
            city,
            country,
            description,
            image_url,
            price_per_night,
        } = value;
        Ok(Booking {
            id: booking_id,
            booking_reference,
            agent_id,
            stay: Stay::new(check_in_date, check_out_date),
            guests,
            total_amount,
            special_requests,
            status: parse_booking_status(&status)?,
            payment_status: parse_payment_status(&payment_status)?,
            created_at,
            customer: BookingCustomer {
                customer_id,
                full_name: customer_name,
                email: customer_email,
                phone: customer_phone,
                address: customer_address,
            },
            destination: BookingDestination {
                destination_id,
                name: destination_name,
                city,
                country,
                description,
                image_url,
                price_per_night,
            },
        })
    }
}

#[derive(sqlx::FromRow)]
pub struct RevenueRow {
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<RevenueRow> for RevenueEntry {
    fn from(value: RevenueRow) -> Self {
        let RevenueRow {
            total_amount,
            created_at,
        } = value;
        RevenueEntry {
            total_amount,
            created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
pub struct StatusRow {
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<StatusRow> for StatusEntry {
    type Error = AppError;

    fn try_from(value: StatusRow) -> Result<Self, Self::Error> {
        Ok(StatusEntry {
            status: parse_booking_status(&value.status)?,
            created_at: value.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
pub struct CustomerSpendRow {
    pub customer_id: CustomerId,
    pub full_name: String,
    pub email: String,
    pub total_amount: Decimal,
}

impl From<CustomerSpendRow> for SpendEntry<CustomerSummary> {
    fn from(value: CustomerSpendRow) -> Self {
        let CustomerSpendRow {
            customer_id,
            full_name,
            email,
            total_amount,
        } = value;
        SpendEntry {
            entity: CustomerSummary {
                customer_id,
                full_name,
                email,
            },
            total_amount,
        }
    }
}

#[derive(sqlx::FromRow)]
pub struct DestinationSpendRow {
    pub destination_id: DestinationId,
    pub name: String,
    pub total_amount: Decimal,
}

impl From<DestinationSpendRow> for SpendEntry<DestinationSummary> {
    fn from(value: DestinationSpendRow) -> Self {
        let DestinationSpendRow {
            destination_id,
            name,
            total_amount,
        } = value;
        SpendEntry {
            entity: DestinationSummary {
                destination_id,
                name,
            },
            total_amount,
        }
    }
}
