use chrono::{DateTime, NaiveDate, Utc};
use garde::Validate;
use kernel::model::{
    booking::{
        event::CreateBooking, Booking, BookingCustomer, BookingDestination, BookingReference,
        BookingStatus, PaymentStatus, Stay,
    },
    id::{BookingId, CustomerId, DestinationId, UserId},
    list::{BookingListFilter, BookingListing, BookingSearch},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};
use std::str::FromStr;
use strum::VariantNames;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[garde(skip)]
    pub customer_id: CustomerId,
    #[garde(skip)]
    pub destination_id: DestinationId,
    #[garde(skip)]
    pub check_in_date: NaiveDate,
    #[garde(custom(is_after(&self.check_in_date)))]
    pub check_out_date: NaiveDate,
    #[garde(range(min = 1))]
    pub guests: i32,
    #[garde(skip)]
    pub special_requests: Option<String>,
    #[garde(skip)]
    pub total_amount: Decimal,
}

fn is_after(check_in: &NaiveDate) -> impl FnOnce(&NaiveDate, &()) -> garde::Result + '_ {
    move |check_out, _| {
        if check_out <= check_in {
            return Err(garde::Error::new("check-out must be after check-in"));
        }
        Ok(())
    }
}

impl CreateBookingRequest {
    pub fn into_event(self, agent_id: UserId, booking_reference: BookingReference) -> CreateBooking {
        let CreateBookingRequest {
            customer_id,
            destination_id,
            check_in_date,
            check_out_date,
            guests,
            special_requests,
            total_amount,
        } = self;
        CreateBooking::new(
            customer_id,
            destination_id,
            agent_id,
            booking_reference,
            Stay::new(check_in_date, check_out_date),
            guests,
            total_amount,
            special_requests.filter(|s| !s.trim().is_empty()),
        )
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingStatusRequest {
    pub status: BookingStatus,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaymentStatusRequest {
    pub payment_status: PaymentStatus,
}

// `all`, blank or absent select every value.
fn selected<T>(value: Option<String>) -> AppResult<Option<T>>
where
    T: FromStr + VariantNames,
{
    match value.as_deref().map(str::trim) {
        None | Some("") | Some("all") => Ok(None),
        Some(v) => T::from_str(v).map(Some).map_err(|_| {
            AppError::UnprocessableEntity(format!(
                "unknown filter value {v:?}, expected one of: all, {}",
                T::VARIANTS.join(", ")
            ))
        }),
    }
}

fn search_term(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingListQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub payment_status: Option<String>,
}

impl TryFrom<BookingListQuery> for BookingListFilter {
    type Error = AppError;

    fn try_from(value: BookingListQuery) -> Result<Self, Self::Error> {
        let BookingListQuery {
            search,
            status,
            payment_status,
        } = value;
        Ok(Self {
            search: search_term(search),
            status: selected(status)?,
            payment_status: selected(payment_status)?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSearchQuery {
    pub q: Option<String>,
    pub status: Option<String>,
    pub payment_status: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl TryFrom<BookingSearchQuery> for BookingSearch {
    type Error = AppError;

    fn try_from(value: BookingSearchQuery) -> Result<Self, Self::Error> {
        let BookingSearchQuery {
            q,
            status,
            payment_status,
            date_from,
            date_to,
        } = value;
        Ok(Self {
            query: search_term(q),
            status: selected(status)?,
            payment_status: selected(payment_status)?,
            date_from,
            date_to,
            limit: BookingSearch::MAX_RESULTS,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingsResponse {
    pub items: Vec<BookingResponse>,
}

impl From<Vec<Booking>> for BookingsResponse {
    fn from(value: Vec<Booking>) -> Self {
        Self {
            items: value.into_iter().map(BookingResponse::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: BookingId,
    pub booking_reference: String,
    pub agent_id: UserId,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub nights: i64,
    pub guests: i32,
    pub total_amount: Decimal,
    pub special_requests: Option<String>,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub customer: BookingCustomerResponse,
    pub destination: BookingDestinationResponse,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
            id,
            booking_reference,
            agent_id,
            stay,
            guests,
            total_amount,
            special_requests,
            status,
            payment_status,
            created_at,
            customer,
            destination,
        } = value;
        Self {
            id,
            booking_reference,
            agent_id,
            check_in_date: stay.check_in,
            check_out_date: stay.check_out,
            nights: stay.nights(),
            guests,
            total_amount,
            special_requests,
            status,
            payment_status,
            created_at,
            customer: customer.into(),
            destination: destination.into(),
        }
    }
}

impl BookingListing for BookingResponse {
    fn reference(&self) -> &str {
        &self.booking_reference
    }

    fn customer_name(&self) -> &str {
        &self.customer.full_name
    }

    fn destination_name(&self) -> &str {
        &self.destination.name
    }

    fn status(&self) -> BookingStatus {
        self.status
    }

    fn payment_status(&self) -> PaymentStatus {
        self.payment_status
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCustomerResponse {
    pub customer_id: CustomerId,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl From<BookingCustomer> for BookingCustomerResponse {
    fn from(value: BookingCustomer) -> Self {
        let BookingCustomer {
            customer_id,
            full_name,
            email,
            phone,
            address,
        } = value;
        Self {
            customer_id,
            full_name,
            email,
            phone,
            address,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDestinationResponse {
    pub destination_id: DestinationId,
    pub name: String,
    pub city: String,
    pub country: String,
    pub description: String,
    pub image_url: Option<String>,
    pub price_per_night: Decimal,
}

impl From<BookingDestination> for BookingDestinationResponse {
    fn from(value: BookingDestination) -> Self {
        let BookingDestination {
            destination_id,
            name,
            city,
            country,
            description,
            image_url,
            price_per_night,
        } = value;
        Self {
            destination_id,
            name,
            city,
            country,
            description,
            image_url,
            price_per_night,
        }
    }
}
