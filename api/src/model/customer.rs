use chrono::{DateTime, NaiveDate, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    customer::{
        event::{CreateCustomer, UpdateCustomer},
        Customer, CustomerProfile,
    },
    id::CustomerId,
    list::{CustomerListFilter, CustomerListing},
};
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize};

use super::booking::BookingResponse;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequest {
    #[garde(length(min = 1))]
    pub full_name: String,
    #[garde(email)]
    pub email: String,
    #[garde(skip)]
    pub phone: Option<String>,
    #[garde(skip)]
    pub address: Option<String>,
    #[garde(skip)]
    pub passport_number: Option<String>,
    #[garde(skip)]
    #[serde(default, deserialize_with = "blank_date_as_none")]
    pub date_of_birth: Option<NaiveDate>,
}

// An empty date input is submitted as "".
fn blank_date_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) if !s.trim().is_empty() => s.trim().parse().map(Some).map_err(de::Error::custom),
        _ => Ok(None),
    }
}

impl From<CustomerRequest> for CustomerProfile {
    fn from(value: CustomerRequest) -> Self {
        let CustomerRequest {
            full_name,
            email,
            phone,
            address,
            passport_number,
            date_of_birth,
        } = value;
        CustomerProfile::new(
            full_name,
            email,
            phone,
            address,
            passport_number,
            date_of_birth,
        )
    }
}

impl From<CustomerRequest> for CreateCustomer {
    fn from(value: CustomerRequest) -> Self {
        CreateCustomer::new(value.into())
    }
}

#[derive(new)]
pub struct CustomerRequestWithId(CustomerId, CustomerRequest);
impl From<CustomerRequestWithId> for UpdateCustomer {
    fn from(value: CustomerRequestWithId) -> Self {
        let CustomerRequestWithId(customer_id, req) = value;
        UpdateCustomer::new(customer_id, req.into())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CustomerListQuery {
    pub search: Option<String>,
}

impl From<CustomerListQuery> for CustomerListFilter {
    fn from(value: CustomerListQuery) -> Self {
        Self {
            search: value
                .search
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CustomerSearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomersResponse {
    pub items: Vec<CustomerResponse>,
}

impl From<Vec<Customer>> for CustomersResponse {
    fn from(value: Vec<Customer>) -> Self {
        Self {
            items: value.into_iter().map(CustomerResponse::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: CustomerId,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub passport_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl From<Customer> for CustomerResponse {
    fn from(value: Customer) -> Self {
        let Customer {
            id,
            full_name,
            email,
            phone,
            address,
            passport_number,
            date_of_birth,
            created_at,
        } = value;
        Self {
            id,
            full_name,
            email,
            phone,
            address,
            passport_number,
            date_of_birth,
            created_at,
        }
    }
}

impl CustomerListing for CustomerResponse {
    fn full_name(&self) -> &str {
        &self.full_name
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
}

/// A customer with their booking history and spend.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetailResponse {
    pub customer: CustomerResponse,
    pub bookings: Vec<BookingResponse>,
    pub total_spent: Decimal,
    pub booking_count: usize,
    pub average_booking_value: Decimal,
}

impl CustomerDetailResponse {
    pub fn new(customer: CustomerResponse, bookings: Vec<BookingResponse>) -> Self {
        let total_spent: Decimal = bookings.iter().map(|b| b.total_amount).sum();
        let booking_count = bookings.len();
        let average_booking_value = if booking_count == 0 {
            Decimal::ZERO
        } else {
            (total_spent / Decimal::from(booking_count)).round()
        };
        Self {
            customer,
            bookings,
            total_spent,
            booking_count,
            average_booking_value,
        }
    }
}
