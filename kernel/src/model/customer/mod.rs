use chrono::{DateTime, NaiveDate, Utc};

use crate::model::id::CustomerId;

pub mod event;

#[derive(Debug, Clone)]
pub struct Customer {
    pub id: CustomerId,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub passport_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Customer fields shared by the create and update commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerProfile {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub passport_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl CustomerProfile {
    /// Builds the profile with blank optional fields turned into `None`.
    pub fn new(
        full_name: String,
        email: String,
        phone: Option<String>,
        address: Option<String>,
        passport_number: Option<String>,
        date_of_birth: Option<NaiveDate>,
    ) -> Self {
        Self {
            full_name,
            email,
            phone: present(phone),
            address: present(address),
            passport_number: present(passport_number),
            date_of_birth,
        }
    }
}

pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
