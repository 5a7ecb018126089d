use chrono::{DateTime, NaiveDate, Utc};
use kernel::model::{customer::Customer, id::CustomerId};

#[derive(sqlx::FromRow)]
pub struct CustomerRow {
    pub customer_id: CustomerId,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub passport_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl From<CustomerRow> for Customer {
    fn from(value: CustomerRow) -> Self {
        let CustomerRow {
            customer_id,
            full_name,
            email,
            phone,
            address,
            passport_number,
            date_of_birth,
            created_at,
        } = value;
        Customer {
            id: customer_id,
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
