use derive_new::new;

use super::CustomerProfile;
use crate::model::id::CustomerId;

#[derive(Debug, new)]
pub struct CreateCustomer {
    pub profile: CustomerProfile,
}

#[derive(Debug, new)]
pub struct UpdateCustomer {
    pub customer_id: CustomerId,
    pub profile: CustomerProfile,
}

#[derive(Debug, new)]
pub struct DeleteCustomer {
    pub customer_id: CustomerId,
}
