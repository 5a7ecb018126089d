use rust_decimal::Decimal;
use serde::Serialize;

use super::{booking::BookingResponse, user::UserResponse};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub profile: UserResponse,
    pub stats: DashboardStats,
    pub recent_bookings: Vec<BookingResponse>,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_bookings: i64,
    pub total_customers: i64,
    pub total_destinations: i64,
    pub total_revenue: Decimal,
}
