use axum::{extract::State, Json};
use kernel::model::{analytics::total_of, list::CreatedRange};
use registry::AppRegistry;

use super::view::or_empty;
use crate::{
    extractor::AuthorizedUser,
    model::{
        booking::BookingResponse,
        dashboard::{DashboardResponse, DashboardStats},
        user::UserResponse,
    },
};

const RECENT_BOOKINGS: i64 = 5;

pub async fn show_dashboard(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> Json<DashboardResponse> {
    let bookings = registry.booking_repository();
    let customers = registry.customer_repository();
    let destinations = registry.destination_repository();

    let (total_bookings, total_customers, total_destinations, paid, recent) = tokio::join!(
        bookings.count(CreatedRange::all()),
        customers.count(),
        destinations.count(),
        bookings.find_paid_revenue(CreatedRange::all()),
        bookings.find_recent(RECENT_BOOKINGS),
    );

    let paid = or_empty(paid, "paid bookings");
    let stats = DashboardStats {
        total_bookings: or_empty(total_bookings, "booking count"),
        total_customers: or_empty(total_customers, "customer count"),
        total_destinations: or_empty(total_destinations, "destination count"),
        total_revenue: total_of(paid.iter().map(|e| &e.total_amount)),
    };

    Json(DashboardResponse {
        profile: UserResponse::from(user.user),
        stats,
        recent_bookings: or_empty(recent, "recent bookings")
            .into_iter()
            .map(BookingResponse::from)
            .collect(),
    })
}
