use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::booking::{
    delete_booking, register_booking, search_bookings, show_booking, show_booking_list,
    update_booking_status, update_payment_status,
};

pub fn build_booking_routers() -> Router<AppRegistry> {
    let bookings_routers = Router::new()
        .route("/", post(register_booking))
        .route("/", get(show_booking_list))
        .route("/search", get(search_bookings))
        .route("/:booking_id", get(show_booking))
        .route("/:booking_id", delete(delete_booking))
        .route("/:booking_id/status", put(update_booking_status))
        .route("/:booking_id/payment-status", put(update_payment_status));

    Router::new().nest("/bookings", bookings_routers)
}
