use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::{
    analytics::show_analytics, dashboard::show_dashboard, payment::show_payment_list,
};

pub fn build_report_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/dashboard", get(show_dashboard))
        .route("/payments", get(show_payment_list))
        .route("/analytics", get(show_analytics))
}
