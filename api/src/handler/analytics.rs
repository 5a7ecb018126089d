use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{Days, Utc};
use kernel::model::{
    analytics::{
        group_bookings_by_status_per_month, group_revenue_by_month, growth_percent,
        rank_by_bookings, top_entities_by_spend, total_of, MonthWindow, RevenueEntry,
    },
    list::CreatedRange,
};
use registry::AppRegistry;
use rust_decimal::{prelude::ToPrimitive, Decimal};

use super::view::or_empty;
use crate::{
    extractor::AuthorizedUser,
    model::analytics::{AnalyticsQuery, AnalyticsResponse, AnalyticsStats},
};

const TOP_ENTRIES: usize = 5;

fn window_range(window: &MonthWindow) -> CreatedRange {
    CreatedRange::between(window.start_at(), window.end_at())
}

fn revenue_of(entries: &[RevenueEntry]) -> Decimal {
    total_of(entries.iter().map(|e| &e.total_amount))
}

pub async fn show_analytics(
    _user: AuthorizedUser,
    Query(query): Query<AnalyticsQuery>,
    State(registry): State<AppRegistry>,
) -> Json<AnalyticsResponse> {
    let now = Utc::now();
    let current = MonthWindow::containing(now.date_naive());
    let previous = current.previous();
    // months are approximated as 30 days
    let history = CreatedRange {
        from: now.checked_sub_days(Days::new(30 * u64::from(query.months()))),
        to: None,
    };

    let bookings = registry.booking_repository();
    let customers = registry.customer_repository();
    let destinations = registry.destination_repository();

    let (
        current_bookings,
        previous_bookings,
        current_revenue,
        previous_revenue,
        total_customers,
        total_destinations,
        revenue_history,
        status_history,
        destination_spend,
        customer_spend,
    ) = tokio::join!(
        bookings.count(window_range(&current)),
        bookings.count(window_range(&previous)),
        bookings.find_paid_revenue(window_range(&current)),
        bookings.find_paid_revenue(window_range(&previous)),
        customers.count(),
        destinations.count(),
        bookings.find_paid_revenue(history),
        bookings.find_status_entries(history),
        bookings.find_paid_spend_by_destination(),
        bookings.find_paid_spend_by_customer(),
    );

    let current_bookings = or_empty(current_bookings, "bookings of this month");
    let previous_bookings = or_empty(previous_bookings, "bookings of last month");
    let current_revenue = revenue_of(&or_empty(current_revenue, "revenue of this month"));
    let previous_revenue = revenue_of(&or_empty(previous_revenue, "revenue of last month"));

    let stats = AnalyticsStats {
        current_month_bookings: current_bookings,
        previous_month_bookings: previous_bookings,
        bookings_growth: growth_percent(current_bookings as f64, previous_bookings as f64),
        current_month_revenue: current_revenue,
        previous_month_revenue: previous_revenue,
        revenue_growth: growth_percent(
            current_revenue.to_f64().unwrap_or_default(),
            previous_revenue.to_f64().unwrap_or_default(),
        ),
        total_customers: or_empty(total_customers, "customer count"),
        total_destinations: or_empty(total_destinations, "destination count"),
    };

    let revenue_history = or_empty(revenue_history, "monthly revenue");
    let status_history = or_empty(status_history, "booking trends");
    let destination_spend = or_empty(destination_spend, "destination spend");
    let customer_spend = or_empty(customer_spend, "customer spend");

    Json(AnalyticsResponse {
        stats,
        revenue_by_month: group_revenue_by_month(&revenue_history)
            .into_iter()
            .map(Into::into)
            .collect(),
        booking_trends: group_bookings_by_status_per_month(&status_history)
            .into_iter()
            .map(Into::into)
            .collect(),
        popular_destinations: rank_by_bookings(&destination_spend, TOP_ENTRIES)
            .into_iter()
            .map(Into::into)
            .collect(),
        top_customers: top_entities_by_spend(&customer_spend, TOP_ENTRIES)
            .into_iter()
            .map(Into::into)
            .collect(),
    })
}
