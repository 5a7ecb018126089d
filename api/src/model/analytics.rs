use kernel::model::{
    analytics::{CustomerSummary, DestinationSummary, EntitySpend, MonthlyRevenue, MonthlyTrend},
    id::{CustomerId, DestinationId},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AnalyticsQuery {
    #[serde(default = "default_months")]
    pub months: u32,
}

const fn default_months() -> u32 {
    12
}

impl AnalyticsQuery {
    pub const MAX_MONTHS: u32 = 120;

    pub fn months(&self) -> u32 {
        self.months.clamp(1, Self::MAX_MONTHS)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub stats: AnalyticsStats,
    pub revenue_by_month: Vec<MonthlyRevenueResponse>,
    pub booking_trends: Vec<MonthlyTrendResponse>,
    pub popular_destinations: Vec<PopularDestinationResponse>,
    pub top_customers: Vec<TopCustomerResponse>,
}

/// This month against the previous calendar month.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsStats {
    pub current_month_bookings: i64,
    pub previous_month_bookings: i64,
    pub bookings_growth: f64,
    pub current_month_revenue: Decimal,
    pub previous_month_revenue: Decimal,
    pub revenue_growth: f64,
    pub total_customers: i64,
    pub total_destinations: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRevenueResponse {
    pub month: String,
    pub revenue: Decimal,
    pub bookings: u64,
}

impl From<MonthlyRevenue> for MonthlyRevenueResponse {
    fn from(value: MonthlyRevenue) -> Self {
        let MonthlyRevenue {
            month,
            revenue,
            bookings,
        } = value;
        Self {
            month,
            revenue,
            bookings,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrendResponse {
    pub month: String,
    pub bookings: u64,
    pub confirmed: u64,
    pub cancelled: u64,
}

impl From<MonthlyTrend> for MonthlyTrendResponse {
    fn from(value: MonthlyTrend) -> Self {
        let MonthlyTrend {
            month,
            bookings,
            confirmed,
            cancelled,
        } = value;
        Self {
            month,
            bookings,
            confirmed,
            cancelled,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularDestinationResponse {
    pub destination_id: DestinationId,
    pub name: String,
    pub bookings: u64,
    pub revenue: Decimal,
}

impl From<EntitySpend<DestinationSummary>> for PopularDestinationResponse {
    fn from(value: EntitySpend<DestinationSummary>) -> Self {
        let EntitySpend {
            entity:
                DestinationSummary {
                    destination_id,
                    name,
                },
            total_spent,
            booking_count,
        } = value;
        Self {
            destination_id,
            name,
            bookings: booking_count,
            revenue: total_spent,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopCustomerResponse {
    pub customer_id: CustomerId,
    pub full_name: String,
    pub email: String,
    pub total_spent: Decimal,
    pub booking_count: u64,
}

impl From<EntitySpend<CustomerSummary>> for TopCustomerResponse {
    fn from(value: EntitySpend<CustomerSummary>) -> Self {
        let EntitySpend {
            entity:
                CustomerSummary {
                    customer_id,
                    full_name,
                    email,
                },
            total_spent,
            booking_count,
        } = value;
        Self {
            customer_id,
            full_name,
            email,
            total_spent,
            booking_count,
        }
    }
}
