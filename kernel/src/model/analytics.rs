//! Aggregations behind the dashboard and analytics views.
//!
//! Every function here is pure: the inputs are rows already fetched from the
//! store and the outputs keep the order in which keys were first seen, so the
//! result only depends on the input order.

use std::hash::Hash;

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveTime, Utc};
use indexmap::IndexMap;
use rust_decimal::Decimal;

use crate::model::{
    booking::BookingStatus,
    id::{CustomerId, DestinationId},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevenueEntry {
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpendEntry<E> {
    pub entity: E,
    pub total_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomerSummary {
    pub customer_id: CustomerId,
    pub full_name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DestinationSummary {
    pub destination_id: DestinationId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyRevenue {
    pub month: String,
    pub revenue: Decimal,
    pub bookings: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyTrend {
    pub month: String,
    pub bookings: u64,
    pub confirmed: u64,
    pub cancelled: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySpend<E> {
    pub entity: E,
    pub total_spent: Decimal,
    pub booking_count: u64,
}

/// `YYYY-MM` of a UTC timestamp, i.e. the first seven characters of its ISO form.
pub fn month_key(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m").to_string()
}

pub fn group_revenue_by_month(entries: &[RevenueEntry]) -> Vec<MonthlyRevenue> {
    entries
        .iter()
        .fold(IndexMap::<String, MonthlyRevenue>::new(), |mut acc, e| {
            let month = month_key(&e.created_at);
            let slot = acc.entry(month.clone()).or_insert(MonthlyRevenue {
                month,
                revenue: Decimal::ZERO,
                bookings: 0,
            });
            slot.revenue += e.total_amount;
            slot.bookings += 1;
            acc
        })
        .into_values()
        .collect()
}

/// Pending and completed bookings only count toward `bookings`.
pub fn group_bookings_by_status_per_month(entries: &[StatusEntry]) -> Vec<MonthlyTrend> {
    entries
        .iter()
        .fold(IndexMap::<String, MonthlyTrend>::new(), |mut acc, e| {
            let month = month_key(&e.created_at);
            let slot = acc.entry(month.clone()).or_insert(MonthlyTrend {
                month,
                bookings: 0,
                confirmed: 0,
                cancelled: 0,
            });
            slot.bookings += 1;
            match e.status {
                BookingStatus::Confirmed => slot.confirmed += 1,
                BookingStatus::Cancelled => slot.cancelled += 1,
                BookingStatus::Pending | BookingStatus::Completed => {}
            }
            acc
        })
        .into_values()
        .collect()
}

fn group_by_entity<E: Clone + Eq + Hash>(entries: &[SpendEntry<E>]) -> Vec<EntitySpend<E>> {
    entries
        .iter()
        .fold(IndexMap::<E, EntitySpend<E>>::new(), |mut acc, e| {
            let slot = acc.entry(e.entity.clone()).or_insert(EntitySpend {
                entity: e.entity.clone(),
                total_spent: Decimal::ZERO,
                booking_count: 0,
            });
            slot.total_spent += e.total_amount;
            slot.booking_count += 1;
            acc
        })
        .into_values()
        .collect()
}

/// Highest spenders first. Ties keep their encounter order (`sort_by` is stable).
pub fn top_entities_by_spend<E: Clone + Eq + Hash>(
    entries: &[SpendEntry<E>],
    limit: usize,
) -> Vec<EntitySpend<E>> {
    let mut grouped = group_by_entity(entries);
    grouped.sort_by(|a, b| b.total_spent.cmp(&a.total_spent));
    grouped.truncate(limit);
    grouped
}

/// Most booked first, ties in encounter order.
pub fn rank_by_bookings<E: Clone + Eq + Hash>(
    entries: &[SpendEntry<E>],
    limit: usize,
) -> Vec<EntitySpend<E>> {
    let mut grouped = group_by_entity(entries);
    grouped.sort_by(|a, b| b.booking_count.cmp(&a.booking_count));
    grouped.truncate(limit);
    grouped
}

/// Percentage change from `previous` to `current`; `0` when there is no baseline.
pub fn growth_percent(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    (current - previous) / previous * 100.0
}

pub fn total_of<'a>(amounts: impl IntoIterator<Item = &'a Decimal>) -> Decimal {
    amounts.into_iter().sum()
}

/// Calendar month as the half-open range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl MonthWindow {
    pub fn containing(date: NaiveDate) -> Self {
        let start = date - Days::new(u64::from(date.day0()));
        let end = start
            .checked_add_months(Months::new(1))
            .unwrap_or(NaiveDate::MAX);
        Self { start, end }
    }

    pub fn previous(&self) -> Self {
        let start = self
            .start
            .checked_sub_months(Months::new(1))
            .unwrap_or(NaiveDate::MIN);
        Self {
            start,
            end: self.start,
        }
    }

    pub fn start_at(&self) -> DateTime<Utc> {
        self.start.and_time(NaiveTime::MIN).and_utc()
    }

    pub fn end_at(&self) -> DateTime<Utc> {
        self.end.and_time(NaiveTime::MIN).and_utc()
    }
}
