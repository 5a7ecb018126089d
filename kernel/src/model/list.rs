use chrono::{DateTime, NaiveDate, Utc};

use crate::model::{
    booking::{Booking, BookingStatus, PaymentStatus},
    customer::Customer,
};

/// Half-open `[from, to)` range on `created_at`; an absent bound is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreatedRange {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl CreatedRange {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn between(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }
}

/// Store-side booking search.
#[derive(Debug, Clone, Default)]
pub struct BookingSearch {
    pub query: Option<String>,
    pub status: Option<BookingStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub limit: i64,
}

impl BookingSearch {
    pub const MAX_RESULTS: i64 = 100;
}

/// Fields a booking list row is filtered on.
pub trait BookingListing {
    fn reference(&self) -> &str;
    fn customer_name(&self) -> &str;
    fn destination_name(&self) -> &str;
    fn status(&self) -> BookingStatus;
    fn payment_status(&self) -> PaymentStatus;
}

impl BookingListing for Booking {
    fn reference(&self) -> &str {
        &self.booking_reference
    }

    fn customer_name(&self) -> &str {
        &self.customer.full_name
    }

    fn destination_name(&self) -> &str {
        &self.destination.name
    }

    fn status(&self) -> BookingStatus {
        self.status
    }

    fn payment_status(&self) -> PaymentStatus {
        self.payment_status
    }
}

/// Filter applied to an already fetched booking list.
#[derive(Debug, Clone, Default)]
pub struct BookingListFilter {
    pub search: Option<String>,
    pub status: Option<BookingStatus>,
    pub payment_status: Option<PaymentStatus>,
}

impl BookingListFilter {
    pub fn matches<B: BookingListing>(&self, booking: &B) -> bool {
        let matches_search = match self.search.as_deref().map(str::to_lowercase) {
            None => true,
            Some(term) => [
                booking.reference(),
                booking.customer_name(),
                booking.destination_name(),
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&term)),
        };
        let matches_status = self.status.map_or(true, |s| booking.status() == s);
        let matches_payment = self
            .payment_status
            .map_or(true, |s| booking.payment_status() == s);

        matches_search && matches_status && matches_payment
    }

    pub fn apply<B: BookingListing>(&self, bookings: Vec<B>) -> Vec<B> {
        bookings.into_iter().filter(|b| self.matches(b)).collect()
    }
}

pub trait CustomerListing {
    fn full_name(&self) -> &str;
    fn email(&self) -> &str;
    fn phone(&self) -> Option<&str>;
}

impl CustomerListing for Customer {
    fn full_name(&self) -> &str {
        &self.full_name
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
}

/// Filter applied to an already fetched customer list.
#[derive(Debug, Clone, Default)]
pub struct CustomerListFilter {
    pub search: Option<String>,
}

impl CustomerListFilter {
    pub const MAX_SEARCH_RESULTS: i64 = 50;

    pub fn matches<C: CustomerListing>(&self, customer: &C) -> bool {
        let Some(term) = self.search.as_deref().map(str::to_lowercase) else {
            return true;
        };
        customer.full_name().to_lowercase().contains(&term)
            || customer.email().to_lowercase().contains(&term)
            || customer
                .phone()
                .is_some_and(|p| p.to_lowercase().contains(&term))
    }

    pub fn apply<C: CustomerListing>(&self, customers: Vec<C>) -> Vec<C> {
        customers.into_iter().filter(|c| self.matches(c)).collect()
    }
}
