use crate::model::id::{BookingId, CustomerId};

/// Cacheable read views, keyed by the path they are served under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPath {
    Bookings,
    Booking(BookingId),
    Customers,
    Customer(CustomerId),
}

impl ViewPath {
    pub fn cache_key(&self) -> String {
        match self {
            ViewPath::Bookings => "view:/bookings".into(),
            ViewPath::Booking(id) => format!("view:/bookings/{id}"),
            ViewPath::Customers => "view:/customers".into(),
            ViewPath::Customer(id) => format!("view:/customers/{id}"),
        }
    }

    /// Location of the view inside the versioned API.
    pub fn location(&self) -> String {
        match self {
            ViewPath::Bookings => "/api/v1/bookings".into(),
            ViewPath::Booking(id) => format!("/api/v1/bookings/{id}"),
            ViewPath::Customers => "/api/v1/customers".into(),
            ViewPath::Customer(id) => format!("/api/v1/customers/{id}"),
        }
    }
}
