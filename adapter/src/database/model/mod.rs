pub mod auth;
pub mod booking;
pub mod customer;
pub mod destination;
pub mod payment;
pub mod user;
