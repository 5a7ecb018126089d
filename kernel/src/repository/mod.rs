pub mod auth;
pub mod booking;
pub mod customer;
pub mod destination;
pub mod health;
pub mod payment;
pub mod user;
pub mod view_cache;
