pub mod auth;
pub mod booking;
pub mod customer;
pub mod destination;
pub mod health;
pub mod report;
pub mod user;
pub mod v1;
