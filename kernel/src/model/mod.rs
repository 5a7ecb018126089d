pub mod analytics;
pub mod auth;
pub mod booking;
pub mod customer;
pub mod destination;
pub mod id;
pub mod list;
pub mod payment;
pub mod role;
pub mod user;
pub mod view;
