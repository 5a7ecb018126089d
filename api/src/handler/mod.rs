pub mod analytics;
pub mod auth;
pub mod booking;
pub mod customer;
pub mod dashboard;
pub mod destination;
pub mod health;
pub mod payment;
pub mod user;
mod view;
