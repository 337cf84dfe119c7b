pub mod auth;
pub mod catalog;
pub mod flights;
pub mod payment;
pub mod shared;
pub mod stays;
