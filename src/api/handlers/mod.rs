//! HTTP request handlers.

pub mod address_handler;
pub mod employee_handler;

pub use address_handler::address_routes;
pub use employee_handler::employee_routes;
