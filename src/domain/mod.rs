//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod address;
pub mod employee;

pub use address::{Address, AddressFields, AddressRequest, AddressResponse};
pub use employee::{
    parse_birth_date, DeleteResponse, Employee, EmployeeFields, EmployeeRequest, EmployeeResponse,
};
