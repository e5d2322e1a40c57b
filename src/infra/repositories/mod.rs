//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod address_repository;
mod employee_repository;
pub(crate) mod entities;

pub use address_repository::{AddressRepository, AddressStore};
pub use employee_repository::{EmployeeRepository, EmployeeStore};

#[cfg(test)]
pub use address_repository::MockAddressRepository;
#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
