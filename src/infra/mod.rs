//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and migrations
//! - Repositories (data access abstraction)
//! - Unit of Work for transaction management

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{AddressRepository, AddressStore, EmployeeRepository, EmployeeStore};
pub use unit_of_work::{Persistence, TransactionContext, UnitOfWork};
