//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{AddressService, EmployeeService, ServiceContainer, Services};

/// Application state shared across all request handlers.
///
/// Constructed once at process start and handed to the router; handlers
/// receive it by reference through axum's `State` extractor. There is no
/// ambient global.
#[derive(Clone)]
pub struct AppState {
    /// Employee service
    pub employee_service: Arc<dyn EmployeeService>,
    /// Address service
    pub address_service: Arc<dyn AddressService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a connected database.
    ///
    /// This is the recommended way to create AppState as it wires the
    /// services through the container and shared Unit of Work.
    pub fn from_config(database: Arc<Database>) -> Self {
        let container = Services::from_connection(database.get_connection());

        Self {
            employee_service: container.employees(),
            address_service: container.addresses(),
            database,
        }
    }

    /// Create new application state with manually injected services.
    pub fn new(
        employee_service: Arc<dyn EmployeeService>,
        address_service: Arc<dyn AddressService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            employee_service,
            address_service,
            database,
        }
    }
}
