//! Service Container - Centralized service access.
//!
//! Manages service lifecycle and gives request handlers one place to
//! obtain their dependencies from.

use std::sync::Arc;

use super::{AddressManager, AddressService, EmployeeManager, EmployeeService};
use crate::infra::Persistence;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
pub trait ServiceContainer: Send + Sync {
    /// Get employee service
    fn employees(&self) -> Arc<dyn EmployeeService>;

    /// Get address service
    fn addresses(&self) -> Arc<dyn AddressService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    employee_service: Arc<dyn EmployeeService>,
    address_service: Arc<dyn AddressService>,
}

impl Services {
    /// Create a new service container with all services initialized
    pub fn new(
        employee_service: Arc<dyn EmployeeService>,
        address_service: Arc<dyn AddressService>,
    ) -> Self {
        Self {
            employee_service,
            address_service,
        }
    }

    /// Create service container from a database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        let uow = Arc::new(Persistence::new(db));
        let employee_service = Arc::new(EmployeeManager::new(uow.clone()));
        let address_service = Arc::new(AddressManager::new(uow));

        Self {
            employee_service,
            address_service,
        }
    }
}

impl ServiceContainer for Services {
    fn employees(&self) -> Arc<dyn EmployeeService> {
        self.employee_service.clone()
    }

    fn addresses(&self) -> Arc<dyn AddressService> {
        self.address_service.clone()
    }
}
