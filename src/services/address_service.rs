//! Address service - Handles address-related business logic.
//!
//! Every operation is gated on the owning employee existing; an address
//! never outlives or predates its employee.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Address, AddressFields, AddressRequest};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Address service trait for dependency injection.
///
/// There is no delete operation: address rows are removed exclusively by
/// the employee cascade delete.
#[async_trait]
pub trait AddressService: Send + Sync {
    /// Create the address of an employee; the employee must already exist
    async fn create_address(&self, employee_id: i32, request: AddressRequest)
        -> AppResult<Address>;

    /// Get the address of an employee
    async fn get_address(&self, employee_id: i32) -> AppResult<Address>;

    /// Overwrite all fields of an employee's address
    async fn update_address(&self, employee_id: i32, request: AddressRequest)
        -> AppResult<Address>;
}

/// Concrete implementation of AddressService using Unit of Work.
pub struct AddressManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> AddressManager<U> {
    /// Create new address service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// NotFound unless the employee id references an existing row
    async fn ensure_employee_exists(&self, employee_id: i32) -> AppResult<()> {
        self.uow
            .employees()
            .find_by_id(employee_id)
            .await?
            .ok_or_not_found()?;
        Ok(())
    }
}

#[async_trait]
impl<U: UnitOfWork> AddressService for AddressManager<U> {
    async fn create_address(
        &self,
        employee_id: i32,
        request: AddressRequest,
    ) -> AppResult<Address> {
        self.ensure_employee_exists(employee_id).await?;

        // One address per employee; the unique index backs this check
        if self
            .uow
            .addresses()
            .find_by_employee(employee_id)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("An address for this employee"));
        }

        self.uow
            .addresses()
            .create(employee_id, AddressFields::from(request))
            .await
    }

    async fn get_address(&self, employee_id: i32) -> AppResult<Address> {
        self.ensure_employee_exists(employee_id).await?;

        self.uow
            .addresses()
            .find_by_employee(employee_id)
            .await?
            .ok_or_not_found()
    }

    async fn update_address(
        &self,
        employee_id: i32,
        request: AddressRequest,
    ) -> AppResult<Address> {
        self.ensure_employee_exists(employee_id).await?;

        self.uow
            .addresses()
            .update_by_employee(employee_id, AddressFields::from(request))
            .await
    }
}
