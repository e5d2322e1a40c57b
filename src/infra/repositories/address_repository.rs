//! Address repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use super::entities::address::{self, ActiveModel, Entity as AddressEntity};
use crate::domain::{Address, AddressFields};
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// Address repository trait for dependency injection.
///
/// Addresses are keyed by their owning employee: the schema enforces one
/// address per employee, and the read path additionally takes the lowest id
/// so behavior stays deterministic even without the constraint. There is no
/// standalone delete; address rows go away with their employee in the
/// unit-of-work cascade.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AddressRepository: Send + Sync {
    /// Find the address of an employee (first row by id when several exist)
    async fn find_by_employee(&self, employee_id: i32) -> AppResult<Option<Address>>;

    /// Insert a new address for an employee
    async fn create(&self, employee_id: i32, fields: AddressFields) -> AppResult<Address>;

    /// Overwrite all fields of an employee's address; NotFound when absent
    async fn update_by_employee(
        &self,
        employee_id: i32,
        fields: AddressFields,
    ) -> AppResult<Address>;
}

/// Concrete implementation of AddressRepository
pub struct AddressStore {
    db: DatabaseConnection,
}

impl AddressStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AddressRepository for AddressStore {
    async fn find_by_employee(&self, employee_id: i32) -> AppResult<Option<Address>> {
        let result = AddressEntity::find()
            .filter(address::Column::EmployeeId.eq(employee_id))
            .order_by_asc(address::Column::Id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Address::from))
    }

    async fn create(&self, employee_id: i32, fields: AddressFields) -> AppResult<Address> {
        let active_model = ActiveModel {
            id: NotSet,
            city: Set(fields.city),
            post_code: Set(fields.post_code),
            street: Set(fields.street),
            number: Set(fields.number),
            employee_id: Set(employee_id),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Address::from(model))
    }

    async fn update_by_employee(
        &self,
        employee_id: i32,
        fields: AddressFields,
    ) -> AppResult<Address> {
        let existing = AddressEntity::find()
            .filter(address::Column::EmployeeId.eq(employee_id))
            .order_by_asc(address::Column::Id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = existing.into();
        active.city = Set(fields.city);
        active.post_code = Set(fields.post_code);
        active.street = Set(fields.street);
        active.number = Set(fields.number);

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Address::from(model))
    }
}
