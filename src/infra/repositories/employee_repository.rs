//! Employee repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set,
};

use super::entities::employee::{self, ActiveModel, Entity as EmployeeEntity};
use crate::domain::{Employee, EmployeeFields};
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// Employee repository trait for dependency injection.
///
/// Row deletion is deliberately absent here: employees are only removed
/// through the transactional cascade in the unit of work.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Find employee by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Employee>>;

    /// Find employee by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Employee>>;

    /// List all employees in storage order
    async fn list(&self) -> AppResult<Vec<Employee>>;

    /// Insert a new employee, assigning id and creation timestamp
    async fn create(&self, fields: EmployeeFields) -> AppResult<Employee>;

    /// Overwrite all mutable fields of an existing employee
    async fn update(&self, id: i32, fields: EmployeeFields) -> AppResult<Employee>;
}

/// Concrete implementation of EmployeeRepository
pub struct EmployeeStore {
    db: DatabaseConnection,
}

impl EmployeeStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeRepository for EmployeeStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Employee>> {
        let result = EmployeeEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Employee::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Employee>> {
        let result = EmployeeEntity::find()
            .filter(employee::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Employee::from))
    }

    async fn list(&self) -> AppResult<Vec<Employee>> {
        let models = EmployeeEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Employee::from).collect())
    }

    async fn create(&self, fields: EmployeeFields) -> AppResult<Employee> {
        let active_model = ActiveModel {
            id: NotSet,
            first_name: Set(fields.first_name),
            last_name: Set(fields.last_name),
            email: Set(fields.email),
            birth_date: Set(fields.birth_date),
            position: Set(fields.position),
            salary: Set(fields.salary),
            created: Set(chrono::Utc::now()),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Employee::from(model))
    }

    async fn update(&self, id: i32, fields: EmployeeFields) -> AppResult<Employee> {
        let employee = EmployeeEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        // `created` keeps its original value
        let mut active: ActiveModel = employee.into();
        active.first_name = Set(fields.first_name);
        active.last_name = Set(fields.last_name);
        active.email = Set(fields.email);
        active.birth_date = Set(fields.birth_date);
        active.position = Set(fields.position);
        active.salary = Set(fields.salary);

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Employee::from(model))
    }
}
