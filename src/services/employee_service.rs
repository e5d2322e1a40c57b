//! Employee service - Handles employee-related business logic.
//!
//! The employee is the cascade root: deleting one removes its address
//! row(s) in the same transaction via the Unit of Work.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Employee, EmployeeFields, EmployeeRequest};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Employee service trait for dependency injection.
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// Create a new employee from a validated request
    async fn create_employee(&self, request: EmployeeRequest) -> AppResult<Employee>;

    /// Get employee by ID
    async fn get_employee(&self, id: i32) -> AppResult<Employee>;

    /// List all employees in storage order
    async fn list_employees(&self) -> AppResult<Vec<Employee>>;

    /// Overwrite all mutable fields of an employee
    async fn update_employee(&self, id: i32, request: EmployeeRequest) -> AppResult<Employee>;

    /// Delete an employee and its address row(s) in one transaction
    async fn delete_employee(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of EmployeeService using Unit of Work.
pub struct EmployeeManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> EmployeeManager<U> {
    /// Create new employee service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// Email uniqueness is enforced at write time: reject when another
    /// employee already holds the address. `own_id` excludes the record
    /// being updated from the check.
    async fn ensure_email_free(&self, email: &str, own_id: Option<i32>) -> AppResult<()> {
        if let Some(existing) = self.uow.employees().find_by_email(email).await? {
            if own_id != Some(existing.id) {
                return Err(AppError::conflict("An employee with this email"));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl<U: UnitOfWork> EmployeeService for EmployeeManager<U> {
    async fn create_employee(&self, request: EmployeeRequest) -> AppResult<Employee> {
        // Rejects malformed input before any mutation
        let fields = EmployeeFields::try_from(request)?;

        if let Some(email) = &fields.email {
            self.ensure_email_free(email, None).await?;
        }

        self.uow.employees().create(fields).await
    }

    async fn get_employee(&self, id: i32) -> AppResult<Employee> {
        self.uow.employees().find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_employees(&self) -> AppResult<Vec<Employee>> {
        self.uow.employees().list().await
    }

    async fn update_employee(&self, id: i32, request: EmployeeRequest) -> AppResult<Employee> {
        let fields = EmployeeFields::try_from(request)?;

        self.uow.employees().find_by_id(id).await?.ok_or_not_found()?;

        if let Some(email) = &fields.email {
            self.ensure_email_free(email, Some(id)).await?;
        }

        self.uow.employees().update(id, fields).await
    }

    async fn delete_employee(&self, id: i32) -> AppResult<()> {
        // Address rows go first so the foreign key is never violated
        // mid-transaction; a missing employee rolls the whole unit back.
        self.uow
            .transaction(move |ctx| {
                Box::pin(async move {
                    let removed = ctx.addresses().delete_by_employee(id).await?;
                    if removed > 0 {
                        tracing::debug!(employee_id = id, removed, "cascade removed address rows");
                    }
                    ctx.employees().delete(id).await
                })
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockall::predicate::eq;

    use crate::domain::EmployeeRequest;
    use crate::infra::repositories::{MockAddressRepository, MockEmployeeRepository};
    use crate::infra::{AddressRepository, EmployeeRepository, TransactionContext};

    fn test_employee(id: i32) -> Employee {
        Employee {
            id,
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: Some("jane@x.com".into()),
            birth_date: chrono::NaiveDate::from_ymd_opt(1990, 5, 10),
            position: Some("Engineer".into()),
            salary: 90_000,
            created: Utc::now(),
        }
    }

    fn test_request() -> EmployeeRequest {
        EmployeeRequest {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@x.com".into(),
            birth_date: "1990-05-10".into(),
            position: "Engineer".into(),
            salary: 90_000,
        }
    }

    /// Test mock for UnitOfWork wrapping mock repositories
    struct TestUnitOfWork {
        employee_repo: Arc<MockEmployeeRepository>,
        address_repo: Arc<MockAddressRepository>,
    }

    impl TestUnitOfWork {
        fn new(employee_repo: MockEmployeeRepository) -> Self {
            Self {
                employee_repo: Arc::new(employee_repo),
                address_repo: Arc::new(MockAddressRepository::new()),
            }
        }
    }

    #[async_trait]
    impl UnitOfWork for TestUnitOfWork {
        fn employees(&self) -> Arc<dyn EmployeeRepository> {
            self.employee_repo.clone()
        }

        fn addresses(&self) -> Arc<dyn AddressRepository> {
            self.address_repo.clone()
        }

        async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
        where
            F: for<'a> FnOnce(
                    TransactionContext<'a>,
                ) -> std::pin::Pin<
                    Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
                > + Send,
            T: Send,
        {
            // Transactions need a live connection; covered by integration tests
            Err(AppError::internal("Transactions not supported in test mock"))
        }
    }

    fn service(repo: MockEmployeeRepository) -> EmployeeManager<TestUnitOfWork> {
        EmployeeManager::new(Arc::new(TestUnitOfWork::new(repo)))
    }

    #[tokio::test]
    async fn test_get_employee_success() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .returning(|id| Ok(Some(test_employee(id))));

        let result = service(repo).get_employee(1).await;

        assert_eq!(result.unwrap().id, 1);
    }

    #[tokio::test]
    async fn test_get_employee_not_found() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let result = service(repo).get_employee(99).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn test_list_employees_success() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_list()
            .returning(|| Ok(vec![test_employee(1), test_employee(2)]));

        let result = service(repo).list_employees().await;

        assert_eq!(result.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_create_employee_success() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_email()
            .with(eq("jane@x.com"))
            .returning(|_| Ok(None));
        repo.expect_create().returning(|fields| {
            Ok(Employee {
                id: 1,
                first_name: fields.first_name,
                last_name: fields.last_name,
                email: fields.email,
                birth_date: fields.birth_date,
                position: fields.position,
                salary: fields.salary,
                created: Utc::now(),
            })
        });

        let result = service(repo).create_employee(test_request()).await.unwrap();

        assert_eq!(result.id, 1);
        assert_eq!(
            result.birth_date,
            chrono::NaiveDate::from_ymd_opt(1990, 5, 10)
        );
    }

    #[tokio::test]
    async fn test_create_employee_duplicate_email() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Ok(Some(test_employee(7))));

        let result = service(repo).create_employee(test_request()).await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_create_employee_bad_date_touches_no_repository() {
        // No expectations set: any repository call would panic the mock
        let repo = MockEmployeeRepository::new();

        let mut request = test_request();
        request.birth_date = "not-a-date".into();
        let result = service(repo).create_employee(request).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_employee_not_found() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let result = service(repo).update_employee(99, test_request()).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn test_update_employee_email_taken_by_other() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(test_employee(id))));
        repo.expect_find_by_email()
            .returning(|_| Ok(Some(test_employee(2))));

        let result = service(repo).update_employee(1, test_request()).await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_update_employee_keeping_own_email() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(test_employee(id))));
        // The email is already ours; the update must go through
        repo.expect_find_by_email()
            .returning(|_| Ok(Some(test_employee(1))));
        repo.expect_update().with(eq(1), mockall::predicate::always()).returning(
            |id, fields| {
                Ok(Employee {
                    id,
                    first_name: fields.first_name,
                    last_name: fields.last_name,
                    email: fields.email,
                    birth_date: fields.birth_date,
                    position: fields.position,
                    salary: fields.salary,
                    created: Utc::now(),
                })
            },
        );

        let result = service(repo).update_employee(1, test_request()).await;

        assert_eq!(result.unwrap().id, 1);
    }
}
