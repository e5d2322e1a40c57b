//! Unit of Work pattern implementation.
//!
//! The Unit of Work:
//! - Centralizes access to all repositories
//! - Manages database transactions (begin, commit, rollback)
//! - Ensures consistency across multiple repository operations
//!
//! The employee cascade delete is the one multi-row operation in this
//! service and always runs through `transaction`.

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, QueryFilter,
    TransactionTrait,
};
use std::sync::Arc;

use super::repositories::entities::address::{self, Entity as AddressEntity};
use super::repositories::entities::employee::Entity as EmployeeEntity;
use super::repositories::{AddressRepository, AddressStore, EmployeeRepository, EmployeeStore};
use crate::errors::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
///
/// Provides centralized access to all repositories and transaction management.
/// Note: This trait is not mockable directly due to the generic `transaction`
/// method. For testing, mock the repositories or use integration tests.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Get employee repository
    fn employees(&self) -> Arc<dyn EmployeeRepository>;

    /// Get address repository
    fn addresses(&self) -> Arc<dyn AddressRepository>;

    /// Execute a closure within a transaction.
    ///
    /// The transaction is automatically committed on success or rolled back
    /// on error. Runs at the backend's default isolation level
    /// (read committed or stricter).
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(
                TransactionContext<'a>,
            ) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
///
/// All repository operations performed through this context are part
/// of the same database transaction. The context borrows the transaction
/// to ensure proper lifetime management.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    /// Create a new transaction context
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Get employee repository for this transaction
    pub fn employees(&self) -> TxEmployeeRepository<'_> {
        TxEmployeeRepository::new(self.txn)
    }

    /// Get address repository for this transaction
    pub fn addresses(&self) -> TxAddressRepository<'_> {
        TxAddressRepository::new(self.txn)
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    employee_repo: Arc<EmployeeStore>,
    address_repo: Arc<AddressStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        let employee_repo = Arc::new(EmployeeStore::new(db.clone()));
        let address_repo = Arc::new(AddressStore::new(db.clone()));
        Self {
            db,
            employee_repo,
            address_repo,
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn employees(&self) -> Arc<dyn EmployeeRepository> {
        self.employee_repo.clone()
    }

    fn addresses(&self) -> Arc<dyn AddressRepository> {
        self.address_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(
                TransactionContext<'a>,
            ) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        // Begin transaction
        let txn = self.db.begin().await.map_err(AppError::from)?;

        // Create context with borrowed transaction
        let ctx = TransactionContext::new(&txn);

        // Execute the closure
        match f(ctx).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                // Rollback on error
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Transaction-aware employee repository.
///
/// Exposes only what the cascade delete needs; everything else goes
/// through the plain repositories.
pub struct TxEmployeeRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxEmployeeRepository<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Delete an employee row; NotFound when the id does not exist
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = EmployeeEntity::delete_by_id(id)
            .exec(self.txn)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}

/// Transaction-aware address repository.
pub struct TxAddressRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxAddressRepository<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Delete all address rows of an employee, returning the count.
    ///
    /// Zero rows is not an error: an employee without an address is a
    /// legal state and the cascade step is then a no-op.
    pub async fn delete_by_employee(&self, employee_id: i32) -> AppResult<u64> {
        let result = AddressEntity::delete_many()
            .filter(address::Column::EmployeeId.eq(employee_id))
            .exec(self.txn)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected)
    }
}
